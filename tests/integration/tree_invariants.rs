use std::collections::HashSet;

use pindo::state::{reduce, Action, AppState};
use pindo::toast::Toast;
use pindo::tree::{check_integrity, create_initial_tree, subtree_ids, Node, Tree};
use pindo::validation::contains_forbidden_chars;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Mkdir(usize, String),
    Touch(usize, String, String),
    RenameFile(usize, String, String),
    RenameFolder(usize, String),
    Delete(usize),
    Notify(String),
    Dismiss(usize),
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-c]{1,2}",
        1 => "[ A-C]{0,3}",
        1 => "[a-b:<?/]{1,3}",
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<usize>(), name_strategy()).prop_map(|(i, n)| Op::Mkdir(i, n)),
        3 => (any::<usize>(), name_strategy(), name_strategy()).prop_map(|(i, n, e)| Op::Touch(i, n, e)),
        2 => (any::<usize>(), name_strategy(), name_strategy())
            .prop_map(|(i, n, e)| Op::RenameFile(i, n, e)),
        2 => (any::<usize>(), name_strategy()).prop_map(|(i, n)| Op::RenameFolder(i, n)),
        2 => any::<usize>().prop_map(Op::Delete),
        1 => "[a-z ]{0,8}".prop_map(Op::Notify),
        1 => any::<usize>().prop_map(Op::Dismiss),
    ]
}

fn pick(tree: &Tree, index: usize) -> String {
    let ids: Vec<&String> = tree.nodes().keys().collect();
    ids[index % ids.len()].clone()
}

fn to_action(state: &AppState, op: Op) -> Action {
    let tree = state.tree();
    match op {
        Op::Mkdir(i, name) => Action::CreateFolder {
            parent_id: pick(tree, i),
            name,
        },
        Op::Touch(i, name, ext) => Action::CreateFile {
            parent_id: pick(tree, i),
            name,
            ext,
        },
        Op::RenameFile(i, new_name, new_ext) => Action::RenameFile {
            file_id: pick(tree, i),
            new_name,
            new_ext,
        },
        Op::RenameFolder(i, new_name) => Action::RenameFolder {
            folder_id: pick(tree, i),
            new_name,
        },
        Op::Delete(i) => Action::DeleteNode {
            node_id: pick(tree, i),
        },
        Op::Notify(message) => Action::EnqueueToast(Toast::success(message)),
        Op::Dismiss(i) => {
            let ids: Vec<String> = state.toasts().iter().map(|t| t.id.clone()).collect();
            let toast_id = if ids.is_empty() {
                "no-such-toast".to_string()
            } else {
                ids[i % ids.len()].clone()
            };
            Action::DismissToast { toast_id }
        }
    }
}

fn assert_names_clean(tree: &Tree) {
    for node in tree.nodes().values() {
        let mut parts = vec![node.name()];
        if let Node::File(file) = node {
            parts.push(&file.ext);
        }
        for part in parts {
            assert!(!part.is_empty(), "empty component on {}", node.id());
            assert_eq!(part, part.trim(), "untrimmed component on {}", node.id());
            assert!(!contains_forbidden_chars(part), "forbidden char on {}", node.id());
        }
    }
}

fn assert_siblings_unique(tree: &Tree) {
    for node in tree.nodes().values() {
        let Node::Folder(folder) = node else {
            continue;
        };
        let mut folders = HashSet::new();
        let mut files = HashSet::new();
        for child in tree.children(&folder.id) {
            match child {
                Node::Folder(f) => assert!(folders.insert(f.name.to_lowercase()), "duplicate folder {}", f.name),
                Node::File(f) => assert!(
                    files.insert((f.name.to_lowercase(), f.ext.to_lowercase())),
                    "duplicate file {}",
                    f.file_name()
                ),
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_action_sequences_preserve_tree_invariants(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut state = AppState::new(create_initial_tree());
        let root_id = state.tree().root_id().to_string();

        for op in ops {
            let action = to_action(&state, op);
            let is_structural = !matches!(action, Action::EnqueueToast(_) | Action::DismissToast { .. });
            let deleting = match &action {
                Action::DeleteNode { node_id } => Some(subtree_ids(state.tree(), node_id).len()),
                _ => None,
            };
            let before = state.clone();
            let transition = reduce(&before, action);

            if is_structural {
                prop_assert_eq!(transition.state.toasts().len(), before.toasts().len() + 1);
                let toast = transition.toast().cloned();
                prop_assert!(toast.is_some());
                prop_assert_eq!(transition.persists(), !toast.map(|t| t.is_error()).unwrap_or(true));
            } else {
                prop_assert!(!transition.persists());
                prop_assert_eq!(transition.state.tree(), before.tree());
            }
            if !transition.persists() {
                prop_assert_eq!(transition.state.tree(), before.tree());
            }
            if let (Some(removed), true) = (deleting, transition.persists()) {
                prop_assert_eq!(transition.state.tree().len(), before.tree().len() - removed);
            }

            let tree = transition.state.tree();
            prop_assert_eq!(tree.root_id(), root_id.as_str());
            prop_assert!(check_integrity(tree).is_empty(), "{:?}", check_integrity(tree));
            assert_names_clean(tree);
            assert_siblings_unique(tree);

            let restored = Tree::from_json(&tree.to_json().unwrap()).unwrap();
            prop_assert_eq!(&restored, tree);

            state = transition.state;
        }
    }

    #[test]
    fn dismissing_twice_equals_dismissing_once(messages in prop::collection::vec("[a-z]{1,6}", 1..6), pick_index in any::<usize>()) {
        let mut state = AppState::new(create_initial_tree());
        for message in messages {
            state = reduce(&state, Action::EnqueueToast(Toast::error(message))).state;
        }
        let ids: Vec<String> = state.toasts().iter().map(|t| t.id.clone()).collect();
        let target = ids[pick_index % ids.len()].clone();

        let once = reduce(&state, Action::DismissToast { toast_id: target.clone() }).state;
        let twice = reduce(&once, Action::DismissToast { toast_id: target.clone() }).state;
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.toasts().len(), ids.len() - 1);
        prop_assert!(!once.toasts().contains(&target));
    }
}
