use std::sync::Arc;

use pindo::state::{reduce, Action, AppState, Dispatcher, Effect};
use pindo::store::{MemorySnapshotStore, SnapshotStore};
use pindo::toast::Toast;
use pindo::tree::path::resolve_path;
use pindo::tree::{check_integrity, create_initial_tree, Tree};

fn seeded() -> AppState {
    AppState::new(create_initial_tree())
}

fn id_of(tree: &Tree, path: &str) -> String {
    resolve_path(tree, path).unwrap()
}

fn last_message(state: &AppState) -> &str {
    &state.toasts().last().unwrap().message
}

#[test]
fn editing_session_persists_every_accepted_change() {
    let store = Arc::new(MemorySnapshotStore::new());
    let mut dispatcher = Dispatcher::new(store.clone() as Arc<dyn SnapshotStore>);
    let documents = id_of(dispatcher.state().tree(), "/Documents");

    dispatcher.dispatch(Action::CreateFolder {
        parent_id: documents.clone(),
        name: "  Drafts ".to_string(),
    });
    let drafts = id_of(dispatcher.state().tree(), "/Documents/Drafts");
    assert_eq!(dispatcher.state().tree().get(&drafts).unwrap().name(), "Drafts");

    dispatcher.dispatch(Action::CreateFile {
        parent_id: drafts.clone(),
        name: "letter".to_string(),
        ext: "md".to_string(),
    });
    let letter = id_of(dispatcher.state().tree(), "/Documents/Drafts/letter.md");

    dispatcher.dispatch(Action::RenameFile {
        file_id: letter.clone(),
        new_name: "Letter".to_string(),
        new_ext: "txt".to_string(),
    });
    assert_eq!(
        last_message(dispatcher.state()),
        "File renamed to \"Letter.txt\" successfully"
    );

    dispatcher.dispatch(Action::RenameFolder {
        folder_id: drafts.clone(),
        new_name: "Archive".to_string(),
    });
    assert_eq!(last_message(dispatcher.state()), "Folder renamed to \"Archive\" successfully");

    dispatcher.dispatch(Action::DeleteNode {
        node_id: drafts.clone(),
    });
    assert_eq!(last_message(dispatcher.state()), "folder \"Archive\" deleted successfully");

    let tree = dispatcher.state().tree();
    assert!(!tree.contains(&drafts));
    assert!(!tree.contains(&letter));
    assert_eq!(tree.len(), 7);
    assert!(check_integrity(tree).is_empty());

    assert_eq!(store.save_count(), 5);
    assert_eq!(store.load().unwrap().as_ref(), Some(tree));
    assert_eq!(dispatcher.state().toasts().len(), 5);
    assert!(dispatcher.state().toasts().iter().all(|t| !t.is_error()));
}

#[test]
fn rejected_changes_never_reach_the_store() {
    let store = Arc::new(MemorySnapshotStore::new());
    let mut dispatcher = Dispatcher::new(store.clone() as Arc<dyn SnapshotStore>);
    let tree = dispatcher.state().tree().clone();
    let root = tree.root_id().to_string();
    let notes = id_of(&tree, "/Documents/notes.txt");
    let documents = id_of(&tree, "/Documents");

    let attempts = vec![
        (
            Action::CreateFolder {
                parent_id: root.clone(),
                name: "   ".to_string(),
            },
            "Name cannot be empty",
        ),
        (
            Action::CreateFile {
                parent_id: documents.clone(),
                name: "notes".to_string(),
                ext: "".to_string(),
            },
            "Extension cannot be empty",
        ),
        (
            Action::CreateFolder {
                parent_id: root.clone(),
                name: "a:b".to_string(),
            },
            "Contains forbidden characters",
        ),
        (
            Action::CreateFile {
                parent_id: documents.clone(),
                name: "NOTES".to_string(),
                ext: "TXT".to_string(),
            },
            "NOTES.TXT already exists",
        ),
        (
            Action::CreateFolder {
                parent_id: notes.clone(),
                name: "Inside".to_string(),
            },
            "Parent folder not found",
        ),
        (
            Action::DeleteNode {
                node_id: root.clone(),
            },
            "Cannot delete root folder",
        ),
        (
            Action::RenameFolder {
                folder_id: notes.clone(),
                new_name: "X".to_string(),
            },
            "Folder not found",
        ),
        (
            Action::RenameFile {
                file_id: documents.clone(),
                new_name: "X".to_string(),
                new_ext: "y".to_string(),
            },
            "File not found",
        ),
    ];

    for (action, message) in attempts {
        let state = dispatcher.dispatch(action);
        assert_eq!(state.tree(), &tree);
        let toast = state.toasts().last().unwrap();
        assert!(toast.is_error());
        assert_eq!(toast.message, message);
    }

    assert_eq!(store.save_count(), 0);
    assert!(store.raw().is_none());
}

#[test]
fn renaming_to_own_name_in_different_case_is_allowed() {
    let state = seeded();
    let work = id_of(state.tree(), "/Documents/Work");
    let notes = id_of(state.tree(), "/Documents/notes.txt");

    let renamed = reduce(
        &state,
        Action::RenameFolder {
            folder_id: work.clone(),
            new_name: "WORK".to_string(),
        },
    );
    assert!(renamed.persists());
    assert_eq!(renamed.state.tree().get(&work).unwrap().name(), "WORK");

    let renamed = reduce(
        &renamed.state,
        Action::RenameFile {
            file_id: notes.clone(),
            new_name: "Notes".to_string(),
            new_ext: "TXT".to_string(),
        },
    );
    assert!(renamed.persists());
    assert_eq!(renamed.state.tree().get(&notes).unwrap().display_name(), "Notes.TXT");
}

#[test]
fn folder_and_file_namespaces_are_separate() {
    let state = seeded();
    let documents = id_of(state.tree(), "/Documents");

    let folder = reduce(
        &state,
        Action::CreateFolder {
            parent_id: documents.clone(),
            name: "notes".to_string(),
        },
    );
    assert!(folder.persists());

    let file = reduce(
        &folder.state,
        Action::CreateFile {
            parent_id: documents,
            name: "Work".to_string(),
            ext: "log".to_string(),
        },
    );
    assert!(file.persists());
    assert!(check_integrity(file.state.tree()).is_empty());
}

#[test]
fn toast_actions_leave_tree_alone() {
    let state = seeded();
    let toast = Toast::success("Saved");
    let id = toast.id.clone();

    let added = reduce(&state, Action::EnqueueToast(toast.clone()));
    assert_eq!(added.state.tree(), state.tree());
    assert_eq!(added.effects, vec![Effect::ScheduleExpiry(id.clone())]);
    assert_eq!(added.state.toasts().last(), Some(&toast));

    let removed = reduce(&added.state, Action::DismissToast { toast_id: id.clone() });
    assert!(removed.state.toasts().is_empty());
    assert_eq!(removed.effects, vec![Effect::CancelExpiry(id.clone())]);

    let again = reduce(&removed.state, Action::DismissToast { toast_id: id });
    assert_eq!(again.state, removed.state);
    assert!(again.effects.is_empty());
}

#[test]
fn hydrate_replaces_tree_wholesale() {
    let state = seeded();
    let snapshot = Tree::with_root("Elsewhere");
    let loaded = reduce(&state, Action::LoadSnapshot(snapshot.clone()));
    assert_eq!(loaded.state.tree(), &snapshot);
    assert!(loaded.effects.is_empty());
    assert_eq!(loaded.state.toasts(), state.toasts());
}

#[test]
fn actions_decode_from_wire_format() {
    let state = seeded();
    let root = state.tree().root_id().to_string();
    let json = format!(
        r#"{{"type":"ADD_FILE","payload":{{"parentId":"{}","name":"todo","ext":"md"}}}}"#,
        root
    );
    let action = Action::from_json(&json).unwrap();
    let transition = reduce(&state, action);
    assert_eq!(
        transition.toast().map(|t| t.message.as_str()),
        Some("File \"todo.md\" created successfully")
    );

    let unknown = Action::from_json(r#"{"type":"MOVE_NODE","payload":{"nodeId":"x"}}"#).unwrap();
    assert_eq!(reduce(&state, unknown).state, state);
}
