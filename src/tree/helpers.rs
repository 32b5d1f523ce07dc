//! Structural primitives over the node table.
//!
//! Every helper takes the current tree by reference and returns a new tree; the
//! input is never modified.

use super::{FileNode, FolderNode, Node, Tree};
use crate::types::{generate_id, NodeId};
use std::collections::{BTreeMap, HashSet};

/// Build the seed hierarchy used when no snapshot is stored.
///
/// ```text
/// Root/
///   Documents/
///     notes.txt
///     Work/
///       report.pdf
///   Projects/
///     app.js
/// ```
///
/// Ids are freshly generated on every call.
pub fn create_initial_tree() -> Tree {
    let root_id = generate_id();
    let documents_id = generate_id();
    let projects_id = generate_id();
    let work_id = generate_id();
    let notes_id = generate_id();
    let report_id = generate_id();
    let app_id = generate_id();

    let mut root = FolderNode::new(root_id.clone(), None, "Root");
    root.children = vec![documents_id.clone(), projects_id.clone()];

    let mut documents = FolderNode::new(documents_id.clone(), Some(root_id.clone()), "Documents");
    documents.children = vec![notes_id.clone(), work_id.clone()];

    let mut projects = FolderNode::new(projects_id.clone(), Some(root_id.clone()), "Projects");
    projects.children = vec![app_id.clone()];

    let mut work = FolderNode::new(work_id.clone(), Some(documents_id.clone()), "Work");
    work.children = vec![report_id.clone()];

    let notes = FileNode::new(notes_id, Some(documents_id), "notes", "txt");
    let report = FileNode::new(report_id, Some(work_id), "report", "pdf");
    let app = FileNode::new(app_id, Some(projects_id), "app", "js");

    let nodes: BTreeMap<NodeId, Node> = [
        Node::from(root),
        documents.into(),
        projects.into(),
        work.into(),
        notes.into(),
        report.into(),
        app.into(),
    ]
    .into_iter()
    .map(|node| (node.id().to_string(), node))
    .collect();

    Tree::from_parts(nodes, root_id)
}

/// Append `node_id` to the children of folder `parent_id`.
///
/// Returns an unmodified copy when the parent is missing or is not a folder.
pub fn add_node_to_parent(tree: &Tree, parent_id: &str, node_id: &str) -> Tree {
    let mut next = tree.clone();
    if let Some(parent) = next.nodes_mut().get_mut(parent_id).and_then(Node::as_folder_mut) {
        parent.children.push(node_id.to_string());
    }
    next
}

/// Ids of `node_id` and all of its descendants, depth-first, parent before
/// children. Empty when the node is absent.
pub fn subtree_ids(tree: &Tree, node_id: &str) -> Vec<NodeId> {
    let mut ids = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![node_id.to_string()];

    while let Some(id) = stack.pop() {
        let Some(node) = tree.get(&id) else {
            continue;
        };
        // A malformed snapshot may list a folder inside its own subtree.
        if !seen.insert(id.clone()) {
            continue;
        }
        if let Node::Folder(folder) = node {
            stack.extend(folder.children.iter().rev().cloned());
        }
        ids.push(id);
    }

    ids
}

/// Remove `node_id` and its whole subtree.
///
/// Every removed id is also dropped from the children list of any surviving
/// folder, so no dangling reference can remain. No-op when the node is absent.
pub fn delete_node_recursive(tree: &Tree, node_id: &str) -> Tree {
    if !tree.contains(node_id) {
        return tree.clone();
    }

    let removed: HashSet<NodeId> = subtree_ids(tree, node_id).into_iter().collect();
    let mut next = tree.clone();
    let nodes = next.nodes_mut();

    nodes.retain(|id, _| !removed.contains(id));
    for node in nodes.values_mut() {
        if let Node::Folder(folder) = node {
            folder.children.retain(|child| !removed.contains(child));
        }
    }

    next
}
