//! Virtual File Tree
//!
//! Flat, id-indexed node table with parent/children back-references. The root is
//! the single folder without a parent. A `Tree` value is also the persisted
//! snapshot shape `{ nodes, rootId }`.

pub mod helpers;
pub mod integrity;
pub mod node;
pub mod path;

pub use helpers::{add_node_to_parent, create_initial_tree, delete_node_recursive, subtree_ids};
pub use integrity::{check_integrity, IntegrityViolation};
pub use node::{FileNode, FolderNode, Node};

use crate::types::{generate_id, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whole-tree aggregate: node map plus root id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    nodes: BTreeMap<NodeId, Node>,
    root_id: NodeId,
}

/// Serializable `{nodes, rootId}` pair
pub type Snapshot = Tree;

impl Tree {
    /// Build a tree from raw parts. No structural validation is performed.
    pub fn from_parts(nodes: BTreeMap<NodeId, Node>, root_id: NodeId) -> Self {
        Self { nodes, root_id }
    }

    /// A tree holding only a root folder with a fresh id
    pub fn with_root(name: &str) -> Self {
        let root_id = generate_id();
        let mut nodes = BTreeMap::new();
        nodes.insert(
            root_id.clone(),
            Node::Folder(FolderNode::new(root_id.clone(), None, name)),
        );
        Self { nodes, root_id }
    }

    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, Node> {
        &mut self.nodes
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn folder(&self, id: &str) -> Option<&FolderNode> {
        self.get(id).and_then(Node::as_folder)
    }

    pub fn file(&self, id: &str) -> Option<&FileNode> {
        self.get(id).and_then(Node::as_file)
    }

    pub fn root(&self) -> Option<&FolderNode> {
        self.folder(&self.root_id)
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.root_id == id
    }

    /// True when `rootId` names a folder in the node map
    pub fn has_resolvable_root(&self) -> bool {
        self.root().is_some()
    }

    /// Resolved children of a folder in display order. Unknown ids are skipped.
    pub fn children(&self, folder_id: &str) -> Vec<&Node> {
        self.folder(folder_id)
            .map(|folder| {
                folder
                    .children
                    .iter()
                    .filter_map(|child| self.nodes.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_root_has_single_folder() {
        let tree = Tree::with_root("Root");
        assert_eq!(tree.len(), 1);
        assert!(tree.has_resolvable_root());
        let root = tree.root().unwrap();
        assert_eq!(root.name, "Root");
        assert!(root.parent_id.is_none());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let tree = Tree::with_root("Root");
        let value: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
        assert_eq!(value["rootId"], tree.root_id());
        assert_eq!(value["nodes"][tree.root_id()]["type"], "folder");
    }

    #[test]
    fn test_unresolvable_root_detected() {
        let tree = Tree::from_parts(BTreeMap::new(), "missing".to_string());
        assert!(!tree.has_resolvable_root());
        assert!(tree.root().is_none());
        assert!(tree.children("missing").is_empty());
    }
}
