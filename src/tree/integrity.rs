//! Structural integrity checks over a whole tree.

use super::{Node, Tree};
use crate::types::NodeId;
use std::fmt;

/// A broken structural invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// `rootId` is not present in the node map
    MissingRoot(NodeId),
    /// Root entry is a file
    RootNotFolder(NodeId),
    /// Root entry has a parent
    RootHasParent(NodeId),
    /// Non-root node without a parent
    ExtraRoot(NodeId),
    /// Map key differs from the node's own id
    KeyMismatch { key: NodeId, id: NodeId },
    /// Folder lists an id missing from the map
    DanglingChild { folder: NodeId, child: NodeId },
    /// Folder lists a child whose `parentId` points elsewhere
    ParentMismatch { folder: NodeId, child: NodeId },
    /// `parentId` does not resolve
    MissingParent { node: NodeId, parent: NodeId },
    /// `parentId` resolves to a file
    ParentNotFolder { node: NodeId, parent: NodeId },
    /// Parent folder does not list this node
    NotListedInParent { node: NodeId, parent: NodeId },
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityViolation::MissingRoot(id) => write!(f, "root {} not in node map", id),
            IntegrityViolation::RootNotFolder(id) => write!(f, "root {} is not a folder", id),
            IntegrityViolation::RootHasParent(id) => write!(f, "root {} has a parent", id),
            IntegrityViolation::ExtraRoot(id) => write!(f, "node {} has no parent", id),
            IntegrityViolation::KeyMismatch { key, id } => {
                write!(f, "map key {} holds node {}", key, id)
            }
            IntegrityViolation::DanglingChild { folder, child } => {
                write!(f, "folder {} lists missing child {}", folder, child)
            }
            IntegrityViolation::ParentMismatch { folder, child } => {
                write!(f, "folder {} lists child {} owned by another parent", folder, child)
            }
            IntegrityViolation::MissingParent { node, parent } => {
                write!(f, "node {} references missing parent {}", node, parent)
            }
            IntegrityViolation::ParentNotFolder { node, parent } => {
                write!(f, "node {} references non-folder parent {}", node, parent)
            }
            IntegrityViolation::NotListedInParent { node, parent } => {
                write!(f, "node {} is not listed by parent {}", node, parent)
            }
        }
    }
}

/// Collect every structural violation in `tree`. Empty means consistent.
pub fn check_integrity(tree: &Tree) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    let root_id = tree.root_id();

    match tree.get(root_id) {
        None => violations.push(IntegrityViolation::MissingRoot(root_id.to_string())),
        Some(Node::File(_)) => violations.push(IntegrityViolation::RootNotFolder(root_id.to_string())),
        Some(node) if node.parent_id().is_some() => {
            violations.push(IntegrityViolation::RootHasParent(root_id.to_string()))
        }
        Some(_) => {}
    }

    for (key, node) in tree.nodes() {
        if key != node.id() {
            violations.push(IntegrityViolation::KeyMismatch {
                key: key.clone(),
                id: node.id().to_string(),
            });
        }

        if let Node::Folder(folder) = node {
            for child in &folder.children {
                match tree.get(child) {
                    None => violations.push(IntegrityViolation::DanglingChild {
                        folder: key.clone(),
                        child: child.clone(),
                    }),
                    Some(child_node) if child_node.parent_id() != Some(key.as_str()) => {
                        violations.push(IntegrityViolation::ParentMismatch {
                            folder: key.clone(),
                            child: child.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        if key == root_id {
            continue;
        }

        let Some(parent_id) = node.parent_id() else {
            violations.push(IntegrityViolation::ExtraRoot(key.clone()));
            continue;
        };
        match tree.get(parent_id) {
            None => violations.push(IntegrityViolation::MissingParent {
                node: key.clone(),
                parent: parent_id.to_string(),
            }),
            Some(Node::File(_)) => violations.push(IntegrityViolation::ParentNotFolder {
                node: key.clone(),
                parent: parent_id.to_string(),
            }),
            Some(Node::Folder(parent)) => {
                if !parent.children.iter().any(|child| child == key) {
                    violations.push(IntegrityViolation::NotListedInParent {
                        node: key.clone(),
                        parent: parent_id.to_string(),
                    });
                }
            }
        }
    }

    violations
}
