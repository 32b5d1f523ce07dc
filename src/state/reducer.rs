//! Reducer: `(AppState, Action) -> Transition`.
//!
//! Structural actions run through three stages connected by plain data:
//! validate (action to [`Mutation`] or [`MutationError`]), apply (mutation to a
//! new tree and success message), emit (new state plus [`Effect`]s). Nothing
//! here performs I/O; effects are carried out by the dispatcher.

use super::{Action, AppState};
use crate::error::MutationError;
use crate::toast::Toast;
use crate::tree::{
    add_node_to_parent, delete_node_recursive, subtree_ids, FileNode, FolderNode, Node, Tree,
};
use crate::types::{generate_id, NodeId, ToastId};
use crate::validation::{
    trim_name, validate_file_creation, validate_file_rename, validate_folder_creation,
    validate_folder_rename,
};
use tracing::{debug, info};

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Serialize and store the transition's tree
    PersistSnapshot,
    /// Start the expiry timer of a newly appended toast
    ScheduleExpiry(ToastId),
    /// Stop the expiry timer of a dismissed toast
    CancelExpiry(ToastId),
}

/// Result of one reducer step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    /// Whether this transition asks for the tree to be persisted
    pub fn persists(&self) -> bool {
        self.effects.contains(&Effect::PersistSnapshot)
    }

    /// The toast appended by this transition, if any
    pub fn toast(&self) -> Option<&Toast> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::ScheduleExpiry(id) => self.state.toasts().iter().find(|t| &t.id == id),
            _ => None,
        })
    }
}

/// Validated structural edit with trimmed names
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mutation {
    InsertFolder {
        parent_id: NodeId,
        name: String,
    },
    InsertFile {
        parent_id: NodeId,
        name: String,
        ext: String,
    },
    RenameFile {
        file_id: NodeId,
        name: String,
        ext: String,
    },
    RenameFolder {
        folder_id: NodeId,
        name: String,
    },
    Delete {
        node_id: NodeId,
    },
}

/// Applied edit: the new tree and the success message
struct Applied {
    tree: Tree,
    message: String,
}

/// Apply `action` to `state`, returning the next state and requested effects.
///
/// `state` is never modified. Unrecognized actions return an equal state with
/// no effects.
pub fn reduce(state: &AppState, action: Action) -> Transition {
    debug!(action = action.tag().unwrap_or("UNKNOWN"), "Reducing action");
    let tree = state.tree();

    let planned = match action {
        Action::LoadSnapshot(snapshot) => {
            return Transition {
                state: AppState::from_parts(snapshot, state.toasts().clone()),
                effects: Vec::new(),
            };
        }
        Action::EnqueueToast(toast) => {
            let id = toast.id.clone();
            return Transition {
                state: AppState::from_parts(tree.clone(), state.toasts().with(toast)),
                effects: vec![Effect::ScheduleExpiry(id)],
            };
        }
        Action::DismissToast { toast_id } => {
            if !state.toasts().contains(&toast_id) {
                return Transition::unchanged(state);
            }
            return Transition {
                state: AppState::from_parts(tree.clone(), state.toasts().without(&toast_id)),
                effects: vec![Effect::CancelExpiry(toast_id)],
            };
        }
        Action::Unknown => return Transition::unchanged(state),
        Action::CreateFolder { parent_id, name } => plan_create_folder(tree, &parent_id, &name),
        Action::CreateFile {
            parent_id,
            name,
            ext,
        } => plan_create_file(tree, &parent_id, &name, &ext),
        Action::RenameFile {
            file_id,
            new_name,
            new_ext,
        } => plan_rename_file(tree, &file_id, &new_name, &new_ext),
        Action::RenameFolder {
            folder_id,
            new_name,
        } => plan_rename_folder(tree, &folder_id, &new_name),
        Action::DeleteNode { node_id } => plan_delete(tree, &node_id),
    };

    match planned {
        Ok(mutation) => {
            let applied = apply(tree, mutation);
            emit(state, Some(applied.tree), Toast::success(applied.message))
        }
        Err(err) => {
            debug!(reason = %err, "Mutation rejected");
            emit(state, None, Toast::error(err.to_string()))
        }
    }
}

// --- validate ---

fn plan_create_folder(tree: &Tree, parent_id: &str, name: &str) -> Result<Mutation, MutationError> {
    validate_folder_creation(tree, parent_id, name)?;
    if tree.folder(parent_id).is_none() {
        return Err(MutationError::ParentNotFound);
    }
    Ok(Mutation::InsertFolder {
        parent_id: parent_id.to_string(),
        name: trim_name(name).to_string(),
    })
}

fn plan_create_file(
    tree: &Tree,
    parent_id: &str,
    name: &str,
    ext: &str,
) -> Result<Mutation, MutationError> {
    validate_file_creation(tree, parent_id, name, ext)?;
    if tree.folder(parent_id).is_none() {
        return Err(MutationError::ParentNotFound);
    }
    Ok(Mutation::InsertFile {
        parent_id: parent_id.to_string(),
        name: trim_name(name).to_string(),
        ext: trim_name(ext).to_string(),
    })
}

fn plan_rename_file(
    tree: &Tree,
    file_id: &str,
    new_name: &str,
    new_ext: &str,
) -> Result<Mutation, MutationError> {
    if tree.file(file_id).is_none() {
        return Err(MutationError::FileNotFound);
    }
    validate_file_rename(tree, file_id, new_name, new_ext)?;
    Ok(Mutation::RenameFile {
        file_id: file_id.to_string(),
        name: trim_name(new_name).to_string(),
        ext: trim_name(new_ext).to_string(),
    })
}

fn plan_rename_folder(tree: &Tree, folder_id: &str, new_name: &str) -> Result<Mutation, MutationError> {
    if tree.folder(folder_id).is_none() {
        return Err(MutationError::FolderNotFound);
    }
    if tree.is_root(folder_id) {
        return Err(MutationError::RenameRoot);
    }
    validate_folder_rename(tree, folder_id, new_name)?;
    Ok(Mutation::RenameFolder {
        folder_id: folder_id.to_string(),
        name: trim_name(new_name).to_string(),
    })
}

fn plan_delete(tree: &Tree, node_id: &str) -> Result<Mutation, MutationError> {
    if tree.is_root(node_id) {
        return Err(MutationError::DeleteRoot);
    }
    if !tree.contains(node_id) {
        return Err(MutationError::NodeNotFound);
    }
    Ok(Mutation::Delete {
        node_id: node_id.to_string(),
    })
}

// --- apply ---

fn apply(tree: &Tree, mutation: Mutation) -> Applied {
    match mutation {
        Mutation::InsertFolder { parent_id, name } => {
            let id = generate_id();
            let message = format!("Folder \"{}\" created successfully", name);
            let folder = FolderNode::new(id.clone(), Some(parent_id.clone()), name);
            let tree = insert_child(tree, &parent_id, folder.into());
            info!(node_id = %id, parent_id = %parent_id, "Folder created");
            Applied { tree, message }
        }
        Mutation::InsertFile {
            parent_id,
            name,
            ext,
        } => {
            let id = generate_id();
            let file = FileNode::new(id.clone(), Some(parent_id.clone()), name, ext);
            let message = format!("File \"{}\" created successfully", file.file_name());
            let tree = insert_child(tree, &parent_id, file.into());
            info!(node_id = %id, parent_id = %parent_id, "File created");
            Applied { tree, message }
        }
        Mutation::RenameFile { file_id, name, ext } => {
            let mut next = tree.clone();
            let message = format!("File renamed to \"{}.{}\" successfully", name, ext);
            if let Some(file) = next.nodes_mut().get_mut(&file_id).and_then(Node::as_file_mut) {
                file.name = name;
                file.ext = ext;
            }
            info!(node_id = %file_id, "File renamed");
            Applied { tree: next, message }
        }
        Mutation::RenameFolder { folder_id, name } => {
            let mut next = tree.clone();
            let message = format!("Folder renamed to \"{}\" successfully", name);
            if let Some(folder) = next.nodes_mut().get_mut(&folder_id).and_then(Node::as_folder_mut) {
                folder.name = name;
            }
            info!(node_id = %folder_id, "Folder renamed");
            Applied { tree: next, message }
        }
        Mutation::Delete { node_id } => {
            let description = match tree.get(&node_id) {
                Some(Node::File(file)) => format!("\"{}\"", file.file_name()),
                Some(Node::Folder(folder)) => format!("folder \"{}\"", folder.name),
                None => format!("\"{}\"", node_id),
            };
            let removed = subtree_ids(tree, &node_id).len();
            let tree = delete_node_recursive(tree, &node_id);
            info!(node_id = %node_id, removed, "Node deleted");
            Applied {
                tree,
                message: format!("{} deleted successfully", description),
            }
        }
    }
}

fn insert_child(tree: &Tree, parent_id: &str, node: Node) -> Tree {
    let id = node.id().to_string();
    let mut next = tree.clone();
    next.nodes_mut().insert(id.clone(), node);
    add_node_to_parent(&next, parent_id, &id)
}

// --- emit ---

fn emit(state: &AppState, tree: Option<Tree>, toast: Toast) -> Transition {
    let mut effects = Vec::with_capacity(2);
    let tree = match tree {
        Some(tree) => {
            effects.push(Effect::PersistSnapshot);
            tree
        }
        None => state.tree().clone(),
    };
    effects.push(Effect::ScheduleExpiry(toast.id.clone()));

    Transition {
        state: AppState::from_parts(tree, state.toasts().with(toast)),
        effects,
    }
}
