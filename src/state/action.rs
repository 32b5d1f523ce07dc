//! Actions accepted by the reducer and their wire encoding.
//!
//! Encoded adjacently tagged as `{"type": TAG, "payload": {...}}`.

use crate::error::ApiError;
use crate::toast::Toast;
use crate::tree::Snapshot;
use crate::types::{NodeId, ToastId};
use serde::{Deserialize, Serialize};

/// Tags understood by [`Action::from_json`]
pub const ACTION_TAGS: [&str; 8] = [
    "HYDRATE_FROM_STORAGE",
    "ADD_FOLDER",
    "ADD_FILE",
    "RENAME_FILE",
    "RENAME_FOLDER",
    "DELETE_NODE",
    "ADD_TOAST",
    "REMOVE_TOAST",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    /// Replace the tree wholesale; toasts are kept
    #[serde(rename = "HYDRATE_FROM_STORAGE")]
    LoadSnapshot(Snapshot),

    #[serde(rename = "ADD_FOLDER", rename_all = "camelCase")]
    CreateFolder { parent_id: NodeId, name: String },

    #[serde(rename = "ADD_FILE", rename_all = "camelCase")]
    CreateFile {
        parent_id: NodeId,
        name: String,
        ext: String,
    },

    #[serde(rename = "RENAME_FILE", rename_all = "camelCase")]
    RenameFile {
        file_id: NodeId,
        new_name: String,
        new_ext: String,
    },

    #[serde(rename = "RENAME_FOLDER", rename_all = "camelCase")]
    RenameFolder { folder_id: NodeId, new_name: String },

    #[serde(rename = "DELETE_NODE", rename_all = "camelCase")]
    DeleteNode { node_id: NodeId },

    /// Append an already constructed toast verbatim
    #[serde(rename = "ADD_TOAST")]
    EnqueueToast(Toast),

    #[serde(rename = "REMOVE_TOAST", rename_all = "camelCase")]
    DismissToast { toast_id: ToastId },

    /// Any unrecognized action; reduces to the unchanged state
    #[serde(skip)]
    Unknown,
}

impl Action {
    /// Decode an action. Objects whose `type` tag is unrecognized decode to
    /// [`Action::Unknown`]; a recognized tag with a malformed payload is an error.
    pub fn from_json(json: &str) -> Result<Action, ApiError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ApiError::InvalidAction(format!("Malformed action JSON: {}", e)))?;

        let known = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(|tag| ACTION_TAGS.contains(&tag))
            .unwrap_or(false);
        if !known {
            return Ok(Action::Unknown);
        }

        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidAction(format!("Malformed action payload: {}", e)))
    }

    /// Wire tag of this action, `None` for [`Action::Unknown`]
    pub fn tag(&self) -> Option<&'static str> {
        let tag = match self {
            Action::LoadSnapshot(_) => "HYDRATE_FROM_STORAGE",
            Action::CreateFolder { .. } => "ADD_FOLDER",
            Action::CreateFile { .. } => "ADD_FILE",
            Action::RenameFile { .. } => "RENAME_FILE",
            Action::RenameFolder { .. } => "RENAME_FOLDER",
            Action::DeleteNode { .. } => "DELETE_NODE",
            Action::EnqueueToast(_) => "ADD_TOAST",
            Action::DismissToast { .. } => "REMOVE_TOAST",
            Action::Unknown => return None,
        };
        Some(tag)
    }
}
