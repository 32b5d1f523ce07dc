//! Error types
//!
//! Validation and structural failures are user-recoverable and end up as error
//! toasts. Storage and configuration failures are reported to callers of the
//! library API and never alter reducer semantics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a naming rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    /// Blank name or extension after trimming
    Empty,
    /// Forbidden character present
    Invalid,
    /// Sibling name (or name/extension pair) collision
    Duplicate,
}

/// A failed naming rule, carrying the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Reasons a structural edit is rejected by the reducer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("File not found")]
    FileNotFound,

    #[error("Folder not found")]
    FolderNotFound,

    #[error("Node not found")]
    NodeNotFound,

    #[error("Parent folder not found")]
    ParentNotFound,

    #[error("Cannot delete root folder")]
    DeleteRoot,

    #[error("Cannot rename root folder")]
    RenameRoot,
}

/// Snapshot storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Library-level API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Path not in tree: {0}")]
    PathNotInTree(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
