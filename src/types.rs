//! Core identifier types for the virtual file tree.

use uuid::Uuid;

/// NodeId: globally unique identifier of a file or folder node
pub type NodeId = String;

/// ToastId: unique identifier of a transient notification
pub type ToastId = String;

/// Generate a fresh, collision-free identifier (random UUID v4).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
