//! Snapshot Store
//!
//! Storage collaborator contract for the tree: an opaque blob holding the JSON
//! snapshot `{nodes, rootId}`. Loading validates the snapshot shape and reports
//! "absent" for anything unusable so callers fall back to the seed tree.

pub mod memory;
pub mod persistence;

pub use memory::MemorySnapshotStore;
pub use persistence::SledSnapshotStore;

use crate::error::StorageError;
use crate::tree::{check_integrity, create_initial_tree, Snapshot, Tree};
use tracing::{error, warn};

/// Default key under which the snapshot blob is stored
pub const DEFAULT_STORAGE_KEY: &str = "fs";

/// Snapshot store interface
pub trait SnapshotStore: Send + Sync {
    /// Stored snapshot, or `None` when absent, undecodable, or without a
    /// resolvable root.
    fn load(&self) -> Result<Option<Snapshot>, StorageError>;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

/// Encode a snapshot as stored bytes.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>, StorageError> {
    Ok(serde_json::to_vec(snapshot)?)
}

/// Decode stored bytes, returning `None` for corrupt or structurally unusable data.
pub fn decode_snapshot(bytes: &[u8]) -> Option<Snapshot> {
    let snapshot: Snapshot = match serde_json::from_slice(bytes) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Discarding undecodable snapshot: {}", e);
            return None;
        }
    };

    if !snapshot.has_resolvable_root() {
        warn!(root_id = snapshot.root_id(), "Discarding snapshot without resolvable root");
        return None;
    }

    Some(snapshot)
}

/// Stored tree, or the seed tree when nothing usable is stored.
pub fn load_or_default(store: &dyn SnapshotStore) -> Tree {
    match store.load() {
        Ok(Some(tree)) => {
            let violations = check_integrity(&tree);
            if !violations.is_empty() {
                warn!(
                    violations = violations.len(),
                    "Loaded snapshot has structural violations, first: {}",
                    violations[0]
                );
            }
            tree
        }
        Ok(None) => create_initial_tree(),
        Err(e) => {
            error!("Failed to load snapshot: {}", e);
            create_initial_tree()
        }
    }
}
