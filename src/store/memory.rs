//! In-process snapshot store.

use super::{decode_snapshot, encode_snapshot, SnapshotStore};
use crate::error::StorageError;
use crate::tree::Snapshot;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Snapshot blob held in memory
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    blob: RwLock<Option<Vec<u8>>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw bytes, e.g. a corrupt blob
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            blob: RwLock::new(Some(bytes)),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn raw(&self) -> Option<Vec<u8>> {
        self.blob.read().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        Ok(self.blob.read().as_deref().and_then(decode_snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("memory store rejects writes".to_string()));
        }
        let bytes = encode_snapshot(snapshot)?;
        *self.blob.write() = Some(bytes);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
