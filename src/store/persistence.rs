//! Sled-backed snapshot store.

use super::{decode_snapshot, encode_snapshot, SnapshotStore, DEFAULT_STORAGE_KEY};
use crate::error::StorageError;
use crate::tree::Snapshot;
use std::path::Path;
use tracing::debug;

/// Snapshot stored as a single value in a sled database
pub struct SledSnapshotStore {
    db: sled::Db,
    key: String,
}

impl SledSnapshotStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path, key: &str) -> Result<Self, StorageError> {
        std::fs::create_dir_all(path)?;
        let db = sled::open(path)?;
        Ok(Self::from_db(db, key))
    }

    pub fn from_db(db: sled::Db, key: &str) -> Self {
        Self {
            db,
            key: key.to_string(),
        }
    }

    /// Throwaway database removed on drop
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self::from_db(db, DEFAULT_STORAGE_KEY))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored value with raw bytes.
    pub fn put_raw(&self, bytes: &[u8]) -> Result<(), StorageError> {
        self.db.insert(self.key.as_bytes(), bytes)?;
        self.db.flush()?;
        Ok(())
    }
}

impl SnapshotStore for SledSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let Some(bytes) = self.db.get(self.key.as_bytes())? else {
            debug!(key = %self.key, "No stored snapshot");
            return Ok(None);
        };
        Ok(decode_snapshot(&bytes))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let bytes = encode_snapshot(snapshot)?;
        self.put_raw(&bytes)?;
        debug!(key = %self.key, nodes = snapshot.len(), "Snapshot saved");
        Ok(())
    }
}
