//! StorageConfig and snapshot store path resolution.

use crate::error::ApiError;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot database directory; None means the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Key holding the snapshot blob
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl StorageConfig {
    /// Resolve the database directory.
    pub fn resolve_path(&self) -> Result<PathBuf, ApiError> {
        if let Some(path) = &self.path {
            if !path.as_os_str().is_empty() {
                return Ok(path.clone());
            }
        }

        let dirs = super::project_dirs().ok_or_else(|| {
            ApiError::ConfigError("Could not determine platform data directory".to_string())
        })?;
        Ok(dirs.data_dir().join("store"))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_storage_key(),
        }
    }
}
