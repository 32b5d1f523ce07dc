//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::PindoConfig;
use config::ConfigError;
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Global config file path (`<config_dir>/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        super::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the global file and environment.
    pub fn load() -> Result<PindoConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<PindoConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> PindoConfig {
        PindoConfig::default()
    }
}
