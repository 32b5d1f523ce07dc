//! Configuration
//!
//! Layered settings: built-in defaults, the global config file, an optional
//! explicit file, then `PINDO_*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;
pub mod storage;

pub use facade::ConfigLoader;
pub use storage::StorageConfig;

use crate::logging::LoggingConfig;
use crate::toast::TOAST_DURATION;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application directories qualifier/organization/application triple
pub(crate) const PROJECT_DIRS: (&str, &str, &str) = ("", "pindo", "pindo");

pub(crate) fn project_dirs() -> Option<directories::ProjectDirs> {
    let (qualifier, organization, application) = PROJECT_DIRS;
    directories::ProjectDirs::from(qualifier, organization, application)
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PindoConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub toasts: ToastConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_toast_duration_ms() -> u64 {
    TOAST_DURATION.as_millis() as u64
}

/// Notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Lifetime of a toast in milliseconds (default: 4000)
    #[serde(default = "default_toast_duration_ms")]
    pub duration_ms: u64,
}

impl ToastConfig {
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PindoConfig::default();
        assert_eq!(config.toasts.duration_ms, 4000);
        assert_eq!(config.storage.key, "fs");
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PindoConfig = toml::from_str("[toasts]\nduration_ms = 250\n").unwrap();
        assert_eq!(config.toasts.lifetime(), Duration::from_millis(250));
        assert_eq!(config.storage.key, "fs");
        assert_eq!(config.logging.level, "warn");
    }
}
