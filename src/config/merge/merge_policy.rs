//! Built-in defaults applied beneath every other source.

use crate::store::DEFAULT_STORAGE_KEY;
use crate::toast::TOAST_DURATION;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("storage.key", DEFAULT_STORAGE_KEY)?
        .set_default("toasts.duration_ms", TOAST_DURATION.as_millis() as i64)?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
