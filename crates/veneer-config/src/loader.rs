//! Configuration loading: JSON documents, files, and environment overrides.
//!
//! # Design
//! - Start from defaults, overlay an optional JSON file, then overlay the
//!   environment, and validate last so every source is checked the same way.
//! - Environment access goes through a lookup closure so callers and tests
//!   can supply their own source.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::model::{Platform, UiConfig};
use crate::validate::validate;

/// Overrides [`UiConfig::root_id`].
pub const ENV_ROOT_ID: &str = "VENEER_ROOT_ID";
/// Overrides the logging level.
pub const ENV_LOG_LEVEL: &str = "VENEER_LOG_LEVEL";
/// Overrides the Onsen platform (`ios`, `android`, or `auto` to detect).
pub const ENV_ONSEN_PLATFORM: &str = "VENEER_ONSEN_PLATFORM";

impl UiConfig {
    /// Parses a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents or unknown fields.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse { source })
    }

    /// Reads and parses a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid document.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            operation: "config.read",
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Applies `VENEER_*` overrides obtained through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for an unknown platform name.
    pub fn with_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        if let Some(root_id) = lookup(ENV_ROOT_ID) {
            debug!(root_id = %root_id, "root id overridden from environment");
            self.root_id = root_id;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level.trim().to_ascii_lowercase();
        }
        if let Some(platform) = lookup(ENV_ONSEN_PLATFORM) {
            self.onsen.platform = if platform.trim().eq_ignore_ascii_case("auto") {
                None
            } else {
                Some(Platform::parse(&platform).ok_or_else(|| {
                    ConfigError::invalid("onsen", "platform", Some(&platform), "unknown_platform")
                })?)
            };
        }
        Ok(self)
    }
}

/// Loads configuration from `path` (or defaults) and the process environment.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the resulting
/// configuration fails validation.
pub fn load(path: Option<&Path>) -> ConfigResult<UiConfig> {
    load_with_env(path, |key| std::env::var(key).ok())
}

/// Loads configuration from `path` (or defaults) and a custom environment source.
///
/// # Errors
///
/// Same as [`load`].
pub fn load_with_env(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> ConfigResult<UiConfig> {
    let base = match path {
        Some(path) => UiConfig::from_path(path)?,
        None => UiConfig::default(),
    };
    let config = base.with_env_overrides(lookup)?;
    validate(&config)?;
    info!(
        root_id = %config.root_id,
        level = %config.logging.level,
        platform = config.onsen.platform.map_or("auto", Platform::as_str),
        "configuration loaded"
    );
    Ok(config)
}
