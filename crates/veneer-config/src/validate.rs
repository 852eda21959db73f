//! Validation helpers for configuration fields.

use regex::Regex;

use crate::error::{ConfigError, ConfigResult};
use crate::model::UiConfig;

/// Log levels accepted in configuration.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

const HTML_ID_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9_:.\-]*$";

/// Ensures `id` can address a document element.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for empty ids or ids with characters
/// outside the HTML name token set.
pub fn validate_root_id(id: &str) -> ConfigResult<()> {
    if id.is_empty() {
        return Err(ConfigError::invalid("ui", "root_id", None, "empty"));
    }
    let pattern =
        Regex::new(HTML_ID_PATTERN).map_err(|source| ConfigError::PatternCompile { source })?;
    if !pattern.is_match(id) {
        return Err(ConfigError::invalid("ui", "root_id", Some(id), "not_an_html_id"));
    }
    Ok(())
}

/// Ensures `level` is one of [`LOG_LEVELS`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for unknown levels.
pub fn validate_log_level(level: &str) -> ConfigResult<()> {
    if LOG_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            "logging",
            "level",
            Some(level),
            "unknown_level",
        ))
    }
}

/// Validates every field of a loaded configuration.
///
/// # Errors
///
/// Returns the first [`ConfigError::InvalidField`] encountered.
pub fn validate(config: &UiConfig) -> ConfigResult<()> {
    validate_root_id(&config.root_id)?;
    validate_log_level(&config.logging.level)
}
