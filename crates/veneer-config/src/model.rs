//! Typed configuration models.

use serde::{Deserialize, Serialize};

/// Default host element id; matches `veneer_core::DEFAULT_ROOT_ID`.
pub(crate) const DEFAULT_ROOT_ID: &str = "kvapp";

/// Default log level when neither the file nor the environment sets one.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Id of the document element the root component renders into.
    pub root_id: String,
    /// Logging preferences.
    pub logging: LoggingSettings,
    /// Onsen UI global settings.
    pub onsen: OnsenConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            logging: LoggingSettings::default(),
            onsen: OnsenConfig::default(),
        }
    }
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Output format.
    pub format: LogOutput,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogOutput::Pretty,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Human-readable, multi-line output.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Onsen UI global settings applied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OnsenConfig {
    /// Forces the styling platform instead of detecting it.
    pub platform: Option<Platform>,
    /// Whether Onsen adapts element styling to the platform.
    pub auto_styling: bool,
    /// Whether Onsen animates transitions.
    pub animations: bool,
}

impl Default for OnsenConfig {
    fn default() -> Self {
        Self {
            platform: None,
            auto_styling: true,
            animations: true,
        }
    }
}

/// Platform styles Onsen can be forced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS look and feel.
    Ios,
    /// Material look and feel.
    Android,
}

impl Platform {
    /// Name understood by `ons.platform.select`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    /// Parses a platform name, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ios" => Some(Self::Ios),
            "android" => Some(Self::Android),
            _ => None,
        }
    }
}
