//! Configuration struct definitions.

use crate::writer::DEFAULT_TIMESTAMP_FORMAT;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum level reported on the diagnostic channel.
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            diagnostics: "warning".to_string(),
        }
    }
}

/// A size limit written either as a byte count or as `"10M"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeLimit {
    Bytes(i64),
    Text(String),
}

impl Default for SizeLimit {
    fn default() -> Self {
        Self::Bytes(0)
    }
}

/// Values applied to every logger that does not override them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Minimum level.
    pub level: String,
    /// Rotation threshold; 0 disables rotation.
    pub size_limit: SizeLimit,
    /// Prefix each line with a timestamp.
    pub timestamp: bool,
    /// Timestamp format (strftime).
    pub timestamp_format: String,
    /// Mirror lines to stderr.
    pub echo: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            size_limit: SizeLimit::default(),
            timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            echo: false,
        }
    }
}

/// One `[loggers.<name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Target file; `~` is expanded.
    pub path: String,
    pub level: Option<String>,
    pub size_limit: Option<SizeLimit>,
    pub timestamp: Option<bool>,
    pub timestamp_format: Option<String>,
    pub echo: Option<bool>,
}
