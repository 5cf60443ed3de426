//! Unified error type for all namedlog operations.

use std::path::PathBuf;

/// Error type for namedlog operations.
#[derive(Debug)]
pub enum Error {
    /// The log file could not be opened or written.
    Io(std::io::Error),
    /// Renaming an oversized log file aside failed.
    Rotation {
        /// File that should have been rotated.
        path: PathBuf,
        /// Underlying rename failure.
        source: std::io::Error,
    },
    /// A writer was asked to log without a target file.
    EmptyPath,
    /// A logger with this name is already registered.
    DuplicateLogger(String),
    /// No logger is registered under this name.
    LoggerNotFound(String),
    /// Invalid log level string.
    InvalidLevel(String),
    /// Invalid size string (e.g. `"10Q"`).
    InvalidSize(String),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// JSON config parsing error.
    JsonParse(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

/// Coarse grouping of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input: empty path, duplicate name, unparsable config.
    Configuration,
    /// The referenced logger does not exist.
    NotFound,
    /// The filesystem refused an open, write or rename.
    Io,
}

impl Error {
    /// Which of the three failure families this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) | Self::Rotation { .. } => ErrorKind::Io,
            Self::LoggerNotFound(_) => ErrorKind::NotFound,
            Self::EmptyPath
            | Self::DuplicateLogger(_)
            | Self::InvalidLevel(_)
            | Self::InvalidSize(_)
            | Self::ConfigParse(_)
            | Self::JsonParse(_)
            | Self::ConfigDirNotFound => ErrorKind::Configuration,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Rotation { path, source } => {
                write!(f, "failed to rotate {}: {source}", path.display())
            }
            Self::EmptyPath => write!(f, "log file path is empty"),
            Self::DuplicateLogger(name) => write!(f, "logger already registered: {name}"),
            Self::LoggerNotFound(name) => write!(f, "logger not registered: {name}"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidSize(size) => write!(f, "invalid size: {size}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::JsonParse(e) => write!(f, "JSON parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Rotation { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::JsonParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonParse(e)
    }
}
