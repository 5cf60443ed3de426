//! Declarative logger setup from TOML (or JSON) files.
//!
//! ```toml
//! [general]
//! diagnostics = "warning"
//!
//! [defaults]
//! size_limit = "10M"
//!
//! [loggers.default]
//! path = "~/.local/state/myapp/app.log"
//! level = "info"
//! ```

mod structs;

pub use structs::{DefaultsConfig, GeneralConfig, LoggerConfig, SizeLimit};

use crate::Error;
use crate::internal;
use crate::level::Level;
use crate::size::parse_size;
use crate::writer::LogWriter;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub defaults: DefaultsConfig,
    pub loggers: HashMap<String, LoggerConfig>,
}

impl Config {
    /// Loads `<config_dir>/namedlog/namedlog.toml`, or defaults when it does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file does not parse.
    pub fn load() -> Result<Self, Error> {
        let path = Self::get_config_path()?;
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads an explicit file. `.json` files are parsed as JSON, anything else as TOML.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            serde_json::from_str(&content)?
        } else {
            Self::parse_toml(&content)?
        };
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Parses TOML held in memory.
    ///
    /// # Errors
    /// [`Error::ConfigParse`] on a syntax or type error.
    pub fn parse_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/namedlog/namedlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("namedlog").join("namedlog.toml"))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Diagnostic threshold; an unknown string falls back to `Warn`.
    #[must_use]
    pub fn diagnostics_level(&self) -> Level {
        self.general.diagnostics.parse().unwrap_or(Level::Warn)
    }

    /// Resolves every `[loggers.*]` table against `[defaults]`, sorted by name.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`] or [`Error::InvalidSize`] for the first bad value.
    pub fn build_writers(&self) -> Result<Vec<(String, LogWriter)>, Error> {
        let mut names: Vec<&String> = self.loggers.keys().collect();
        names.sort_unstable();

        names
            .into_iter()
            .map(|name| {
                let writer = self.build_writer(&self.loggers[name])?;
                Ok((name.clone(), writer))
            })
            .collect()
    }

    fn build_writer(&self, logger: &LoggerConfig) -> Result<LogWriter, Error> {
        let defaults = &self.defaults;

        let level_str = logger.level.as_deref().unwrap_or(&defaults.level);
        let level: Level = level_str
            .parse()
            .map_err(|_| Error::InvalidLevel(level_str.to_string()))?;

        let path = shellexpand::tilde(&logger.path);
        let mut writer = LogWriter::new(path.into_owned(), level);
        writer.set_size_limit(resolve_size(
            logger.size_limit.as_ref().unwrap_or(&defaults.size_limit),
        )?);
        writer.set_save_timestamp(logger.timestamp.unwrap_or(defaults.timestamp));
        writer.set_timestamp_format(
            logger
                .timestamp_format
                .as_deref()
                .unwrap_or(&defaults.timestamp_format),
        );
        writer.set_echo(logger.echo.unwrap_or(defaults.echo));
        Ok(writer)
    }
}

fn resolve_size(size: &SizeLimit) -> Result<i64, Error> {
    match size {
        SizeLimit::Bytes(bytes) => Ok(*bytes),
        SizeLimit::Text(text) => parse_size(text)
            .and_then(|bytes| i64::try_from(bytes).ok())
            .ok_or_else(|| Error::InvalidSize(text.clone())),
    }
}
