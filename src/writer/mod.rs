//! A single file-backed log stream: level filtering, timestamping and
//! size-triggered rotation in front of an append-only file.

pub mod line;
pub mod rotation;

use crate::Error;
use crate::internal;
use crate::level::Level;
use chrono::Local;
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default strftime pattern for line timestamps (`2024-03-07-09-05-01`).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// What a call to [`LogWriter::write`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Written {
    /// The message was below the writer's level and dropped.
    Filtered,
    /// The line was appended. `rotated` holds where the previous file went, if it was rotated first.
    Appended { rotated: Option<PathBuf> },
}

/// Owns one target file and its format and rotation policy.
///
/// Not synchronized: callers serialize access (the registry does this).
#[derive(Debug, Clone)]
pub struct LogWriter {
    file_path: PathBuf,
    level: Level,
    /// Bytes; `<= 0` disables rotation.
    size_limit: i64,
    save_timestamp: bool,
    timestamp_format: String,
    echo: bool,
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new(PathBuf::new(), Level::default())
    }
}

impl LogWriter {
    /// Creates a writer with timestamps on and no size limit.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>, level: Level) -> Self {
        Self {
            file_path: file_path.into(),
            level,
            size_limit: 0,
            save_timestamp: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            echo: false,
        }
    }

    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Display name of the writer's own minimum level.
    #[must_use]
    pub const fn level_name(&self) -> &'static str {
        self.level.as_str()
    }

    pub const fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn set_file_path(&mut self, file_path: impl Into<PathBuf>) {
        self.file_path = file_path.into();
    }

    #[must_use]
    pub const fn size_limit(&self) -> i64 {
        self.size_limit
    }

    pub const fn set_size_limit(&mut self, limit: i64) {
        self.size_limit = limit;
    }

    #[must_use]
    pub const fn save_timestamp(&self) -> bool {
        self.save_timestamp
    }

    pub const fn set_save_timestamp(&mut self, save: bool) {
        self.save_timestamp = save;
    }

    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    pub fn set_timestamp_format(&mut self, format: impl Into<String>) {
        self.timestamp_format = format.into();
    }

    #[must_use]
    pub const fn echo(&self) -> bool {
        self.echo
    }

    /// Mirror every written line to stderr as well.
    pub const fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    /// Filters by level, rotates an oversized file, then appends one line.
    ///
    /// A failed rotation is reported on the diagnostic channel and the line
    /// is appended to the oversized file; the next write retries.
    ///
    /// # Errors
    /// [`Error::EmptyPath`] when no file is configured, [`Error::Io`] when
    /// the file cannot be opened or written.
    pub fn write(&self, message: &str, level: Level) -> Result<Written, Error> {
        if level < self.level {
            return Ok(Written::Filtered);
        }

        if self.file_path.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }

        let rotated = match self.rotate_if_needed() {
            Ok(rotated) => rotated,
            Err(e) => {
                internal::warn("WRITER", &e.to_string());
                None
            }
        };

        let timestamp = self.save_timestamp.then(|| self.format_timestamp());
        let mut content = line::compose(timestamp.as_deref(), level, message);

        if self.echo {
            eprintln!("{content}");
        }

        content.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;
        file.write_all(content.as_bytes())?;

        Ok(Written::Appended { rotated })
    }

    /// Renames the current file aside when it has reached the size limit.
    ///
    /// # Errors
    /// [`Error::Rotation`] when the rename fails.
    pub fn rotate_if_needed(&self) -> Result<Option<PathBuf>, Error> {
        rotation::rotate_if_needed(&self.file_path, self.size_limit)
    }

    /// Formats "now" with the configured pattern, falling back to the
    /// default pattern when the configured one is not valid strftime.
    fn format_timestamp(&self) -> String {
        let now = Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.timestamp_format)).is_ok() {
            return out;
        }

        internal::trace(
            "WRITER",
            &format!("Invalid timestamp format '{}'", self.timestamp_format),
        );
        now.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    }
}
