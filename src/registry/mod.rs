//! Name→writer directory with serialized access.
//!
//! Every write goes through [`Registry::log`], so no writer is ever used
//! without being registered first. The lock strategy is a type parameter:
//! [`GlobalLock`] by default, [`ShardedLock`] for per-name locking.

mod store;

pub use store::{GlobalLock, ShardedLock, WriterStore};

use crate::Error;
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::writer::{LogWriter, Written};
use std::path::PathBuf;

/// Owns every registered [`LogWriter`]; callers only ever see snapshots or
/// borrow a writer for the duration of a closure.
#[derive(Debug, Default)]
pub struct Registry<S: WriterStore = GlobalLock> {
    store: S,
}

impl Registry {
    /// Empty registry behind a single global lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry with every logger declared in `config`.
    ///
    /// # Errors
    /// See [`Registry::apply_config`].
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let registry = Self::new();
        registry.apply_config(config)?;
        Ok(registry)
    }
}

impl<S: WriterStore> Registry<S> {
    /// Empty registry using the given lock strategy.
    pub const fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Registers a writer for `file_path` at `level` under `name`.
    ///
    /// # Errors
    /// [`Error::DuplicateLogger`] when `name` is taken; the existing writer is kept.
    pub fn register(
        &self,
        name: &str,
        file_path: impl Into<PathBuf>,
        level: Level,
    ) -> Result<(), Error> {
        self.register_writer(name, LogWriter::new(file_path, level))
    }

    /// Registers an already configured writer under `name`.
    ///
    /// # Errors
    /// [`Error::DuplicateLogger`] when `name` is taken; the existing writer is kept.
    pub fn register_writer(&self, name: &str, writer: LogWriter) -> Result<(), Error> {
        let path = writer.file_path().display().to_string();
        let level = writer.level();
        if self.store.insert(name, writer).is_err() {
            return Err(Error::DuplicateLogger(name.to_string()));
        }
        internal::debug(
            "REGISTRY",
            &format!("Registered '{name}' -> {path} (level {level})"),
        );
        Ok(())
    }

    /// Removes `name`. Returns `false` when it was not registered.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.store.remove(name);
        if removed {
            internal::debug("REGISTRY", &format!("Unregistered '{name}'"));
        }
        removed
    }

    /// Snapshot of the writer registered under `name`.
    ///
    /// Changes to the returned value do not affect the registry; use
    /// [`Registry::with_writer`] for that.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<LogWriter> {
        self.store.with_writer(name, |writer| writer.clone())
    }

    /// Runs `f` against the live writer under its lock.
    ///
    /// # Errors
    /// [`Error::LoggerNotFound`] when `name` is not registered.
    pub fn with_writer<R>(
        &self,
        name: &str,
        f: impl FnOnce(&mut LogWriter) -> R,
    ) -> Result<R, Error> {
        self.store
            .with_writer(name, f)
            .ok_or_else(|| Error::LoggerNotFound(name.to_string()))
    }

    /// Dispatches a message to the writer registered under `name`.
    ///
    /// # Errors
    /// [`Error::LoggerNotFound`] for an unknown name, otherwise whatever
    /// [`LogWriter::write`] returns.
    pub fn log(&self, name: &str, message: &str, level: Level) -> Result<Written, Error> {
        internal::trace("REGISTRY", &format!("log '{name}' [{level}]"));
        self.with_writer(name, |writer| writer.write(message, level))?
    }

    /// Updates the rotation threshold of `name`; `<= 0` disables rotation.
    ///
    /// # Errors
    /// [`Error::LoggerNotFound`] when `name` is not registered.
    pub fn set_size_limit(&self, size: i64, name: &str) -> Result<(), Error> {
        self.with_writer(name, |writer| writer.set_size_limit(size))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.store.with_writer(name, |_| ()).is_some()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names = self.store.names();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.names().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers every logger declared in `config`.
    ///
    /// Loggers are built first so a bad level or size leaves the registry
    /// untouched; registration then stops at the first duplicate name.
    /// Returns the number of loggers registered.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`], [`Error::InvalidSize`] or [`Error::DuplicateLogger`].
    pub fn apply_config(&self, config: &Config) -> Result<usize, Error> {
        let writers = config.build_writers()?;
        let count = writers.len();
        for (name, writer) in writers {
            self.register_writer(&name, writer)?;
        }
        internal::info("CONFIG", &format!("Registered {count} logger(s) from config"));
        Ok(count)
    }
}
