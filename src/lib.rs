#![forbid(unsafe_code)]

//! `namedlog` - named, leveled log streams routed to size-capped files.
//!
//! Each logical logger name maps to a [`LogWriter`] owning one file. A
//! writer drops messages below its level, renames its file aside once it
//! reaches the size limit, and appends lines shaped like
//! `2024-03-07-09-05-01 : info : started`.
//!
//! # Example
//!
//! ```
//! use namedlog::{Level, Registry};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let registry = Registry::new();
//! registry.register("worker", dir.path().join("app.log"), Level::Info).unwrap();
//! registry.set_size_limit(1024 * 1024, "worker").unwrap();
//!
//! registry.log("worker", "hi", Level::Trace).unwrap(); // filtered
//! registry.log("worker", "started", Level::Info).unwrap();
//! ```
//!
//! The free functions below forward to a process-wide registry and report
//! failures on the [`internal`] diagnostic channel instead of returning them.

pub mod config;
pub mod error;
pub mod internal;
pub mod level;
pub mod registry;
pub mod size;
pub mod writer;

pub use config::Config;
pub use error::{Error, ErrorKind};
pub use level::Level;
pub use registry::{GlobalLock, Registry, ShardedLock, WriterStore};
pub use size::{format_size, parse_size};
pub use writer::{LogWriter, Written};

use std::path::PathBuf;
use std::sync::OnceLock;

/// Logger name used when the caller has no particular stream in mind.
pub const DEFAULT_LOGGER: &str = "default";

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, created on first use.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

fn report<T>(result: Result<T, Error>) {
    match result {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::Io => internal::error("NAMEDLOG", &e.to_string()),
        Err(e) => internal::warn("NAMEDLOG", &e.to_string()),
    }
}

/// Registers `file_path` under `name` in the global registry.
///
/// Takes the path first, unlike [`Registry::register`] which takes the name first.
pub fn register(file_path: impl Into<PathBuf>, name: &str, level: Level) {
    report(global().register(name, file_path, level));
}

/// Removes `name` from the global registry; unknown names are ignored.
pub fn unregister(name: &str) {
    global().unregister(name);
}

/// Logs `message` at `level` to the global logger `name`.
pub fn log(name: &str, message: &str, level: Level) {
    report(global().log(name, message, level));
}

/// Logs `message` at trace level to the global logger `name`.
pub fn trace(message: &str, name: &str) {
    log(name, message, Level::Trace);
}

/// Logs `message` at debug level to the global logger `name`.
pub fn debug(message: &str, name: &str) {
    log(name, message, Level::Debug);
}

/// Logs `message` at info level to the global logger `name`.
pub fn info(message: &str, name: &str) {
    log(name, message, Level::Info);
}

/// Logs `message` at warning level to the global logger `name`.
pub fn warning(message: &str, name: &str) {
    log(name, message, Level::Warn);
}

/// Logs `message` at error level to the global logger `name`.
pub fn error(message: &str, name: &str) {
    log(name, message, Level::Error);
}

/// Logs `message` at fatal level to the global logger `name`.
pub fn fatal(message: &str, name: &str) {
    log(name, message, Level::Fatal);
}

/// Sets the rotation threshold of the global logger `name`; `<= 0` disables rotation.
pub fn set_limit_size(size: i64, name: &str) {
    report(global().set_size_limit(size, name));
}
