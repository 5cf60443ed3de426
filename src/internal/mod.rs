//! namedlog's own diagnostic channel.
//!
//! Failures the facade swallows (missing logger, unopenable file, failed
//! rotation) are reported here. It is a secondary signal: registry and
//! writer operations already return `Result`. Lines go to stderr unless a
//! sink has been installed.

use crate::config::Config;
use crate::level::Level;
use chrono::Local;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Receives every diagnostic at or above the threshold.
pub type Sink = Box<dyn Fn(Level, &str, &str) + Send + Sync>;

static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Warn as u8);
static SINK: RwLock<Option<Arc<dyn Fn(Level, &str, &str) + Send + Sync>>> = RwLock::new(None);

/// Sets the minimum level that gets reported.
pub fn set_level(level: Level) {
    THRESHOLD.store(level as u8, Ordering::Relaxed);
}

/// Current reporting threshold.
#[must_use]
pub fn level() -> Level {
    Level::from_repr(THRESHOLD.load(Ordering::Relaxed)).unwrap_or(Level::Warn)
}

/// Applies `[general] diagnostics` from a loaded config.
pub fn init_with_config(config: &Config) {
    let level = config.diagnostics_level();
    set_level(level);
    debug("INTERNAL", &format!("Diagnostics level: {level}"));
}

/// Routes diagnostics somewhere other than stderr.
///
/// The sink runs outside the sink lock, so it may itself replace or clear the sink.
pub fn set_sink(sink: Sink) {
    *SINK.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::from(sink));
}

/// Restores stderr output.
pub fn clear_sink() {
    *SINK.write().unwrap_or_else(PoisonError::into_inner) = None;
}

fn log(level: Level, scope: &str, msg: &str) {
    if level < self::level() {
        return;
    }

    let sink = SINK
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone);
    if let Some(sink) = sink {
        sink(level, scope, msg);
    } else {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        eprintln!("{timestamp} [{level}] {scope}  {msg}");
    }
}

/// High-volume instrumentation such as per-write dispatch.
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Registration and rotation events.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal milestones such as a config being applied.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Swallowed failures: missing logger, duplicate name, failed rotation.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Lines lost to an unopenable or unwritable file.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
