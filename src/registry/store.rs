//! Lock strategies for the name→writer map.
//!
//! The registry only talks to [`WriterStore`], so trading the single global
//! lock for per-name locks does not change its public contract.

use crate::writer::LogWriter;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Thread-safe storage of uniquely named writers.
pub trait WriterStore: Send + Sync {
    /// Inserts `writer` under `name` unless the name is taken, in which case
    /// the rejected writer is handed back and the existing one is untouched.
    ///
    /// # Errors
    /// Returns the rejected writer when `name` already exists.
    fn insert(&self, name: &str, writer: LogWriter) -> Result<(), LogWriter>;

    /// Removes `name`; `false` when it was not present.
    fn remove(&self, name: &str) -> bool;

    /// Runs `f` against the live writer while holding its lock.
    fn with_writer<R>(&self, name: &str, f: impl FnOnce(&mut LogWriter) -> R) -> Option<R>;

    /// Registered names in arbitrary order.
    fn names(&self) -> Vec<String>;
}

/// One mutex for the whole map: every operation on every logger is serialized.
#[derive(Debug, Default)]
pub struct GlobalLock {
    writers: Mutex<HashMap<String, LogWriter>>,
}

impl WriterStore for GlobalLock {
    fn insert(&self, name: &str, writer: LogWriter) -> Result<(), LogWriter> {
        let mut writers = self.writers.lock().unwrap_or_else(PoisonError::into_inner);
        if writers.contains_key(name) {
            return Err(writer);
        }
        writers.insert(name.to_string(), writer);
        Ok(())
    }

    fn remove(&self, name: &str) -> bool {
        self.writers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .is_some()
    }

    fn with_writer<R>(&self, name: &str, f: impl FnOnce(&mut LogWriter) -> R) -> Option<R> {
        let mut writers = self.writers.lock().unwrap_or_else(PoisonError::into_inner);
        writers.get_mut(name).map(f)
    }

    fn names(&self) -> Vec<String> {
        self.writers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

/// A read-mostly map of individually locked writers: operations on one name
/// are serialized, different names proceed in parallel.
///
/// A write that already holds a writer's lock finishes even if the name is
/// unregistered concurrently.
#[derive(Debug, Default)]
pub struct ShardedLock {
    writers: RwLock<HashMap<String, Arc<Mutex<LogWriter>>>>,
}

impl WriterStore for ShardedLock {
    fn insert(&self, name: &str, writer: LogWriter) -> Result<(), LogWriter> {
        let mut writers = self.writers.write().unwrap_or_else(PoisonError::into_inner);
        if writers.contains_key(name) {
            return Err(writer);
        }
        writers.insert(name.to_string(), Arc::new(Mutex::new(writer)));
        Ok(())
    }

    fn remove(&self, name: &str) -> bool {
        self.writers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .is_some()
    }

    fn with_writer<R>(&self, name: &str, f: impl FnOnce(&mut LogWriter) -> R) -> Option<R> {
        let shard = self
            .writers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()?;
        let mut writer = shard.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&mut writer))
    }

    fn names(&self) -> Vec<String> {
        self.writers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}
