//! Tests for concurrent logging through one registry.

use namedlog::writer::line;
use namedlog::{GlobalLock, Level, Registry, ShardedLock, WriterStore};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const LINES: usize = 200;

fn assert_well_formed(path: &Path, expected_lines: usize) {
    let content = fs::read_to_string(path).unwrap();
    assert!(content.ends_with('\n'));

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), expected_lines, "{}", path.display());
    for l in lines {
        let parsed = line::parse(l, true).unwrap_or_else(|| panic!("corrupt line: {l:?}"));
        assert_eq!(parsed.level, Level::Info);
        assert!(parsed.message.starts_with("thread "), "corrupt line: {l:?}");
    }
}

fn distinct_names<S: WriterStore + 'static>(store: S) {
    let tmp = TempDir::new().unwrap();
    let registry = Arc::new(Registry::with_store(store));

    for t in 0..THREADS {
        registry
            .register(&format!("t{t}"), tmp.path().join(format!("t{t}.log")), Level::Info)
            .unwrap();
    }

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let name = format!("t{t}");
                for i in 0..LINES {
                    registry
                        .log(&name, &format!("thread {t} line {i}"), Level::Info)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..THREADS {
        assert_well_formed(&tmp.path().join(format!("t{t}.log")), LINES);
    }
}

fn shared_name<S: WriterStore + 'static>(store: S) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("shared.log");
    let registry = Arc::new(Registry::with_store(store));
    registry.register("shared", &path, Level::Info).unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..LINES {
                    registry
                        .log("shared", &format!("thread {t} line {i}"), Level::Info)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_well_formed(&path, THREADS * LINES);
}

#[test]
fn distinct_names_global_lock() {
    distinct_names(GlobalLock::default());
}

#[test]
fn distinct_names_sharded_lock() {
    distinct_names(ShardedLock::default());
}

#[test]
fn shared_name_global_lock() {
    shared_name(GlobalLock::default());
}

#[test]
fn shared_name_sharded_lock() {
    shared_name(ShardedLock::default());
}

#[test]
fn concurrent_duplicate_registration_has_one_winner() {
    let tmp = TempDir::new().unwrap();
    let registry = Arc::new(Registry::new());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            let path = tmp.path().join(format!("race{t}.log"));
            thread::spawn(move || registry.register("race", path, Level::Info).is_ok())
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(registry.len(), 1);
}
