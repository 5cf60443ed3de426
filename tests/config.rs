//! Tests for declarative logger setup.

use namedlog::config::SizeLimit;
use namedlog::{Config, Error, Level, Registry};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_has_defaults() {
    let config = Config::parse_toml("").unwrap();
    assert!(config.loggers.is_empty());
    assert_eq!(config.diagnostics_level(), Level::Warn);
    assert_eq!(config.defaults.level, "debug");
    assert_eq!(config.defaults.size_limit, SizeLimit::Bytes(0));
    assert!(config.defaults.timestamp);
}

#[test]
fn loggers_inherit_and_override_defaults() {
    let config = Config::parse_toml(
        r#"
        [general]
        diagnostics = "error"

        [defaults]
        level = "info"
        size_limit = "1K"
        timestamp_format = "%H:%M:%S"

        [loggers.app]
        path = "/var/log/app.log"

        [loggers.audit]
        path = "/var/log/audit.log"
        level = "warning"
        size_limit = 0
        timestamp = false
        echo = true
        "#,
    )
    .unwrap();
    assert_eq!(config.diagnostics_level(), Level::Error);

    let writers = config.build_writers().unwrap();
    let names: Vec<&str> = writers.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["app", "audit"]);

    let app = &writers[0].1;
    assert_eq!(app.level(), Level::Info);
    assert_eq!(app.size_limit(), 1024);
    assert!(app.save_timestamp());
    assert_eq!(app.timestamp_format(), "%H:%M:%S");
    assert!(!app.echo());

    let audit = &writers[1].1;
    assert_eq!(audit.level(), Level::Warn);
    assert_eq!(audit.size_limit(), 0);
    assert!(!audit.save_timestamp());
    assert!(audit.echo());
}

#[test]
fn tilde_in_path_is_expanded() {
    let config = Config::parse_toml(
        r#"
        [loggers.home]
        path = "~/home.log"
        "#,
    )
    .unwrap();
    let writers = config.build_writers().unwrap();
    let path = writers[0].1.file_path().to_string_lossy().into_owned();
    assert!(!path.starts_with('~'), "not expanded: {path}");
    assert!(path.ends_with("home.log"));
}

#[test]
fn invalid_level_is_rejected() {
    let config = Config::parse_toml(
        r#"
        [loggers.bad]
        path = "bad.log"
        level = "loud"
        "#,
    )
    .unwrap();
    assert!(matches!(
        config.build_writers(),
        Err(Error::InvalidLevel(ref level)) if level == "loud"
    ));
}

#[test]
fn invalid_size_is_rejected() {
    let config = Config::parse_toml(
        r#"
        [loggers.bad]
        path = "bad.log"
        size_limit = "lots"
        "#,
    )
    .unwrap();
    assert!(matches!(
        config.build_writers(),
        Err(Error::InvalidSize(ref size)) if size == "lots"
    ));
}

#[test]
fn syntax_error_is_a_parse_error() {
    assert!(matches!(
        Config::parse_toml("[loggers.x"),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn registry_from_config_writes_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("worker.log");
    let config_path = tmp.path().join("namedlog.toml");
    fs::write(
        &config_path,
        format!(
            "[loggers.worker]\npath = {:?}\nlevel = \"info\"\ntimestamp = false\n",
            path.to_string_lossy()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let registry = Registry::from_config(&config).unwrap();
    assert_eq!(registry.names(), vec!["worker"]);

    registry.log("worker", "hi", Level::Trace).unwrap();
    registry.log("worker", "started", Level::Info).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "info : started\n");
}

#[test]
fn json_config_is_supported() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("namedlog.json");
    fs::write(
        &config_path,
        r#"{ "loggers": { "default": { "path": "app.log", "size_limit": "2M" } } }"#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let writers = config.build_writers().unwrap();
    assert_eq!(writers[0].0, "default");
    assert_eq!(writers[0].1.size_limit(), 2 * 1024 * 1024);
}

#[test]
fn apply_config_rejects_names_already_registered() {
    let tmp = TempDir::new().unwrap();
    let registry = Registry::new();
    registry
        .register("worker", tmp.path().join("manual.log"), Level::Error)
        .unwrap();

    let config = Config::parse_toml(
        r#"
        [loggers.worker]
        path = "other.log"
        "#,
    )
    .unwrap();
    assert!(matches!(
        registry.apply_config(&config),
        Err(Error::DuplicateLogger(_))
    ));
    assert_eq!(registry.lookup("worker").unwrap().level(), Level::Error);
}
