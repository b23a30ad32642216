//! Unit tests for config module
//!
//! Tests configuration types, defaults, validation and file loading.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::time::Duration;

use tempfile::TempDir;

use crate::BridgeError;
use crate::config::{Config, ConfigPaths, LogLevel};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert!(config.reporting.enabled);
    assert_eq!(config.reporting.protocol, "plex");
    assert_eq!(config.reporting.interval(), Duration::from_secs(5));
}

#[test]
fn config_serialize_toml() {
    let config = Config::default();

    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[reporting]"));
    assert!(toml_str.contains("interval_secs = 5"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [reporting]
        interval_secs = 10
        protocol = "jellyfin"
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.reporting.interval_secs, 10);
    assert_eq!(config.reporting.protocol, "jellyfin");
    assert!(config.reporting.enabled);
}

#[test]
fn config_empty_toml_uses_defaults() {
    let config = Config::from_toml("").unwrap();

    assert_eq!(config.reporting, Config::default().reporting);
}

#[test]
fn config_partial_section_keeps_other_defaults() {
    let config = Config::from_toml("[reporting]\nenabled = false\n").unwrap();

    assert!(!config.reporting.enabled);
    assert_eq!(config.reporting.interval_secs, 5);
    assert_eq!(config.reporting.protocol, "plex");
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [general
        invalid syntax here
    "#;

    let result = Config::from_toml(invalid_toml);

    assert!(matches!(result, Err(BridgeError::TomlParseError { .. })));
}

#[test]
fn config_rejects_unknown_log_level() {
    let result = Config::from_toml("[general]\nlog_level = \"loud\"\n");

    assert!(matches!(result, Err(BridgeError::TomlParseError { .. })));
}

#[test]
fn config_rejects_zero_interval() {
    let result = Config::from_toml("[reporting]\ninterval_secs = 0\n");

    match result {
        Err(BridgeError::ConfigValidation { component, .. }) => assert_eq!(component, "reporting"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn config_rejects_blank_protocol() {
    let result = Config::from_toml("[reporting]\nprotocol = \"  \"\n");

    assert!(matches!(result, Err(BridgeError::ConfigValidation { .. })));
}

#[test]
fn config_load_creates_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let config = Config::load_from(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.reporting, Config::default().reporting);
}

#[test]
fn config_load_reads_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[reporting]\ninterval_secs = 2\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.reporting.interval(), Duration::from_secs(2));
}

#[test]
fn config_read_never_creates_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("typo/config.toml");

    let result = Config::read_from(&path);

    assert!(matches!(result, Err(BridgeError::IoError { .. })));
    assert!(!temp.path().join("typo").exists());
}

#[test]
fn config_read_validates_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[reporting]\ninterval_secs = 0\n").unwrap();

    let result = Config::read_from(&path);

    assert!(matches!(result, Err(BridgeError::ConfigValidation { .. })));
}

#[test]
fn log_dir_is_created_under_state_home() {
    let temp = TempDir::new().unwrap();

    let log_dir = ConfigPaths::log_dir_in(temp.path()).unwrap();

    assert_eq!(log_dir, temp.path().join("playback-bridge/logs"));
    assert!(log_dir.is_dir());
    assert_eq!(ConfigPaths::log_dir_in(temp.path()).unwrap(), log_dir);
}

#[test]
fn config_schema_lists_sections() {
    let schema = Config::schema_json().unwrap();

    assert!(schema.contains("reporting"));
    assert!(schema.contains("interval_secs"));
    assert!(schema.contains("log_level"));
}
