//! Config file tests.
//!
//! Tests for `load_config()`: full file, section defaults, log capacity
//! bounds, and building a registry straight from the loaded config.

use errorrep_common::config::{ConfigError, LogLevel, load_config};
use errorrep_common::consts::{DEFAULT_LOG_CAPACITY, MAX_LOG_CAPACITY};
use errorrep_common::registry::ErrorRegistry;
use errorrep_common::severity::Severity;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a config.toml with the given `[registry]` body.
fn write_config_toml(dir: &Path, registry: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(
        &path,
        format!(
            r#"
[shared]
log_level = "debug"
service_name = "bench-unit-07"

[registry]
{registry}
"#
        ),
    )
    .unwrap();
    path
}

// ─── Tests ──────────────────────────────────────────────────────────

/// Test: full config loads and sizes the registry.
#[test]
fn load_config_success() {
    let tmp = TempDir::new().unwrap();
    let path = write_config_toml(tmp.path(), "log_capacity = 2");

    let config = load_config(&path).expect("should load successfully");
    assert_eq!(config.shared.log_level, LogLevel::Debug);
    assert_eq!(config.shared.service_name, "bench-unit-07");
    assert_eq!(config.registry.log_capacity, 2);

    let mut registry = ErrorRegistry::new(config.registry).unwrap();
    for code in [-1, -2, -3] {
        registry.set_error(code, Severity::Info).unwrap();
    }
    assert_eq!(registry.error_log().codes().collect::<Vec<_>>(), [-2, -3]);
}

/// Test: empty `[registry]` section falls back to the default capacity.
#[test]
fn empty_registry_section_uses_default() {
    let tmp = TempDir::new().unwrap();
    let path = write_config_toml(tmp.path(), "");

    let config = load_config(&path).unwrap();
    assert_eq!(config.registry.log_capacity, DEFAULT_LOG_CAPACITY);
}

/// Test: zero capacity is rejected.
#[test]
fn zero_log_capacity_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_config_toml(tmp.path(), "log_capacity = 0");

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("log_capacity")));
}

/// Test: capacity above the reserved storage is rejected.
#[test]
fn oversized_log_capacity_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_config_toml(
        tmp.path(),
        &format!("log_capacity = {}", MAX_LOG_CAPACITY + 1),
    );

    assert!(matches!(
        load_config(&path),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test: negative capacity fails to parse.
#[test]
fn negative_log_capacity_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = write_config_toml(tmp.path(), "log_capacity = -4");

    assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
}

/// Test: missing `[shared]` section is a parse error.
#[test]
fn missing_shared_section() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[registry]\nlog_capacity = 8\n").unwrap();

    assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
}

/// Test: empty service name fails validation.
#[test]
fn empty_service_name_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[shared]\nservice_name = \"\"\n").unwrap();

    assert!(matches!(
        load_config(&path),
        Err(ConfigError::ValidationError(_))
    ));
}
