//! Configuration loader tests
//!
//! Each environment test uses its own prefix so tests can run in parallel.
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations. The
//! variables touched are unique to each test.

use bikes_infrastructure::config::{AppConfig, ConfigLoader};
use bikes_infrastructure::config::loader::validate_app_config;
use std::env;
use std::io::Write;

fn set_env(key: &str, value: &str) {
    // SAFETY: variable names are unique per test
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: variable names are unique per test
    unsafe {
        env::remove_var(key);
    }
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_select_bundled_store() {
    let config = AppConfig::default();
    assert_eq!(config.records.backend, "bundled");
    assert!(config.records.data_dir.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(validate_app_config(&config).is_ok());
}

#[test]
fn test_toml_file_overrides_defaults() {
    let data_dir = tempfile::tempdir().unwrap();
    let file = write_config(&format!(
        "[records]\nbackend = \"filesystem\"\ndata_dir = \"{}\"\n\n[logging]\nlevel = \"debug\"\n",
        data_dir.path().display()
    ));

    let config = ConfigLoader::new()
        .with_env_prefix("BIKES_TEST_TOML")
        .with_config_path(file.path())
        .load()
        .expect("config should load");

    assert_eq!(config.records.backend, "filesystem");
    assert_eq!(config.records.data_dir.as_deref(), Some(data_dir.path()));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let config = ConfigLoader::new()
        .with_env_prefix("BIKES_TEST_MISSING")
        .with_config_path("/nonexistent/bikes.toml")
        .load()
        .expect("defaults should load");
    assert_eq!(config.records.backend, "bundled");
}

#[test]
fn test_env_overrides_file() {
    let file = write_config("[logging]\nlevel = \"debug\"\n");
    set_env("BIKES_TEST_ENV__LOGGING__LEVEL", "warn");

    let config = ConfigLoader::new()
        .with_env_prefix("BIKES_TEST_ENV")
        .with_config_path(file.path())
        .load()
        .expect("config should load");

    remove_env("BIKES_TEST_ENV__LOGGING__LEVEL");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_filesystem_backend_requires_data_dir() {
    let file = write_config("[records]\nbackend = \"filesystem\"\n");
    let result = ConfigLoader::new()
        .with_env_prefix("BIKES_TEST_NODIR")
        .with_config_path(file.path())
        .load();

    let err = result.expect_err("filesystem without data_dir must fail");
    assert!(err.to_string().contains("data_dir"), "{err}");
}

#[test]
fn test_invalid_log_level_rejected() {
    let file = write_config("[logging]\nlevel = \"loud\"\n");
    let result = ConfigLoader::new()
        .with_env_prefix("BIKES_TEST_LEVEL")
        .with_config_path(file.path())
        .load();
    assert!(result.is_err());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bikes.toml");
    let mut config = AppConfig::default();
    config.logging.json_format = true;

    let loader = ConfigLoader::new().with_env_prefix("BIKES_TEST_SAVE");
    loader.save_to_file(&config, &path).expect("save config");

    let reloaded = loader
        .with_config_path(&path)
        .load()
        .expect("reload config");
    assert!(reloaded.logging.json_format);
    assert_eq!(reloaded.records.backend, "bundled");
}
