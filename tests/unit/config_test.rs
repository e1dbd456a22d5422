//! Tests for configuration management

use std::fs;

use tempfile::TempDir;
use vincheck::config::{Config, ConfigError, ExtractConfig, OutputConfig};
use vincheck::output::OutputMode;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.output.format, OutputMode::Human);
    assert!(!config.extract.all);
}

#[test]
fn test_config_partial_sections() {
    let config = Config::parse("[extract]\nall = true\n").unwrap();
    assert_eq!(config.output.format, OutputMode::Human);
    assert!(config.extract.all);
}

#[test]
fn test_config_path_under_home() {
    let path = Config::config_path();
    assert!(path.ends_with(".vincheck/config.toml"));
}

// =============================================================================
// FILE TESTS
// =============================================================================

#[test]
fn test_config_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let config = Config {
        output: OutputConfig {
            format: OutputMode::Json,
        },
        extract: ExtractConfig { all: true },
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_config_load_invalid_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[output]\nformat = 42\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("failed to parse config"));
}
