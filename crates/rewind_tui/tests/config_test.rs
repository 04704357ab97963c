//! Tests for loading the frontend configuration.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use rewind_tui::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("Load failed");

    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
    assert!(*config.show_move_list());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rewind.toml");
    fs::write(&path, "log_filter = \"warn\"\nshow_hints = false\n").expect("Write failed");

    let config = TuiConfig::from_file(&path).expect("Load failed");

    assert_eq!(config.log_filter(), "warn");
    assert!(!*config.show_hints());
    assert!(*config.show_move_list());
    assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
}

#[test]
fn test_invalid_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("rewind.toml");
    fs::write(&path, "show_hints = \"sometimes\"").expect("Write failed");

    let err = TuiConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unreadable_path_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = TuiConfig::from_file(dir.path());
    assert!(result.is_err());
}
