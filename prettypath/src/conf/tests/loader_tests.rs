use crate::conf::error::ConfigError;
use crate::conf::loader::load_config;

use std::fs;
use tempfile::tempdir;

#[test]
fn empty_file_yields_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("rewrite.toml");
    fs::write(&path, "").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.index_file, "index.html");
    assert_eq!(cfg.page_extension, ".html");
}

#[test]
fn overrides_are_read_from_the_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("rewrite.toml");
    fs::write(
        &path,
        "index_file = \"default.htm\"\npage_extension = \".htm\"\n",
    )
    .unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.index_file, "default.htm");
    assert_eq!(cfg.page_extension, ".htm");
}

#[test]
fn missing_file_is_a_read_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn unknown_keys_are_a_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("rewrite.toml");
    fs::write(&path, "index_fil = \"index.html\"\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn invalid_values_fail_validation() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("rewrite.toml");
    fs::write(&path, "page_extension = \"html\"\n").unwrap();

    // Act
    let err = load_config(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InvalidPageExtension { .. }));
}
