use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn no_config_returns_defaults() {
    let result = load_config(None, true).unwrap();
    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
}

#[test]
fn no_config_ignores_explicit_path() {
    let result = load_config(Some(Path::new("/does/not/exist.toml")), true).unwrap();
    assert_eq!(result.config, Config::default());
}

#[test]
fn explicit_path_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[scanner]\nextensions = [\"flac\"]\n").unwrap();

    let result = load_config(Some(&path), false).unwrap();

    assert_eq!(result.config.scanner.extensions, vec!["flac"]);
    assert_eq!(result.source, Some(path));
}

#[test]
fn missing_explicit_path_is_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = load_config(Some(&path), false).unwrap_err();

    assert!(err.is_config_error());
    assert_eq!(exit_code_for(&err), crate::EXIT_CONFIG_ERROR);
}
