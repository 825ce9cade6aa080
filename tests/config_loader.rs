use std::fs;

use confusion::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn empty_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.logging.filter, "warn");
    assert!(config.seed.path.is_none());
}

#[test]
fn reads_seed_path_and_filter() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.toml");
    fs::write(&seed, "").unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            "[seed]\npath = {:?}\n\n[logging]\nfilter = \"confusion=debug\"\n",
            seed.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.seed.path.as_deref(), Some(seed.as_path()));
    assert_eq!(config.logging.filter, "confusion=debug");
}

#[test]
fn missing_seed_file_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[seed]\npath = \"/definitely/not/here.toml\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn invalid_log_filter_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging]\nfilter = \"confusion=shouting\"\n").unwrap();

    assert!(matches!(
        Config::load_from(&path).unwrap_err(),
        ConfigError::ValidationError { .. }
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[seed\npath = 1").unwrap();

    assert!(matches!(
        Config::load_from(&path).unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}

#[test]
fn relative_seed_path_is_resolved_against_config_dir() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("seed.toml");
    fs::write(&seed, "").unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[seed]\npath = \"seed.toml\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.seed.path.as_deref(), Some(seed.as_path()));
}
