//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use polygpt_common::{ConfigError, Position, ProviderKey};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_polygpt_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
gap = 3

[providers]
bottom_left = "perplexity"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.gap, 3);
    assert_eq!(config.providers.at(Position::BottomLeft), ProviderKey::Perplexity);
    // Defaults preserved
    assert_eq!(config.layout.control_bar_height, 100);
    assert_eq!(config.providers.at(Position::TopLeft), ProviderKey::Claude);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
supersize_fraction = 0.1
gap = 2
"#,
    )
    .unwrap();

    let result = load_from_path(&path);
    assert!(
        matches!(&result, Err(ConfigError::ValidationError(msg)) if msg.contains("supersize_fraction")),
        "{result:?}"
    );
}

#[test]
fn load_or_create_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("polygpt").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.sync.throttle_ms, 50);

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.window.title, "PolyGPT");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::PolyConfig;

    let content = default_config_toml();
    let config: PolyConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config dir.
    if let Ok(path) = default_config_path() {
        assert!(path.to_string_lossy().contains("polygpt"));
        assert!(path.ends_with(CONFIG_FILE));
    }
}
