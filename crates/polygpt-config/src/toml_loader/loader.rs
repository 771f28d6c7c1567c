//! Reading `config.toml`.

use std::io::ErrorKind;
use std::path::Path;

use polygpt_common::ConfigError;
use tracing::info;

use crate::schema::PolyConfig;
use crate::validation;

use super::paths::{create_default_config, default_config_path};

/// Load and validate the TOML file at `path`.
///
/// Absent keys take their defaults. A file that parses but fails
/// validation is a [`ConfigError::ValidationError`].
pub fn load_from_path(path: &Path) -> Result<PolyConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config: PolyConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    validation::validate(&config)?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `path`, writing the commented template there first if it is missing.
pub fn load_or_create(path: &Path) -> Result<PolyConfig, ConfigError> {
    if !path.exists() {
        create_default_config(path)?;
        return Ok(PolyConfig::default());
    }
    load_from_path(path)
}

/// [`load_or_create`] on the platform path
/// (`~/.config/polygpt/config.toml` on Linux,
/// `~/Library/Application Support/polygpt/config.toml` on macOS).
pub fn load_default() -> Result<PolyConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
