//! Where PolyGPT keeps its files.

use std::path::{Path, PathBuf};

use polygpt_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "polygpt";

pub const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/polygpt`, e.g. `~/.config/polygpt`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Write the commented template to `path`, creating missing directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_err)?;
    info!(path = %path.display(), "wrote config template");
    Ok(())
}
