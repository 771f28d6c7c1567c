//! PolyGPT configuration system.
//!
//! TOML app configuration with validation, plus the JSON selector set the
//! provider adapters resolve against. All config sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use polygpt_config::{load_config, PolyConfig};
//!
//! let config = load_config(None).unwrap_or_else(|_| PolyConfig::default());
//! println!("throttle: {} ms", config.sync.throttle_ms);
//! ```

pub mod schema;
pub mod selectors;
pub mod toml_loader;
pub mod validation;

pub use schema::{PolyConfig, CONFIG_SCHEMA_VERSION};
pub use selectors::{
    load_selectors, load_selectors_or_empty, ProviderSelectors, SelectorConfig, SelectorRole,
};

use polygpt_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path.
///
/// A missing file is created from the commented template. A file that
/// fails validation is a [`ConfigError::ValidationError`]; the caller
/// decides whether to fall back to [`PolyConfig::default`].
pub fn load_config(path: Option<&Path>) -> Result<PolyConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_or_create(path),
        None => toml_loader::load_default(),
    }
}
