//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod sync;


use crate::schema::PolyConfig;
use polygpt_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PolyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_window(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    layout::validate_zoom(&mut errors, config);
    sync::validate_sync(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
