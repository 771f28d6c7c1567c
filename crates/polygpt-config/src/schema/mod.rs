//! Configuration schema types for PolyGPT.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod system;
mod window;

pub use layout::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for PolyGPT.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PolyConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub zoom: ZoomConfig,
    pub sync: SyncConfig,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use polygpt_common::{Position, ProviderKey};

    #[test]
    fn empty_toml_gives_all_defaults() {
        let config: PolyConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 1600);
        assert_eq!(config.layout.control_bar_height, 100);
        assert_eq!(config.sync.throttle_ms, 50);
        assert_eq!(config.providers.top_left, ProviderKey::Claude);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_deserializes_with_defaults() {
        let toml_str = r#"
[layout]
gap = 2

[zoom]
step = 0.25

[providers]
top_left = "gemini"
"#;
        let config: PolyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.gap, 2);
        assert!((config.zoom.step - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.providers.at(Position::TopLeft), ProviderKey::Gemini);
        // Defaults preserved
        assert!((config.layout.supersize_fraction - 0.8).abs() < f64::EPSILON);
        assert!((config.zoom.max - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.providers.at(Position::BottomRight), ProviderKey::Gemini);
        assert_eq!(config.sync.rescan_attempts, 10);
    }

    #[test]
    fn toml_serialization_roundtrip() {
        let config = PolyConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: PolyConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.window.title, config.window.title);
        assert_eq!(parsed.providers.assignment(), config.providers.assignment());
    }
}
