//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    Windowed,
    #[default]
    Maximized,
}

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 400-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 300-10000).
    pub height: u32,
    pub startup_mode: StartupMode,
    /// Colour painted behind the views while pages load.
    pub background_color: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "PolyGPT".to_string(),
            width: 1600,
            height: 900,
            startup_mode: StartupMode::Maximized,
            background_color: "#1e1e1e".to_string(),
        }
    }
}
