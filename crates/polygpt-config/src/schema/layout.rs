//! View layout and zoom configuration types.

use serde::{Deserialize, Serialize};

/// Geometry of the chat area.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the compose strip at the bottom of the window
    /// (valid range: 40-400).
    pub control_bar_height: u32,
    /// Separator gap between views in pixels (valid range: 0-20).
    pub gap: u32,
    /// Share of the chat-area width given to a supersized view
    /// (valid range: 0.5-0.95).
    pub supersize_fraction: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            control_bar_height: 100,
            gap: 1,
            supersize_fraction: 0.8,
        }
    }
}

/// Page zoom applied uniformly to every provider view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Factor applied at startup (valid range: min-max).
    pub default: f64,
    /// Increment per zoom in/out (valid range: 0.05-0.5).
    pub step: f64,
    /// Lower bound (valid range: 0.25-1.0).
    pub min: f64,
    /// Upper bound (valid range: 1.0-5.0).
    pub max: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            default: 1.0,
            step: 0.1,
            min: 0.5,
            max: 2.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
