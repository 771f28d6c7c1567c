//! Layout engine types and configuration.

use std::collections::BTreeMap;

use polygpt_common::{Position, Rect};
use serde::{Deserialize, Serialize};

/// Pixel bounds for every position.
pub type ViewBounds = BTreeMap<Position, Rect>;

/// Arrangement of the four provider views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "focus", rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Even 2x2 tiling.
    #[default]
    Grid,
    /// One dominant view with the other three stacked as thumbnails.
    Supersized(Position),
}

impl LayoutMode {
    /// The dominant position, if any.
    pub fn focused(&self) -> Option<Position> {
        match self {
            Self::Grid => None,
            Self::Supersized(p) => Some(*p),
        }
    }

    /// Positions that receive broadcasts in this mode.
    pub fn scope(&self) -> Vec<Position> {
        match self {
            Self::Grid => Position::ALL.to_vec(),
            Self::Supersized(p) => vec![*p],
        }
    }
}

/// Inner size of the main window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Configuration for the layout engine that computes view positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Separator gap in pixels between views.
    pub gap: u32,
    /// Height of the compose strip reserved at the bottom of the window.
    pub control_bar_height: u32,
    /// Width share of the dominant view in supersized mode.
    pub supersize_fraction: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 1,
            control_bar_height: 100,
            supersize_fraction: 0.8,
        }
    }
}

/// Complete, immutable result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub mode: LayoutMode,
    pub window: WindowSize,
    pub bounds: ViewBounds,
    pub control_bar: Rect,
}

impl LayoutSnapshot {
    pub fn bounds_of(&self, position: Position) -> Rect {
        self.bounds.get(&position).copied().unwrap_or_default()
    }

    pub fn focused(&self) -> Option<Position> {
        self.mode.focused()
    }
}
