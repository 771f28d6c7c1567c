pub mod commands;
pub mod layout;
pub mod manager;

pub use commands::{LayoutCommand, LayoutOutcome};
pub use layout::{LayoutEngine, LayoutMode, LayoutSnapshot, ViewBounds, WindowSize};
pub use manager::{LayoutManager, ZoomLevel};
