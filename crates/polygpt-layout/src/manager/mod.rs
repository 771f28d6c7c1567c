//! The LayoutManager coordinates layout mode, provider assignment and zoom.

mod operations;
mod types;
mod zoom;

pub use types::*;
pub use zoom::ZoomLevel;
