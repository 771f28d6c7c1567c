use polygpt_common::{Position, ProviderKey};

use crate::layout::WindowSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutCommand {
    ToggleSupersize(Position),
    ChangeProvider(Position, ProviderKey),
    Resize(WindowSize),
    ZoomIn,
    ZoomOut,
}

/// What a layout command changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutOutcome {
    /// Mode transition; carries the resulting focus.
    Focus(Option<Position>),
    /// Provider swap; `false` when the position already showed that provider.
    Reassigned(bool),
    Resized,
    Zoom(f64),
}
