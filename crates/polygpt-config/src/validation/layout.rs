//! Window, layout and zoom validation.

use crate::schema::PolyConfig;

use super::helpers::Section;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &PolyConfig) {
    let window = &config.window;
    Section::new(errors, "window")
        .range("width", window.width, 400..=10_000)
        .range("height", window.height, 300..=10_000);
}

/// The control bar, the separator and the dominant share of a supersized view.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &PolyConfig) {
    let layout = &config.layout;
    Section::new(errors, "layout")
        .range("control_bar_height", layout.control_bar_height, 40..=400)
        .range("gap", layout.gap, 0..=20)
        .range("supersize_fraction", layout.supersize_fraction, 0.5..=0.95);
}

pub(crate) fn validate_zoom(errors: &mut Vec<String>, config: &PolyConfig) {
    let zoom = &config.zoom;
    Section::new(errors, "zoom")
        .range("step", zoom.step, 0.05..=0.5)
        .range("min", zoom.min, 0.25..=1.0)
        .range("max", zoom.max, 1.0..=5.0)
        .below(("min", zoom.min), ("max", zoom.max))
        .range("default", zoom.default, zoom.min..=zoom.max);
}
