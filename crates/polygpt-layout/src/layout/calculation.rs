//! Layout calculation: mode + window size to per-position rects.
//!
//! Every pass starts from scratch; nothing is patched incrementally.

use polygpt_common::{Position, Rect};

use super::{LayoutEngine, LayoutMode, LayoutSnapshot, ViewBounds, WindowSize};

impl LayoutEngine {
    /// Compute the full snapshot for `mode` in a window of `window` size.
    pub fn compute(&self, mode: LayoutMode, window: WindowSize) -> LayoutSnapshot {
        let area = self.chat_area(window);
        let bounds = match mode {
            LayoutMode::Grid => self.grid(area),
            LayoutMode::Supersized(focus) => self.supersized(area, focus),
        };
        LayoutSnapshot {
            mode,
            window,
            bounds,
            control_bar: self.control_bar(window),
        }
    }

    /// The region above the compose strip.
    pub fn chat_area(&self, window: WindowSize) -> Rect {
        let width = window.width as f64;
        let height = (window.height as f64 - self.control_bar_height as f64).max(0.0);
        Rect::new(0.0, 0.0, width, height)
    }

    /// The compose strip, clamped to the window.
    pub fn control_bar(&self, window: WindowSize) -> Rect {
        let height = (self.control_bar_height as f64).min(window.height as f64);
        let y = (window.height as f64 - height).max(0.0);
        Rect::new(0.0, y, window.width as f64, height)
    }

    fn grid(&self, area: Rect) -> ViewBounds {
        let gap = self.gap as f64;
        let (lead_gap, trail_gap) = ((gap / 2.0).floor(), (gap / 2.0).ceil());

        let half_w = (area.width / 2.0).floor();
        let half_h = (area.height / 2.0).floor();

        let left_w = (half_w - lead_gap).max(0.0);
        let right_x = area.x + half_w + trail_gap;
        let right_w = (area.width - half_w - trail_gap).max(0.0);

        let top_h = (half_h - lead_gap).max(0.0);
        let bottom_y = area.y + half_h + trail_gap;
        let bottom_h = (area.height - half_h - trail_gap).max(0.0);

        Position::ALL
            .iter()
            .map(|&p| {
                let (x, w) = if p.column() == 0 {
                    (area.x, left_w)
                } else {
                    (right_x, right_w)
                };
                let (y, h) = if p.row() == 0 {
                    (area.y, top_h)
                } else {
                    (bottom_y, bottom_h)
                };
                (p, Rect::new(x, y, w, h))
            })
            .collect()
    }

    fn supersized(&self, area: Rect, focus: Position) -> ViewBounds {
        let gap = self.gap as f64;
        let fraction = self.supersize_fraction.clamp(0.0, 1.0);

        let main_w = (area.width * fraction).floor().min(area.width);
        let thumb_x = area.x + main_w + gap;
        let thumb_w = (area.width - main_w - gap).max(0.0);

        let mut bounds = ViewBounds::new();
        bounds.insert(focus, Rect::new(area.x, area.y, main_w, area.height));

        let thumbs: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|&p| p != focus)
            .collect();
        let n = thumbs.len() as f64;
        let available = (area.height - gap * (n - 1.0)).max(0.0);
        let each = (available / n).floor();

        for (i, p) in thumbs.iter().enumerate() {
            let last = i + 1 == thumbs.len();
            let y = area.y + i as f64 * (each + gap);
            // Last thumbnail absorbs the rounding slack.
            let h = if last {
                (available - each * (n - 1.0)).max(0.0)
            } else {
                each
            };
            bounds.insert(*p, Rect::new(thumb_x, y, thumb_w, h));
        }
        bounds
    }
}
