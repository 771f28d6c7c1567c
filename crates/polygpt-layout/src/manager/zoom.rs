//! Process-wide page zoom.

/// Zoom factor bounded by `[min, max]`, moved in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel {
    factor: f64,
    step: f64,
    min: f64,
    max: f64,
}

impl ZoomLevel {
    pub fn new(default: f64, step: f64, min: f64, max: f64) -> Self {
        Self {
            factor: default.clamp(min, max),
            step,
            min,
            max,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set(self.factor + self.step)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set(self.factor - self.step)
    }

    fn set(&mut self, factor: f64) -> f64 {
        // Round to hundredths so repeated steps do not drift.
        let rounded = (factor * 100.0).round() / 100.0;
        self.factor = rounded.clamp(self.min, self.max);
        self.factor
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::new(1.0, 0.1, 0.5, 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_exact() {
        let mut zoom = ZoomLevel::default();
        for _ in 0..3 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.factor(), 1.3);
        for _ in 0..3 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.factor(), 1.0);
    }

    #[test]
    fn clamps_at_bounds() {
        let mut zoom = ZoomLevel::default();
        for _ in 0..50 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.factor(), 2.0);
        for _ in 0..50 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.factor(), 0.5);
    }

    #[test]
    fn default_outside_bounds_is_clamped() {
        assert_eq!(ZoomLevel::new(9.0, 0.1, 0.5, 2.0).factor(), 2.0);
    }
}
