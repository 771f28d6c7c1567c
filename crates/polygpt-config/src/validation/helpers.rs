//! Per-section range checks shared by the domain validators.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Collects violations for one `[section]` of the config.
pub(crate) struct Section<'a> {
    name: &'static str,
    errors: &'a mut Vec<String>,
}

impl<'a> Section<'a> {
    pub(crate) fn new(errors: &'a mut Vec<String>, name: &'static str) -> Self {
        Self { name, errors }
    }

    /// `key` must lie in `bounds`. NaN never does.
    pub(crate) fn range<T>(&mut self, key: &str, value: T, bounds: RangeInclusive<T>) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if !bounds.contains(&value) {
            self.errors.push(format!(
                "{}.{key} = {value} is out of range [{}, {}]",
                self.name,
                bounds.start(),
                bounds.end()
            ));
        }
        self
    }

    /// `low` must stay strictly below `high`.
    pub(crate) fn below(&mut self, low: (&str, f64), high: (&str, f64)) -> &mut Self {
        if low.1 >= high.1 {
            self.errors.push(format!(
                "{name}.{} ({}) must be below {name}.{} ({})",
                low.0,
                low.1,
                high.0,
                high.1,
                name = self.name
            ));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_reports_section_and_key() {
        let mut errors = Vec::new();
        Section::new(&mut errors, "sync")
            .range("throttle_ms", 5u64, 10..=1000)
            .range("rescan_attempts", 3u32, 0..=100);
        assert_eq!(errors, vec!["sync.throttle_ms = 5 is out of range [10, 1000]"]);
    }

    #[test]
    fn below_rejects_equal_bounds() {
        let mut errors = Vec::new();
        Section::new(&mut errors, "zoom").below(("min", 1.0), ("max", 1.0));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("zoom.min"));
    }
}
