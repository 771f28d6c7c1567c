//! Sync timing validation.

use crate::schema::PolyConfig;

use super::helpers::Section;

pub(crate) fn validate_sync(errors: &mut Vec<String>, config: &PolyConfig) {
    let sync = &config.sync;
    Section::new(errors, "sync")
        .range("throttle_ms", sync.throttle_ms, 10..=1000)
        .range("rescan_interval_ms", sync.rescan_interval_ms, 100..=10_000)
        .range("rescan_attempts", sync.rescan_attempts, 0..=100)
        .range("error_banner_secs", sync.error_banner_secs, 1..=60);
}
