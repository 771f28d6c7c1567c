use std::time::Duration;

/// How often webview events and page requests are drained (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Banners kept at once.
pub(super) const NOTIFICATION_CAPACITY: usize = 8;

/// Grace period for adapter tasks on shutdown.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
