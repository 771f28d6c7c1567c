//! Graceful shutdown: close webviews, stop the adapter tasks.

use super::core::PolyApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl PolyApp {
    /// Tear everything down. Safe to call more than once.
    ///
    /// Webviews go first so no page posts into a dead controller; dropping
    /// the router drops the last controller handle, which ends its task.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(router) = self.router.as_mut() {
            router.host_mut().registry_mut().destroy_all();
        }
        self.router = None;
        self.outbound = None;
        self.notifications.clear();

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }

        self.window = None;
        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use polygpt_common::{Notification, ProviderKey};
    use polygpt_config::{PolyConfig, SelectorConfig};

    use crate::app_state::core::PolyApp;

    fn app() -> PolyApp {
        PolyApp::new(PolyConfig::default(), SelectorConfig::default(), false)
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();
        app.shutdown();

        assert!(app.router.is_none());
        assert!(app.outbound.is_none());
        assert!(app.tokio_runtime.is_none());
        assert!(app.window.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();
        app.shutdown();
        app.shutdown();
        assert!(app.tokio_runtime.is_none());
    }

    #[test]
    fn shutdown_stops_a_live_runtime() {
        let mut app = app();
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        rt.spawn(async { tokio::time::sleep(Duration::from_secs(60)).await });
        app.tokio_runtime = Some(rt);
        app.notifications.push(Notification::selector_error(
            ProviderKey::Claude,
            "Input element not found",
            Duration::from_secs(5),
        ));

        app.shutdown();

        assert!(app.tokio_runtime.is_none());
        assert!(app.notifications.is_empty());
    }
}
