//! Delivery of adapter output to the pages.

use polygpt_common::Notification;
use polygpt_sync::Outbound;
use polygpt_webview::{IpcKind, ViewSlot};
use serde_json::Value;
use tracing::{error, warn};

use crate::app_state::core::PolyApp;

/// Payload of a `notify` message for the compose banner. The TTL is
/// what is left of it, so replayed banners hide on time.
pub(in crate::app_state) fn notify_payload(notification: &Notification) -> Value {
    serde_json::json!({
        "level": notification.level,
        "text": notification.banner_text(),
        "ttl_ms": notification.remaining().as_millis() as u64,
    })
}

impl PolyApp {
    /// Forward everything the adapters produced since the last poll.
    pub(in crate::app_state) fn poll_outbound(&mut self) {
        let Some(rx) = self.outbound.as_mut() else {
            return;
        };
        let mut pending = Vec::new();
        while let Ok(item) = rx.try_recv() {
            pending.push(item);
        }

        for item in pending {
            match item {
                Outbound::Page { position, request } => {
                    let payload = match serde_json::to_value(&request) {
                        Ok(payload) => payload,
                        Err(e) => {
                            error!(%position, "failed to encode page request: {e}");
                            continue;
                        }
                    };
                    self.send_to(ViewSlot::Provider(position), IpcKind::PageRequest, &payload);
                }
                Outbound::SelectorError {
                    position,
                    provider,
                    message,
                } => {
                    warn!(%position, %provider, "selector error: {message}");
                    let notification =
                        Notification::selector_error(provider, message, self.banner_ttl());
                    let payload = notify_payload(&notification);
                    self.notifications.push(notification);
                    self.send_to(ViewSlot::Compose, IpcKind::Notify, &payload);
                }
            }
        }
    }

    pub(in crate::app_state) fn send_to(&self, slot: ViewSlot, kind: IpcKind, payload: &Value) {
        let Some(router) = self.router.as_ref() else {
            return;
        };
        if let Err(e) = router.host().send(slot, kind, payload) {
            warn!(%slot, kind = kind.as_str(), "{e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use polygpt_common::ProviderKey;

    use super::*;

    #[test]
    fn notify_payload_carries_banner_text() {
        let n = Notification::selector_error(
            ProviderKey::Gemini,
            "Input element not found",
            Duration::from_secs(5),
        );
        let payload = notify_payload(&n);
        assert_eq!(payload["level"], "error");
        assert_eq!(payload["text"], "[gemini] Input element not found");
        let ttl_ms = payload["ttl_ms"].as_u64().unwrap_or_default();
        assert!(ttl_ms > 4000 && ttl_ms <= 5000, "{ttl_ms}");
    }

    #[test]
    fn poll_without_runtime_is_a_no_op() {
        let mut app = PolyApp::new(
            polygpt_config::PolyConfig::default(),
            polygpt_config::SelectorConfig::default(),
            false,
        );
        app.poll_outbound();
        assert!(app.notifications.is_empty());
    }
}
