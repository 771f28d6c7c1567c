//! Event-loop polling: webview events and adapter output.

use std::time::Instant;

use polygpt_webview::{IpcKind, PageLoadState, ViewSlot, WebViewEvent};
use tracing::debug;
use winit::event_loop::ActiveEventLoop;

use super::core::PolyApp;
use super::types::POLL_INTERVAL;
use super::webview_bridge::notify_payload;

impl PolyApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_outbound();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    fn poll_webview_events(&mut self) {
        let events = match self.router.as_ref() {
            Some(router) => router.host().registry().drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::PageLoad {
                    slot,
                    state: PageLoadState::Finished,
                    url,
                } => {
                    debug!(%slot, %url, "page loaded");
                    self.page_finished(slot);
                }
                WebViewEvent::IpcMessage { slot, body } => {
                    self.handle_ipc_message(slot, &body);
                }
                other => {
                    debug!(slot = %other.slot(), ?other, "webview event");
                }
            }
        }
    }

    fn page_finished(&mut self, slot: ViewSlot) {
        let Some(router) = self.router.as_mut() else {
            return;
        };
        match slot {
            ViewSlot::Provider(position) => router.page_loaded(position),
            ViewSlot::Compose => {
                let payload = serde_json::json!({
                    "command": "zoom",
                    "value": router.layout().zoom(),
                });
                self.send_to(slot, IpcKind::CommandResult, &payload);
                self.replay_notifications();
            }
        }
    }

    /// A reloaded compose page gets the banners that are still live.
    fn replay_notifications(&mut self) {
        let payloads: Vec<_> = self
            .notifications
            .visible()
            .into_iter()
            .map(notify_payload)
            .collect();
        for payload in payloads {
            self.send_to(ViewSlot::Compose, IpcKind::Notify, &payload);
        }
    }
}
