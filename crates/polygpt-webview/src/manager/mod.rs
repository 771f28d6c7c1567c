//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry` child webviews for each [`ViewSlot`](crate::ViewSlot) and
//! collects their events; `WebViewRegistry` owns the resulting handles.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::{parse_hex_color, WebViewConfig};

/// Shared buffer the `wry` callbacks push into.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventSink(Arc<Mutex<Vec<WebViewEvent>>>);

impl EventSink {
    pub(crate) fn push(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.0.lock() {
            events.push(event);
        }
    }

    fn drain(&self) -> Vec<WebViewEvent> {
        self.0
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}

/// Builds webviews and buffers the events they raise.
#[derive(Default)]
pub struct WebViewManager {
    /// The main event loop drains this every tick.
    events: EventSink,
    /// Content served under `polygpt://`.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.events.drain()
    }

    pub(crate) fn events(&self) -> &EventSink {
        &self.events
    }
}
