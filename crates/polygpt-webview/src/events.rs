//! WebView event types.

use serde::{Deserialize, Serialize};

use crate::slot::ViewSlot;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the webviews, drained by the event loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        slot: ViewSlot,
        state: PageLoadState,
        url: String,
    },
    /// Raw JSON posted by the page through `window.ipc.postMessage`.
    IpcMessage { slot: ViewSlot, body: String },
    NavigationRequested { slot: ViewSlot, url: String },
    Closed { slot: ViewSlot },
}

impl WebViewEvent {
    pub fn slot(&self) -> ViewSlot {
        match self {
            Self::PageLoad { slot, .. }
            | Self::IpcMessage { slot, .. }
            | Self::NavigationRequested { slot, .. }
            | Self::Closed { slot } => *slot,
        }
    }
}
