//! One live webview.

use tracing::trace;
use wry::WebView;

use crate::ipc::{js_dispatch_message, IpcKind};
use crate::slot::ViewSlot;

pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) slot: ViewSlot,
}

impl WebViewHandle {
    pub fn slot(&self) -> ViewSlot {
        self.slot
    }

    /// Reload the current document, keeping cookies and storage.
    pub fn reload(&self) -> Result<(), wry::Error> {
        self.run("window.location.reload()")
    }

    /// Hand `payload` to the page's listener for `kind`.
    pub fn send_ipc(&self, kind: IpcKind, payload: &serde_json::Value) -> Result<(), wry::Error> {
        self.run(&js_dispatch_message(kind, payload))
    }

    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Page zoom; `1.0` is 100%.
    pub fn zoom(&self, factor: f64) -> Result<(), wry::Error> {
        self.webview.zoom(factor)
    }

    fn run(&self, js: &str) -> Result<(), wry::Error> {
        trace!(slot = %self.slot, len = js.len(), "evaluate script");
        self.webview.evaluate_script(js)
    }
}
