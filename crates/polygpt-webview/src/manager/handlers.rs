//! `wry` callbacks: IPC intake, page-load reporting, navigation policy.

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::IpcMessage;
use crate::slot::ViewSlot;

use super::{EventSink, WebViewManager};

/// Origins of the bundled compose page. WebView2 rewrites
/// `polygpt://localhost/` to `http://polygpt.localhost/`.
const BUNDLED_PREFIXES: &[&str] = &["polygpt://", "http://polygpt.localhost"];

/// Where a view may navigate.
///
/// The compose view never leaves the bundled page. Provider views stay on
/// `https://`, which covers the providers and their sign-in redirects.
pub fn is_navigation_allowed(slot: ViewSlot, url: &str) -> bool {
    if url == "about:blank" {
        return true;
    }
    match slot {
        ViewSlot::Compose => BUNDLED_PREFIXES.iter().any(|p| url.starts_with(p)),
        ViewSlot::Provider(_) => url.starts_with("https://"),
    }
}

impl WebViewManager {
    /// Buffers envelopes a page may legitimately post; drops the rest.
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        slot: ViewSlot,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();
            match IpcMessage::from_json(body) {
                Some(msg) if msg.kind.is_inbound() => {
                    debug!(%slot, kind = msg.kind.as_str(), "IPC message");
                    events.push(WebViewEvent::IpcMessage {
                        slot,
                        body: body.clone(),
                    });
                }
                Some(msg) => warn!(%slot, kind = msg.kind.as_str(), "IPC kind not accepted from pages"),
                None => warn!(%slot, len = body.len(), "IPC message rejected: not an envelope"),
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        slot: ViewSlot,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%slot, ?state, %url, "page load");
            events.push(WebViewEvent::PageLoad { slot, state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        slot: ViewSlot,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(slot, &url) {
                warn!(%slot, %url, "navigation blocked");
                return false;
            }
            events.push(WebViewEvent::NavigationRequested { slot, url });
            true
        })
    }
}
