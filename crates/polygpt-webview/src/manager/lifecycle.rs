use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::ipc::{IPC_INIT_SCRIPT, PAGE_AGENT_SCRIPT};
use crate::slot::ViewSlot;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Scheme of the bundled content.
pub const PROTOCOL: &str = "polygpt";

impl WebViewManager {
    /// Create a webview for `slot` as a child of `window`, placed at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        slot: ViewSlot,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(slot == ViewSlot::Compose)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if config.page_agent {
            builder = builder.with_initialization_script(PAGE_AGENT_SCRIPT);
        }
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }
        if let Some(rgba) = config.background {
            builder = builder.with_background_color(rgba);
        }

        builder = Self::attach_ipc_handler(builder, self.events().clone(), slot);
        builder = Self::attach_page_load_handler(builder, self.events().clone(), slot);
        builder = Self::attach_navigation_handler(builder, self.events().clone(), slot);
        builder = self.attach_custom_protocol(builder);

        let initial_url = match (&config.url, &config.html) {
            (Some(url), _) => {
                builder = builder.with_url(url);
                url.clone()
            }
            (None, Some(html)) => {
                builder = builder.with_html(html);
                "about:blank".to_string()
            }
            (None, None) => {
                builder = builder.with_html("<html><body></body></html>");
                "about:blank".to_string()
            }
        };

        let webview = builder.build_as_child(window)?;
        debug!(%slot, url = %initial_url, "webview created");

        Ok(WebViewHandle { webview, slot })
    }

    /// Set the content served under `polygpt://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(PROTOCOL.to_string(), move |_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);
                match cp.resolve(path) {
                    Some((mime, data)) => respond(200, &mime, data.into_owned()),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        respond(404, "text/plain", b"Not Found".to_vec())
                    }
                }
            });
        }
        builder
    }
}

/// Strip the scheme and host from a `polygpt://` request URI.
fn request_path(uri: &str) -> &str {
    let path = uri
        .strip_prefix("polygpt://localhost/")
        .or_else(|| uri.strip_prefix("http://polygpt.localhost/"))
        .or_else(|| uri.strip_prefix("polygpt://"))
        .unwrap_or("");
    path.split(['?', '#']).next().unwrap_or("")
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "polygpt://localhost")
        .body(Cow::Owned(body))
        .unwrap_or_else(|e| {
            warn!("custom protocol: bad response: {e}");
            Response::new(Cow::Borrowed(&[][..]))
        })
}
