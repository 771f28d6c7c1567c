//! `ViewHost` over the wry webviews.

use std::sync::Arc;

use tracing::{debug, info};
use winit::window::Window;

use polygpt_common::{Position, ProviderKey, Rect, ViewError};
use polygpt_layout::{LayoutSnapshot, ViewBounds};
use polygpt_sync::ViewHost;
use polygpt_webview::{
    IpcKind, ViewSlot, WebViewConfig, WebViewHandle, WebViewRegistry, COMPOSE_URL,
};

use super::bounds::layout_rect_to_wry;

pub struct WryHost {
    window: Arc<Window>,
    registry: WebViewRegistry,
    /// Bounds last applied, used to place recreated views.
    bounds: ViewBounds,
    background: String,
    devtools: bool,
}

impl WryHost {
    pub fn new(
        window: Arc<Window>,
        registry: WebViewRegistry,
        background: String,
        devtools: bool,
    ) -> Self {
        Self {
            window,
            registry,
            bounds: ViewBounds::new(),
            background,
            devtools,
        }
    }

    pub fn registry(&self) -> &WebViewRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WebViewRegistry {
        &mut self.registry
    }

    /// Build the compose bar and one view per assigned provider.
    /// A view that fails to build is logged and left out.
    pub fn create_views(
        &mut self,
        snapshot: &LayoutSnapshot,
        assignments: &[(Position, ProviderKey)],
    ) {
        self.bounds = snapshot.bounds.clone();

        let compose = WebViewConfig::with_url(COMPOSE_URL)
            .background(&self.background)
            .devtools(self.devtools);
        if let Err(e) = self.create(ViewSlot::Compose, snapshot.control_bar, compose) {
            tracing::error!("compose view: {e}");
        }

        for &(position, provider) in assignments {
            if let Err(e) = self.create_provider(position, provider) {
                tracing::error!(%position, %provider, "{e}");
            }
        }
    }

    /// Post an IPC message to the page in `slot`.
    pub fn send(
        &self,
        slot: ViewSlot,
        kind: IpcKind,
        payload: &serde_json::Value,
    ) -> Result<(), ViewError> {
        self.handle(slot)?
            .send_ipc(kind, payload)
            .map_err(|e| ViewError::Script(e.to_string()))
    }

    fn create_provider(&mut self, position: Position, provider: ProviderKey) -> Result<(), ViewError> {
        let rect = self.bounds.get(&position).copied().unwrap_or_default();
        let config = WebViewConfig::for_provider(provider)
            .background(&self.background)
            .devtools(self.devtools);
        self.create(ViewSlot::Provider(position), rect, config)?;
        info!(%position, %provider, "provider view created");
        Ok(())
    }

    fn create(&mut self, slot: ViewSlot, rect: Rect, config: WebViewConfig) -> Result<(), ViewError> {
        self.registry
            .create(slot, self.window.as_ref(), layout_rect_to_wry(&rect), config)
            .map_err(|e| ViewError::Create(e.to_string()))
    }

    fn handle(&self, slot: ViewSlot) -> Result<&WebViewHandle, ViewError> {
        self.registry.get(slot).ok_or_else(|| match slot {
            ViewSlot::Provider(position) => ViewError::NoView(position),
            ViewSlot::Compose => ViewError::Webview("no compose view".into()),
        })
    }

    fn set_bounds(&self, slot: ViewSlot, rect: Rect) -> Result<(), ViewError> {
        self.handle(slot)?
            .set_bounds(layout_rect_to_wry(&rect))
            .map_err(|e| ViewError::Webview(e.to_string()))
    }
}

impl ViewHost for WryHost {
    fn apply_bounds(&mut self, snapshot: &LayoutSnapshot) -> Result<(), ViewError> {
        self.bounds = snapshot.bounds.clone();
        let mut result = Ok(());
        for slot in ViewSlot::ALL {
            let rect = match slot {
                ViewSlot::Compose => snapshot.control_bar,
                ViewSlot::Provider(position) => snapshot.bounds_of(position),
            };
            if let Err(e) = self.set_bounds(slot, rect) {
                result = Err(e);
            }
        }
        debug!(mode = ?snapshot.mode, "bounds applied");
        result
    }

    /// Rebuild the view so the provider's own user agent applies.
    fn load_provider(&mut self, position: Position, provider: ProviderKey) -> Result<(), ViewError> {
        self.registry.destroy(ViewSlot::Provider(position));
        self.create_provider(position, provider)
    }

    fn reload_all(&mut self) -> Result<(), ViewError> {
        for handle in self.registry.providers() {
            handle
                .reload()
                .map_err(|e| ViewError::Navigation(e.to_string()))?;
        }
        info!("all provider views reloaded");
        Ok(())
    }

    fn set_view_zoom(&mut self, position: Position, factor: f64) -> Result<(), ViewError> {
        self.handle(ViewSlot::Provider(position))?
            .zoom(factor)
            .map_err(|e| ViewError::Webview(e.to_string()))
    }
}
