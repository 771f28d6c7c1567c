use std::collections::BTreeMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;
use crate::slot::ViewSlot;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Owns the webview of every slot, at most one each.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: BTreeMap<ViewSlot, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: BTreeMap::new(),
        }
    }

    /// Create the webview for `slot`, replacing any previous one.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        slot: ViewSlot,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(slot, window, bounds, config)?;
        if self.handles.insert(slot, handle).is_some() {
            debug!(%slot, "previous webview replaced");
        }
        Ok(())
    }

    pub fn get(&self, slot: ViewSlot) -> Option<&WebViewHandle> {
        self.handles.get(&slot)
    }

    /// Drop the view in `slot`. Returns whether one existed.
    pub fn destroy(&mut self, slot: ViewSlot) -> bool {
        let existed = self.handles.remove(&slot).is_some();
        if existed {
            debug!(%slot, "webview destroyed");
            self.manager.events().push(WebViewEvent::Closed { slot });
        }
        existed
    }

    /// Provider views in position order.
    pub fn providers(&self) -> impl Iterator<Item = &WebViewHandle> {
        self.handles
            .iter()
            .filter(|(slot, _)| slot.is_provider())
            .map(|(_, handle)| handle)
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy every webview, e.g. on shutdown.
    pub fn destroy_all(&mut self) {
        let slots: Vec<ViewSlot> = self.handles.keys().copied().collect();
        for slot in slots {
            self.destroy(slot);
        }
    }
}
