use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedReceiver;
use winit::window::Window;

use polygpt_common::NotificationQueue;
use polygpt_config::{PolyConfig, SelectorConfig};
use polygpt_layout::WindowSize;
use polygpt_sync::{CommandRouter, Outbound};

use super::types::NOTIFICATION_CAPACITY;
use super::webview_bridge::WryHost;

/// Top-level application state.
pub struct PolyApp {
    pub(super) config: PolyConfig,
    pub(super) selectors: Arc<SelectorConfig>,
    pub(super) devtools: bool,

    pub(super) window: Option<Arc<Window>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    /// Layout, controller handle and webviews; present once the window is up.
    pub(super) router: Option<CommandRouter<WryHost>>,
    /// Page requests and selector errors produced by the adapters.
    pub(super) outbound: Option<UnboundedReceiver<Outbound>>,
    pub(super) notifications: NotificationQueue,

    pub(super) last_poll: Instant,
}

impl PolyApp {
    pub fn new(config: PolyConfig, selectors: SelectorConfig, devtools: bool) -> Self {
        Self {
            config,
            selectors: Arc::new(selectors),
            devtools,
            window: None,
            tokio_runtime: None,
            router: None,
            outbound: None,
            notifications: NotificationQueue::new(NOTIFICATION_CAPACITY),
            last_poll: Instant::now(),
        }
    }

    /// Lifetime of a selector-error banner.
    pub(super) fn banner_ttl(&self) -> Duration {
        Duration::from_secs(self.config.sync.error_banner_secs)
    }

    /// Inner size of the window in logical pixels.
    pub(super) fn logical_size(&self) -> Option<WindowSize> {
        let window = self.window.as_ref()?;
        Some(logical_window_size(
            window.inner_size(),
            window.scale_factor(),
        ))
    }
}

pub(super) fn logical_window_size(
    physical: winit::dpi::PhysicalSize<u32>,
    scale_factor: f64,
) -> WindowSize {
    let logical = physical.to_logical::<f64>(scale_factor);
    WindowSize::new(logical.width.round() as u32, logical.height.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_is_scaled_down() {
        let size = logical_window_size(winit::dpi::PhysicalSize::new(3200, 1800), 2.0);
        assert_eq!(size, WindowSize::new(1600, 900));
    }

    #[test]
    fn fractional_scale_rounds() {
        let size = logical_window_size(winit::dpi::PhysicalSize::new(1001, 601), 1.5);
        assert_eq!(size, WindowSize::new(667, 401));
    }

    #[test]
    fn banner_ttl_follows_config() {
        let mut config = PolyConfig::default();
        config.sync.error_banner_secs = 9;
        let app = PolyApp::new(config, SelectorConfig::default(), false);
        assert_eq!(app.banner_ttl(), Duration::from_secs(9));
        assert!(app.logical_size().is_none());
    }
}
