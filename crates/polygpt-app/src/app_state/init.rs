//! Window creation, sync engine startup and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use polygpt_config::schema::StartupMode;
use polygpt_config::PolyConfig;
use polygpt_layout::{LayoutEngine, LayoutManager, WindowSize, ZoomLevel};
use polygpt_sync::{BroadcastController, ChannelSink, CommandRouter, PageSink, SyncSettings};
use polygpt_webview::{ContentProvider, WebViewManager, WebViewRegistry};

use super::core::PolyApp;
use super::webview_bridge::WryHost;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl PolyApp {
    /// Create the window, start the sync engine and build every view.
    /// Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ))
            .with_maximized(window_config.startup_mode == StartupMode::Maximized);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(Arc::clone(&window));

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("polygpt-sync")
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start async runtime: {e}");
                return false;
            }
        };

        let size = self
            .logical_size()
            .unwrap_or(WindowSize::new(window_config.width, window_config.height));
        let layout = layout_from_config(&self.config, size);

        let (sink, outbound) = ChannelSink::new();
        let sink: Arc<dyn PageSink> = Arc::new(sink);
        let (controller, handle) = BroadcastController::new(
            layout.assignments(),
            Arc::clone(&self.selectors),
            sink,
            layout.subscribe(),
            SyncSettings::from(&self.config.sync),
        );
        runtime.spawn(controller.run());

        let mut host = WryHost::new(
            Arc::clone(&window),
            self.initialize_webviews(),
            self.config.window.background_color.clone(),
            self.devtools,
        );
        host.create_views(&layout.snapshot(), &layout.assignments());

        let mut router = CommandRouter::new(layout, handle, host);
        router.sync_views();

        self.router = Some(router);
        self.outbound = Some(outbound);
        self.tokio_runtime = Some(runtime);
        tracing::info!(width = size.width, height = size.height, "Window and views created");
        true
    }

    /// Set up the webview registry with the `polygpt://` content provider.
    fn initialize_webviews(&self) -> WebViewRegistry {
        let mut manager = WebViewManager::new();
        manager.set_content_provider(ContentProvider::bundled());
        WebViewRegistry::new(manager)
    }
}

/// Layout manager seeded from the `[layout]`, `[zoom]` and `[providers]`
/// sections.
pub(super) fn layout_from_config(config: &PolyConfig, window: WindowSize) -> LayoutManager {
    let engine = LayoutEngine {
        gap: config.layout.gap,
        control_bar_height: config.layout.control_bar_height,
        supersize_fraction: config.layout.supersize_fraction,
    };
    let zoom = ZoomLevel::new(
        config.zoom.default,
        config.zoom.step,
        config.zoom.min,
        config.zoom.max,
    );
    LayoutManager::new(engine, zoom, config.providers.assignment(), window)
}
