//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::{logical_window_size, PolyApp};

impl ApplicationHandler for PolyApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let logical = logical_window_size(size, scale);
                if let Some(router) = self.router.as_mut() {
                    router.resize(logical.width, logical.height);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(size), Some(router)) = (self.logical_size(), self.router.as_mut()) {
                    router.resize(size.width, size.height);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}
