//! Mode transitions, resize, provider swaps and zoom on the LayoutManager.

use std::sync::Arc;

use polygpt_common::{Position, ProviderKey};
use tracing::{debug, info};

use crate::commands::{LayoutCommand, LayoutOutcome};
use crate::layout::{LayoutMode, LayoutSnapshot, WindowSize};

use super::LayoutManager;

impl LayoutManager {
    /// Execute a layout command.
    pub fn execute(&mut self, cmd: LayoutCommand) -> LayoutOutcome {
        match cmd {
            LayoutCommand::ToggleSupersize(p) => LayoutOutcome::Focus(self.toggle_supersize(p)),
            LayoutCommand::ChangeProvider(p, key) => {
                LayoutOutcome::Reassigned(self.change_provider(p, key))
            }
            LayoutCommand::Resize(size) => {
                self.resize(size);
                LayoutOutcome::Resized
            }
            LayoutCommand::ZoomIn => LayoutOutcome::Zoom(self.zoom_in()),
            LayoutCommand::ZoomOut => LayoutOutcome::Zoom(self.zoom_out()),
        }
    }

    /// `Supersized(p)` goes back to grid; anything else focuses `p`.
    /// Returns the resulting focus.
    pub fn toggle_supersize(&mut self, position: Position) -> Option<Position> {
        self.mode = match self.mode {
            LayoutMode::Supersized(p) if p == position => LayoutMode::Grid,
            _ => LayoutMode::Supersized(position),
        };
        info!(mode = ?self.mode, "layout mode changed");
        self.publish();
        self.mode.focused()
    }

    /// Recompute every rect for the new window size.
    pub fn resize(&mut self, window: WindowSize) -> Arc<LayoutSnapshot> {
        self.window = window;
        debug!(width = window.width, height = window.height, "layout resized");
        self.publish()
    }

    /// Reassign `position`. Mode, focus and zoom are untouched.
    ///
    /// Returns `false` when the position already showed `provider`.
    pub fn change_provider(&mut self, position: Position, provider: ProviderKey) -> bool {
        let previous = self.assignments.insert(position, provider);
        if previous == Some(provider) {
            return false;
        }
        info!(%position, %provider, ?previous, "provider reassigned");
        self.publish();
        true
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.zoom.zoom_in()
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.zoom.zoom_out()
    }

    fn publish(&self) -> Arc<LayoutSnapshot> {
        let snapshot = Arc::new(self.engine.compute(self.mode, self.window));
        self.snapshot_tx.send_replace(snapshot.clone());
        snapshot
    }
}
