//! Core types and constructors for LayoutManager.

use std::collections::BTreeMap;
use std::sync::Arc;

use polygpt_common::{Position, ProviderKey};
use tokio::sync::watch;

use crate::layout::{LayoutEngine, LayoutMode, LayoutSnapshot, WindowSize};

use super::ZoomLevel;

/// Owns the layout state machine, the position-to-provider assignment and
/// the zoom factor. Single writer; readers observe complete snapshots
/// through [`LayoutManager::subscribe`].
pub struct LayoutManager {
    pub(super) engine: LayoutEngine,
    pub(super) mode: LayoutMode,
    pub(super) window: WindowSize,
    pub(super) assignments: BTreeMap<Position, ProviderKey>,
    pub(super) zoom: ZoomLevel,
    pub(super) snapshot_tx: watch::Sender<Arc<LayoutSnapshot>>,
}

impl LayoutManager {
    /// Start in grid mode with the given assignment.
    pub fn new(
        engine: LayoutEngine,
        zoom: ZoomLevel,
        assignment: [(Position, ProviderKey); 4],
        window: WindowSize,
    ) -> Self {
        let mode = LayoutMode::Grid;
        let snapshot = Arc::new(engine.compute(mode, window));
        let (snapshot_tx, _) = watch::channel(snapshot);
        Self {
            engine,
            mode,
            window,
            assignments: assignment.into_iter().collect(),
            zoom,
            snapshot_tx,
        }
    }

    // -- Accessors --

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn focused(&self) -> Option<Position> {
        self.mode.focused()
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn provider_at(&self, position: Position) -> Option<ProviderKey> {
        self.assignments.get(&position).copied()
    }

    /// Current assignment in grid order.
    pub fn assignments(&self) -> Vec<(Position, ProviderKey)> {
        self.assignments.iter().map(|(p, k)| (*p, *k)).collect()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom.factor()
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Arc<LayoutSnapshot> {
        self.snapshot_tx.borrow().clone()
    }

    /// Receiver that always yields the latest complete snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<LayoutSnapshot>> {
        self.snapshot_tx.subscribe()
    }
}
