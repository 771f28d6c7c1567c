//! Input broadcast controller.
//!
//! Single authority for the compose text. Throttles changes, scopes every
//! broadcast to the current layout mode and owns the position-to-adapter
//! map. Runs as one task; everything reaches it through a
//! [`ControllerHandle`].

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use polygpt_common::{Position, ProviderKey, SyncError};
use polygpt_config::schema::SyncConfig;
use polygpt_config::SelectorConfig;
use polygpt_layout::LayoutSnapshot;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::adapter::{AdapterHandle, AdapterMsg, ProviderAdapter, RescanBudget};
use crate::dialect::dialect_for;
use crate::page::PageReply;
use crate::sink::PageSink;
use crate::throttle::Throttle;

/// Timing knobs of the controller and its adapters.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncSettings {
    pub throttle: Duration,
    pub rescan_interval: Duration,
    pub rescan_attempts: u32,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self::from(&SyncConfig::default())
    }
}

impl From<&SyncConfig> for SyncSettings {
    fn from(config: &SyncConfig) -> Self {
        Self {
            throttle: Duration::from_millis(config.throttle_ms),
            rescan_interval: Duration::from_millis(config.rescan_interval_ms),
            rescan_attempts: config.rescan_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerMsg {
    ComposeChanged(String),
    Submit,
    NewChat,
    Reassign {
        position: Position,
        provider: ProviderKey,
    },
    PageReply {
        position: Position,
        reply: PageReply,
    },
    PageLoaded(Position),
    Rescan,
}

/// Cloneable sender side of the controller inbox.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    tx: mpsc::UnboundedSender<ControllerMsg>,
}

impl ControllerHandle {
    pub(crate) fn from_sender(tx: mpsc::UnboundedSender<ControllerMsg>) -> Self {
        Self { tx }
    }

    pub fn compose_changed(&self, text: impl Into<String>) -> Result<(), SyncError> {
        self.send(ControllerMsg::ComposeChanged(text.into()))
    }

    pub fn submit(&self) -> Result<(), SyncError> {
        self.send(ControllerMsg::Submit)
    }

    pub fn new_chat(&self) -> Result<(), SyncError> {
        self.send(ControllerMsg::NewChat)
    }

    pub fn reassign(&self, position: Position, provider: ProviderKey) -> Result<(), SyncError> {
        self.send(ControllerMsg::Reassign { position, provider })
    }

    pub fn page_reply(&self, position: Position, reply: PageReply) -> Result<(), SyncError> {
        self.send(ControllerMsg::PageReply { position, reply })
    }

    pub fn page_loaded(&self, position: Position) -> Result<(), SyncError> {
        self.send(ControllerMsg::PageLoaded(position))
    }

    pub fn rescan(&self) -> Result<(), SyncError> {
        self.send(ControllerMsg::Rescan)
    }

    fn send(&self, msg: ControllerMsg) -> Result<(), SyncError> {
        self.tx
            .send(msg)
            .map_err(|_| SyncError::ChannelClosed("controller"))
    }
}

pub struct BroadcastController {
    inbox: mpsc::UnboundedReceiver<ControllerMsg>,
    layout_rx: watch::Receiver<Arc<LayoutSnapshot>>,
    selectors: Arc<SelectorConfig>,
    sink: Arc<dyn PageSink>,
    settings: SyncSettings,
    initial: Vec<(Position, ProviderKey)>,
    adapters: BTreeMap<Position, AdapterHandle>,
    throttle: Throttle<String>,
    last_broadcast: String,
    last_focus: Option<Position>,
}

impl BroadcastController {
    pub fn new(
        assignment: Vec<(Position, ProviderKey)>,
        selectors: Arc<SelectorConfig>,
        sink: Arc<dyn PageSink>,
        layout_rx: watch::Receiver<Arc<LayoutSnapshot>>,
        settings: SyncSettings,
    ) -> (Self, ControllerHandle) {
        let (tx, inbox) = mpsc::unbounded_channel();
        let last_focus = layout_rx.borrow().focused();
        let controller = Self {
            inbox,
            layout_rx,
            selectors,
            sink,
            throttle: Throttle::new(settings.throttle),
            settings,
            initial: assignment,
            adapters: BTreeMap::new(),
            last_broadcast: String::new(),
            last_focus,
        };
        (controller, ControllerHandle::from_sender(tx))
    }

    /// Spawn the adapters and process messages until every handle is dropped.
    pub async fn run(mut self) {
        for (position, provider) in std::mem::take(&mut self.initial) {
            self.spawn_adapter(position, provider, String::new());
        }
        info!(adapters = self.adapters.len(), "broadcast controller started");

        let mut layout_open = true;
        loop {
            let deadline = self.throttle.deadline();
            tokio::select! {
                biased;
                changed = self.layout_rx.changed(), if layout_open => match changed {
                    Ok(()) => self.on_layout_changed(),
                    Err(_) => layout_open = false,
                },
                msg = self.inbox.recv() => match msg {
                    Some(msg) => self.handle(msg),
                    None => break,
                },
                _ = crate::adapter::sleep_until(deadline) => {
                    if let Some(text) = self.throttle.take_due(Instant::now()) {
                        self.broadcast(text);
                    }
                }
            }
        }
        debug!("broadcast controller stopped");
    }

    fn handle(&mut self, msg: ControllerMsg) {
        match msg {
            ControllerMsg::ComposeChanged(text) => {
                if let Some(text) = self.throttle.offer(text, Instant::now()) {
                    self.broadcast(text);
                }
            }
            ControllerMsg::Submit => self.on_submit(),
            ControllerMsg::NewChat => {
                self.flush();
                self.send_scoped(|| AdapterMsg::NewChat);
            }
            ControllerMsg::Reassign { position, provider } => self.reassign(position, provider),
            ControllerMsg::PageReply { position, reply } => {
                self.send_to(position, AdapterMsg::Reply(reply));
            }
            ControllerMsg::PageLoaded(position) => self.send_to(position, AdapterMsg::PageLoaded),
            ControllerMsg::Rescan => {
                for position in Position::ALL {
                    self.send_to(position, AdapterMsg::Rescan);
                }
            }
        }
    }

    fn on_submit(&mut self) {
        self.flush();
        if self.last_broadcast.trim().is_empty() {
            debug!("ignoring submit of blank text");
            return;
        }
        self.send_scoped(|| AdapterMsg::Submit);
        self.last_broadcast.clear();
    }

    fn on_layout_changed(&mut self) {
        let focus = self.layout_rx.borrow_and_update().focused();
        if focus == self.last_focus {
            return;
        }
        debug!(?focus, "focus changed");
        self.last_focus = focus;
        for position in Position::ALL {
            self.send_to(position, AdapterMsg::Focus(focus));
        }
        // Positions entering the scope catch up; the rest no-op.
        let text = self.last_broadcast.clone();
        self.send_scoped(|| AdapterMsg::Text(text.clone()));
    }

    fn reassign(&mut self, position: Position, provider: ProviderKey) {
        let desired = if self.scope().contains(&position) {
            self.last_broadcast.clone()
        } else {
            String::new()
        };
        if let Some(old) = self.adapters.remove(&position) {
            info!(%position, from = %old.provider(), to = %provider, "reassigning provider");
        }
        self.spawn_adapter(position, provider, desired);
    }

    fn flush(&mut self) {
        if let Some(text) = self.throttle.flush(Instant::now()) {
            self.broadcast(text);
        }
    }

    fn broadcast(&mut self, text: String) {
        if text == self.last_broadcast {
            return;
        }
        self.last_broadcast = text.clone();
        self.send_scoped(|| AdapterMsg::Text(text.clone()));
    }

    fn scope(&self) -> Vec<Position> {
        self.layout_rx.borrow().mode.scope()
    }

    fn send_scoped(&self, msg: impl Fn() -> AdapterMsg) {
        for position in self.scope() {
            self.send_to(position, msg());
        }
    }

    fn send_to(&self, position: Position, msg: AdapterMsg) {
        let Some(adapter) = self.adapters.get(&position) else {
            warn!("{}", SyncError::NoAdapter(position));
            return;
        };
        if let Err(e) = adapter.send(msg) {
            warn!(%position, "{e}");
        }
    }

    fn spawn_adapter(&mut self, position: Position, provider: ProviderKey, desired: String) {
        let adapter = ProviderAdapter::new(
            provider,
            position,
            dialect_for(provider),
            self.selectors.provider(provider),
            Arc::clone(&self.sink),
            RescanBudget::new(self.settings.rescan_interval, self.settings.rescan_attempts),
        )
        .with_focus(self.last_focus)
        .with_desired(desired);
        debug!(%position, %provider, "adapter spawned");
        self.adapters.insert(position, AdapterHandle::spawn(adapter));
    }
}
