use std::future;

use polygpt_common::{Position, ProviderKey, SyncError};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::page::PageReply;

use super::ProviderAdapter;

/// Inbox of one adapter task. Processed strictly in order.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterMsg {
    Text(String),
    Submit,
    NewChat,
    Focus(Option<Position>),
    PageLoaded,
    Reply(PageReply),
    Rescan,
}

/// Owner side of a running adapter. Dropping it stops the task.
pub struct AdapterHandle {
    provider: ProviderKey,
    tx: mpsc::UnboundedSender<AdapterMsg>,
    task: JoinHandle<()>,
}

impl AdapterHandle {
    /// Run `adapter` on the current tokio runtime.
    pub fn spawn(adapter: ProviderAdapter) -> Self {
        let provider = adapter.provider();
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(adapter, rx));
        Self { provider, tx, task }
    }

    pub fn provider(&self) -> ProviderKey {
        self.provider
    }

    pub fn send(&self, msg: AdapterMsg) -> Result<(), SyncError> {
        self.tx
            .send(msg)
            .map_err(|_| SyncError::ChannelClosed("adapter"))
    }
}

impl Drop for AdapterHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(mut adapter: ProviderAdapter, mut rx: mpsc::UnboundedReceiver<AdapterMsg>) {
    loop {
        let deadline = adapter.rescan_deadline();
        tokio::select! {
            msg = rx.recv() => match msg {
                Some(msg) => handle(&mut adapter, msg),
                None => break,
            },
            _ = sleep_until(deadline) => adapter.on_rescan_tick(Instant::now()),
        }
    }
    debug!(provider = %adapter.provider(), position = %adapter.position(), "adapter stopped");
}

fn handle(adapter: &mut ProviderAdapter, msg: AdapterMsg) {
    let now = Instant::now();
    match msg {
        AdapterMsg::Text(text) => adapter.inject_text(&text),
        AdapterMsg::Submit => adapter.submit(),
        AdapterMsg::NewChat => adapter.new_chat(),
        AdapterMsg::Focus(focused) => adapter.on_focus_state_changed(focused),
        AdapterMsg::PageLoaded => adapter.on_page_loaded(now),
        AdapterMsg::Reply(reply) => adapter.on_reply(reply, now),
        AdapterMsg::Rescan => adapter.rescan(now),
    }
}

/// Sleep until `deadline`, or forever when there is none.
pub(crate) async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending::<()>().await,
    }
}
