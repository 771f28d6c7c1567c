//! Outbound side of the adapters: requests bound for provider pages and
//! selector errors bound for the compose surface.

use polygpt_common::{Position, ProviderKey};
use tokio::sync::mpsc;
use tracing::debug;

use crate::page::PageRequest;

/// Where adapters put their output. Implementations must not block.
pub trait PageSink: Send + Sync {
    fn deliver(&self, position: Position, request: PageRequest);

    fn selector_error(&self, position: Position, provider: ProviderKey, message: String);
}

/// Everything an adapter can emit, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    Page {
        position: Position,
        request: PageRequest,
    },
    SelectorError {
        position: Position,
        provider: ProviderKey,
        message: String,
    },
}

/// Forwards adapter output to the event-loop thread, which owns the views.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Outbound>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Outbound>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn push(&self, item: Outbound) {
        if self.tx.send(item).is_err() {
            debug!("outbound receiver dropped");
        }
    }
}

impl PageSink for ChannelSink {
    fn deliver(&self, position: Position, request: PageRequest) {
        self.push(Outbound::Page { position, request });
    }

    fn selector_error(&self, position: Position, provider: ProviderKey, message: String) {
        self.push(Outbound::SelectorError {
            position,
            provider,
            message,
        });
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::sync::Mutex;

    use super::*;

    /// Keeps every emission for inspection.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        items: Mutex<Vec<Outbound>>,
    }

    impl RecordingSink {
        pub fn take(&self) -> Vec<Outbound> {
            std::mem::take(&mut *self.items.lock().unwrap())
        }

        pub fn requests_for(items: &[Outbound], at: Position) -> Vec<PageRequest> {
            items
                .iter()
                .filter_map(|item| match item {
                    Outbound::Page { position, request } if *position == at => {
                        Some(request.clone())
                    }
                    _ => None,
                })
                .collect()
        }
    }

    impl PageSink for RecordingSink {
        fn deliver(&self, position: Position, request: PageRequest) {
            self.items
                .lock()
                .unwrap()
                .push(Outbound::Page { position, request });
        }

        fn selector_error(&self, position: Position, provider: ProviderKey, message: String) {
            self.items.lock().unwrap().push(Outbound::SelectorError {
                position,
                provider,
                message,
            });
        }
    }
}
