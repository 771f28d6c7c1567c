//! Per-target provider adapters.
//!
//! A [`ProviderAdapter`] owns the shadow of its page's input and decides
//! which [`PageRequest`]s to send; the page agent carries them out. The
//! adapter runs as its own task behind an [`AdapterHandle`].

mod rescan;
mod task;

pub use rescan::RescanBudget;
pub(crate) use task::sleep_until;
pub use task::{AdapterHandle, AdapterMsg};

use std::sync::Arc;

use polygpt_common::{Position, ProviderKey, SyncError};
use polygpt_config::{ProviderSelectors, SelectorRole};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::dialect::Dialect;
use crate::page::{InjectRequest, PageLogLevel, PageReply, PageRequest, SubmitVia};
use crate::sink::PageSink;

/// Message surfaced to the user when the input cannot be located.
pub const INPUT_NOT_FOUND: &str = "Input element not found";

pub struct ProviderAdapter {
    provider: ProviderKey,
    position: Position,
    dialect: Box<dyn Dialect>,
    selectors: ProviderSelectors,
    sink: Arc<dyn PageSink>,
    /// What the page's input is believed to hold.
    shadow: String,
    /// Latest text the controller asked for.
    desired: String,
    focused: Option<Position>,
    seq: u64,
    /// The page missed a write; push `desired` once the input shows up.
    resync: bool,
    /// A submit may have left text behind; the next write rebuilds.
    unverified: bool,
    rescan: RescanBudget,
}

impl ProviderAdapter {
    pub fn new(
        provider: ProviderKey,
        position: Position,
        dialect: Box<dyn Dialect>,
        selectors: ProviderSelectors,
        sink: Arc<dyn PageSink>,
        rescan: RescanBudget,
    ) -> Self {
        if selectors.role(SelectorRole::Input).is_empty() {
            let err = SyncError::MissingSelectors {
                provider,
                role: SelectorRole::Input.as_str(),
            };
            warn!(%position, "{err}; text sync disabled");
        }
        Self {
            provider,
            position,
            dialect,
            selectors,
            sink,
            shadow: String::new(),
            desired: String::new(),
            focused: None,
            seq: 0,
            resync: false,
            unverified: false,
            rescan,
        }
    }

    /// Text to push once the page has loaded.
    pub fn with_desired(mut self, text: String) -> Self {
        self.resync = !text.is_empty();
        self.desired = text;
        self
    }

    pub fn with_focus(mut self, focused: Option<Position>) -> Self {
        self.focused = focused;
        self
    }

    pub fn provider(&self) -> ProviderKey {
        self.provider
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn shadow(&self) -> &str {
        &self.shadow
    }

    pub fn rescan_deadline(&self) -> Option<Instant> {
        self.rescan.deadline()
    }

    // -- Capabilities --

    /// Ask the page whether the input currently resolves.
    pub fn locate_input(&self) {
        self.send(PageRequest::Probe {
            input: self.candidates(SelectorRole::Input),
            locate: self.dialect.locate_rule(),
        });
    }

    /// Bring the page's input to `full`. A value equal to the shadow is a no-op.
    pub fn inject_text(&mut self, full: &str) {
        self.desired = full.to_string();
        if full == self.shadow {
            return;
        }
        self.write(full);
    }

    pub fn submit(&mut self) {
        let submit = self.candidates(SelectorRole::Submit);
        let input = self.candidates(SelectorRole::Input);
        if submit.is_empty() && input.is_empty() {
            self.missing(SelectorRole::Submit);
            return;
        }
        self.send(PageRequest::Submit {
            submit,
            input,
            locate: self.dialect.locate_rule(),
        });
        // The provider empties its input once the message is sent. Until
        // the page confirms it, the next write rebuilds instead of editing.
        self.shadow.clear();
        self.unverified = true;
        self.desired.clear();
        self.resync = false;
    }

    pub fn new_chat(&self) {
        let new_chat = self.candidates(SelectorRole::NewChat);
        if new_chat.is_empty() {
            self.missing(SelectorRole::NewChat);
            return;
        }
        self.send(PageRequest::NewChat { new_chat });
    }

    /// Tell the page which position it holds, which provider it shows and
    /// which providers it may switch to.
    pub fn on_position_changed(&mut self, position: Position) {
        self.position = position;
        self.send_controls();
    }

    pub fn on_focus_state_changed(&mut self, focused: Option<Position>) {
        self.focused = focused;
        self.send_controls();
    }

    /// A fresh document: nothing typed, agent state reset.
    pub fn on_page_loaded(&mut self, now: Instant) {
        self.shadow.clear();
        self.unverified = false;
        self.resync = !self.desired.is_empty();
        self.on_position_changed(self.position);
        self.locate_input();
        self.rescan.start(now);
    }

    /// Retry requested by the user.
    pub fn rescan(&mut self, now: Instant) {
        self.locate_input();
        self.rescan.start(now);
    }

    pub fn on_rescan_tick(&mut self, now: Instant) {
        if self.rescan.tick(now) {
            debug!(provider = %self.provider, "rescanning for input");
            self.locate_input();
        }
    }

    pub fn on_reply(&mut self, reply: PageReply, now: Instant) {
        match reply {
            PageReply::Injected { seq } => {
                debug!(provider = %self.provider, seq, "text injected");
            }
            PageReply::InputMissing { seq } if seq != self.seq => {
                debug!(provider = %self.provider, seq, latest = self.seq, "stale reply ignored");
            }
            PageReply::InputMissing { seq } => {
                warn!(provider = %self.provider, seq, "{INPUT_NOT_FOUND}");
                self.sink
                    .selector_error(self.position, self.provider, INPUT_NOT_FOUND.to_string());
                self.resync = true;
                if !self.rescan.is_active() {
                    self.rescan.start(now);
                }
            }
            PageReply::Probe { found: true } => {
                self.rescan.stop();
                if self.resync {
                    info!(provider = %self.provider, "input found; resyncing");
                    let desired = self.desired.clone();
                    self.write(&desired);
                }
            }
            PageReply::Probe { found: false } => {}
            PageReply::Submitted { via: SubmitVia::Button } => {
                debug!(provider = %self.provider, "message submitted");
                self.unverified = false;
            }
            PageReply::Submitted { via: SubmitVia::EnterKey } => {
                // An ignored Enter leaves the text in place.
                debug!(provider = %self.provider, "enter key dispatched");
            }
            PageReply::SubmitUnavailable => {
                warn!(provider = %self.provider, "no submit control or input to submit from");
            }
            PageReply::NewChatOpened => {
                debug!(provider = %self.provider, "new chat opened");
            }
            PageReply::NewChatMissing => {
                warn!(provider = %self.provider, "new chat control not found");
            }
            PageReply::Log { level, message } => {
                let provider = self.provider.display_name();
                match level {
                    PageLogLevel::Debug => debug!("[{provider}] {message}"),
                    PageLogLevel::Info => info!("[{provider}] {message}"),
                    PageLogLevel::Warn => warn!("[{provider}] {message}"),
                    PageLogLevel::Error => error!("[{provider}] {message}"),
                }
            }
        }
    }

    // -- Internals --

    fn write(&mut self, full: &str) {
        let input = self.candidates(SelectorRole::Input);
        if input.is_empty() {
            return;
        }
        self.seq += 1;
        let write = if std::mem::take(&mut self.unverified) {
            self.dialect.rebuild_mode(full)
        } else {
            self.dialect.write_mode(&self.shadow, full)
        };
        let request = InjectRequest {
            seq: self.seq,
            input,
            locate: self.dialect.locate_rule(),
            write,
            focus: self.dialect.focus_before_write(),
        };
        self.shadow = full.to_string();
        self.resync = false;
        self.send(PageRequest::Inject(request));
    }

    fn send_controls(&self) {
        self.send(PageRequest::Controls {
            position: self.position,
            provider: self.provider,
            available: ProviderKey::choices(),
            supersized: self.focused == Some(self.position),
        });
    }

    fn candidates(&self, role: SelectorRole) -> Vec<String> {
        self.selectors.role(role).to_vec()
    }

    fn missing(&self, role: SelectorRole) {
        let err = SyncError::MissingSelectors {
            provider: self.provider,
            role: role.as_str(),
        };
        warn!(position = %self.position, "{err}");
    }

    fn send(&self, request: PageRequest) {
        debug!(
            provider = %self.provider,
            position = %self.position,
            kind = request.kind(),
            "page request"
        );
        self.sink.deliver(self.position, request);
    }
}
