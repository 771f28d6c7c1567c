//! IPC protocol between Rust and the pages.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: `window.polygpt.ipc.send(kind, payload)` posts a JSON
//!   envelope through `window.ipc.postMessage`, which reaches the
//!   `ipc_handler` registered on the webview.
//! - **Rust -> JS**: `evaluate_script` calls `window.polygpt.ipc._dispatch`
//!   with the same envelope shape.

use polygpt_common::Command;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::slot::ViewSlot;

/// Agent run inside every provider page.
pub const PAGE_AGENT_SCRIPT: &str = include_str!("../assets/page_agent.js");

/// Message kinds understood on either side of the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IpcKind {
    /// Page to host: a UI command.
    Command,
    /// Provider page to host: outcome of a page request.
    PageReply,
    /// Host to provider page: work for the page agent.
    PageRequest,
    /// Host to compose page: show a banner.
    Notify,
    /// Host to page: value produced by a command.
    CommandResult,
}

impl IpcKind {
    /// Kinds a page is allowed to post to the host.
    pub fn is_inbound(self) -> bool {
        matches!(self, Self::Command | Self::PageReply)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::PageReply => "page-reply",
            Self::PageRequest => "page-request",
            Self::Notify => "notify",
            Self::CommandResult => "command-result",
        }
    }
}

/// A typed IPC envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: IpcKind,
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// Parse an envelope from a raw `postMessage` body.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: IpcKind, payload: Value) -> Self {
        Self { kind, payload }
    }

    /// Decode the payload of a `command` envelope.
    pub fn command(&self) -> Option<Command> {
        if self.kind != IpcKind::Command {
            return None;
        }
        serde_json::from_value(self.payload.clone()).ok()
    }
}

/// Whether `slot` may issue `command`.
///
/// The compose page drives everything. A provider page only reaches its
/// own supersize toggle and provider switcher.
pub fn command_allowed_from(slot: ViewSlot, command: &Command) -> bool {
    match slot {
        ViewSlot::Compose => true,
        ViewSlot::Provider(own) => match command {
            Command::ToggleSupersize(position) => *position == own,
            Command::ChangeProvider { position, .. } => *position == own,
            _ => false,
        },
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into every webview.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.polygpt && window.polygpt.ipc) return;
    window.polygpt = window.polygpt || {};
    window.polygpt.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        command: function(name, args) {
            var msg = { command: name };
            if (args !== undefined) msg.args = args;
            this.send('command', msg);
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the page's handler.
pub fn js_dispatch_message(kind: IpcKind, payload: &Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.polygpt && window.polygpt.ipc._dispatch({:?}, {});",
        kind.as_str(),
        payload_json,
    )
}
