//! IPC message dispatch: routes page messages to the command router and
//! the broadcast controller.

use polygpt_common::{Command, CommandResponse, Position};
use polygpt_sync::PageReply;
use polygpt_webview::{command_allowed_from, IpcKind, IpcMessage, ViewSlot};
use tracing::{debug, warn};

use crate::app_state::core::PolyApp;

/// A validated message from a page.
#[derive(Debug, PartialEq)]
pub(super) enum Inbound {
    Command(Command),
    PageReply(Position, PageReply),
}

/// Decode `body` and check that `slot` may send it.
pub(super) fn parse_inbound(slot: ViewSlot, body: &str) -> Result<Inbound, &'static str> {
    let msg = IpcMessage::from_json(body).ok_or("malformed envelope")?;
    if !msg.kind.is_inbound() {
        return Err("outbound kind sent by page");
    }
    match msg.kind {
        IpcKind::Command => {
            let command = msg.command().ok_or("unknown command")?;
            if !command_allowed_from(slot, &command) {
                return Err("command not allowed from this view");
            }
            Ok(Inbound::Command(command))
        }
        IpcKind::PageReply => {
            let position = slot.position().ok_or("page reply from compose view")?;
            let reply =
                serde_json::from_value(msg.payload).map_err(|_| "malformed page reply")?;
            Ok(Inbound::PageReply(position, reply))
        }
        _ => Err("unexpected kind"),
    }
}

impl PolyApp {
    pub(in crate::app_state) fn handle_ipc_message(&mut self, slot: ViewSlot, body: &str) {
        let inbound = match parse_inbound(slot, body) {
            Ok(inbound) => inbound,
            Err(reason) => {
                warn!(%slot, "rejected IPC message: {reason}");
                return;
            }
        };

        let Some(router) = self.router.as_mut() else {
            return;
        };

        match inbound {
            Inbound::Command(command) => {
                let name = command.name();
                let response = router.dispatch(command);
                debug!(%slot, command = name, ?response, "command handled");
                if response == CommandResponse::Ack {
                    return;
                }
                let payload = serde_json::json!({
                    "command": name,
                    "value": response.to_json(),
                });
                if let Err(e) = router.host().send(slot, IpcKind::CommandResult, &payload) {
                    warn!(%slot, "failed to send command result: {e}");
                }
            }
            Inbound::PageReply(position, reply) => {
                if let Err(e) = router.controller().page_reply(position, reply) {
                    warn!(%position, "{e}");
                }
            }
        }
    }
}
