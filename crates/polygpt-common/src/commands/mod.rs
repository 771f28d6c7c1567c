use serde::{Deserialize, Serialize};

use crate::types::{Position, ProviderKey};

mod label;

/// Every UI-originated command the engine accepts.
///
/// The compose surface and the affordances injected into provider pages
/// both resolve to a `Command`; the router matches on it to reach the
/// layout manager or the broadcast controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "kebab-case")]
pub enum Command {
    // -- Compose --
    SendTextUpdate(String),
    Submit,
    RequestNewChat,

    // -- Views --
    RefreshAll,
    ZoomIn,
    ZoomOut,

    // -- Layout --
    ToggleSupersize(Position),
    ChangeProvider {
        position: Position,
        provider: ProviderKey,
    },

    // -- Recovery --
    RescanSelectors,
}

/// Result of a routed command, returned to the caller over IPC.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResponse {
    Ack,
    /// Zoom factor after a zoom command.
    Zoom(f64),
    /// Focused position after a supersize toggle (`None` = grid).
    Focus(Option<Position>),
    /// Whether a provider change was applied.
    Changed(bool),
}

impl CommandResponse {
    /// JSON value handed back to the invoking page.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CommandResponse::Ack => serde_json::Value::Bool(true),
            CommandResponse::Zoom(factor) => serde_json::json!(factor),
            CommandResponse::Focus(Some(p)) => serde_json::json!(p),
            CommandResponse::Focus(None) => serde_json::Value::Null,
            CommandResponse::Changed(ok) => serde_json::Value::Bool(*ok),
        }
    }
}
