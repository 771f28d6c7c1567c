//! Messages exchanged with the agent running inside each provider page.
//!
//! Requests carry everything the agent needs (selectors included), so
//! the agent itself holds no provider knowledge.

use polygpt_common::{Position, ProviderChoice, ProviderKey};
use serde::{Deserialize, Serialize};

use crate::diff::Edit;

/// How the located element is refined into the actual input surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateRule {
    /// The resolved element is the surface.
    #[default]
    Direct,
    /// `rich-textarea` descends to its inner `[contenteditable="true"]`;
    /// a contenteditable match descends to its first `p`. Surfaces of no
    /// known kind are written through their text content.
    RichTextarea,
}

/// What to write once the surface is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WriteMode {
    /// Rebuild the surface from `text`, then fire input/change/keyup.
    Replace { text: String },
    /// Apply caret edits. `full` is used instead when the page missed
    /// an earlier write.
    Edits { edits: Vec<Edit>, full: String },
}

impl WriteMode {
    /// The text the surface should hold afterwards.
    pub fn target(&self) -> &str {
        match self {
            Self::Replace { text } => text,
            Self::Edits { full, .. } => full,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectRequest {
    pub seq: u64,
    pub input: Vec<String>,
    pub locate: LocateRule,
    pub write: WriteMode,
    /// Focus the surface before writing.
    pub focus: bool,
}

/// Host to page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageRequest {
    Inject(InjectRequest),
    /// Click the first submit control, else press Enter in the input.
    Submit {
        submit: Vec<String>,
        input: Vec<String>,
        locate: LocateRule,
    },
    NewChat { new_chat: Vec<String> },
    /// Report whether the input surface currently resolves.
    Probe {
        input: Vec<String>,
        locate: LocateRule,
    },
    /// Draw or refresh the provider switcher and supersize toggle.
    Controls {
        position: Position,
        provider: ProviderKey,
        available: Vec<ProviderChoice>,
        supersized: bool,
    },
}

impl PageRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Inject(_) => "inject",
            Self::Submit { .. } => "submit",
            Self::NewChat { .. } => "new_chat",
            Self::Probe { .. } => "probe",
            Self::Controls { .. } => "controls",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitVia {
    Button,
    EnterKey,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Page to host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageReply {
    Injected { seq: u64 },
    InputMissing { seq: u64 },
    Submitted { via: SubmitVia },
    SubmitUnavailable,
    NewChatOpened,
    NewChatMissing,
    Probe { found: bool },
    Log {
        #[serde(default)]
        level: PageLogLevel,
        message: String,
    },
}
