//! The subset of a live document the page agent touches.
//!
//! The real implementation is the injected page agent script; the trait
//! exists so the agent's semantics can be stated and exercised in Rust.

use std::fmt;

/// Opaque handle to an element. Only valid until the next mutation.
pub type NodeId = usize;

/// A candidate selector the document refused to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector: {0}")]
pub struct InvalidSelector(pub String);

/// How an input surface has to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    TextArea,
    Input,
    ContentEditable,
    Paragraph,
    Other,
}

impl SurfaceKind {
    /// Fields written through their `value`.
    pub fn is_plain(self) -> bool {
        matches!(self, Self::TextArea | Self::Input)
    }

    /// Editors written through child nodes or caret commands.
    pub fn is_rich(self) -> bool {
        matches!(self, Self::ContentEditable | Self::Paragraph)
    }
}

/// Synthetic events dispatched on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    Input,
    Change,
    KeyUp,
    /// `keydown` for Enter, used as the submit fallback.
    EnterKeyDown,
}

impl fmt::Display for DomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "input",
            Self::Change => "change",
            Self::KeyUp => "keyup",
            Self::EnterKeyDown => "keydown:Enter",
        })
    }
}

pub trait Dom {
    /// First element matching `selector`, searched inside `scope` when given.
    fn query(&self, scope: Option<NodeId>, selector: &str)
        -> Result<Option<NodeId>, InvalidSelector>;

    /// Upper-case tag name, e.g. `TEXTAREA` or `RICH-TEXTAREA`.
    fn tag_name(&self, node: NodeId) -> String;

    /// `contentEditable === "true"`.
    fn is_content_editable(&self, node: NodeId) -> bool;

    fn surface_kind(&self, node: NodeId) -> SurfaceKind {
        match self.tag_name(node).as_str() {
            "TEXTAREA" => SurfaceKind::TextArea,
            _ if self.is_content_editable(node) => SurfaceKind::ContentEditable,
            "P" => SurfaceKind::Paragraph,
            "INPUT" => SurfaceKind::Input,
            _ => SurfaceKind::Other,
        }
    }

    // -- Plain fields --

    /// Set a field's value and collapse the selection to its end.
    fn set_value(&mut self, node: NodeId, value: &str);

    // -- Node-level editing --

    /// Remove every child node one at a time.
    fn remove_children(&mut self, node: NodeId);
    fn append_text(&mut self, node: NodeId, text: &str);
    fn append_line_break(&mut self, node: NodeId);
    fn set_text_content(&mut self, node: NodeId, text: &str);

    // -- Caret-level editing --

    fn focus(&mut self, node: NodeId);
    fn select_all(&mut self, node: NodeId);
    fn collapse_to_end(&mut self, node: NodeId);
    /// `execCommand('insertText')` at the current selection.
    fn exec_insert_text(&mut self, text: &str);
    /// `execCommand('delete')` at the current selection.
    fn exec_delete(&mut self);

    // -- Interaction --

    fn dispatch(&mut self, node: NodeId, event: DomEvent);
    fn click(&mut self, node: NodeId);
}
