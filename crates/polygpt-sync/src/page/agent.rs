//! Reference interpreter of [`PageRequest`]s over a [`Dom`].
//!
//! `assets/page_agent.js` in the webview crate implements the same steps
//! against the live document.

use crate::diff::{is_self_contained, Edit};
use crate::resolver::{resolve, resolve_within};

use super::dom::{Dom, DomEvent, NodeId, SurfaceKind};
use super::protocol::{InjectRequest, LocateRule, PageReply, PageRequest, SubmitVia, WriteMode};

const RICH_TEXTAREA: &str = "RICH-TEXTAREA";
const EDITABLE_CHILD: &str = "[contenteditable=\"true\"]";
const PARAGRAPH: &str = "p";

/// Per-document agent state. A fresh document starts in sync.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AgentState {
    /// The previous inject found no input; incremental edits were computed
    /// against content the page never received.
    pub desynced: bool,
}

/// Execute one request, returning the replies to post back.
pub fn execute<D: Dom + ?Sized>(
    dom: &mut D,
    state: &mut AgentState,
    request: &PageRequest,
) -> Vec<PageReply> {
    match request {
        PageRequest::Inject(inject) => vec![inject_text(dom, state, inject)],
        PageRequest::Submit {
            submit,
            input,
            locate,
        } => vec![submit_message(dom, submit, input, *locate)],
        PageRequest::NewChat { new_chat } => match resolve(dom, new_chat) {
            Some(button) => {
                dom.click(button);
                vec![PageReply::NewChatOpened]
            }
            None => vec![PageReply::NewChatMissing],
        },
        PageRequest::Probe { input, locate } => vec![PageReply::Probe {
            found: locate_input(dom, input, *locate).is_some(),
        }],
        // Page chrome only; nothing to do against the input model.
        PageRequest::Controls { .. } => Vec::new(),
    }
}

/// Resolve the input surface, applying the dialect's descent rule.
pub fn locate_input<D: Dom + ?Sized>(
    dom: &D,
    candidates: &[String],
    rule: LocateRule,
) -> Option<NodeId> {
    let element = resolve(dom, candidates)?;
    match rule {
        LocateRule::Direct => Some(element),
        LocateRule::RichTextarea => {
            if dom.tag_name(element) == RICH_TEXTAREA {
                if let Some(editable) = resolve_within(dom, element, &[EDITABLE_CHILD]) {
                    return Some(editable);
                }
            }
            if dom.is_content_editable(element) {
                return Some(resolve_within(dom, element, &[PARAGRAPH]).unwrap_or(element));
            }
            Some(element)
        }
    }
}

fn inject_text<D: Dom + ?Sized>(
    dom: &mut D,
    state: &mut AgentState,
    request: &InjectRequest,
) -> PageReply {
    let Some(surface) = locate_input(dom, &request.input, request.locate) else {
        state.desynced = true;
        return PageReply::InputMissing { seq: request.seq };
    };

    if request.focus {
        dom.focus(surface);
    }

    let kind = dom.surface_kind(surface);
    match &request.write {
        WriteMode::Replace { text } => {
            replace(dom, surface, kind, text, request.locate);
            for event in [DomEvent::Input, DomEvent::Change, DomEvent::KeyUp] {
                dom.dispatch(surface, event);
            }
        }
        WriteMode::Edits { edits, full } => {
            if kind.is_plain() {
                dom.set_value(surface, full);
            } else if kind.is_rich() {
                if state.desynced && !is_self_contained(edits) {
                    apply_caret_edits(dom, surface, &rebuild(full));
                } else {
                    apply_caret_edits(dom, surface, edits);
                }
            }
        }
    }

    state.desynced = false;
    PageReply::Injected { seq: request.seq }
}

fn replace<D: Dom + ?Sized>(
    dom: &mut D,
    surface: NodeId,
    kind: SurfaceKind,
    text: &str,
    rule: LocateRule,
) {
    match kind {
        SurfaceKind::TextArea | SurfaceKind::Input => dom.set_value(surface, text),
        SurfaceKind::ContentEditable | SurfaceKind::Paragraph => {
            dom.remove_children(surface);
            let mut lines = text.split('\n').peekable();
            while let Some(line) = lines.next() {
                dom.append_text(surface, line);
                if lines.peek().is_some() {
                    dom.append_line_break(surface);
                }
            }
        }
        SurfaceKind::Other if rule == LocateRule::RichTextarea => {
            dom.set_text_content(surface, text);
        }
        SurfaceKind::Other => {}
    }
}

fn rebuild(full: &str) -> Vec<Edit> {
    let mut edits = vec![Edit::ClearAll];
    if !full.is_empty() {
        edits.push(Edit::InsertAtEnd(full.to_string()));
    }
    edits
}

fn apply_caret_edits<D: Dom + ?Sized>(dom: &mut D, surface: NodeId, edits: &[Edit]) {
    for edit in edits {
        match edit {
            Edit::ClearAll => {
                dom.select_all(surface);
                dom.exec_delete();
            }
            Edit::InsertAtEnd(text) => {
                dom.collapse_to_end(surface);
                dom.exec_insert_text(text);
            }
            Edit::DeleteBackward(count) => {
                dom.collapse_to_end(surface);
                for _ in 0..*count {
                    dom.exec_delete();
                }
            }
        }
    }
}

fn submit_message<D: Dom + ?Sized>(
    dom: &mut D,
    submit: &[String],
    input: &[String],
    locate: LocateRule,
) -> PageReply {
    if let Some(button) = resolve(dom, submit) {
        dom.click(button);
        return PageReply::Submitted {
            via: SubmitVia::Button,
        };
    }
    match locate_input(dom, input, locate) {
        Some(surface) => {
            dom.dispatch(surface, DomEvent::EnterKeyDown);
            PageReply::Submitted {
                via: SubmitVia::EnterKey,
            }
        }
        None => PageReply::SubmitUnavailable,
    }
}
