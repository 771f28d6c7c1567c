//! In-memory [`Dom`] with pre-bound selectors, for tests.

use std::collections::{HashMap, HashSet};

use super::dom::{Dom, DomEvent, InvalidSelector, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Inline {
    Text(String),
    Br,
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    editable: bool,
    value: String,
    children: Vec<Inline>,
    events: Vec<DomEvent>,
    clicks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    All(NodeId),
    End(NodeId),
}

/// Elements are created with [`FakeDom::add`] and made reachable by
/// binding selectors to them. Every content change bumps a counter.
#[derive(Debug, Default)]
pub struct FakeDom {
    nodes: Vec<Node>,
    bindings: HashMap<String, NodeId>,
    scoped: HashMap<(NodeId, String), NodeId>,
    invalid: HashSet<String>,
    selection: Option<Selection>,
    focused: Option<NodeId>,
    mutations: usize,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node {
            tag: tag.to_ascii_uppercase(),
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    pub fn add_editable(&mut self, tag: &str) -> NodeId {
        let id = self.add(tag);
        self.nodes[id].editable = true;
        id
    }

    pub fn bind(&mut self, selector: &str, node: NodeId) {
        self.bindings.insert(selector.to_string(), node);
    }

    pub fn bind_within(&mut self, scope: NodeId, selector: &str, node: NodeId) {
        self.scoped.insert((scope, selector.to_string()), node);
    }

    /// Drop a binding, as when the host page re-renders its input.
    pub fn unbind(&mut self, selector: &str) {
        self.bindings.remove(selector);
    }

    pub fn mark_invalid(&mut self, selector: &str) {
        self.invalid.insert(selector.to_string());
    }

    /// Seed content as the host page would, without counting a mutation.
    pub fn seed(&mut self, node: NodeId, text: &str) {
        if self.is_plain(node) {
            self.nodes[node].value = text.to_string();
        } else {
            self.nodes[node].children = vec![Inline::Text(text.to_string())];
        }
    }

    /// Visible text; line breaks read as `\n`.
    pub fn text(&self, node: NodeId) -> String {
        if self.is_plain(node) {
            return self.nodes[node].value.clone();
        }
        self.nodes[node]
            .children
            .iter()
            .map(|c| match c {
                Inline::Text(s) => s.as_str(),
                Inline::Br => "\n",
            })
            .collect()
    }

    pub fn line_breaks(&self, node: NodeId) -> usize {
        self.nodes[node]
            .children
            .iter()
            .filter(|c| **c == Inline::Br)
            .count()
    }

    pub fn mutations(&self) -> usize {
        self.mutations
    }

    pub fn events(&self, node: NodeId) -> &[DomEvent] {
        &self.nodes[node].events
    }

    pub fn clicks(&self, node: NodeId) -> usize {
        self.nodes[node].clicks
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    fn is_plain(&self, node: NodeId) -> bool {
        matches!(self.nodes[node].tag.as_str(), "TEXTAREA" | "INPUT")
    }

    fn selected_node(&self) -> Option<NodeId> {
        match self.selection {
            Some(Selection::All(n)) | Some(Selection::End(n)) => Some(n),
            None => None,
        }
    }

    fn push_text(&mut self, node: NodeId, text: &str) {
        let mut lines = text.split('\n').peekable();
        while let Some(line) = lines.next() {
            if !line.is_empty() {
                match self.nodes[node].children.last_mut() {
                    Some(Inline::Text(s)) => s.push_str(line),
                    _ => self.nodes[node].children.push(Inline::Text(line.to_string())),
                }
            }
            if lines.peek().is_some() {
                self.nodes[node].children.push(Inline::Br);
            }
        }
    }
}

impl Dom for FakeDom {
    fn query(
        &self,
        scope: Option<NodeId>,
        selector: &str,
    ) -> Result<Option<NodeId>, InvalidSelector> {
        if self.invalid.contains(selector) {
            return Err(InvalidSelector(selector.to_string()));
        }
        Ok(match scope {
            None => self.bindings.get(selector).copied(),
            Some(scope) => self.scoped.get(&(scope, selector.to_string())).copied(),
        })
    }

    fn tag_name(&self, node: NodeId) -> String {
        self.nodes[node].tag.clone()
    }

    fn is_content_editable(&self, node: NodeId) -> bool {
        self.nodes[node].editable
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        self.nodes[node].value = value.to_string();
        self.selection = Some(Selection::End(node));
        self.mutations += 1;
    }

    fn remove_children(&mut self, node: NodeId) {
        let removed = self.nodes[node].children.len();
        self.nodes[node].children.clear();
        self.mutations += removed;
    }

    fn append_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node].children.push(Inline::Text(text.to_string()));
        self.mutations += 1;
    }

    fn append_line_break(&mut self, node: NodeId) {
        self.nodes[node].children.push(Inline::Br);
        self.mutations += 1;
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.nodes[node].children = vec![Inline::Text(text.to_string())];
        self.mutations += 1;
    }

    fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    fn select_all(&mut self, node: NodeId) {
        self.selection = Some(Selection::All(node));
    }

    fn collapse_to_end(&mut self, node: NodeId) {
        self.selection = Some(Selection::End(node));
    }

    fn exec_insert_text(&mut self, text: &str) {
        let Some(node) = self.selected_node() else {
            return;
        };
        if self.selection == Some(Selection::All(node)) {
            self.nodes[node].children.clear();
        }
        self.push_text(node, text);
        self.selection = Some(Selection::End(node));
        self.mutations += 1;
    }

    fn exec_delete(&mut self) {
        match self.selection {
            Some(Selection::All(node)) => {
                if !self.nodes[node].children.is_empty() {
                    self.nodes[node].children.clear();
                    self.mutations += 1;
                }
                self.selection = Some(Selection::End(node));
            }
            Some(Selection::End(node)) => {
                let children = &mut self.nodes[node].children;
                let emptied = match children.last_mut() {
                    Some(Inline::Text(s)) => {
                        s.pop();
                        s.is_empty()
                    }
                    Some(Inline::Br) => true,
                    None => return,
                };
                if emptied {
                    children.pop();
                }
                self.mutations += 1;
            }
            None => {}
        }
    }

    fn dispatch(&mut self, node: NodeId, event: DomEvent) {
        self.nodes[node].events.push(event);
    }

    fn click(&mut self, node: NodeId) {
        self.nodes[node].clicks += 1;
    }
}
