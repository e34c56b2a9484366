//! In-memory page double used across the workspace's tests.
//!
//! Models just enough of a host page to exercise adapter resolution, caret
//! tracking and both injection strategies: a flat node store with parent
//! links, one selection, one focus, and a log of synthetic input events.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::errors::DomError;
use crate::ports::{DomPort, NodeId};

#[derive(Clone, Debug)]
struct SimNode {
    tag: String,
    selector: Option<String>,
    input_type: Option<String>,
    content_editable: bool,
    value: String,
    visible: bool,
    attached: bool,
    parent: Option<u64>,
    /// Simulates hosts whose virtual-DOM reconciliation discards direct
    /// property writes; such nodes only accept the insert-text command.
    reverts_direct_writes: bool,
}

#[derive(Default)]
struct Inner {
    nodes: Vec<SimNode>,
    selection_anchor: Option<u64>,
    selected_all_of: Option<u64>,
    focused: Option<u64>,
    input_events: Vec<u64>,
}

#[derive(Clone)]
pub struct PageSim {
    inner: Arc<Mutex<Inner>>,
}

impl PageSim {
    /// Fresh page containing only a `<body>` element (node 0).
    pub fn new() -> Self {
        let sim = Self {
            inner: Arc::new(Mutex::new(Inner::default())),
        };
        sim.push(SimNode {
            tag: "body".into(),
            selector: Some("body".into()),
            input_type: None,
            content_editable: false,
            value: String::new(),
            visible: true,
            attached: true,
            parent: None,
            reverts_direct_writes: false,
        });
        sim
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&self, node: SimNode) -> NodeId {
        let mut inner = self.inner.lock();
        inner.nodes.push(node);
        NodeId(inner.nodes.len() as u64 - 1)
    }

    fn element(&self, tag: &str, selector: &str) -> SimNode {
        SimNode {
            tag: tag.into(),
            selector: Some(selector.into()),
            input_type: None,
            content_editable: false,
            value: String::new(),
            visible: true,
            attached: true,
            parent: Some(0),
            reverts_direct_writes: false,
        }
    }

    pub fn add_input(&self, selector: &str, input_type: &str) -> NodeId {
        let mut node = self.element("input", selector);
        node.input_type = Some(input_type.into());
        self.push(node)
    }

    pub fn add_textarea(&self, selector: &str) -> NodeId {
        self.push(self.element("textarea", selector))
    }

    pub fn add_rich_text(&self, selector: &str) -> NodeId {
        let mut node = self.element("div", selector);
        node.content_editable = true;
        self.push(node)
    }

    /// Generic container, e.g. the extension's own overlay root.
    pub fn add_div(&self, selector: &str) -> NodeId {
        self.push(self.element("div", selector))
    }

    /// Text node inside `parent`, the kind of node a selection anchors to.
    pub fn add_text_child(&self, parent: NodeId) -> NodeId {
        self.push(SimNode {
            tag: "#text".into(),
            selector: None,
            input_type: None,
            content_editable: false,
            value: String::new(),
            visible: true,
            attached: true,
            parent: Some(parent.0),
            reverts_direct_writes: false,
        })
    }

    pub fn set_visible(&self, node: NodeId, visible: bool) {
        self.inner.lock().nodes[node.0 as usize].visible = visible;
    }

    pub fn detach(&self, node: NodeId) {
        self.inner.lock().nodes[node.0 as usize].attached = false;
    }

    pub fn set_reverts_direct_writes(&self, node: NodeId, reverts: bool) {
        self.inner.lock().nodes[node.0 as usize].reverts_direct_writes = reverts;
    }

    pub fn set_selection_anchor(&self, node: Option<NodeId>) {
        let mut inner = self.inner.lock();
        inner.selection_anchor = node.map(|n| n.0);
        inner.selected_all_of = None;
    }

    pub fn set_content(&self, node: NodeId, text: &str) {
        self.inner.lock().nodes[node.0 as usize].value = text.to_string();
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.inner.lock().focused.map(NodeId)
    }

    /// Nodes that received a synthetic input event, in dispatch order.
    pub fn input_events(&self) -> Vec<NodeId> {
        self.inner.lock().input_events.iter().copied().map(NodeId).collect()
    }

    fn with_node<T>(&self, node: NodeId, f: impl FnOnce(&SimNode) -> T) -> Option<T> {
        let inner = self.inner.lock();
        inner.nodes.get(node.0 as usize).map(f)
    }
}

impl Default for PageSim {
    fn default() -> Self {
        Self::new()
    }
}

/// Only form controls and contenteditable regions accept text writes.
fn writable(node: &SimNode) -> bool {
    node.tag == "input" || node.tag == "textarea" || node.content_editable
}

impl DomPort for PageSim {
    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let inner = self.inner.lock();
        inner
            .nodes
            .iter()
            .position(|n| n.attached && n.selector.as_deref() == Some(selector))
            .map(|i| NodeId(i as u64))
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.with_node(node, |n| n.attached).unwrap_or(false)
    }

    fn is_visible(&self, node: NodeId) -> bool {
        self.with_node(node, |n| n.attached && n.visible).unwrap_or(false)
    }

    fn tag_name(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |n| n.tag.clone())
    }

    fn input_type(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |n| n.input_type.clone()).flatten()
    }

    fn is_content_editable(&self, node: NodeId) -> bool {
        self.with_node(node, |n| n.content_editable).unwrap_or(false)
    }

    fn is_body(&self, node: NodeId) -> bool {
        self.with_node(node, |n| n.tag == "body").unwrap_or(false)
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |n| n.value.clone())
    }

    fn set_value(&self, node: NodeId, text: &str) -> Result<(), DomError> {
        let mut inner = self.inner.lock();
        let n = inner
            .nodes
            .get_mut(node.0 as usize)
            .ok_or(DomError::NodeDetached)?;
        if !n.attached {
            return Err(DomError::NodeDetached);
        }
        if !writable(n) {
            return Err(DomError::NotWritable);
        }
        if !n.reverts_direct_writes {
            n.value = text.to_string();
        }
        Ok(())
    }

    fn inner_text(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |n| n.value.clone())
    }

    fn set_inner_text(&self, node: NodeId, text: &str) -> Result<(), DomError> {
        self.set_value(node, text)
    }

    fn focus(&self, node: NodeId) -> Result<(), DomError> {
        let mut inner = self.inner.lock();
        if !inner
            .nodes
            .get(node.0 as usize)
            .map(|n| n.attached)
            .unwrap_or(false)
        {
            return Err(DomError::NodeDetached);
        }
        inner.focused = Some(node.0);
        Ok(())
    }

    fn select_all(&self, node: NodeId) -> Result<(), DomError> {
        let mut inner = self.inner.lock();
        if !inner
            .nodes
            .get(node.0 as usize)
            .map(|n| n.attached)
            .unwrap_or(false)
        {
            return Err(DomError::NodeDetached);
        }
        inner.selected_all_of = Some(node.0);
        inner.selection_anchor = Some(node.0);
        Ok(())
    }

    fn insert_text_command(&self, node: NodeId, text: &str) -> Result<(), DomError> {
        let mut inner = self.inner.lock();
        let selected = inner.selected_all_of;
        let n = inner
            .nodes
            .get_mut(node.0 as usize)
            .ok_or(DomError::NodeDetached)?;
        if !n.attached {
            return Err(DomError::NodeDetached);
        }
        if !writable(n) {
            return Err(DomError::NotWritable);
        }
        if selected == Some(node.0) {
            n.value = text.to_string();
        } else {
            n.value.push_str(text);
        }
        inner.selected_all_of = None;
        Ok(())
    }

    fn dispatch_input_event(&self, node: NodeId) -> Result<(), DomError> {
        let mut inner = self.inner.lock();
        if inner.nodes.get(node.0 as usize).is_none() {
            return Err(DomError::NodeDetached);
        }
        inner.input_events.push(node.0);
        Ok(())
    }

    fn selection_anchor(&self) -> Option<NodeId> {
        self.inner.lock().selection_anchor.map(NodeId)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let inner = self.inner.lock();
        let mut current = Some(node.0);
        while let Some(id) = current {
            if id == ancestor.0 {
                return true;
            }
            current = inner.nodes.get(id as usize).and_then(|n| n.parent);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_selector_skips_detached_nodes() {
        let sim = PageSim::new();
        let first = sim.add_textarea("#prompt");
        sim.detach(first);
        let second = sim.add_textarea("#prompt");
        assert_eq!(sim.query_selector("#prompt"), Some(second));
    }

    #[test]
    fn direct_write_reverts_when_host_reconciles() {
        let sim = PageSim::new();
        let rich = sim.add_rich_text("[contenteditable]");
        sim.set_reverts_direct_writes(rich, true);

        sim.set_inner_text(rich, "ignored").unwrap();
        assert_eq!(sim.inner_text(rich).unwrap(), "");

        sim.select_all(rich).unwrap();
        sim.insert_text_command(rich, "typed").unwrap();
        assert_eq!(sim.inner_text(rich).unwrap(), "typed");
    }

    #[test]
    fn writes_to_non_editable_nodes_are_rejected() {
        let sim = PageSim::new();
        let div = sim.add_div("#sidebar");

        assert!(matches!(
            sim.set_value(div, "x"),
            Err(DomError::NotWritable)
        ));
        assert!(matches!(
            sim.insert_text_command(div, "x"),
            Err(DomError::NotWritable)
        ));
        assert_eq!(sim.value(div).unwrap(), "");
    }

    #[test]
    fn contains_walks_parent_chain() {
        let sim = PageSim::new();
        let rich = sim.add_rich_text("[contenteditable]");
        let text = sim.add_text_child(rich);
        assert!(sim.contains(rich, text));
        assert!(sim.contains(sim.body(), text));
        assert!(!sim.contains(rich, sim.body()));
    }
}
