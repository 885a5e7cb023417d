//! The page document
//!
//! Owns the element tree plus the page-level surfaces the enhancement layer
//! relies on: the root style-variable namespace, the viewport, insertion
//! records, and threshold-based intersection tracking.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use veneer_core::{NodeId, Rect};

use crate::node::Node;
use crate::selector::Selector;

/// How a programmatic scroll should behave
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

#[derive(Clone, Copy, Debug)]
struct ObservedEntry {
    threshold: f32,
    /// Whether the element was at or above its threshold on the last sweep.
    /// Intersections fire only on upward crossings.
    above: bool,
}

/// A headless page document
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    body: NodeId,
    variables: FxHashMap<String, String>,
    viewport: Rect,
    last_scroll: Option<ScrollBehavior>,
    inserted: Vec<NodeId>,
    observed: FxHashMap<NodeId, ObservedEntry>,
}

impl Document {
    /// Create a document with a root and an empty body
    pub fn new() -> Self {
        let mut nodes: SlotMap<NodeId, Node> = SlotMap::with_key();
        let root = nodes.insert(Node::new("html"));
        let body = nodes.insert(Node::new("body"));
        nodes[body].parent = Some(root);
        nodes[root].children.push(body);

        Self {
            nodes,
            root,
            body,
            variables: FxHashMap::default(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
            last_scroll: None,
            inserted: Vec::new(),
            observed: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    // ========== Tree mutation ==========

    /// Create a detached element
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.nodes.insert(Node::new(tag))
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// When the subtree lands under a connected parent the insertion is
    /// recorded for the mutation watcher; only the subtree root is recorded,
    /// matching how platform mutation records report added nodes.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        // Refuse to create a cycle
        if child == parent || self.ancestor_chain(parent).contains(&child) {
            return;
        }
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        if self.is_connected(parent) {
            self.inserted.push(child);
        }
    }

    /// Remove an element and its subtree
    pub fn remove(&mut self, node: NodeId) {
        if !self.nodes.contains_key(node) || node == self.root || node == self.body {
            return;
        }
        self.detach(node);
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if let Some(removed) = self.nodes.remove(current) {
                stack.extend(removed.children);
            }
            self.observed.remove(&current);
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node].parent.take() {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|c| *c != node);
            }
        }
    }

    /// Whether the node is reachable from the document root
    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == self.root {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Ancestor chain starting at the node itself, ending at the root
    pub fn ancestor_chain(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            if !self.nodes.contains_key(id) {
                break;
            }
            chain.push(id);
            current = self.nodes[id].parent;
        }
        chain
    }

    // ========== Element state ==========

    pub fn set_element_id(&mut self, node: NodeId, id: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.id = Some(id.into());
        }
    }

    /// Find the first element with the given id, in document order
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk(self.root)
            .into_iter()
            .find(|n| self.nodes[*n].id.as_deref() == Some(id))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(node) {
            if !n.has_class(class) {
                n.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.get(node).is_some_and(|n| n.has_class(class))
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.attrs.insert(name.to_string(), value.into());
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node).and_then(|n| n.attr(name))
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.styles.insert(property.to_string(), value.into());
        }
    }

    pub fn remove_style(&mut self, node: NodeId, property: &str) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.styles.remove(property);
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes.get(node).and_then(|n| n.style(property))
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.text = text.into();
        }
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.nodes.get(node).map_or("", |n| n.text())
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.rect = rect;
        }
    }

    pub fn rect(&self, node: NodeId) -> Rect {
        self.nodes.get(node).map_or_else(Rect::default, |n| n.rect)
    }

    // ========== Root variables ==========

    /// Publish a named style variable on the document root
    pub fn set_variable(&mut self, name: &str, value: impl Into<String>) {
        self.variables.insert(name.to_string(), value.into());
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    // ========== Selection ==========

    /// All matching elements under the root, in document order
    pub fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.query_within(self.root, selector)
    }

    /// Matching descendants of `ancestor` (exclusive), in document order
    pub fn query_within(&self, ancestor: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.walk(ancestor)
            .into_iter()
            .filter(|n| selector.matches(&self.nodes[*n]))
            .collect()
    }

    fn walk(&self, ancestor: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(start) = self.nodes.get(ancestor) else {
            return out;
        };
        let mut stack: Vec<NodeId> = start.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id].children.iter().rev());
        }
        out
    }

    // ========== Viewport & scrolling ==========

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Scroll so the element's top edge aligns with the viewport top
    pub fn scroll_to(&mut self, node: NodeId, behavior: ScrollBehavior) {
        let Some(target) = self.nodes.get(node) else {
            return;
        };
        self.viewport.y = target.rect.y.max(0.0);
        self.last_scroll = Some(behavior);
        tracing::debug!(offset = self.viewport.y, ?behavior, "scrolled to element");
    }

    /// Behavior of the most recent programmatic scroll
    pub fn last_scroll_behavior(&self) -> Option<ScrollBehavior> {
        self.last_scroll
    }

    // ========== Mutation records ==========

    /// Drain the roots of subtrees inserted since the last call
    pub fn take_inserted(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.inserted)
    }

    // ========== Intersection tracking ==========

    /// Start watching an element against the viewport at a visibility
    /// threshold in 0-1
    pub fn observe(&mut self, node: NodeId, threshold: f32) {
        if self.nodes.contains_key(node) {
            self.observed.insert(
                node,
                ObservedEntry {
                    threshold,
                    above: false,
                },
            );
        }
    }

    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.remove(&node);
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Sweep observed elements and return those that crossed their threshold
    /// upward since the last sweep, in document order.
    pub fn take_intersections(&mut self) -> Vec<NodeId> {
        let viewport = self.viewport;
        let mut fired = Vec::new();
        for (id, entry) in self.observed.iter_mut() {
            let Some(node) = self.nodes.get(*id) else {
                continue;
            };
            let ratio = node.rect.visible_ratio(&viewport);
            if ratio >= entry.threshold {
                if !entry.above {
                    entry.above = true;
                    fired.push(*id);
                }
            } else {
                entry.above = false;
            }
        }
        // FxHashMap iteration order is arbitrary
        let order: FxHashMap<NodeId, usize> = self
            .walk(self.root)
            .into_iter()
            .enumerate()
            .map(|(i, n)| (n, i))
            .collect();
        fired.sort_by_key(|n| order.get(n).copied().unwrap_or(usize::MAX));
        fired
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
