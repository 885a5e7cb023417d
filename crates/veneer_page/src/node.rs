//! Element node data

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use veneer_core::{NodeId, Rect};

/// A single element in the page tree.
///
/// Mutation goes through [`Document`](crate::Document) so that tree-level
/// bookkeeping (insertion records, observation tables) stays consistent;
/// nodes themselves only expose read access.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: SmallVec<[String; 4]>,
    pub(crate) attrs: FxHashMap<String, String>,
    pub(crate) styles: FxHashMap<String, String>,
    pub(crate) text: String,
    pub(crate) rect: Rect,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: SmallVec::new(),
            attrs: FxHashMap::default(),
            styles: FxHashMap::default(),
            text: String::new(),
            rect: Rect::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element id, the `#fragment` navigation target
    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
