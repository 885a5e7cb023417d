//! Element selection
//!
//! The enhancement layer scans with a small fixed grammar: a tag name, a
//! class, an attribute presence check, or a tag plus attribute. Selectors
//! are built through typed constructors rather than parsed from strings, so
//! there is no failure path at scan time.

use crate::node::Node;

/// A conjunctive element matcher
#[derive(Clone, Debug, Default)]
pub struct Selector {
    tag: Option<String>,
    class: Option<String>,
    attr: Option<String>,
}

impl Selector {
    /// Match elements by tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Match elements carrying a class
    pub fn class(class: impl Into<String>) -> Self {
        Self {
            class: Some(class.into()),
            ..Self::default()
        }
    }

    /// Match elements carrying an attribute
    pub fn attr(attr: impl Into<String>) -> Self {
        Self {
            attr: Some(attr.into()),
            ..Self::default()
        }
    }

    /// Match elements by tag name carrying an attribute
    pub fn tag_attr(tag: impl Into<String>, attr: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            attr: Some(attr.into()),
            class: None,
        }
    }

    pub(crate) fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if node.tag != *tag {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if !node.has_class(class) {
                return false;
            }
        }
        if let Some(attr) = &self.attr {
            if !node.attrs.contains_key(attr) {
                return false;
            }
        }
        true
    }
}
