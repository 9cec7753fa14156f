//! Directive nodes.
//!
//! Directives are extension syntax recognized by the parser:
//! `:::name` containers, `::name` leaves, and `:name` inline directives.

use std::collections::BTreeMap;

use crate::Node;

/// Shape of a directive node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `:::name` ... `:::` wrapping arbitrary block content.
    Container,
    /// `::name[label]{attrs}` holding at most one plain-text child.
    Leaf,
    /// `:name[label]{attrs}` inside a paragraph.
    Text,
}

/// Payload shared by all directive shapes.
///
/// Attributes are passed through from the parser unvalidated; keys are
/// case-sensitive.
///
/// # Example
///
/// ```
/// use rw_mdast::{Directive, DirectiveKind, Node};
///
/// let node = Directive::new("link-preview")
///     .with_attribute("url", "https://example.com")
///     .into_leaf();
///
/// let (kind, directive) = node.directive().unwrap();
/// assert_eq!(kind, DirectiveKind::Leaf);
/// assert_eq!(directive.attribute("url"), Some("https://example.com"));
/// assert_eq!(directive.attribute("URL"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directive {
    /// Directive keyword (e.g., `callout`, `embed`).
    pub name: String,
    /// Attributes from `{key="value"}`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: BTreeMap<String, String>,
    /// Directive content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

impl Directive {
    /// Create a directive with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Value of the only child when it is a plain text node.
    ///
    /// Returns `None` for zero children, more than one child, or a non-text
    /// child.
    #[must_use]
    pub fn single_text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [only] => only.as_text(),
            _ => None,
        }
    }

    /// Wrap into a node of the given shape.
    #[must_use]
    pub fn into_node(self, kind: DirectiveKind) -> Node {
        match kind {
            DirectiveKind::Container => Node::ContainerDirective(self),
            DirectiveKind::Leaf => Node::LeafDirective(self),
            DirectiveKind::Text => Node::TextDirective(self),
        }
    }

    /// Wrap into a container directive node.
    #[must_use]
    pub fn into_container(self) -> Node {
        self.into_node(DirectiveKind::Container)
    }

    /// Wrap into a leaf directive node.
    #[must_use]
    pub fn into_leaf(self) -> Node {
        self.into_node(DirectiveKind::Leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_text() {
        let directive = Directive::new("embed").with_children(vec![Node::text("youtube")]);
        assert_eq!(directive.single_text(), Some("youtube"));
    }

    #[test]
    fn test_single_text_rejects_other_shapes() {
        assert_eq!(Directive::new("embed").single_text(), None);

        let two = Directive::new("embed").with_children(vec![Node::text("a"), Node::text("b")]);
        assert_eq!(two.single_text(), None);

        let nested =
            Directive::new("embed").with_children(vec![Node::paragraph(vec![Node::text("a")])]);
        assert_eq!(nested.single_text(), None);
    }

    #[test]
    fn test_attribute_keys_are_case_sensitive() {
        let directive = Directive::new("embed").with_attribute("id", "x");
        assert_eq!(directive.attribute("id"), Some("x"));
        assert_eq!(directive.attribute("Id"), None);
    }

    #[test]
    fn test_into_node_shapes() {
        let directive = Directive::new("x");
        assert!(matches!(
            directive.clone().into_node(DirectiveKind::Text),
            Node::TextDirective(_)
        ));
        assert!(matches!(
            directive.clone().into_container(),
            Node::ContainerDirective(_)
        ));
        assert!(matches!(directive.into_leaf(), Node::LeafDirective(_)));
    }
}
