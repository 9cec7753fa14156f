//! Render-hint element nodes.

use std::collections::BTreeMap;

use crate::Node;

/// Property name holding the composed class string.
const CLASS_NAME: &str = "className";

/// Element properties keyed by renderer property name.
pub type Properties = BTreeMap<String, PropertyValue>;

/// Value of an element property.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    /// Boolean attribute (e.g., `allowFullScreen`).
    Bool(bool),
    /// String attribute.
    String(String),
}

impl PropertyValue {
    /// String value, if this is a string property.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Render-hint node: the only node shape transforms construct as output.
///
/// Carries the target tag name, properties (including `className`) and
/// ordered children for the downstream renderer.
///
/// # Example
///
/// ```
/// use rw_mdast::{Element, Node};
///
/// let card = Element::new("a")
///     .with_property("href", "https://example.com")
///     .with_class("link-preview")
///     .with_child(Node::text("Example"));
///
/// assert_eq!(card.class_name(), Some("link-preview"));
/// assert_eq!(card.property_str("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Element {
    /// Target tag name (e.g., `div`, `iframe`).
    pub tag_name: String,
    /// Target attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Properties,
    /// Ordered child nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no properties or children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    /// Set a property.
    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set the `className` property.
    #[must_use]
    pub fn with_class(self, class_name: impl Into<String>) -> Self {
        self.with_property(CLASS_NAME, class_name.into())
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Get a property value.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Get a string property value.
    #[must_use]
    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(PropertyValue::as_str)
    }

    /// The composed class string, if set.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.property_str(CLASS_NAME)
    }
}
