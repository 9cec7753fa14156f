//! Heading nodes and their render metadata.

use crate::{Node, Properties, PropertyValue};

/// Heading node payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Heading level (1-6).
    pub depth: u8,
    /// Inline content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
    /// Render metadata attached by transforms.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "HeadingData::is_empty")
    )]
    pub data: HeadingData,
}

/// Render metadata for a heading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HeadingData {
    /// Anchor identifier.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
    /// Extra properties for the rendered heading element.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Properties::is_empty"))]
    pub h_properties: Properties,
}

impl HeadingData {
    /// Whether no metadata has been attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.h_properties.is_empty()
    }
}

impl Heading {
    /// Create a heading without render metadata.
    #[must_use]
    pub fn new(depth: u8, children: Vec<Node>) -> Self {
        Self {
            depth,
            children,
            data: HeadingData::default(),
        }
    }

    /// Attach an anchor identifier to both `data.id` and `data.hProperties.id`.
    ///
    /// Visible children and depth are left untouched.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.data
            .h_properties
            .insert("id".to_owned(), PropertyValue::String(id.clone()));
        self.data.id = Some(id);
    }

    /// The attached anchor identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }
}
