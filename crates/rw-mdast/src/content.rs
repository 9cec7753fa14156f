//! Payloads for lists, tables, images, references, footnotes and math.
//!
//! Field names follow mdast (`referenceType`, `identifier`, ...) so documents
//! produced by remark round-trip through the `serde` feature unchanged.

use crate::Node;

/// Ordered or unordered list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    /// Whether the items are numbered.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ordered: Option<bool>,
    /// Number of the first item of an ordered list.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start: Option<u32>,
    /// Whether items are separated by blank lines.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub spread: Option<bool>,
    /// List items.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// Item of a [`List`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListItem {
    /// Task list state, `None` for plain items.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub checked: Option<bool>,
    /// Whether the item's content is separated by blank lines.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub spread: Option<bool>,
    /// Item content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// GFM table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Column alignment (`left`, `right`, `center` or unset).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub align: Option<Vec<Option<String>>>,
    /// Table rows.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// Image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    /// Image source.
    pub url: String,
    /// Optional title.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,
    /// Alternative text.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alt: Option<String>,
}

/// Image through a definition: `![alt][label]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ImageReference {
    /// Normalized definition identifier.
    pub identifier: String,
    /// Label as written.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    /// `full`, `collapsed` or `shortcut`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference_type: String,
    /// Alternative text.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub alt: Option<String>,
}

/// Link through a definition: `[text][label]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LinkReference {
    /// Normalized definition identifier.
    pub identifier: String,
    /// Label as written.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    /// `full`, `collapsed` or `shortcut`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reference_type: String,
    /// Link label content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// Link reference definition: `[label]: url "title"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    /// Normalized identifier.
    pub identifier: String,
    /// Label as written.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    /// Destination.
    pub url: String,
    /// Optional title.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,
}

/// Footnote body: `[^label]: content`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootnoteDefinition {
    /// Normalized identifier.
    pub identifier: String,
    /// Label as written.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
    /// Footnote content.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

/// Footnote call: `[^label]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootnoteReference {
    /// Normalized identifier.
    pub identifier: String,
    /// Label as written.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub label: Option<String>,
}

/// Display math block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Math {
    /// Text after the opening fence.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub meta: Option<String>,
    /// The math source.
    pub value: String,
}
