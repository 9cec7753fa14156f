//! Markdown syntax tree for the RW transform pipeline.
//!
//! The tree mirrors the shape produced by a directive-aware markdown parser
//! (mdast): block and inline nodes, the three directive shapes, and the
//! [`Element`] render-hint node that transforms splice in as their output.
//!
//! # Node Kinds
//!
//! - **Content**: the CommonMark and GFM nodes of mdast ([`Node::Root`],
//!   [`Node::Paragraph`], [`Node::Heading`], [`Node::List`], [`Node::Table`], ...)
//!   plus frontmatter, footnotes and math
//! - **Directives**: [`Node::ContainerDirective`] (`:::name`),
//!   [`Node::LeafDirective`] (`::name`) and [`Node::TextDirective`] (`:name`)
//! - **Render hints**: [`Node::Element`], carrying a tag name, properties and
//!   children for the downstream renderer
//!
//! # Example
//!
//! ```
//! use rw_mdast::{Directive, Node};
//!
//! let tree = Node::root(vec![
//!     Node::heading(2, vec![Node::text("Getting Started")]),
//!     Directive::new("embed")
//!         .with_attribute("id", "abc123")
//!         .with_children(vec![Node::text("youtube")])
//!         .into_leaf(),
//! ]);
//!
//! assert_eq!(tree.children().map(<[Node]>::len), Some(2));
//! assert_eq!(tree.to_plain_text(), "Getting Startedyoutube");
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize trees as mdast-compatible JSON, tagged by `"type"`.

mod content;
mod directive;
mod element;
mod heading;
mod node;

pub use content::{
    Definition, FootnoteDefinition, FootnoteReference, Image, ImageReference, LinkReference, List,
    ListItem, Math, Table,
};
pub use directive::{Directive, DirectiveKind};
pub use element::{Element, Properties, PropertyValue};
pub use heading::{Heading, HeadingData};
pub use node::{Code, Link, Node, Parent, Text};
