//! Directive and heading transforms for RW markdown trees.
//!
//! Each transform rewrites a parsed [`rw_mdast::Node`] tree in place,
//! replacing recognized directives with [`rw_mdast::Element`] render hints:
//!
//! - [`CalloutTransform`] - `:::callout` containers become styled boxes
//! - [`EmbedTransform`] - `::embed[provider]{id=...}` becomes an `iframe`
//! - [`LinkPreviewTransform`] - `::link-preview{url=...}` becomes a card
//! - [`HeadingIdTransform`] - headings get slug anchors
//!
//! [`Pipeline`] runs them in order and applies the configured
//! [`FailurePolicy`].
//!
//! # Example
//!
//! ```
//! use rw_mdast::{Directive, Node};
//! use rw_transforms::{Pipeline, PipelineConfig};
//!
//! let mut tree = Node::root(vec![
//!     Directive::new("callout")
//!         .with_children(vec![
//!             Node::paragraph(vec![Node::text("info")]),
//!             Node::paragraph(vec![Node::text("Hello")]),
//!         ])
//!         .into_container(),
//! ]);
//!
//! Pipeline::from_config(PipelineConfig::default())
//!     .run(&mut tree)
//!     .unwrap();
//!
//! assert_eq!(tree.to_plain_text(), "Hello");
//! ```

mod callout;
pub mod classes;
mod config;
pub mod directive;
mod embed;
mod error;
mod heading_ids;
mod link_preview;
mod slug;
mod transform;
mod variant;
mod walk;

pub use callout::{CALLOUT_DIRECTIVE, CalloutConfig, CalloutTransform, Classification};
pub use classes::{DefaultStyles, StyleResolver};
pub use config::PipelineConfig;
pub use embed::{EMBED_DIRECTIVE, EmbedConfig, EmbedProvider, EmbedTransform};
pub use error::{MetadataError, TransformError, UnknownVariant};
pub use heading_ids::HeadingIdTransform;
pub use link_preview::{
    LINK_PREVIEW_DIRECTIVE, LinkMetadata, LinkPreviewConfig, LinkPreviewTransform,
    MetadataSource, UrlMetadata,
};
pub use slug::slugify;
pub use transform::{FailurePolicy, Pipeline, RunReport, Transform};
pub use variant::Variant;
