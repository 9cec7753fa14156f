//! Link preview leaf directive.
//!
//! Converts `::link-preview{url="https://example.com/some-page"}` into a card:
//! an anchor wrapping a preview image, the page title and its domain.
//!
//! Metadata comes from a [`MetadataSource`]. The default [`UrlMetadata`]
//! derives everything from the URL itself and never touches the network.

use rw_mdast::{Directive, DirectiveKind, Element, Node};
use url::Url;

use crate::classes;
use crate::directive::{self, DirectiveHandler, DirectiveOutput};
use crate::error::{MetadataError, TransformError};
use crate::transform::Transform;

/// Directive name matched by [`LinkPreviewTransform`].
pub const LINK_PREVIEW_DIRECTIVE: &str = "link-preview";

const CARD_CLASS: &str =
    "relative w-full flex rounded-lg border my-2 bg-background text-foreground no-underline";
const DETAIL_CLASS: &str = "flex flex-col p-4 gap-2 items-start";
const ICON_SERVICE: &str = "https://icon.horse/icon/";

/// Preview metadata for a linked page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkMetadata {
    /// Page title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Domain without a leading `www.`.
    pub domain: String,
    /// Preview image URL.
    pub image: String,
}

/// Source of link preview metadata.
///
/// Called at most once per matched directive. Implementations doing real
/// network I/O must enforce their own timeouts; a failure only affects the
/// directive being processed.
pub trait MetadataSource: Send + Sync {
    /// Look up metadata for `url`.
    fn fetch(&self, url: &str) -> Result<LinkMetadata, MetadataError>;
}

/// Derives preview metadata from the shape of the URL.
///
/// - title: last non-empty path segment (or the domain), split on `-` with each
///   word capitalized
/// - domain: host without `www.`
/// - image: favicon service URL for the domain
///
/// # Example
///
/// ```
/// use rw_transforms::{MetadataSource, UrlMetadata};
///
/// let meta = UrlMetadata.fetch("https://www.example.com/docs/getting-started").unwrap();
/// assert_eq!(meta.title, "Getting Started");
/// assert_eq!(meta.domain, "example.com");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UrlMetadata;

impl MetadataSource for UrlMetadata {
    fn fetch(&self, url: &str) -> Result<LinkMetadata, MetadataError> {
        let parsed = parse_url(url)?;
        let host = parsed.host_str().unwrap_or_default();
        let domain = host.strip_prefix("www.").unwrap_or(host);

        let last_segment = parsed
            .path_segments()
            .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
            .unwrap_or(domain);
        let title = last_segment
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        Ok(LinkMetadata {
            title,
            description: format!("A link to {domain}"),
            domain: domain.to_owned(),
            image: format!("{ICON_SERVICE}{domain}"),
        })
    }
}

fn parse_url(url: &str) -> Result<Url, MetadataError> {
    Url::parse(url).map_err(|source| MetadataError::InvalidUrl {
        url: url.to_owned(),
        source,
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Link preview transform configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkPreviewConfig {
    /// Extra classes on the card anchor.
    pub class_name: String,
    /// Host substrings that disable previews (e.g., `example.com`).
    pub excluded_domains: Vec<String>,
}

impl Default for LinkPreviewConfig {
    fn default() -> Self {
        Self {
            class_name: "link-preview".to_owned(),
            excluded_domains: Vec::new(),
        }
    }
}

/// Converts childless `::link-preview` leaf directives into preview cards.
///
/// Directives with children are treated as manually resolved and left
/// unchanged, as are links whose host matches an excluded domain. An
/// unparseable `url` is reported as [`MetadataError::InvalidUrl`].
///
/// # Example
///
/// ```
/// use rw_mdast::{Directive, Node};
/// use rw_transforms::{LinkPreviewConfig, LinkPreviewTransform, Transform};
///
/// let mut tree = Node::root(vec![
///     Directive::new("link-preview")
///         .with_attribute("url", "https://example.com/some-page")
///         .into_leaf(),
/// ]);
///
/// LinkPreviewTransform::new(LinkPreviewConfig::default())
///     .transform(&mut tree)
///     .unwrap();
///
/// let Node::Element(card) = &tree.children().unwrap()[0] else { panic!() };
/// assert_eq!(card.tag_name, "a");
/// assert_eq!(tree.to_plain_text(), "Some Pageexample.com");
/// ```
pub struct LinkPreviewTransform {
    config: LinkPreviewConfig,
    source: Box<dyn MetadataSource>,
}

impl LinkPreviewTransform {
    /// Create a link preview transform backed by [`UrlMetadata`].
    #[must_use]
    pub fn new(config: LinkPreviewConfig) -> Self {
        Self {
            config,
            source: Box::new(UrlMetadata),
        }
    }

    /// Replace the metadata source.
    #[must_use]
    pub fn with_source(mut self, source: impl MetadataSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    fn is_excluded(&self, host: &str) -> bool {
        self.config
            .excluded_domains
            .iter()
            .filter(|domain| !domain.is_empty())
            .any(|domain| host.contains(domain.as_str()))
    }

    fn card(&self, url: &str, metadata: &LinkMetadata) -> Element {
        let class_name =
            classes::join(&[CARD_CLASS, "link-preview", self.config.class_name.as_str()]);

        let image = Element::new("img")
            .with_property("src", metadata.image.as_str())
            .with_property("alt", metadata.title.as_str());
        let detail = Element::new("div")
            .with_class(DETAIL_CLASS)
            .with_child(Element::new("h3").with_child(Node::text(&metadata.title)))
            .with_child(Element::new("p").with_child(Node::text(&metadata.domain)));

        Element::new("a")
            .with_property("href", url)
            .with_property("target", "_blank")
            .with_property("rel", "noopener noreferrer")
            .with_class(class_name)
            .with_child(image)
            .with_child(detail)
    }
}

impl DirectiveHandler for LinkPreviewTransform {
    fn name(&self) -> &str {
        LINK_PREVIEW_DIRECTIVE
    }

    fn kind(&self) -> DirectiveKind {
        DirectiveKind::Leaf
    }

    fn process(&self, directive: &Directive) -> Result<DirectiveOutput, TransformError> {
        if !directive.children.is_empty() {
            return Ok(DirectiveOutput::Skip);
        }

        let url = directive.attribute("url").unwrap_or_default();
        let parsed = parse_url(url)?;
        if self.is_excluded(parsed.host_str().unwrap_or_default()) {
            return Ok(DirectiveOutput::Skip);
        }

        let metadata = self.source.fetch(url)?;
        Ok(DirectiveOutput::replace(self.card(url, &metadata)))
    }
}

impl Transform for LinkPreviewTransform {
    fn name(&self) -> &str {
        LINK_PREVIEW_DIRECTIVE
    }

    fn transform(&self, tree: &mut Node) -> Result<(), TransformError> {
        directive::apply(tree, self)
    }
}
