//! Embed leaf directive.
//!
//! Converts `::embed[youtube]{id="abc123"}` into an `iframe` render hint whose
//! source comes from the provider's URL template.

use std::collections::BTreeMap;

use rw_mdast::{Directive, DirectiveKind, Element, Node};

use crate::classes;
use crate::directive::{self, DirectiveHandler, DirectiveOutput};
use crate::error::TransformError;
use crate::transform::Transform;

/// Directive name matched by [`EmbedTransform`].
pub const EMBED_DIRECTIVE: &str = "embed";

/// Placeholder replaced by the directive's `id` in source templates.
pub const ID_PLACEHOLDER: &str = "{id}";

const BASE_CLASS: &str = "w-full h-full rounded-lg aspect-video my-2";
const ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// An embed provider: how to build the frame source and its default classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedProvider {
    /// Source URL template; every `{id}` is replaced by the embed id.
    pub src_template: String,
    /// Classes added to every embed of this provider.
    pub class_name: String,
}

impl EmbedProvider {
    /// Create a provider.
    #[must_use]
    pub fn new(src_template: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            src_template: src_template.into(),
            class_name: class_name.into(),
        }
    }

    /// Build the frame source for `id`.
    ///
    /// # Example
    ///
    /// ```
    /// use rw_transforms::EmbedProvider;
    ///
    /// let provider = EmbedProvider::new("https://player.vimeo.com/video/{id}", "embed");
    /// assert_eq!(provider.src("42"), "https://player.vimeo.com/video/42");
    /// ```
    #[must_use]
    pub fn src(&self, id: &str) -> String {
        self.src_template.replace(ID_PLACEHOLDER, id)
    }
}

/// Embed transform configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Providers keyed by the directive label (e.g., `youtube`).
    pub providers: BTreeMap<String, EmbedProvider>,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EmbedConfig {
    /// Built-in providers: `youtube`, `vimeo` and `iframe`.
    #[must_use]
    pub fn builtin() -> Self {
        let providers = [
            (
                "youtube",
                EmbedProvider::new("https://www.youtube.com/embed/{id}", "embed embed-youtube"),
            ),
            (
                "vimeo",
                EmbedProvider::new("https://player.vimeo.com/video/{id}", "embed embed-vimeo"),
            ),
            ("iframe", EmbedProvider::new("{id}", "embed embed-iframe")),
        ]
        .into_iter()
        .map(|(key, provider)| (key.to_owned(), provider))
        .collect();

        Self { providers }
    }

    /// Add providers, replacing any existing provider with the same key.
    ///
    /// Later entries win; a replaced provider is not merged with the old one.
    #[must_use]
    pub fn with_providers(
        mut self,
        providers: impl IntoIterator<Item = (String, EmbedProvider)>,
    ) -> Self {
        self.providers.extend(providers);
        self
    }

    /// Look up a provider by key.
    #[must_use]
    pub fn provider(&self, key: &str) -> Option<&EmbedProvider> {
        self.providers.get(key)
    }
}

/// Converts `::embed` leaf directives into `iframe` elements.
///
/// Directives that do not have exactly one text child, name an unknown
/// provider, or lack an `id` attribute are left unchanged.
///
/// # Example
///
/// ```
/// use rw_mdast::{Directive, Node};
/// use rw_transforms::{EmbedConfig, EmbedTransform, Transform};
///
/// let mut tree = Node::root(vec![
///     Directive::new("embed")
///         .with_attribute("id", "abc123")
///         .with_children(vec![Node::text("youtube")])
///         .into_leaf(),
/// ]);
///
/// EmbedTransform::new(EmbedConfig::default()).transform(&mut tree).unwrap();
///
/// let Node::Element(frame) = &tree.children().unwrap()[0] else { panic!() };
/// assert_eq!(frame.property_str("src"), Some("https://www.youtube.com/embed/abc123"));
/// ```
pub struct EmbedTransform {
    config: EmbedConfig,
}

impl EmbedTransform {
    /// Create an embed transform.
    #[must_use]
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    /// Effective provider table.
    #[must_use]
    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }
}

impl DirectiveHandler for EmbedTransform {
    fn name(&self) -> &str {
        EMBED_DIRECTIVE
    }

    fn kind(&self) -> DirectiveKind {
        DirectiveKind::Leaf
    }

    fn process(&self, directive: &Directive) -> Result<DirectiveOutput, TransformError> {
        let Some(key) = directive.single_text() else {
            return Ok(DirectiveOutput::Skip);
        };
        let Some(provider) = self.config.provider(key.trim()) else {
            return Ok(DirectiveOutput::Skip);
        };
        // A missing id silently leaves the directive as written.
        let Some(id) = directive.attribute("id") else {
            return Ok(DirectiveOutput::Skip);
        };

        let extra = directive.attribute("class").unwrap_or_default();
        let class_name = classes::join(&[BASE_CLASS, provider.class_name.as_str(), extra]);

        let frame = Element::new("iframe")
            .with_property("src", provider.src(id.trim()))
            .with_property("width", "100%")
            .with_property("height", "480px")
            .with_property("frameBorder", "0")
            .with_property("allow", ALLOW)
            .with_property("allowFullScreen", true)
            .with_class(class_name);

        Ok(DirectiveOutput::replace(frame))
    }
}

impl Transform for EmbedTransform {
    fn name(&self) -> &str {
        EMBED_DIRECTIVE
    }

    fn transform(&self, tree: &mut Node) -> Result<(), TransformError> {
        directive::apply(tree, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rw_mdast::PropertyValue;

    fn embed(label: &str) -> Directive {
        Directive::new(EMBED_DIRECTIVE).with_children(vec![Node::text(label)])
    }

    fn run(config: EmbedConfig, node: Node) -> Node {
        let mut tree = Node::root(vec![node]);
        EmbedTransform::new(config).transform(&mut tree).unwrap();
        tree.children().unwrap()[0].clone()
    }

    fn frame(node: &Node) -> &Element {
        match node {
            Node::Element(element) => element,
            other => panic!("expected iframe element, got {other:?}"),
        }
    }

    #[test]
    fn test_youtube() {
        let node = run(
            EmbedConfig::default(),
            embed("youtube").with_attribute("id", "abc123").into_leaf(),
        );
        let element = frame(&node);

        assert_eq!(element.tag_name, "iframe");
        assert_eq!(
            element.property_str("src"),
            Some("https://www.youtube.com/embed/abc123")
        );
        assert_eq!(element.property_str("width"), Some("100%"));
        assert_eq!(element.property_str("height"), Some("480px"));
        assert_eq!(element.property_str("frameBorder"), Some("0"));
        assert_eq!(element.property_str("allow"), Some(ALLOW));
        assert_eq!(
            element.property("allowFullScreen"),
            Some(&PropertyValue::Bool(true))
        );
        assert_eq!(
            element.class_name(),
            Some("w-full h-full rounded-lg aspect-video my-2 embed embed-youtube")
        );
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_label_and_id_are_trimmed() {
        let node = run(
            EmbedConfig::default(),
            embed("  vimeo ").with_attribute("id", " 42 ").into_leaf(),
        );

        assert_eq!(
            frame(&node).property_str("src"),
            Some("https://player.vimeo.com/video/42")
        );
    }

    #[test]
    fn test_iframe_passes_id_through() {
        let node = run(
            EmbedConfig::default(),
            embed("iframe")
                .with_attribute("id", "https://example.com/widget")
                .into_leaf(),
        );

        assert_eq!(
            frame(&node).property_str("src"),
            Some("https://example.com/widget")
        );
    }

    #[test]
    fn test_class_attribute_is_appended() {
        let node = run(
            EmbedConfig::default(),
            embed("youtube")
                .with_attribute("id", "x")
                .with_attribute("class", "shadow")
                .into_leaf(),
        );

        assert!(frame(&node).class_name().unwrap().ends_with("embed-youtube shadow"));
    }

    #[test]
    fn test_unknown_provider_untouched() {
        let original = embed("unknown-provider").with_attribute("id", "x").into_leaf();
        assert_eq!(run(EmbedConfig::default(), original.clone()), original);
    }

    #[test]
    fn test_missing_id_untouched() {
        let original = embed("youtube").into_leaf();
        assert_eq!(run(EmbedConfig::default(), original.clone()), original);
    }

    #[test]
    fn test_wrong_shapes_untouched() {
        let shapes = [
            Directive::new(EMBED_DIRECTIVE)
                .with_attribute("id", "x")
                .into_leaf(),
            Directive::new(EMBED_DIRECTIVE)
                .with_attribute("id", "x")
                .with_children(vec![Node::text("youtube"), Node::text("vimeo")])
                .into_leaf(),
            Directive::new(EMBED_DIRECTIVE)
                .with_attribute("id", "x")
                .with_children(vec![Node::paragraph(vec![Node::text("youtube")])])
                .into_leaf(),
            embed("youtube").with_attribute("id", "x").into_container(),
            Directive::new("video")
                .with_attribute("id", "x")
                .with_children(vec![Node::text("youtube")])
                .into_leaf(),
        ];

        for original in shapes {
            assert_eq!(run(EmbedConfig::default(), original.clone()), original);
        }
    }

    #[test]
    fn test_second_run_is_noop() {
        let mut tree = Node::root(vec![embed("youtube").with_attribute("id", "x").into_leaf()]);
        let transform = EmbedTransform::new(EmbedConfig::default());

        transform.transform(&mut tree).unwrap();
        let once = tree.clone();
        transform.transform(&mut tree).unwrap();

        assert_eq!(tree, once);
    }

    #[test]
    fn test_custom_provider() {
        let config = EmbedConfig::default().with_providers([(
            "loom".to_owned(),
            EmbedProvider::new("https://www.loom.com/embed/{id}", "embed embed-loom"),
        )]);
        let node = run(config, embed("loom").with_attribute("id", "l1").into_leaf());

        assert_eq!(
            frame(&node).property_str("src"),
            Some("https://www.loom.com/embed/l1")
        );
    }

    #[test]
    fn test_override_replaces_whole_provider() {
        let config = EmbedConfig::default().with_providers([(
            "youtube".to_owned(),
            EmbedProvider::new("https://www.youtube-nocookie.com/embed/{id}", ""),
        )]);
        let node = run(config, embed("youtube").with_attribute("id", "x").into_leaf());
        let element = frame(&node);

        assert_eq!(
            element.property_str("src"),
            Some("https://www.youtube-nocookie.com/embed/x")
        );
        assert_eq!(
            element.class_name(),
            Some("w-full h-full rounded-lg aspect-video my-2")
        );
    }

    #[test]
    fn test_builtin_keys() {
        let config = EmbedConfig::builtin();
        let keys: Vec<_> = config.providers.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["iframe", "vimeo", "youtube"]);
    }
}
