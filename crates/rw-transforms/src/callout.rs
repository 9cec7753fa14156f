//! Callout container directive.
//!
//! Converts `:::callout` containers into a titled or untitled `div`:
//!
//! ```markdown
//! :::callout{title="Heads up"}
//! warning
//!
//! Body content here.
//! :::
//! ```
//!
//! The first child is the classification signal (`warning` above) and is not
//! rendered. The remaining children become the callout content.

use std::collections::{BTreeMap, BTreeSet};

use rw_mdast::{Directive, DirectiveKind, Element, Node};

use crate::classes::{DefaultStyles, StyleResolver};
use crate::directive::{self, DirectiveHandler, DirectiveOutput};
use crate::error::TransformError;
use crate::transform::Transform;
use crate::Variant;

/// Directive name matched by [`CalloutTransform`].
pub const CALLOUT_DIRECTIVE: &str = "callout";

/// Classification text used when the first child has no text.
const FALLBACK_CLASSIFIER: &str = "default";

const TITLE_CLASS: &str = "callout-title";
const ICON_CLASS: &str = "mr-2 callout-icon";
const TITLE_TEXT_CLASS: &str = "mb-1 font-medium leading-none tracking-tight callout-title-text";
const CONTENT_CLASS: &str = "text-sm [&_p]:leading-relaxed callout-content";

/// Callout transform configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalloutConfig {
    /// Variants recognized as classification words.
    ///
    /// A word naming a variant outside this set falls back to
    /// [`default_variant`](Self::default_variant).
    pub directive_names: BTreeSet<Variant>,
    /// Variant used when classification does not match.
    pub default_variant: Variant,
    /// Title used when the directive has no non-empty `title` attribute.
    pub title_override: Option<String>,
    /// Extra classification words mapped to variants (e.g., `note` → info).
    pub aliases: BTreeMap<String, Variant>,
    /// Icon glyph per variant. Missing entries render an empty icon.
    pub icons: BTreeMap<Variant, String>,
}

impl Default for CalloutConfig {
    fn default() -> Self {
        Self {
            directive_names: Variant::ALL.into_iter().collect(),
            default_variant: Variant::Default,
            title_override: None,
            aliases: BTreeMap::new(),
            icons: default_icons(),
        }
    }
}

fn default_icons() -> BTreeMap<Variant, String> {
    [
        (Variant::Default, "💡"),
        (Variant::Info, "ℹ️"),
        (Variant::Warning, "⚠️"),
        (Variant::Danger, "🚫"),
        (Variant::Success, "✅"),
    ]
    .into_iter()
    .map(|(variant, icon)| (variant, icon.to_owned()))
    .collect()
}

/// Result of classifying a callout's first child.
#[derive(Debug, PartialEq, Eq)]
pub struct Classification {
    /// Trimmed, lower-cased classification text, kept verbatim for the
    /// `callout-{raw}` class hook.
    pub raw: String,
    /// Resolved variant.
    pub variant: Variant,
}

/// Converts `:::callout` container directives into styled `div` elements.
///
/// # Example
///
/// ```
/// use rw_mdast::{Directive, Node};
/// use rw_transforms::{CalloutConfig, CalloutTransform, Transform};
///
/// let mut tree = Node::root(vec![
///     Directive::new("callout")
///         .with_attribute("title", "Careful")
///         .with_children(vec![
///             Node::paragraph(vec![Node::text("Warning")]),
///             Node::paragraph(vec![Node::text("Back up first.")]),
///         ])
///         .into_container(),
/// ]);
///
/// CalloutTransform::new(CalloutConfig::default())
///     .transform(&mut tree)
///     .unwrap();
///
/// let Node::Element(callout) = &tree.children().unwrap()[0] else { panic!() };
/// assert!(callout.class_name().unwrap().ends_with("callout callout-warning"));
/// assert_eq!(callout.children.len(), 2);
/// ```
pub struct CalloutTransform {
    config: CalloutConfig,
    styles: Box<dyn StyleResolver>,
}

impl CalloutTransform {
    /// Create a callout transform with the default styles.
    #[must_use]
    pub fn new(mut config: CalloutConfig) -> Self {
        config.aliases = config
            .aliases
            .into_iter()
            .map(|(word, variant)| (word.trim().to_lowercase(), variant))
            .collect();
        Self {
            config,
            styles: Box::new(DefaultStyles),
        }
    }

    /// Replace the style resolver.
    #[must_use]
    pub fn with_styles(mut self, styles: impl StyleResolver + 'static) -> Self {
        self.styles = Box::new(styles);
        self
    }

    /// Classify a callout from the text of its first child.
    #[must_use]
    pub fn classify(&self, directive: &Directive) -> Classification {
        let text = directive
            .children
            .first()
            .map(Node::to_plain_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| FALLBACK_CLASSIFIER.to_owned());
        let raw = text.trim().to_lowercase();

        let variant = self
            .config
            .aliases
            .get(&raw)
            .copied()
            .or_else(|| raw.parse().ok())
            .filter(|variant| self.config.directive_names.contains(variant))
            .unwrap_or(self.config.default_variant);

        Classification { raw, variant }
    }

    fn title<'a>(&'a self, directive: &'a Directive) -> Option<&'a str> {
        directive
            .attribute("title")
            .filter(|title| !title.is_empty())
            .or(self.config.title_override.as_deref())
            .filter(|title| !title.is_empty())
    }

    fn icon(&self, variant: Variant) -> &str {
        self.config.icons.get(&variant).map_or("", String::as_str)
    }
}

impl DirectiveHandler for CalloutTransform {
    fn name(&self) -> &str {
        CALLOUT_DIRECTIVE
    }

    fn kind(&self) -> DirectiveKind {
        DirectiveKind::Container
    }

    fn process(&self, directive: &Directive) -> Result<DirectiveOutput, TransformError> {
        let Classification { raw, variant } = self.classify(directive);
        let hook = format!("callout-{raw}");
        let class_name = self.styles.resolve(variant, &["callout", hook.as_str()]);

        let mut callout = Element::new("div").with_class(class_name);
        if let Some(title) = self.title(directive) {
            callout = callout.with_child(title_block(self.icon(variant), title));
        }

        let content = Element::new("div")
            .with_class(CONTENT_CLASS)
            .with_children(directive.children.iter().skip(1).cloned().collect());

        Ok(DirectiveOutput::replace(callout.with_child(content)))
    }
}

impl Transform for CalloutTransform {
    fn name(&self) -> &str {
        CALLOUT_DIRECTIVE
    }

    fn transform(&self, tree: &mut Node) -> Result<(), TransformError> {
        directive::apply(tree, self)
    }
}

fn title_block(icon: &str, title: &str) -> Element {
    Element::new("div")
        .with_class(TITLE_CLASS)
        .with_child(
            Element::new("span")
                .with_class(ICON_CLASS)
                .with_child(Node::text(icon)),
        )
        .with_child(
            Element::new("span")
                .with_class(TITLE_TEXT_CLASS)
                .with_child(Node::text(title)),
        )
}
