//! Transform trait and ordered pipeline.
//!
//! - [`Transform`] - a named, in-place rewrite of a syntax tree
//! - [`Pipeline`] - transforms executed in insertion order
//!
//! Every transform is idempotent on its own output: replaced directives are
//! gone after the first pass and heading identifiers are recomputed from
//! unchanged text.

use rw_mdast::Node;

use crate::callout::CalloutTransform;
use crate::config::PipelineConfig;
use crate::embed::EmbedTransform;
use crate::error::TransformError;
use crate::heading_ids::HeadingIdTransform;
use crate::link_preview::LinkPreviewTransform;

/// A named in-place rewrite of a syntax tree.
///
/// Transforms are `Send + Sync` so a single pipeline can be shared between
/// threads processing independent documents.
pub trait Transform: Send + Sync {
    /// Name used in logs and error reports.
    fn name(&self) -> &str;

    /// Apply the transformation to `tree`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Partial`] when some directives could not be
    /// processed. Every other match in the tree has been replaced by then.
    fn transform(&self, tree: &mut Node) -> Result<(), TransformError>;
}

/// What the pipeline does when a transform reports failures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failures and keep running the remaining transforms.
    #[default]
    Collect,
    /// Stop at the first transform that reports a failure.
    Abort,
}

/// Outcome of a pipeline run under [`FailurePolicy::Collect`].
#[derive(Debug, Default)]
pub struct RunReport {
    /// Errors reported by transforms, in execution order.
    pub failures: Vec<TransformError>,
}

impl RunReport {
    /// Whether every transform completed without failures.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of per-directive failures.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.iter().map(|err| err.failures().len()).sum()
    }
}

/// An ordered list of transforms.
///
/// # Example
///
/// ```
/// use rw_mdast::{Directive, Node};
/// use rw_transforms::{Pipeline, PipelineConfig};
///
/// let mut tree = Node::root(vec![
///     Node::heading(1, vec![Node::text("Intro")]),
///     Directive::new("embed")
///         .with_attribute("id", "abc123")
///         .with_children(vec![Node::text("youtube")])
///         .into_leaf(),
/// ]);
///
/// let pipeline = Pipeline::from_config(PipelineConfig::default());
/// let report = pipeline.run(&mut tree).unwrap();
///
/// assert!(report.is_clean());
/// assert_eq!(
///     pipeline.transform_names(),
///     vec!["callout", "embed", "link-preview", "heading-ids"]
/// );
/// ```
#[derive(Default)]
pub struct Pipeline {
    transforms: Vec<Box<dyn Transform>>,
    policy: FailurePolicy,
}

impl Pipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard pipeline: callouts, embeds, link previews, then
    /// heading identifiers.
    #[must_use]
    pub fn from_config(config: PipelineConfig) -> Self {
        Self::new()
            .with(CalloutTransform::new(config.callout))
            .with(EmbedTransform::new(config.embed))
            .with(LinkPreviewTransform::new(config.link_preview))
            .with(HeadingIdTransform::new())
            .with_policy(config.on_error)
    }

    /// Append a transform.
    #[must_use]
    pub fn with(mut self, transform: impl Transform + 'static) -> Self {
        self.push(Box::new(transform));
        self
    }

    /// Set the failure policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append a boxed transform.
    pub fn push(&mut self, transform: Box<dyn Transform>) {
        self.transforms.push(transform);
    }

    /// Number of transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the pipeline has no transforms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Active failure policy.
    #[must_use]
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Transform names in execution order.
    #[must_use]
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Run every transform over `tree` in order.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], returns the first transform error and
    /// skips the remaining transforms. Under [`FailurePolicy::Collect`] this
    /// never fails; errors are returned in the [`RunReport`].
    pub fn run(&self, tree: &mut Node) -> Result<RunReport, TransformError> {
        let mut report = RunReport::default();

        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");

            let Err(err) = transform.transform(tree) else {
                continue;
            };
            if self.policy == FailurePolicy::Abort {
                return Err(err);
            }
            for failure in err.failures() {
                tracing::warn!(transform = transform.name(), "{failure}");
            }
            report.failures.push(err);
        }

        Ok(report)
    }
}
