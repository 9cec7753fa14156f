//! Aggregate pipeline configuration.

use crate::callout::CalloutConfig;
use crate::embed::EmbedConfig;
use crate::link_preview::LinkPreviewConfig;
use crate::transform::FailurePolicy;

/// Configuration for the standard [`Pipeline`](crate::Pipeline).
///
/// Every section defaults independently, so a partially specified
/// configuration keeps the defaults of everything it leaves out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Callout directive settings.
    pub callout: CalloutConfig,
    /// Embed provider table.
    pub embed: EmbedConfig,
    /// Link preview settings.
    pub link_preview: LinkPreviewConfig,
    /// What to do when a transform reports failures.
    pub on_error: FailurePolicy,
}
