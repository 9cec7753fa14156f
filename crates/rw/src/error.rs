//! CLI error types.

use rw_config::ConfigError;
use rw_transforms::TransformError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mdast JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Transform(#[from] TransformError),
}
