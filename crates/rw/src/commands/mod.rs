//! CLI command implementations.

pub(crate) mod providers;
pub(crate) mod transform;

pub(crate) use providers::ProvidersArgs;
pub(crate) use transform::TransformArgs;
