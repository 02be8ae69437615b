//! Error types for primitive construction and item drawing.

use thiserror::Error;
use vitrine_core::{DimensionError, TransformError};

/// Errors constructing a primitive solid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrimitiveError {
    #[error("Invalid primitive parameter: {parameter} is not finite")]
    NonFinite { parameter: &'static str },

    #[error("Invalid primitive parameter: {parameter} is negative ({value})")]
    Negative { parameter: &'static str, value: f64 },
}

/// Errors building or drawing an item.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemError {
    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}
