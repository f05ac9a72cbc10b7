//! Error types for tree generation

use thiserror::Error;

/// Result type alias using [`TreeError`] as the error type.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while building a tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Requested depth would grow an unreasonably large tree
    #[error("Tree depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    /// A branch must have at least one child
    #[error("Branching factor must be at least 1")]
    NoBranches,

    /// Requested shape could hold more parts than allowed
    #[error("Tree could hold {parts} parts, more than the limit of {limit}")]
    TooLarge { parts: u64, limit: u64 },

    /// Trunk length or width is not positive and finite
    #[error("Invalid trunk dimensions: length {length}, width {width}")]
    InvalidDimensions { length: f64, width: f64 },
}
