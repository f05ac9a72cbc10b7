//! Error types for terrain generation, queries and export.
//!
//! Configuration problems are reported when a generator is built and are
//! fatal to that instance. Out-of-range grid queries are programming
//! errors; they are returned as [`TerrainError::OutOfBounds`] instead of
//! being clamped.

use thiserror::Error;

/// Result type alias using [`TerrainError`] as the error type.
pub type Result<T> = std::result::Result<T, TerrainError>;

/// Errors that can occur while generating, querying or exporting terrain.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// Underlying I/O error while writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested subdivision level would allocate an unreasonably large grid.
    #[error("Subdivision level {level} exceeds the maximum of {max}")]
    LevelTooLarge { level: u32, max: u32 },

    /// Roughness decay base outside the open interval (0, 1).
    #[error("Roughness must lie strictly between 0 and 1, got {0}")]
    InvalidRoughness(f64),

    /// Base variance is negative or not finite.
    #[error("Base variance must be finite and non-negative, got {0}")]
    InvalidVariance(f64),

    /// Seed elevation for the center vertex is not finite.
    #[error("Center elevation must be finite, got {0}")]
    InvalidElevation(f64),

    /// Grid query outside `[0, size - 1]`.
    #[error("Grid position ({row}, {col}) is outside a {size}x{size} height field")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Generation finished with cells that never received a value.
    #[error("{unlocked} cells were left unlocked after generation")]
    Incomplete { unlocked: usize },

    /// Export bit depth not supported by the selected format.
    #[error("Unsupported bits per pixel: {0}")]
    UnsupportedBitDepth(u8),

    /// Export format requires a cargo feature that is not enabled.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Error from the image encoder.
    #[cfg(feature = "image")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
