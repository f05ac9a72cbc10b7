//! Generation parameters for fractal height fields

use crate::error::{Result, TerrainError};

/// Largest accepted subdivision level (a 4097 x 4097 grid).
pub const MAX_LEVEL: u32 = 12;

/// Parameters controlling a diamond-square pass.
///
/// Noise added at recursion depth `d` is a standard normal sample scaled
/// by `base_variance * roughness^d`, so smaller roughness values give
/// smoother surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TerrainConfig {
    /// Subdivision level `L`; the grid has `2^L + 1` vertices per side
    pub level: u32,
    /// Decay base applied per recursion depth, in (0, 1)
    pub roughness: f64,
    /// Noise scale at depth 0
    pub base_variance: f64,
    /// Elevation the center vertex is locked at before recursion
    pub center_elevation: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            level: 5,
            roughness: 0.4,
            base_variance: 0.5,
            center_elevation: 0.6,
        }
    }
}

impl TerrainConfig {
    /// Default parameters at the given subdivision level
    pub fn with_level(level: u32) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Number of vertices along one side of the grid
    pub fn size(&self) -> usize {
        (1usize << self.level) + 1
    }

    /// Noise scale used at the given recursion depth
    pub fn variance_at(&self, depth: u32) -> f64 {
        self.base_variance * self.roughness.powi(depth as i32)
    }

    /// Check every parameter, failing on the first invalid one
    pub fn validate(&self) -> Result<()> {
        if self.level > MAX_LEVEL {
            return Err(TerrainError::LevelTooLarge {
                level: self.level,
                max: MAX_LEVEL,
            });
        }
        if !(self.roughness > 0.0 && self.roughness < 1.0) {
            return Err(TerrainError::InvalidRoughness(self.roughness));
        }
        if !self.base_variance.is_finite() || self.base_variance < 0.0 {
            return Err(TerrainError::InvalidVariance(self.base_variance));
        }
        if !self.center_elevation.is_finite() {
            return Err(TerrainError::InvalidElevation(self.center_elevation));
        }
        Ok(())
    }
}
