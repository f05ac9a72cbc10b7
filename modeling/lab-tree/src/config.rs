//! Shape parameters for generated trees

use crate::error::{Result, TreeError};

/// Growth rules applied to every child branch.
///
/// Child sizes are drawn relative to the parent: a ratio plus a normally
/// distributed jitter scaled by the same parent dimension. Rotations are
/// uniform in `[0, max)` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TreeConfig {
    /// Deepest recursion accepted by the generator
    pub max_depth: u32,
    /// Most parts a generated tree may hold
    pub part_limit: u64,
    /// Largest tilt about the x axis, in degrees
    pub max_tilt_x: f64,
    /// Largest tilt about the y axis, in degrees
    pub max_tilt_y: f64,
    /// Largest twist about the z axis, in degrees
    pub max_twist: f64,
    /// Fewest children grown by an inner branch
    pub min_branching: u32,
    /// Number of extra child counts above the minimum, drawn uniformly
    pub branching_spread: u32,
    /// Mean child length as a fraction of the parent length
    pub length_ratio: f64,
    /// Standard deviation of child length as a fraction of the parent length
    pub length_jitter: f64,
    /// Mean child width as a fraction of the parent width
    pub width_ratio: f64,
    /// Standard deviation of child width as a fraction of the parent width
    pub width_jitter: f64,
    /// Lowest attachment point along the parent, as a fraction of its length
    pub attach_ratio: f64,
    /// Extra attachment height above `attach_ratio`, drawn uniformly
    pub attach_spread: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            part_limit: 1 << 20,
            max_tilt_x: 30.0,
            max_tilt_y: 70.0,
            max_twist: 70.0,
            min_branching: 4,
            branching_spread: 3,
            length_ratio: 0.6,
            length_jitter: 0.05,
            width_ratio: 0.4,
            width_jitter: 0.05,
            attach_ratio: 0.7,
            attach_spread: 0.15,
        }
    }
}

impl TreeConfig {
    /// Check a requested root shape against these rules
    pub fn check_root(&self, depth: u32, branching: u32, length: f64, width: f64) -> Result<()> {
        if depth > self.max_depth {
            return Err(TreeError::DepthTooLarge {
                depth,
                max: self.max_depth,
            });
        }
        if depth > 0 && branching == 0 {
            return Err(TreeError::NoBranches);
        }
        if self.min_branching == 0 && self.branching_spread <= 1 {
            return Err(TreeError::NoBranches);
        }
        if !(length.is_finite() && length > 0.0 && width.is_finite() && width > 0.0) {
            return Err(TreeError::InvalidDimensions { length, width });
        }
        let parts = self.max_parts(depth, branching);
        if parts > self.part_limit {
            return Err(TreeError::TooLarge {
                parts,
                limit: self.part_limit,
            });
        }
        Ok(())
    }

    /// Largest number of parts a tree of `depth` levels below the root can hold
    pub fn max_parts(&self, depth: u32, branching: u32) -> u64 {
        let fan = u64::from(self.min_branching + self.branching_spread.saturating_sub(1));
        let mut level = 1u64;
        let mut total = 1u64;
        for d in 0..depth {
            let width = if d == 0 { u64::from(branching) } else { fan };
            level = level.saturating_mul(width);
            total = total.saturating_add(level);
        }
        total
    }
}
