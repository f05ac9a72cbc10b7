//! Square height field with per-vertex lock flags

use glam::DVec3;

use crate::error::{Result, TerrainError};

/// Summary of the elevations stored in a height field
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct HeightStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// A `size x size` grid of elevations.
///
/// Heights and lock flags live in two parallel row-major arrays. A cell
/// is locked once its final value is committed; the generator never
/// writes a locked cell again. Once generation returns, the field is
/// read-only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct HeightField {
    size: usize,
    heights: Vec<f64>,
    #[cfg_attr(feature = "serde-support", serde(skip))]
    locked: Vec<bool>,
}

impl HeightField {
    /// Allocate a zeroed field with the border locked and, when the grid
    /// has an interior, the center locked at `center_elevation`.
    pub(crate) fn seeded(size: usize, center_elevation: f64) -> Self {
        let mut field = Self {
            size,
            heights: vec![0.0; size * size],
            locked: vec![false; size * size],
        };

        let last = size - 1;
        for row in 0..size {
            for col in 0..size {
                if row == 0 || row == last || col == 0 || col == last {
                    field.locked[row * size + col] = true;
                }
            }
        }

        if size >= 3 {
            let center = size / 2;
            field.lock(center, center, center_elevation);
        }

        field
    }

    /// Number of vertices along one side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major elevations
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Locked height at `(row, col)`
    pub fn elevation(&self, row: usize, col: usize) -> Result<f64> {
        self.check(row, col)?;
        Ok(self.height_at(row, col))
    }

    /// Whether the cell at `(row, col)` has been committed
    pub fn is_locked(&self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;
        Ok(self.locked_at(row, col))
    }

    /// Number of cells that never received a committed value
    pub fn unlocked_count(&self) -> usize {
        self.locked.iter().filter(|locked| !**locked).count()
    }

    /// Surface point for `(row, col)`.
    ///
    /// The grid spans `[-0.5, 0.5]` in x (rows) and y (columns); z is the
    /// elevation.
    pub fn point(&self, row: usize, col: usize) -> Result<DVec3> {
        self.check(row, col)?;
        let span = (self.size - 1) as f64;
        Ok(DVec3::new(
            row as f64 / span - 0.5,
            col as f64 / span - 0.5,
            self.height_at(row, col),
        ))
    }

    /// Unit surface normal at `(row, col)` from central differences.
    ///
    /// Neighbors past the border are replaced by the border cell itself,
    /// so the field has zero slope outside the grid.
    pub fn normal(&self, row: usize, col: usize) -> Result<DVec3> {
        self.check(row, col)?;
        let last = self.size - 1;

        let up = row.saturating_sub(1);
        let down = (row + 1).min(last);
        let left = col.saturating_sub(1);
        let right = (col + 1).min(last);

        let normal = DVec3::new(
            self.height_at(up, col) - self.height_at(down, col),
            self.height_at(row, left) - self.height_at(row, right),
            2.0 / last as f64,
        );
        Ok(normal.normalize())
    }

    /// Minimum, maximum and mean elevation
    pub fn stats(&self) -> HeightStats {
        let (min, max, sum) = self.heights.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &h| (min.min(h), max.max(h), sum + h),
        );
        HeightStats {
            min,
            max,
            mean: sum / self.heights.len() as f64,
        }
    }

    /// Iterate over rows of elevations
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.heights.chunks_exact(self.size)
    }

    pub(crate) fn height_at(&self, row: usize, col: usize) -> f64 {
        self.heights[row * self.size + col]
    }

    pub(crate) fn locked_at(&self, row: usize, col: usize) -> bool {
        self.locked[row * self.size + col]
    }

    /// Commit `value` unless the cell is already locked. Returns whether
    /// the value was written.
    pub(crate) fn lock(&mut self, row: usize, col: usize, value: f64) -> bool {
        let index = row * self.size + col;
        if self.locked[index] {
            return false;
        }
        self.heights[index] = value;
        self.locked[index] = true;
        true
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(TerrainError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_field_locks_border_and_center() {
        let field = HeightField::seeded(5, 0.6);

        for i in 0..5 {
            assert!(field.locked_at(0, i));
            assert!(field.locked_at(4, i));
            assert!(field.locked_at(i, 0));
            assert!(field.locked_at(i, 4));
        }
        assert!(field.locked_at(2, 2));
        assert_eq!(field.height_at(2, 2), 0.6);
        assert!(!field.locked_at(1, 1));
        assert_eq!(field.unlocked_count(), 8);
    }

    #[test]
    fn test_tiny_field_keeps_flat_border() {
        // A 2x2 grid has no interior; the seed elevation must not leak onto the border
        let field = HeightField::seeded(2, 0.6);
        assert_eq!(field.unlocked_count(), 0);
        assert!(field.heights().iter().all(|h| *h == 0.0));
    }

    #[test]
    fn test_lock_never_overwrites() {
        let mut field = HeightField::seeded(3, 0.6);
        assert!(!field.lock(1, 1, 5.0));
        assert_eq!(field.height_at(1, 1), 0.6);
        assert!(!field.lock(0, 2, 1.0));
        assert_eq!(field.height_at(0, 2), 0.0);
    }

    #[test]
    fn test_out_of_bounds_queries() {
        let field = HeightField::seeded(3, 0.6);
        assert!(matches!(
            field.elevation(3, 0),
            Err(TerrainError::OutOfBounds {
                row: 3,
                col: 0,
                size: 3
            })
        ));
        assert!(field.normal(0, 7).is_err());
        assert!(field.point(9, 9).is_err());
        assert!(field.is_locked(2, 3).is_err());
    }

    #[test]
    fn test_flat_field_normal_points_up() {
        let field = HeightField::seeded(2, 0.6);
        let n = field.normal(0, 1).unwrap();
        assert!((n - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_normal_uses_clamped_differences() {
        let field = HeightField::seeded(3, 0.6);
        // At (1, 0) the left neighbor is clamped to the cell itself
        let n = field.normal(1, 0).unwrap();
        let expected = DVec3::new(0.0, 0.0 - 0.6, 1.0).normalize();
        assert!((n - expected).length() < 1e-12);

        // Center has symmetric neighbors, so the normal is straight up
        let n = field.normal(1, 1).unwrap();
        assert!((n - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_point_spans_unit_square() {
        let field = HeightField::seeded(3, 0.6);
        assert_eq!(field.point(0, 0).unwrap(), DVec3::new(-0.5, -0.5, 0.0));
        assert_eq!(field.point(1, 1).unwrap(), DVec3::new(0.0, 0.0, 0.6));
        assert_eq!(field.point(2, 2).unwrap(), DVec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn test_stats() {
        let field = HeightField::seeded(3, 0.9);
        let stats = field.stats();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.9);
        assert!((stats.mean - 0.1).abs() < 1e-12);
    }
}
