//! Diamond-square subdivision
//!
//! The generator walks the grid recursively by index ranges. At each level
//! it places a displaced midpoint in every quadrant (diamond step), then
//! fills the edge midpoints around each new point from whichever locked
//! neighbors exist (square step). Noise shrinks geometrically with depth.
//! The outermost level counts as depth 1, so its points get noise scaled
//! by `base_variance * roughness` (0.2 with the defaults) rather than
//! starting one level deeper.
//!
//! Cells shared between neighboring branches are committed by whichever
//! branch reaches them first; later visits leave them untouched.

use log::{debug, trace, warn};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::config::TerrainConfig;
use crate::error::{Result, TerrainError};
use crate::height_field::HeightField;

/// Builds fully locked height fields from a validated [`TerrainConfig`].
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    config: TerrainConfig,
}

impl TerrainGenerator {
    /// Create a generator, rejecting invalid parameters up front
    pub fn new(config: TerrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parameters this generator was built with
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Run one generation pass drawing noise from `rng`.
    ///
    /// The same seed and configuration always produce the same field.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<HeightField> {
        let size = self.config.size();
        let mut field = HeightField::seeded(size, self.config.center_elevation);

        let mut pass = Subdivision {
            field: &mut field,
            config: &self.config,
            rng,
            diamonds: 0,
            edges: 0,
            suppressed: 0,
        };
        let full = Span::new(0, size - 1);
        pass.subdivide(size, full, full, 1);

        debug!(
            "Generated {}x{} height field: {} diamond points, {} edge points, {} suppressed",
            size, size, pass.diamonds, pass.edges, pass.suppressed
        );

        let unlocked = field.unlocked_count();
        if unlocked > 0 {
            return Err(TerrainError::Incomplete { unlocked });
        }
        Ok(field)
    }
}

/// Inclusive index range along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    low: usize,
    high: usize,
}

impl Span {
    fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    fn mid(self) -> usize {
        (self.low + self.high) / 2
    }

    fn halves(self) -> [Self; 2] {
        let mid = self.mid();
        [Self::new(self.low, mid), Self::new(mid, self.high)]
    }
}

/// Split a square into its four quadrants in row-major order
fn quadrants(rows: Span, cols: Span) -> [(Span, Span); 4] {
    let [top, bottom] = rows.halves();
    let [left, right] = cols.halves();
    [(top, left), (top, right), (bottom, left), (bottom, right)]
}

/// Left, top, right and bottom neighbors at `offset`, dropping any that
/// fall outside a `size x size` grid.
fn cross(size: usize, row: usize, col: usize, offset: usize) -> [Option<(usize, usize)>; 4] {
    let inside = |r: Option<usize>, c: Option<usize>| match (r, c) {
        (Some(r), Some(c)) if r < size && c < size => Some((r, c)),
        _ => None,
    };
    [
        inside(Some(row), col.checked_sub(offset)),
        inside(row.checked_sub(offset), Some(col)),
        inside(Some(row), col.checked_add(offset)),
        inside(row.checked_add(offset), Some(col)),
    ]
}

/// State of a single generation pass
struct Subdivision<'a, R: Rng + ?Sized> {
    field: &'a mut HeightField,
    config: &'a TerrainConfig,
    rng: &'a mut R,
    diamonds: usize,
    edges: usize,
    suppressed: usize,
}

impl<R: Rng + ?Sized> Subdivision<'_, R> {
    fn subdivide(&mut self, size: usize, rows: Span, cols: Span, depth: u32) {
        let parts = quadrants(rows, cols);

        for (r, c) in parts {
            self.diamond_step(r, c, depth);
        }

        let half = size / 2;
        for (r, c) in parts {
            self.square_step(half, r.mid(), c.mid(), depth);
        }

        if size <= 1 {
            return;
        }

        for (r, c) in parts {
            self.subdivide(half, r, c, depth + 1);
        }
    }

    /// Displace the midpoint of a square from the mean of its corners
    fn diamond_step(&mut self, rows: Span, cols: Span, depth: u32) {
        let (row, col) = (rows.mid(), cols.mid());
        if self.field.locked_at(row, col) {
            return;
        }

        let corners = self.field.height_at(rows.low, cols.low)
            + self.field.height_at(rows.low, cols.high)
            + self.field.height_at(rows.high, cols.low)
            + self.field.height_at(rows.high, cols.high);
        let value = corners / 4.0 + self.noise(depth);

        trace!("diamond ({row}, {col}) depth {depth} -> {value:.5}");
        if self.field.lock(row, col, value) {
            self.diamonds += 1;
        }
    }

    /// Fill the four edge midpoints around a diamond point
    fn square_step(&mut self, size: usize, row: usize, col: usize, depth: u32) {
        if size <= 1 {
            return;
        }
        let half = size / 2;
        for (r, c) in cross(self.field.size(), row, col, half).into_iter().flatten() {
            self.edge_point(r, c, half, depth);
        }
    }

    /// Average the locked neighbors of an edge point, skipping missing
    /// ones, and commit the displaced result.
    fn edge_point(&mut self, row: usize, col: usize, offset: usize, depth: u32) {
        if self.field.locked_at(row, col) {
            return;
        }

        let (sum, count) = cross(self.field.size(), row, col, offset)
            .into_iter()
            .flatten()
            .filter(|&(r, c)| self.field.locked_at(r, c))
            .fold((0.0, 0usize), |(sum, count), (r, c)| {
                (sum + self.field.height_at(r, c), count + 1)
            });

        if count == 0 {
            // Left unlocked so a later visit can fill it
            self.suppressed += 1;
            trace!("edge ({row}, {col}) has no locked neighbors yet");
            return;
        }

        let value = sum / count as f64 + self.noise(depth);
        if !value.is_finite() {
            self.suppressed += 1;
            warn!("Discarding non-finite height at ({row}, {col})");
            return;
        }

        trace!("edge ({row}, {col}) depth {depth} from {count} neighbors -> {value:.5}");
        if self.field.lock(row, col, value) {
            self.edges += 1;
        }
    }

    fn noise(&mut self, depth: u32) -> f64 {
        let sample: f64 = StandardNormal.sample(&mut *self.rng);
        sample * self.config.variance_at(depth)
    }
}
