//! Rocks: generated height fields placed in a scene

use glam::DVec3;
use rand::Rng;

use crate::config::TerrainConfig;
use crate::error::Result;
use crate::generator::TerrainGenerator;
use crate::height_field::HeightField;
use crate::mesh::TerrainMesh;

/// How far a rock is pushed below the ground plane so its flat border
/// is hidden and only the rough interior shows.
pub const ROCK_SINK_DEPTH: f64 = 0.15;

/// A fractal height field with a world position and uniform scale
#[derive(Debug, Clone)]
pub struct Rock {
    field: HeightField,
    position: DVec3,
    scale: f64,
}

impl Rock {
    /// Generate a rock at `(x, y)` on the ground plane
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        config: TerrainConfig,
        x: f64,
        y: f64,
        scale: f64,
    ) -> Result<Self> {
        let field = TerrainGenerator::new(config)?.generate(rng)?;
        Ok(Self {
            field,
            position: DVec3::new(x, y, 0.0),
            scale,
        })
    }

    /// Location of the rock as a scene element
    pub fn location(&self) -> DVec3 {
        self.position
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn field(&self) -> &HeightField {
        &self.field
    }

    /// Surface point `(row, col)` in world coordinates
    pub fn world_point(&self, row: usize, col: usize) -> Result<DVec3> {
        let local = self.field.point(row, col)?;
        Ok(self.position - DVec3::Z * ROCK_SINK_DEPTH + local * self.scale)
    }

    /// Renderable mesh in the rock's local frame
    pub fn mesh(&self) -> Result<TerrainMesh> {
        TerrainMesh::from_field(&self.field)
    }
}
