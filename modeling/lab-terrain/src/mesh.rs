//! Triangle mesh extraction for rendering a height field

use crate::error::Result;
use crate::height_field::HeightField;

/// Renderable surface built from a height field.
///
/// Vertex `(row, col)` is stored at index `row * size + col`. Each grid
/// quad contributes two triangles, matching a quad strip drawn along
/// every pair of adjacent rows.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct TerrainMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Build positions, normals and triangle indices for `field`
    pub fn from_field(field: &HeightField) -> Result<Self> {
        let size = field.size();
        let mut mesh = Self {
            positions: Vec::with_capacity(size * size),
            normals: Vec::with_capacity(size * size),
            indices: Vec::with_capacity(6 * (size - 1) * (size - 1)),
        };

        for row in 0..size {
            for col in 0..size {
                mesh.positions.push(field.point(row, col)?.as_vec3().to_array());
                mesh.normals.push(field.normal(row, col)?.as_vec3().to_array());
            }
        }

        for row in 0..size - 1 {
            for col in 0..size - 1 {
                let a = (row * size + col) as u32;
                let b = ((row + 1) * size + col) as u32;
                let c = a + 1;
                let d = b + 1;
                mesh.indices.extend_from_slice(&[a, b, c, c, b, d]);
            }
        }

        Ok(mesh)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Vertex order of the quad strip between `row` and `row + 1`.
///
/// Alternates between the two rows column by column, the order an
/// immediate-mode renderer would submit them in.
pub fn quad_strip(size: usize, row: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..size).flat_map(move |col| [(row, col), (row + 1, col)])
}
