//! Fractal terrain generation
//!
//! Builds height fields over a `2^L + 1` square grid with diamond-square
//! midpoint displacement. The border is pinned at zero and the center at
//! a seed elevation, so the result reads as a rock or hill rising out of
//! a flat plane.
//!
//! # Example
//!
//! ```rust
//! use lab_terrain::{TerrainConfig, TerrainGenerator};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let generator = TerrainGenerator::new(TerrainConfig::with_level(4))?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let field = generator.generate(&mut rng)?;
//!
//! assert_eq!(field.size(), 17);
//! assert_eq!(field.elevation(0, 0)?, 0.0);
//! assert_eq!(field.elevation(8, 8)?, 0.6);
//! let normal = field.normal(3, 5)?;
//! assert!((normal.length() - 1.0).abs() < 1e-9);
//! # Ok::<(), lab_terrain::TerrainError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod height_field;
pub mod mesh;
pub mod rock;

pub use config::{MAX_LEVEL, TerrainConfig};
pub use error::{Result, TerrainError};
pub use export::{
    HeightmapFormat, HeightmapOptions, NormalMapFormat, NormalMapOptions, export_heightmap,
    export_normal_map,
};
pub use generator::TerrainGenerator;
pub use height_field::{HeightField, HeightStats};
pub use mesh::{TerrainMesh, quad_strip};
pub use rock::{ROCK_SINK_DEPTH, Rock};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
