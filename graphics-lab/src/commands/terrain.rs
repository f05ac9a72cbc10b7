//! Terrain command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use lab_terrain::{
    HeightField, HeightmapFormat, HeightmapOptions, NormalMapFormat, NormalMapOptions,
    TerrainConfig, TerrainGenerator, TerrainMesh, export_heightmap, export_normal_map,
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

use crate::utils::{add_table_row, create_table, format_length};

/// Generation parameters shared by every terrain command
#[derive(Args, Debug, Clone)]
pub struct GenerationArgs {
    /// Subdivision level; the grid is 2^level + 1 vertices wide
    #[arg(short, long, default_value_t = 5)]
    pub level: u32,

    /// Seed for the noise stream
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Per-depth noise decay, between 0 and 1
    #[arg(long, default_value_t = 0.4)]
    pub roughness: f64,

    /// Noise scale at the first subdivision
    #[arg(long, default_value_t = 0.5)]
    pub variance: f64,

    /// Elevation of the center vertex
    #[arg(long, default_value_t = 0.6)]
    pub center: f64,
}

impl GenerationArgs {
    fn config(&self) -> TerrainConfig {
        TerrainConfig {
            level: self.level,
            roughness: self.roughness,
            base_variance: self.variance,
            center_elevation: self.center,
        }
    }

    fn generate(&self) -> Result<HeightField> {
        let generator =
            TerrainGenerator::new(self.config()).context("Invalid terrain parameters")?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let field = generator
            .generate(&mut rng)
            .context("Terrain generation failed")?;
        info!(
            "Generated {}x{} terrain from seed {}",
            field.size(),
            field.size(),
            self.seed
        );
        Ok(field)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeightOutputFormat {
    Raw,
    Pgm,
    Png,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NormalOutputFormat {
    Raw,
    Png,
}

impl From<NormalOutputFormat> for NormalMapFormat {
    fn from(value: NormalOutputFormat) -> Self {
        match value {
            NormalOutputFormat::Raw => NormalMapFormat::Raw,
            NormalOutputFormat::Png => NormalMapFormat::Png,
        }
    }
}

#[derive(Subcommand)]
pub enum TerrainCommands {
    /// Generate a height field and print its statistics
    Generate {
        #[command(flatten)]
        params: GenerationArgs,

        /// Write the heightmap to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Heightmap file format
        #[arg(short, long, default_value = "pgm")]
        format: HeightOutputFormat,

        /// Bits per pixel for image formats (8 or 16)
        #[arg(long, default_value_t = 16)]
        bits: u8,

        /// Write rows bottom-up
        #[arg(long)]
        flip_y: bool,
    },

    /// Generate a height field and write its vertex normals
    Normals {
        #[command(flatten)]
        params: GenerationArgs,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Normal map file format
        #[arg(short, long, default_value = "png")]
        format: NormalOutputFormat,

        /// Write rows bottom-up
        #[arg(long)]
        flip_y: bool,
    },

    /// Build the render mesh and report its size
    Mesh {
        #[command(flatten)]
        params: GenerationArgs,
    },
}

pub fn execute(command: TerrainCommands) -> Result<()> {
    match command {
        TerrainCommands::Generate {
            params,
            output,
            format,
            bits,
            flip_y,
        } => execute_generate(&params, output.as_deref(), format, bits, flip_y),
        TerrainCommands::Normals {
            params,
            output,
            format,
            flip_y,
        } => execute_normals(&params, &output, format, flip_y),
        TerrainCommands::Mesh { params } => execute_mesh(&params),
    }
}

fn execute_generate(
    params: &GenerationArgs,
    output: Option<&Path>,
    format: HeightOutputFormat,
    bits: u8,
    flip_y: bool,
) -> Result<()> {
    let field = params.generate()?;
    let stats = field.stats();

    println!("⛰️  Terrain");
    println!("==========");
    let mut table = create_table(&["Property", "Value"]);
    add_table_row(&mut table, vec!["Level".to_string(), params.level.to_string()]);
    add_table_row(&mut table, vec!["Seed".to_string(), params.seed.to_string()]);
    add_table_row(
        &mut table,
        vec!["Size".to_string(), format!("{0}x{0}", field.size())],
    );
    add_table_row(&mut table, vec!["Min".to_string(), format_length(stats.min)]);
    add_table_row(&mut table, vec!["Max".to_string(), format_length(stats.max)]);
    add_table_row(&mut table, vec!["Mean".to_string(), format_length(stats.mean)]);
    table.printstd();

    if let Some(path) = output {
        write_heightmap(&field, path, format, bits, flip_y)?;
        println!("\n✓ Heightmap written to {}", path.display());
    }

    Ok(())
}

fn write_heightmap(
    field: &HeightField,
    path: &Path,
    format: HeightOutputFormat,
    bits: u8,
    flip_y: bool,
) -> Result<()> {
    let format = match format {
        HeightOutputFormat::Raw => HeightmapFormat::Raw,
        HeightOutputFormat::Pgm => HeightmapFormat::Pgm,
        HeightOutputFormat::Png => HeightmapFormat::Png,
        HeightOutputFormat::Json => return write_json(field, path),
    };
    let options = HeightmapOptions {
        format,
        flip_y,
        bits_per_pixel: bits,
        ..HeightmapOptions::default()
    };
    export_heightmap(field, path, &options)
        .with_context(|| format!("Failed to write heightmap: {}", path.display()))
}

#[cfg(feature = "serde")]
fn write_json(field: &HeightField, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    serde_json::to_writer(std::io::BufWriter::new(file), field)
        .with_context(|| format!("Failed to write JSON: {}", path.display()))
}

#[cfg(not(feature = "serde"))]
fn write_json(_field: &HeightField, _path: &Path) -> Result<()> {
    anyhow::bail!("JSON export requires the 'serde' feature")
}

fn execute_normals(
    params: &GenerationArgs,
    output: &Path,
    format: NormalOutputFormat,
    flip_y: bool,
) -> Result<()> {
    let field = params.generate()?;
    let options = NormalMapOptions {
        format: format.into(),
        flip_y,
    };
    export_normal_map(&field, output, &options)
        .with_context(|| format!("Failed to write normal map: {}", output.display()))?;
    println!("✓ Normal map written to {}", output.display());
    Ok(())
}

fn execute_mesh(params: &GenerationArgs) -> Result<()> {
    let field = params.generate()?;
    let mesh = TerrainMesh::from_field(&field).context("Failed to build terrain mesh")?;

    let mut table = create_table(&["Property", "Value"]);
    add_table_row(
        &mut table,
        vec!["Vertices".to_string(), mesh.vertex_count().to_string()],
    );
    add_table_row(
        &mut table,
        vec!["Triangles".to_string(), mesh.triangle_count().to_string()],
    );
    add_table_row(
        &mut table,
        vec!["Indices".to_string(), mesh.indices.len().to_string()],
    );
    table.printstd();
    Ok(())
}
