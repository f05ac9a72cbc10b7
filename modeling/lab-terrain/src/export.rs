// export.rs - Write height fields out as heightmaps and normal maps

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{Result, TerrainError};
use crate::height_field::HeightField;

/// Output formats for heightmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightmapFormat {
    /// Little-endian `f32` values, row-major
    Raw,
    /// Portable GrayMap (binary P5)
    Pgm,
    /// Portable Network Graphics (requires the `image` feature)
    Png,
}

/// Options for heightmap export
#[derive(Debug, Clone)]
pub struct HeightmapOptions {
    /// Output format
    pub format: HeightmapFormat,
    /// Elevation mapped to black (defaults to the field minimum)
    pub min_height: Option<f64>,
    /// Elevation mapped to white (defaults to the field maximum)
    pub max_height: Option<f64>,
    /// Write rows bottom-up
    pub flip_y: bool,
    /// 8 or 16
    pub bits_per_pixel: u8,
}

impl Default for HeightmapOptions {
    fn default() -> Self {
        Self {
            format: HeightmapFormat::Pgm,
            min_height: None,
            max_height: None,
            flip_y: false,
            bits_per_pixel: 16,
        }
    }
}

/// Output formats for normal maps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalMapFormat {
    /// Little-endian `f32` xyz triples, row-major
    Raw,
    /// RGB PNG (requires the `image` feature)
    Png,
}

/// Options for normal map export
#[derive(Debug, Clone)]
pub struct NormalMapOptions {
    pub format: NormalMapFormat,
    /// Write rows bottom-up
    pub flip_y: bool,
}

impl Default for NormalMapOptions {
    fn default() -> Self {
        Self {
            format: NormalMapFormat::Png,
            flip_y: false,
        }
    }
}

/// Write a heightmap of `field` to `output_path`
pub fn export_heightmap<P: AsRef<Path>>(
    field: &HeightField,
    output_path: P,
    options: &HeightmapOptions,
) -> Result<()> {
    debug!(
        "Exporting {}x{} heightmap as {:?}",
        field.size(),
        field.size(),
        options.format
    );

    match options.format {
        HeightmapFormat::Raw => {
            let mut writer = BufWriter::new(File::create(output_path)?);
            write_raw_heightmap(field, &mut writer, options)?;
            writer.flush()?;
            Ok(())
        }
        HeightmapFormat::Pgm => {
            let mut writer = BufWriter::new(File::create(output_path)?);
            write_pgm_heightmap(field, &mut writer, options)?;
            writer.flush()?;
            Ok(())
        }
        HeightmapFormat::Png => {
            #[cfg(feature = "image")]
            {
                export_png_heightmap(field, output_path, options)
            }
            #[cfg(not(feature = "image"))]
            {
                let _ = output_path;
                Err(TerrainError::NotImplemented(
                    "PNG export requires the 'image' feature to be enabled".to_string(),
                ))
            }
        }
    }
}

/// Write a normal map of `field` to `output_path`
pub fn export_normal_map<P: AsRef<Path>>(
    field: &HeightField,
    output_path: P,
    options: &NormalMapOptions,
) -> Result<()> {
    match options.format {
        NormalMapFormat::Raw => {
            let mut writer = BufWriter::new(File::create(output_path)?);
            write_raw_normal_map(field, &mut writer, options)?;
            writer.flush()?;
            Ok(())
        }
        NormalMapFormat::Png => {
            #[cfg(feature = "image")]
            {
                export_png_normal_map(field, output_path, options)
            }
            #[cfg(not(feature = "image"))]
            {
                let _ = output_path;
                Err(TerrainError::NotImplemented(
                    "PNG export requires the 'image' feature to be enabled".to_string(),
                ))
            }
        }
    }
}

/// Write raw `f32` elevations
pub fn write_raw_heightmap<W: Write>(
    field: &HeightField,
    writer: &mut W,
    options: &HeightmapOptions,
) -> Result<()> {
    for row in row_order(field.size(), options.flip_y) {
        for col in 0..field.size() {
            let height = field.height_at(row, col) as f32;
            writer.write_all(&height.to_le_bytes())?;
        }
    }
    Ok(())
}

/// Write a binary PGM with 8 or 16 bits per pixel
pub fn write_pgm_heightmap<W: Write>(
    field: &HeightField,
    writer: &mut W,
    options: &HeightmapOptions,
) -> Result<()> {
    let max_value = max_pixel_value(options.bits_per_pixel)?;
    let (min, max) = height_range(field, options);
    let size = field.size();

    writeln!(writer, "P5")?;
    writeln!(writer, "{size} {size}")?;
    writeln!(writer, "{max_value}")?;

    for row in row_order(size, options.flip_y) {
        for col in 0..size {
            let value = normalize_height(field.height_at(row, col), min, max, max_value);
            if max_value > 255 {
                // PGM stores 16-bit samples big-endian
                writer.write_all(&(value as u16).to_be_bytes())?;
            } else {
                writer.write_all(&[value as u8])?;
            }
        }
    }
    Ok(())
}

/// Write raw `f32` normal triples
pub fn write_raw_normal_map<W: Write>(
    field: &HeightField,
    writer: &mut W,
    options: &NormalMapOptions,
) -> Result<()> {
    for row in row_order(field.size(), options.flip_y) {
        for col in 0..field.size() {
            let normal = field.normal(row, col)?.as_vec3();
            writer.write_all(&normal.x.to_le_bytes())?;
            writer.write_all(&normal.y.to_le_bytes())?;
            writer.write_all(&normal.z.to_le_bytes())?;
        }
    }
    Ok(())
}

#[cfg(feature = "image")]
fn export_png_heightmap<P: AsRef<Path>>(
    field: &HeightField,
    output_path: P,
    options: &HeightmapOptions,
) -> Result<()> {
    use image::{ImageBuffer, Luma};

    let max_value = max_pixel_value(options.bits_per_pixel)?;
    let (min, max) = height_range(field, options);
    let size = field.size() as u32;

    if max_value > 255 {
        let mut img = ImageBuffer::<Luma<u16>, Vec<u16>>::new(size, size);
        for (y, row) in row_order(field.size(), options.flip_y).enumerate() {
            for col in 0..field.size() {
                let value = normalize_height(field.height_at(row, col), min, max, max_value);
                img.put_pixel(col as u32, y as u32, Luma([value as u16]));
            }
        }
        img.save(output_path)?;
    } else {
        let mut img = ImageBuffer::<Luma<u8>, Vec<u8>>::new(size, size);
        for (y, row) in row_order(field.size(), options.flip_y).enumerate() {
            for col in 0..field.size() {
                let value = normalize_height(field.height_at(row, col), min, max, max_value);
                img.put_pixel(col as u32, y as u32, Luma([value as u8]));
            }
        }
        img.save(output_path)?;
    }
    Ok(())
}

#[cfg(feature = "image")]
fn export_png_normal_map<P: AsRef<Path>>(
    field: &HeightField,
    output_path: P,
    options: &NormalMapOptions,
) -> Result<()> {
    use image::{Rgb, RgbImage};

    let size = field.size() as u32;
    let mut img = RgbImage::new(size, size);
    for (y, row) in row_order(field.size(), options.flip_y).enumerate() {
        for col in 0..field.size() {
            let n = field.normal(row, col)?;
            // Map [-1, 1] to [0, 255]
            let encode = |v: f64| ((v * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8;
            img.put_pixel(col as u32, y as u32, Rgb([encode(n.x), encode(n.y), encode(n.z)]));
        }
    }
    img.save(output_path)?;
    Ok(())
}

fn row_order(size: usize, flip_y: bool) -> Box<dyn Iterator<Item = usize>> {
    if flip_y {
        Box::new((0..size).rev())
    } else {
        Box::new(0..size)
    }
}

fn max_pixel_value(bits_per_pixel: u8) -> Result<u32> {
    match bits_per_pixel {
        8 => Ok(255),
        16 => Ok(65535),
        other => Err(TerrainError::UnsupportedBitDepth(other)),
    }
}

fn height_range(field: &HeightField, options: &HeightmapOptions) -> (f64, f64) {
    let stats = field.stats();
    (
        options.min_height.unwrap_or(stats.min),
        options.max_height.unwrap_or(stats.max),
    )
}

/// Map `height` from `[min, max]` onto `[0, max_value]`, clamping outliers
fn normalize_height(height: f64, min: f64, max: f64, max_value: u32) -> u32 {
    let range = max - min;
    if range <= 0.0 {
        return 0;
    }
    let normalized = ((height - min) / range).clamp(0.0, 1.0);
    (normalized * f64::from(max_value)).round() as u32
}
