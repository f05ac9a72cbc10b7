//! File export round trips through the filesystem

use lab_terrain::{
    HeightmapFormat, HeightmapOptions, NormalMapFormat, NormalMapOptions, TerrainConfig,
    TerrainGenerator, export_heightmap, export_normal_map,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use tempfile::TempDir;

fn field() -> lab_terrain::HeightField {
    let generator = TerrainGenerator::new(TerrainConfig::with_level(3)).unwrap();
    generator.generate(&mut StdRng::seed_from_u64(21)).unwrap()
}

#[test]
fn test_export_pgm_heightmap() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rock.pgm");
    let options = HeightmapOptions {
        format: HeightmapFormat::Pgm,
        bits_per_pixel: 8,
        ..HeightmapOptions::default()
    };

    export_heightmap(&field(), &path, &options).unwrap();

    let bytes = fs::read(&path).unwrap();
    let header = b"P5\n9 9\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(bytes.len(), header.len() + 81);
    // Range spans the field, so both extremes appear
    assert!(bytes[header.len()..].contains(&0));
    assert!(bytes[header.len()..].contains(&255));
}

#[test]
fn test_export_raw_heightmap_matches_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rock.raw");
    let field = field();
    let options = HeightmapOptions {
        format: HeightmapFormat::Raw,
        ..HeightmapOptions::default()
    };

    export_heightmap(&field, &path, &options).unwrap();

    let bytes = fs::read(&path).unwrap();
    let values: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    let expected: Vec<f32> = field.heights().iter().map(|h| *h as f32).collect();
    assert_eq!(values, expected);
}

#[test]
fn test_export_raw_normal_map() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rock.nrm");
    let options = NormalMapOptions {
        format: NormalMapFormat::Raw,
        ..NormalMapOptions::default()
    };

    export_normal_map(&field(), &path, &options).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 81 * 12);
}

#[cfg(not(feature = "image"))]
#[test]
fn test_png_requires_image_feature() {
    let dir = TempDir::new().unwrap();
    let options = HeightmapOptions {
        format: HeightmapFormat::Png,
        ..HeightmapOptions::default()
    };
    let result = export_heightmap(&field(), dir.path().join("rock.png"), &options);
    assert!(matches!(
        result,
        Err(lab_terrain::TerrainError::NotImplemented(_))
    ));
}

#[cfg(feature = "image")]
#[test]
fn test_export_png_heightmap() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rock.png");
    let options = HeightmapOptions {
        format: HeightmapFormat::Png,
        bits_per_pixel: 8,
        ..HeightmapOptions::default()
    };
    export_heightmap(&field(), &path, &options).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}
