//! Generation invariants for fractal height fields

use lab_terrain::{TerrainConfig, TerrainError, TerrainGenerator};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};
use test_case::test_case;

fn generate(level: u32, seed: u64) -> lab_terrain::HeightField {
    let generator = TerrainGenerator::new(TerrainConfig::with_level(level)).unwrap();
    generator.generate(&mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test_case(0 ; "level 0")]
#[test_case(1 ; "level 1")]
#[test_case(2 ; "level 2")]
#[test_case(5 ; "level 5")]
#[test_case(7 ; "level 7")]
fn test_every_cell_locked(level: u32) {
    let _ = env_logger::builder().is_test(true).try_init();
    let field = generate(level, 1234);
    let size = (1 << level) + 1;
    assert_eq!(field.size(), size);
    assert_eq!(field.unlocked_count(), 0);
    for row in 0..size {
        for col in 0..size {
            assert!(field.is_locked(row, col).unwrap());
        }
    }
}

#[test_case(3, 1)]
#[test_case(3, 99)]
#[test_case(6, 2024)]
fn test_border_is_flat(level: u32, seed: u64) {
    let field = generate(level, seed);
    let last = field.size() - 1;
    for i in 0..field.size() {
        assert_eq!(field.elevation(0, i).unwrap(), 0.0);
        assert_eq!(field.elevation(last, i).unwrap(), 0.0);
        assert_eq!(field.elevation(i, 0).unwrap(), 0.0);
        assert_eq!(field.elevation(i, last).unwrap(), 0.0);
    }
}

#[test]
fn test_center_keeps_seed_elevation() {
    for seed in 0..8 {
        let field = generate(5, seed);
        assert_eq!(field.elevation(16, 16).unwrap(), 0.6);
    }
}

#[test]
fn test_same_seed_is_bit_identical() {
    let a = generate(6, 77);
    let b = generate(6, 77);
    let a_bits: Vec<u64> = a.heights().iter().map(|h| h.to_bits()).collect();
    let b_bits: Vec<u64> = b.heights().iter().map(|h| h.to_bits()).collect();
    assert_eq!(a_bits, b_bits);
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(4, 1);
    let b = generate(4, 2);
    assert_ne!(a.heights(), b.heights());
}

#[test]
fn test_three_by_three_has_no_free_cells() {
    // Level 1 only has the border and the pinned center
    let field = generate(1, 5);
    let expected = vec![0.0, 0.0, 0.0, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0];
    assert_eq!(field.heights(), expected.as_slice());
}

#[test]
fn test_first_diamond_point_uses_one_scaled_sample() {
    let seed = 31;
    let field = generate(2, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let sample: f64 = StandardNormal.sample(&mut rng);
    let corners = (0.0 + 0.0 + 0.0 + 0.6) / 4.0;
    let expected = corners + sample * 0.5 * (1.0 / 2.5);

    assert!((field.elevation(1, 1).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_normals_are_unit_length() {
    let field = generate(4, 8);
    for row in 0..field.size() {
        for col in 0..field.size() {
            let n = field.normal(row, col).unwrap();
            assert!((n.length() - 1.0).abs() < 1e-9);
            assert!(n.z > 0.0);
        }
    }
}

#[test]
fn test_out_of_range_query_is_reported() {
    let field = generate(3, 8);
    match field.elevation(9, 0) {
        Err(TerrainError::OutOfBounds { row, col, size }) => {
            assert_eq!((row, col, size), (9, 0, 9));
        }
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
}

#[test]
fn test_stats_cover_seed_elevation() {
    let field = generate(5, 3);
    let stats = field.stats();
    assert!(stats.min <= 0.0);
    assert!(stats.max >= 0.6);
    assert!(stats.mean > 0.0);
}
