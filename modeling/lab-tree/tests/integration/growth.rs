//! Seeded tree growth

use lab_tree::{Tree, TreeConfig, TreeError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use test_case::test_case;

fn grow(seed: u64, depth: u32, branching: u32) -> Tree {
    let mut rng = StdRng::seed_from_u64(seed);
    Tree::generate(&mut rng, depth, branching, 1.0, 0.1, &TreeConfig::default()).unwrap()
}

#[test]
fn test_same_seed_same_tree() {
    assert_eq!(grow(42, 4, 5), grow(42, 4, 5));
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(grow(1, 3, 5), grow(2, 3, 5));
}

#[test_case(2, 1, 1 ; "single stem")]
#[test_case(3, 2, 3 ; "binary")]
#[test_case(2, 4, 2 ; "wide")]
fn test_fixed_branching_leaf_count(fan: u32, root: u32, depth: u32) {
    let config = TreeConfig {
        min_branching: fan,
        branching_spread: 1,
        ..TreeConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(8);
    let tree = Tree::generate(&mut rng, depth, root, 1.0, 0.1, &config).unwrap();

    let expected = root as usize * (fan as usize).pow(depth - 1);
    assert_eq!(tree.leaf_count(), expected);
    assert_eq!(tree.height(), depth as usize + 1);
}

#[test]
fn test_parts_shrink_with_depth() {
    let tree = grow(11, 3, 4);
    let mut widths = Vec::new();
    tree.visit(|depth, part| {
        if widths.len() <= depth {
            widths.resize(depth + 1, 0.0_f64);
        }
        widths[depth] = f64::max(widths[depth], part.width);
    });
    assert!(widths.windows(2).all(|w| w[1] < w[0]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_leaf_count_within_fan_bounds(seed in any::<u64>(), depth in 1u32..4, root in 1u32..6) {
        let tree = grow(seed, depth, root);
        let low = root as usize * 4usize.pow(depth - 1);
        let high = root as usize * 6usize.pow(depth - 1);
        prop_assert!(tree.leaf_count() >= low);
        prop_assert!(tree.leaf_count() <= high);
        prop_assert_eq!(tree.height(), depth as usize + 1);
    }
}

#[test]
fn test_huge_branching_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let result = Tree::generate(&mut rng, 2, 4_000_000_000, 1.0, 0.1, &TreeConfig::default());
    assert!(matches!(result, Err(TreeError::TooLarge { .. })));
}
