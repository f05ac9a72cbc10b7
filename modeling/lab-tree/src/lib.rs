//! Procedural branching trees
//!
//! Trees are grown recursively from a trunk. Each branch spawns a random
//! number of children that are shorter, thinner, tilted and twisted, and
//! the deepest level ends in leaves. All randomness comes from the
//! generator passed in, so a seed reproduces the same tree.
//!
//! # Example
//!
//! ```rust
//! use lab_tree::{Tree, TreeConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let tree = Tree::generate(&mut rng, 3, 5, 1.0, 0.1, &TreeConfig::default())?;
//!
//! assert_eq!(tree.height(), 4);
//! assert!(tree.leaf_count() >= 5 * 4 * 4);
//! # Ok::<(), lab_tree::TreeError>(())
//! ```

pub mod config;
pub mod error;
pub mod part;
pub mod tree;

pub use config::TreeConfig;
pub use error::{Result, TreeError};
pub use part::{PartKind, PartTransform, TreePart};
pub use tree::Tree;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
