//! Whole trees rooted at a trunk

use glam::{DMat4, DVec3};
use log::debug;
use rand::Rng;

use crate::config::TreeConfig;
use crate::error::Result;
use crate::part::{PartTransform, TreePart};

/// A generated tree placed on the ground plane
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct Tree {
    root: TreePart,
    position: DVec3,
}

impl Tree {
    /// Grow a tree whose trunk has the given size and first branching
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        depth: u32,
        branching: u32,
        length: f64,
        width: f64,
        config: &TreeConfig,
    ) -> Result<Self> {
        config.check_root(depth, branching, length, width)?;
        debug!(
            "growing tree: depth {depth}, branching {branching}, at most {} parts",
            config.max_parts(depth, branching)
        );

        let root = TreePart::generate(
            rng,
            depth,
            branching,
            length,
            width,
            PartTransform::default(),
            config,
        );
        debug!(
            "tree grown: {} branches, {} leaves",
            root.branch_count(),
            root.leaf_count()
        );
        Ok(Self {
            root,
            position: DVec3::ZERO,
        })
    }

    /// Move the tree to `(x, y)` on the ground plane
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = DVec3::new(x, y, 0.0);
        self
    }

    pub fn root(&self) -> &TreePart {
        &self.root
    }

    /// Location of the tree as a scene element
    pub fn location(&self) -> DVec3 {
        self.position
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    pub fn branch_count(&self) -> usize {
        self.root.branch_count()
    }

    /// Number of levels from trunk to the deepest leaf
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Pre-order walk over every part with its depth below the trunk
    pub fn visit<F: FnMut(usize, &TreePart)>(&self, mut f: F) {
        self.root.visit(&mut f);
    }

    /// World positions of every leaf
    pub fn leaf_positions(&self) -> Vec<DVec3> {
        self.root
            .leaf_positions(DMat4::from_translation(self.position))
    }
}
