//! Tree parts: branches and leaves placed relative to their parent

use glam::{DMat4, DVec3};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::config::TreeConfig;

/// Placement of a part in its parent's frame.
///
/// Applied as a translation along the parent's z axis followed by
/// rotations about z, y and x, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct PartTransform {
    pub tz: f64,
    pub rz: f64,
    pub ry: f64,
    pub rx: f64,
}

impl PartTransform {
    pub fn new(tz: f64, rz: f64, ry: f64, rx: f64) -> Self {
        Self { tz, rz, ry, rx }
    }

    /// Matrix taking the part's local frame into its parent's
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(DVec3::new(0.0, 0.0, self.tz))
            * DMat4::from_rotation_z(self.rz.to_radians())
            * DMat4::from_rotation_y(self.ry.to_radians())
            * DMat4::from_rotation_x(self.rx.to_radians())
    }
}

/// What a part is
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub enum PartKind {
    Leaf,
    Branch(Vec<TreePart>),
}

/// One node of a generated tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
pub struct TreePart {
    pub transform: PartTransform,
    pub length: f64,
    pub width: f64,
    pub kind: PartKind,
}

impl TreePart {
    /// Grow a subtree of `depth` levels below this part.
    ///
    /// A depth of 0 yields a leaf. Otherwise `branching` children are
    /// grown, each drawing its tilt, twist, child count, length, width and
    /// attachment height from `rng` in that order.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        depth: u32,
        branching: u32,
        length: f64,
        width: f64,
        transform: PartTransform,
        config: &TreeConfig,
    ) -> Self {
        if depth == 0 {
            return Self {
                transform,
                length,
                width,
                kind: PartKind::Leaf,
            };
        }

        let mut children = Vec::with_capacity(branching as usize);
        for index in 0..branching {
            let mut rx = config.max_tilt_x * rng.random::<f64>();
            let mut ry = config.max_tilt_y * rng.random::<f64>();
            let rz = config.max_twist * rng.random::<f64>();
            if index % 2 == 0 {
                rx = -rx;
                ry = -ry;
            }

            let child_branching = config.min_branching
                + if config.branching_spread > 0 {
                    rng.random_range(0..config.branching_spread)
                } else {
                    0
                };
            let length_noise: f64 = StandardNormal.sample(&mut *rng);
            let child_length =
                (config.length_ratio * length + config.length_jitter * length_noise * length)
                    .max(0.0);
            let width_noise: f64 = StandardNormal.sample(&mut *rng);
            let child_width =
                (config.width_ratio * width + config.width_jitter * width_noise * width).max(0.0);
            let tz = config.attach_ratio * length + config.attach_spread * rng.random::<f64>() * length;

            children.push(Self::generate(
                rng,
                depth - 1,
                child_branching,
                child_length,
                child_width,
                PartTransform::new(tz, rz, ry, rx),
                config,
            ));
        }

        Self {
            transform,
            length,
            width,
            kind: PartKind::Branch(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, PartKind::Leaf)
    }

    /// Direct children, empty for a leaf
    pub fn children(&self) -> &[TreePart] {
        match &self.kind {
            PartKind::Leaf => &[],
            PartKind::Branch(children) => children,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.kind {
            PartKind::Leaf => 1,
            PartKind::Branch(children) => children.iter().map(TreePart::leaf_count).sum(),
        }
    }

    pub fn branch_count(&self) -> usize {
        match &self.kind {
            PartKind::Leaf => 0,
            PartKind::Branch(children) => {
                1 + children.iter().map(TreePart::branch_count).sum::<usize>()
            }
        }
    }

    /// Number of levels, counting this part
    pub fn height(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(TreePart::height)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order walk passing each part and its depth below this one
    pub fn visit<F: FnMut(usize, &TreePart)>(&self, f: &mut F) {
        self.visit_at(0, f);
    }

    fn visit_at<F: FnMut(usize, &TreePart)>(&self, depth: usize, f: &mut F) {
        f(depth, self);
        for child in self.children() {
            child.visit_at(depth + 1, f);
        }
    }

    /// World positions of every leaf, with this part placed by `parent`.
    ///
    /// Children hang off the local origin of their parent branch, whose
    /// own transform is applied first.
    pub fn leaf_positions(&self, parent: DMat4) -> Vec<DVec3> {
        let mut positions = Vec::new();
        self.collect_leaves(parent, &mut positions);
        positions
    }

    fn collect_leaves(&self, parent: DMat4, out: &mut Vec<DVec3>) {
        let frame = parent * self.transform.matrix();
        match &self.kind {
            PartKind::Leaf => out.push(frame.transform_point3(DVec3::ZERO)),
            PartKind::Branch(children) => {
                for child in children {
                    child.collect_leaves(frame, out);
                }
            }
        }
    }
}
