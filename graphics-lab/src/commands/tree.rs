//! Tree command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use lab_tree::{PartKind, Tree, TreeConfig, TreePart};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::utils::format_point;
use crate::utils::tree::{NodeType, TreeNode, TreeOptions, render_tree};

/// Children listed per branch before the rest are summarized
const CHILDREN_SHOWN: usize = 3;

#[derive(Subcommand)]
pub enum TreeCommands {
    /// Grow a tree and render its hierarchy
    Generate {
        /// Seed for the growth stream
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Levels of branching below the trunk
        #[arg(short, long, default_value_t = 3)]
        depth: u32,

        /// Children grown by the trunk
        #[arg(short, long, default_value_t = 5)]
        branches: u32,

        /// Trunk length
        #[arg(long, default_value_t = 1.0)]
        length: f64,

        /// Trunk width
        #[arg(long, default_value_t = 0.1)]
        width: f64,

        /// Deepest tree accepted
        #[arg(long, default_value_t = 6)]
        max_depth: u32,

        /// Maximum depth to display
        #[arg(long)]
        show_depth: Option<usize>,

        /// List every child instead of the first few
        #[arg(long)]
        all: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Hide part sizes and placement
        #[arg(long)]
        no_metadata: bool,

        /// Compact output with inline metadata
        #[arg(long)]
        compact: bool,
    },
}

pub fn execute(command: TreeCommands) -> Result<()> {
    match command {
        TreeCommands::Generate {
            seed,
            depth,
            branches,
            length,
            width,
            max_depth,
            show_depth,
            all,
            no_color,
            no_metadata,
            compact,
        } => {
            let config = TreeConfig {
                max_depth,
                ..TreeConfig::default()
            };
            let mut rng = StdRng::seed_from_u64(seed);
            let tree = Tree::generate(&mut rng, depth, branches, length, width, &config)
                .context("Failed to grow tree")?;

            let options = TreeOptions {
                max_depth: show_depth,
                no_color,
                show_metadata: !no_metadata,
                compact,
            };
            let limit = if all { usize::MAX } else { CHILDREN_SHOWN };
            let root = build_node(tree.root(), "trunk", NodeType::Root, limit);
            print!("{}", render_tree(&root, &options));

            println!();
            println!("Branches: {}", tree.branch_count());
            println!("Leaves:   {}", tree.leaf_count());
            println!("Height:   {}", tree.height());
            if let Some(top) = tree
                .leaf_positions()
                .into_iter()
                .max_by(|a, b| a.z.total_cmp(&b.z))
            {
                println!("Highest leaf: {}", format_point(top));
            }
            Ok(())
        }
    }
}

fn build_node(part: &TreePart, name: &str, node_type: NodeType, limit: usize) -> TreeNode {
    let t = part.transform;
    let mut node = TreeNode::new(name, node_type)
        .with_metadata("length", format!("{:.3}", part.length))
        .with_metadata("width", format!("{:.3}", part.width));
    if node_type != NodeType::Root {
        node = node.with_metadata(
            "placement",
            format!("tz {:.3} rz {:.1} ry {:.1} rx {:.1}", t.tz, t.rz, t.ry, t.rx),
        );
    }

    let children = part.children();
    for (i, child) in children.iter().take(limit).enumerate() {
        let (label, child_type) = match &child.kind {
            PartKind::Leaf => (format!("leaf {i}"), NodeType::Leaf),
            PartKind::Branch(_) => (format!("branch {i}"), NodeType::Branch),
        };
        node = node.add_child(build_node(child, &label, child_type, limit));
    }
    if children.len() > limit {
        node = node.add_child(TreeNode::new(
            format!("... and {} more", children.len() - limit),
            NodeType::Summary,
        ));
    }
    node
}
