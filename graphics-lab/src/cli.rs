//! Root CLI structure for graphics-lab

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "graphics-lab")]
#[command(about = "Procedural terrain, keyframed gaits and branching trees", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fractal terrain operations
    #[cfg(feature = "terrain")]
    Terrain {
        #[command(subcommand)]
        command: crate::commands::terrain::TerrainCommands,
    },

    /// Keyframe gait and locomotion operations
    #[cfg(feature = "anim")]
    Anim {
        #[command(subcommand)]
        command: crate::commands::anim::AnimCommands,
    },

    /// Branching tree operations
    #[cfg(feature = "tree")]
    Tree {
        #[command(subcommand)]
        command: crate::commands::tree::TreeCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
