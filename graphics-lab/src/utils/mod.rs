//! Shared utilities for the graphics-lab CLI

pub mod format;
pub mod table;
pub mod tree;

pub use format::*;
pub use table::*;
