//! Command implementations for each modeling crate

#[cfg(feature = "terrain")]
pub mod terrain;

#[cfg(feature = "anim")]
pub mod anim;

#[cfg(feature = "tree")]
pub mod tree;
