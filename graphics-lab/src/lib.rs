//! graphics-lab library
//!
//! Command definitions and shared output helpers for the graphics-lab CLI.

#![allow(clippy::print_stdout)]

pub mod cli;
pub mod commands;
pub mod utils;
