//! End-to-end tests against the public API

mod interpolation;
mod locomotion;
