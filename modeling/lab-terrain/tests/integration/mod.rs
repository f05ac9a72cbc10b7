//! End-to-end tests against the public API

mod export;
mod generation;
mod properties;
