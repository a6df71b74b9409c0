//! Integration test utilities for the blog API
//!
//! Spawns the real Axum application on a local port over in-memory storage
//! and drives it with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
