// src/traversal/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod adjacency;
pub mod neighbors;

// Re-export public API functions
pub use adjacency::get_adjacent;
pub use neighbors::{get_neighbors, neighbors_with_center};
