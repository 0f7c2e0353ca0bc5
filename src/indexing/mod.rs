// src/indexing/mod.rs

pub mod encode;

// Re-export public functions from submodules for easier access
pub use encode::{encode, lat_lng_to_geohash};
