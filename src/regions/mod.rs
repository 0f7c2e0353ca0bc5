// src/regions/mod.rs
#![allow(clippy::module_name_repetitions)]

pub mod region;

// Re-export public API functions
pub use region::{hashes_for_region, hashes_for_region_with_options, region_iter, GeohashRegion, RegionOptions};
