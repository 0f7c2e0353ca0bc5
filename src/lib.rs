#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::missing_errors_doc)] // Errors are listed under `# Returns`
#![allow(clippy::cast_possible_truncation)] // Table indices are always below 32
#![allow(clippy::must_use_candidate)] // For functions where side effects are intended

//! `xs-geohash` encodes latitude/longitude points as Base32 geohashes, finds
//! the cells adjacent to a geohash, and tiles rectangular regions with cells of
//! a fixed length.
//!
//! ```
//! use xs_geohash::{encode, get_adjacent, hashes_for_region, Direction};
//!
//! # fn main() -> Result<(), xs_geohash::GeohashError> {
//! let hash = encode(42.6, -5.6, 5)?;
//! assert_eq!(hash, "ezs42");
//! assert_eq!(get_adjacent(hash.as_str(), Direction::North)?, "ezs48");
//!
//! let cells = hashes_for_region(52.0, 4.0, 0.4, 0.4, 5)?;
//! assert_eq!(cells.len(), 100);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation returns `Result<_, GeohashError>`; nothing panics or aborts
//! on bad input or allocation failure. Diagnostics go through the `log` facade.

// Declare modules
pub mod constants;
pub mod geohash;
pub mod hierarchy;
pub mod indexing;
pub mod iterators;
pub mod regions;
pub mod traversal;
pub mod types;

// Re-export key public types and functions for easier use
pub use constants::{BASE32_ALPHABET, INITIAL_REGION_CAPACITY, MAX_GEOHASH_LENGTH, MAX_REGION_ITERATIONS, MIN_GEOHASH_LENGTH};
pub use types::{BBox, CoordRange, Direction, Geohash, GeohashError, LatLng, Neighbors};

pub use geohash::{geohash_to_string, is_valid_geohash, string_to_geohash, validate_geohash};
pub use hierarchy::geohash_to_parent;
pub use indexing::{encode, lat_lng_to_geohash};
pub use iterators::RegionIter;
pub use regions::{hashes_for_region, hashes_for_region_with_options, region_iter, GeohashRegion, RegionOptions};
pub use traversal::{get_adjacent, get_neighbors, neighbors_with_center};
