// src/traversal/neighbors.rs

use crate::types::{Direction, Geohash, GeohashError, Neighbors};

use super::adjacency::get_adjacent;

/// Computes the eight cells surrounding `hash`.
///
/// The cardinal neighbours are computed directly from `hash`. Each diagonal is
/// derived from an already computed cardinal neighbour (north-east is the
/// eastern neighbour of the northern one, and so on), so a failed cardinal
/// lookup ends the call before any diagonal is attempted.
///
/// # Returns
/// `Ok(Neighbors)` on success, or the first error met.
pub fn get_neighbors(hash: &str) -> Result<Neighbors, GeohashError> {
  let north = get_adjacent(hash, Direction::North)?;
  let east = get_adjacent(hash, Direction::East)?;
  let west = get_adjacent(hash, Direction::West)?;
  let south = get_adjacent(hash, Direction::South)?;

  let north_east = get_adjacent(north.as_str(), Direction::East)?;
  let north_west = get_adjacent(north.as_str(), Direction::West)?;
  let south_east = get_adjacent(south.as_str(), Direction::East)?;
  let south_west = get_adjacent(south.as_str(), Direction::West)?;

  Ok(Neighbors {
    north,
    east,
    west,
    south,
    north_east,
    north_west,
    south_east,
    south_west,
  })
}

/// The 3x3 block of cells centred on `hash`: its eight neighbours followed by
/// `hash` itself.
pub fn neighbors_with_center(hash: &str) -> Result<Vec<Geohash>, GeohashError> {
  let neighbors = get_neighbors(hash)?;
  let center = crate::geohash::string_to_geohash(hash)?;
  Ok(neighbors.with_center(center))
}
