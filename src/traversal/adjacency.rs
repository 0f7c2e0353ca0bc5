// src/traversal/adjacency.rs

use log::trace;

use crate::constants::{BASE32_ALPHABET, BORDERS_TABLE, NEIGHBORS_TABLE};
use crate::geohash::{table_index, validate_geohash};
use crate::types::{Direction, Geohash, GeohashError};

/// Adjacent hash of `hash` in `dir`, written into a fresh `String`.
///
/// `hash` must be non-empty and validated. Recursion depth is bounded by the
/// hash length.
fn _adjacent_rec(hash: &str, dir: Direction) -> Result<String, GeohashError> {
  let bytes = hash.as_bytes();
  let Some((&last, prefix)) = bytes.split_last() else {
    return Err(GeohashError::HashInvalid);
  };
  let last = last.to_ascii_lowercase();
  let idx = table_index(dir, bytes.len());

  let mut base = String::new();
  base.try_reserve_exact(bytes.len())?;

  // Both halves of a validated hash are ASCII, so splitting at len - 1 is
  // always on a char boundary.
  let parent = &hash[..prefix.len()];
  if !parent.is_empty() && BORDERS_TABLE[idx].contains(&last) {
    // Crossing the edge of the parent cell: the parent moves too.
    trace!("geohash {} crosses its parent border moving {:?}", hash, dir);
    base.push_str(&_adjacent_rec(parent, dir)?);
  } else {
    // A single-character hash wraps around at the top level.
    base.push_str(parent);
  }

  let pos = NEIGHBORS_TABLE[idx]
    .iter()
    .position(|&c| c == last)
    .ok_or(GeohashError::Failed)?;
  base.push(BASE32_ALPHABET[pos] as char);
  Ok(base)
}

/// Returns the geohash of equal length adjacent to `hash` in direction `dir`.
///
/// Only the last character of each level is case-folded for the table lookup,
/// so an upper-case prefix that does not need to change is returned as given.
///
/// # Arguments
/// * `hash` - Origin geohash, 1 to 22 characters.
/// * `dir` - Cardinal direction to move in.
///
/// # Returns
/// `Ok(Geohash)` on success, `GeohashError::HashInvalid` for an empty, too long
/// or malformed hash, or `GeohashError::MemoryAlloc` on allocation failure.
pub fn get_adjacent(hash: &str, dir: Direction) -> Result<Geohash, GeohashError> {
  validate_geohash(hash)?;
  _adjacent_rec(hash, dir).map(Geohash::from_string_unchecked)
}
