// src/geohash/string_conv.rs

use crate::types::{Geohash, GeohashError};

use super::validate_geohash;

/// Converts a string into a `Geohash`, validating it first.
///
/// The text is kept as given; no case normalisation takes place.
///
/// # Returns
/// `Ok(Geohash)` on success, or `GeohashError::HashInvalid`.
pub fn string_to_geohash(s: &str) -> Result<Geohash, GeohashError> {
  validate_geohash(s)?;
  let mut owned = String::new();
  owned.try_reserve_exact(s.len())?;
  owned.push_str(s);
  Ok(Geohash::from_string_unchecked(owned))
}

/// Converts a `Geohash` into an owned `String`.
#[must_use]
pub fn geohash_to_string(hash: &Geohash) -> String {
  hash.as_str().to_owned()
}
