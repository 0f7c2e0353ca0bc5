// src/hierarchy/parent.rs

use crate::constants::MIN_GEOHASH_LENGTH;
use crate::geohash::{string_to_geohash, validate_geohash};
use crate::types::{Geohash, GeohashError};

/// Produces the enclosing geohash of `hash` at the shorter `parent_length`.
///
/// A geohash prefix always names the cell containing the longer hash, so the
/// parent is the first `parent_length` characters. Asking for the hash's own
/// length returns it unchanged.
///
/// # Returns
/// `Ok(Geohash)` on success, `GeohashError::HashInvalid` for a malformed hash,
/// or `GeohashError::LengthDomain` if `parent_length` is zero or longer than
/// the hash.
pub fn geohash_to_parent(hash: &str, parent_length: usize) -> Result<Geohash, GeohashError> {
  validate_geohash(hash)?;
  if parent_length < MIN_GEOHASH_LENGTH || parent_length > hash.len() {
    return Err(GeohashError::LengthDomain);
  }
  string_to_geohash(&hash[..parent_length])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_geohash_to_parent() {
    assert_eq!(geohash_to_parent("u4pruydqqvj", 5).unwrap(), "u4pru");
    assert_eq!(geohash_to_parent("u4pruydqqvj", 1).unwrap(), "u");
    assert_eq!(geohash_to_parent("u4pruydqqvj", 11).unwrap(), "u4pruydqqvj");
  }

  #[test]
  fn test_geohash_to_parent_domain() {
    assert_eq!(geohash_to_parent("u4pru", 0), Err(GeohashError::LengthDomain));
    assert_eq!(geohash_to_parent("u4pru", 6), Err(GeohashError::LengthDomain));
    assert_eq!(geohash_to_parent("", 1), Err(GeohashError::HashInvalid));
  }

  #[test]
  fn test_parent_contains_child_point() {
    let child = crate::encode(57.64911063015461, 10.40743969380855, 9).unwrap();
    let parent = geohash_to_parent(child.as_str(), 4).unwrap();
    assert_eq!(parent, crate::encode(57.64911063015461, 10.40743969380855, 4).unwrap());
  }
}
