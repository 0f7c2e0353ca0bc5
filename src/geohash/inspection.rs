// src/geohash/inspection.rs

use crate::constants::MAX_GEOHASH_LENGTH;
use crate::types::GeohashError;

use super::alphabet_index;

/// Checks that `hash` is a usable geohash.
///
/// A geohash must be 1 to 22 characters long and every character must belong
/// to the Base32 geohash alphabet. Upper-case input is accepted; adjacency only
/// case-folds the characters it actually consumes.
///
/// # Returns
/// `Ok(())` if valid, `Err(GeohashError::HashInvalid)` otherwise.
pub fn validate_geohash(hash: &str) -> Result<(), GeohashError> {
  if hash.is_empty() || hash.len() > MAX_GEOHASH_LENGTH {
    return Err(GeohashError::HashInvalid);
  }
  if hash
    .bytes()
    .all(|c| alphabet_index(c.to_ascii_lowercase()).is_some())
  {
    Ok(())
  } else {
    Err(GeohashError::HashInvalid)
  }
}

/// Returns whether `hash` is a valid geohash. See [`validate_geohash`].
#[must_use]
pub fn is_valid_geohash(hash: &str) -> bool {
  validate_geohash(hash).is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_valid_hashes() {
    assert!(is_valid_geohash("ezs42"));
    assert!(is_valid_geohash("u4pruydqqvj"));
    assert!(is_valid_geohash("0"));
    assert!(is_valid_geohash("zzzzzzzzzzzzzzzzzzzzzz")); // 22 chars
    assert!(is_valid_geohash("EZS42"));
  }

  #[test]
  fn test_invalid_hashes() {
    assert_eq!(validate_geohash(""), Err(GeohashError::HashInvalid));
    assert_eq!(validate_geohash("zzzzzzzzzzzzzzzzzzzzzzz"), Err(GeohashError::HashInvalid)); // 23 chars
    assert_eq!(validate_geohash("garbage"), Err(GeohashError::HashInvalid)); // 'a'
    assert_eq!(validate_geohash("u$pruydqqvj"), Err(GeohashError::HashInvalid));
    assert_eq!(validate_geohash("ezs4é"), Err(GeohashError::HashInvalid));
    assert!(!is_valid_geohash("ilo"));
  }
}
