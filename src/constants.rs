//! Geohash core library constants.

/// The Base32 alphabet used by geohashes, indexed by 5-bit value.
/// The letters `a`, `i`, `l` and `o` are not part of it.
pub const BASE32_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits encoded by a single geohash character.
pub const BITS_PER_CHAR: u32 = 5;

/// Shortest geohash this library produces.
pub const MIN_GEOHASH_LENGTH: usize = 1;
/// Longest geohash this library produces. 22 characters is 110 bits, well past
/// the precision of an `f64` coordinate.
pub const MAX_GEOHASH_LENGTH: usize = 22;

/// Latitude bounds in decimal degrees.
pub const MIN_LAT: f64 = -90.0;
/// Latitude bounds in decimal degrees.
pub const MAX_LAT: f64 = 90.0;
/// Longitude bounds in decimal degrees.
pub const MIN_LNG: f64 = -180.0;
/// Longitude bounds in decimal degrees.
pub const MAX_LNG: f64 = 180.0;

/// Upper bound on sweep steps taken by the region tiler before it gives up.
pub const MAX_REGION_ITERATIONS: usize = 100_000;

/// Number of cells the region result reserves up front. Growth doubles from here.
pub const INITIAL_REGION_CAPACITY: usize = 128;

/// Neighbour lookup table, indexed by `direction * 2 + (hash_len % 2)`.
///
/// For a last character `c` of a hash, the position of `c` in the row gives the
/// alphabet index of the adjacent cell's last character.
#[rustfmt::skip]
pub(crate) const NEIGHBORS_TABLE: [&[u8; 32]; 8] = [
  b"p0r21436x8zb9dcf5h7kjnmqesgutwvy", // North, even
  b"bc01fg45238967deuvhjyznpkmstqrwx", // North, odd
  b"bc01fg45238967deuvhjyznpkmstqrwx", // East, even
  b"p0r21436x8zb9dcf5h7kjnmqesgutwvy", // East, odd
  b"238967debc01fg45kmstqrwxuvhjyznp", // West, even
  b"14365h7k9dcfesgujnmqp0r2twvyx8zb", // West, odd
  b"14365h7k9dcfesgujnmqp0r2twvyx8zb", // South, even
  b"238967debc01fg45kmstqrwxuvhjyznp", // South, odd
];

/// Border lookup table, same indexing as [`NEIGHBORS_TABLE`].
///
/// Lists the last characters that sit on the edge of their parent cell in the
/// given direction. Moving across one of them changes the parent as well.
#[rustfmt::skip]
pub(crate) const BORDERS_TABLE: [&[u8]; 8] = [
  b"prxz",     // North, even
  b"bcfguvyz", // North, odd
  b"bcfguvyz", // East, even
  b"prxz",     // East, odd
  b"0145hjnp", // West, even
  b"028b",     // West, odd
  b"028b",     // South, even
  b"0145hjnp", // South, odd
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_alphabet_is_strictly_ascending() {
    assert!(BASE32_ALPHABET.windows(2).all(|w| w[0] < w[1]));
    for excluded in [b'a', b'i', b'l', b'o'] {
      assert!(!BASE32_ALPHABET.contains(&excluded));
    }
  }

  #[test]
  fn test_neighbor_rows_are_permutations() {
    for row in NEIGHBORS_TABLE {
      let mut sorted = *row;
      sorted.sort_unstable();
      assert_eq!(&sorted, BASE32_ALPHABET);
    }
  }

  #[test]
  fn test_border_rows_are_in_alphabet() {
    for row in BORDERS_TABLE {
      assert!(row.iter().all(|c| BASE32_ALPHABET.contains(c)));
    }
  }
}
