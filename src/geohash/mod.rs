// src/geohash/mod.rs

pub mod inspection;
pub mod string_conv;

use crate::constants::BASE32_ALPHABET;
use crate::types::Direction;

pub use inspection::{is_valid_geohash, validate_geohash};
pub use string_conv::{geohash_to_string, string_to_geohash};

/// Row of the adjacency tables for moving in `dir` from a hash of `len` characters.
///
/// Geohash bits alternate longitude/latitude, so whether a character carries
/// three longitude bits or three latitude bits depends on the parity of its
/// position. That parity picks between the two rows of each direction.
#[inline]
#[must_use]
pub(crate) const fn table_index(dir: Direction, len: usize) -> usize {
  (dir as usize) * 2 + (len % 2)
}

/// Position of an (already lower-cased) symbol in the Base32 alphabet.
#[inline]
#[must_use]
pub(crate) fn alphabet_index(symbol: u8) -> Option<usize> {
  BASE32_ALPHABET.iter().position(|&c| c == symbol)
}

/// Symbol for a 5-bit value. `bits` must be below 32.
#[inline]
#[must_use]
pub(crate) fn symbol_for_bits(bits: u8) -> char {
  BASE32_ALPHABET[(bits & 0x1f) as usize] as char
}
