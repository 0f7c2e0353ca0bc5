// src/indexing/encode.rs

use crate::constants::{BITS_PER_CHAR, MAX_GEOHASH_LENGTH, MAX_LAT, MAX_LNG, MIN_GEOHASH_LENGTH, MIN_LAT, MIN_LNG};
use crate::geohash::symbol_for_bits;
use crate::types::{CoordRange, Geohash, GeohashError, LatLng};

/// Bisects `range` around `val` and reports which half `val` fell into.
/// Values exactly on the midpoint go to the lower half.
#[inline]
fn _bisect(range: &mut CoordRange, val: f64) -> bool {
  let mid = range.midpoint();
  if val > mid {
    range.min = mid;
    true
  } else {
    range.max = mid;
    false
  }
}

/// Encodes already validated coordinates. `length` must be in `[1, 22]`.
pub(crate) fn _encode_unchecked(lat: f64, lng: f64, length: usize) -> Result<Geohash, GeohashError> {
  let mut hash = String::new();
  hash.try_reserve_exact(length)?;

  let mut lat_range = CoordRange::new(MIN_LAT, MAX_LAT);
  let mut lng_range = CoordRange::new(MIN_LNG, MAX_LNG);

  // Longitude supplies the first bit of the first character. Because a
  // character has an odd number of bits, the roles swap after every character.
  let (mut val1, mut val2) = (lng, lat);
  let (mut range1, mut range2) = (&mut lng_range, &mut lat_range);

  for _ in 0..length {
    let mut bits: u8 = 0;
    for bit in (0..BITS_PER_CHAR).rev() {
      let set = if bit % 2 == 0 {
        _bisect(range1, val1)
      } else {
        _bisect(range2, val2)
      };
      if set {
        bits |= 1 << bit;
      }
    }
    hash.push(symbol_for_bits(bits));

    std::mem::swap(&mut val1, &mut val2);
    std::mem::swap(&mut range1, &mut range2);
  }

  Ok(Geohash::from_string_unchecked(hash))
}

/// Encodes a latitude/longitude point into a geohash of `length` characters.
///
/// # Arguments
/// * `lat` - Latitude in degrees, `[-90, 90]`.
/// * `lng` - Longitude in degrees, `[-180, 180]`.
/// * `length` - Number of characters, `[1, 22]`.
///
/// # Returns
/// `Ok(Geohash)` on success, `GeohashError::LengthDomain` for a bad length,
/// `GeohashError::LatLngDomain` for non-finite or out-of-range coordinates, or
/// `GeohashError::MemoryAlloc` if the output buffer cannot be allocated.
pub fn encode(lat: f64, lng: f64, length: usize) -> Result<Geohash, GeohashError> {
  if !(MIN_GEOHASH_LENGTH..=MAX_GEOHASH_LENGTH).contains(&length) {
    return Err(GeohashError::LengthDomain);
  }
  if !LatLng::new(lat, lng).is_valid() {
    return Err(GeohashError::LatLngDomain);
  }
  _encode_unchecked(lat, lng, length)
}

/// Finds the geohash of `length` characters containing the given point.
/// Same as [`encode`], taking a [`LatLng`].
pub fn lat_lng_to_geohash(geo: &LatLng, length: usize) -> Result<Geohash, GeohashError> {
  encode(geo.lat, geo.lng, length)
}
