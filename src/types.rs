//! Core geohash data structures.

use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Latitude/longitude coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in degrees, canonical range `[-90, 90]`.
  pub lat: f64,
  /// Longitude in degrees, canonical range `[-180, 180]`.
  pub lng: f64,
}

impl LatLng {
  #[must_use]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Whether both components are finite and inside their canonical ranges.
  #[must_use]
  pub fn is_valid(&self) -> bool {
    self.lat.is_finite()
      && self.lng.is_finite()
      && (MIN_LAT..=MAX_LAT).contains(&self.lat)
      && (MIN_LNG..=MAX_LNG).contains(&self.lng)
  }

  /// Encodes this point as a geohash of `length` characters.
  pub fn geohash(&self, length: usize) -> Result<Geohash, GeohashError> {
    crate::indexing::lat_lng_to_geohash(self, length)
  }
}

/// A `(min, max)` interval on one axis, narrowed by bisection while encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordRange {
  pub min: f64,
  pub max: f64,
}

impl CoordRange {
  #[must_use]
  pub const fn new(min: f64, max: f64) -> Self {
    Self { min, max }
  }

  #[inline]
  #[must_use]
  pub fn midpoint(&self) -> f64 {
    (self.min + self.max) / 2.0
  }
}

/// Geographic bounding box with coordinates defined in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  /// North latitude in degrees.
  pub north: f64,
  /// South latitude in degrees.
  pub south: f64,
  /// East longitude in degrees.
  pub east: f64,
  /// West longitude in degrees.
  pub west: f64,
}

impl BBox {
  /// The box clamped to the canonical latitude/longitude ranges.
  #[must_use]
  pub fn clamped(&self) -> Self {
    Self {
      north: self.north.clamp(MIN_LAT, MAX_LAT),
      south: self.south.clamp(MIN_LAT, MAX_LAT),
      east: self.east.clamp(MIN_LNG, MAX_LNG),
      west: self.west.clamp(MIN_LNG, MAX_LNG),
    }
  }
}

/// Cardinal direction of movement between adjacent cells.
///
/// Discriminants double as the row selector into the adjacency tables.
/// Diagonals are derived by composing two cardinal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  North = 0,
  East = 1,
  West = 2,
  South = 3,
}

impl Direction {
  /// All four directions in table order.
  pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::West, Direction::South];

  #[must_use]
  pub const fn opposite(self) -> Self {
    match self {
      Direction::North => Direction::South,
      Direction::East => Direction::West,
      Direction::West => Direction::East,
      Direction::South => Direction::North,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = GeohashError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Direction::North),
      1 => Ok(Direction::East),
      2 => Ok(Direction::West),
      3 => Ok(Direction::South),
      _ => Err(GeohashError::Domain),
    }
  }
}

/// An owned geohash string.
///
/// Values handed out by this crate are always 1 to 22 characters from the
/// geohash alphabet. Use [`crate::string_to_geohash`] (or `str::parse`) to
/// build one from untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Geohash(String);

impl Geohash {
  /// Wraps a string the caller has already validated.
  pub(crate) fn from_string_unchecked(s: String) -> Self {
    Self(s)
  }

  #[must_use]
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Number of characters (every character is a single byte).
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// The finest-level character of the hash.
  #[must_use]
  pub fn last_char(&self) -> Option<char> {
    self.0.chars().last()
  }

  #[must_use]
  pub fn into_string(self) -> String {
    self.0
  }
}

impl fmt::Display for Geohash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Geohash {
  type Err = GeohashError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    crate::geohash::string_to_geohash(s)
  }
}

impl TryFrom<String> for Geohash {
  type Error = GeohashError;

  /// Takes ownership of `s` after validating it, without copying.
  fn try_from(s: String) -> Result<Self, Self::Error> {
    crate::geohash::validate_geohash(&s)?;
    Ok(Self(s))
  }
}

impl AsRef<str> for Geohash {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl From<Geohash> for String {
  fn from(hash: Geohash) -> Self {
    hash.0
  }
}

impl PartialEq<str> for Geohash {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for Geohash {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}

/// The eight cells surrounding a geohash, all of the same length as it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighbors {
  pub north: Geohash,
  pub east: Geohash,
  pub west: Geohash,
  pub south: Geohash,
  pub north_east: Geohash,
  pub north_west: Geohash,
  pub south_east: Geohash,
  pub south_west: Geohash,
}

impl Neighbors {
  /// The eight neighbours in the order N, E, W, S, NE, NW, SE, SW.
  #[must_use]
  pub fn all(&self) -> [&Geohash; 8] {
    [
      &self.north,
      &self.east,
      &self.west,
      &self.south,
      &self.north_east,
      &self.north_west,
      &self.south_east,
      &self.south_west,
    ]
  }

  /// The eight neighbours followed by `center`, i.e. the 3x3 block around it.
  #[must_use]
  pub fn with_center(self, center: Geohash) -> Vec<Geohash> {
    vec![
      self.north,
      self.east,
      self.west,
      self.south,
      self.north_east,
      self.north_west,
      self.south_east,
      self.south_west,
      center,
    ]
  }
}

/// Represents a geohash error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GeohashError {
  /// The operation failed but a more specific error is not available.
  Failed = 1,
  /// Argument was outside of acceptable range.
  Domain = 2,
  /// Latitude or longitude arguments were outside of acceptable range.
  LatLngDomain = 3,
  /// Length argument was outside of acceptable range.
  LengthDomain = 4,
  /// Geohash argument was empty, too long, or contained a character outside the alphabet.
  HashInvalid = 5,
  /// The region sweep ran out of iterations before reaching its last cell.
  RegionTooLarge = 6,
  /// Necessary memory allocation failed.
  MemoryAlloc = 7,
}

impl fmt::Display for GeohashError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      GeohashError::Failed => "Operation failed",
      GeohashError::Domain => "Argument was outside of acceptable range",
      GeohashError::LatLngDomain => "Latitude or longitude arguments were outside of acceptable range",
      GeohashError::LengthDomain => "Length argument was outside of acceptable range",
      GeohashError::HashInvalid => "Geohash argument was not valid",
      GeohashError::RegionTooLarge => "Region too large or degenerate for the iteration budget",
      GeohashError::MemoryAlloc => "Memory allocation failed",
    };
    write!(f, "Error {}: {}", *self as u32, msg)
  }
}

impl std::error::Error for GeohashError {}

impl From<std::collections::TryReserveError> for GeohashError {
  fn from(_: std::collections::TryReserveError) -> Self {
    GeohashError::MemoryAlloc
  }
}
