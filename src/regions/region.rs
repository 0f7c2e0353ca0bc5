// src/regions/region.rs

use log::debug;

use crate::constants::{INITIAL_REGION_CAPACITY, MAX_GEOHASH_LENGTH, MAX_REGION_ITERATIONS, MIN_GEOHASH_LENGTH};
use crate::indexing::encode;
use crate::iterators::RegionIter;
use crate::types::{BBox, Geohash, GeohashError, LatLng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs for the region tiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionOptions {
  /// Sweep steps allowed before the region is reported as too large.
  ///
  /// This bounds loop iterations, not cells: a step that wraps to the next row
  /// emits both the last cell it landed on and the new row start, so a sweep
  /// can return more cells than `max_iterations`.
  pub max_iterations: usize,
  /// Cells reserved up front for the result. Must be non-zero.
  pub initial_capacity: usize,
}

impl Default for RegionOptions {
  fn default() -> Self {
    Self {
      max_iterations: MAX_REGION_ITERATIONS,
      initial_capacity: INITIAL_REGION_CAPACITY,
    }
  }
}

impl RegionOptions {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
    self.max_iterations = max_iterations;
    self
  }

  #[must_use]
  pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  fn validate(&self) -> Result<(), GeohashError> {
    if self.initial_capacity == 0 {
      return Err(GeohashError::Domain);
    }
    Ok(())
  }
}

/// A rectangle described by its centre and its latitude/longitude extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeohashRegion {
  pub center: LatLng,
  /// Full north-south extent in degrees.
  pub latitude_delta: f64,
  /// Full west-east extent in degrees.
  pub longitude_delta: f64,
}

impl GeohashRegion {
  #[must_use]
  pub const fn new(center: LatLng, latitude_delta: f64, longitude_delta: f64) -> Self {
    Self {
      center,
      latitude_delta,
      longitude_delta,
    }
  }

  /// Bounding box of the region. Not clamped; may leave the canonical ranges.
  #[must_use]
  pub fn bbox(&self) -> BBox {
    BBox {
      north: self.center.lat + self.latitude_delta / 2.0,
      south: self.center.lat - self.latitude_delta / 2.0,
      east: self.center.lng + self.longitude_delta / 2.0,
      west: self.center.lng - self.longitude_delta / 2.0,
    }
  }

  /// Checks the centre and the extents.
  pub fn validate(&self) -> Result<(), GeohashError> {
    if !self.center.is_valid() {
      return Err(GeohashError::LatLngDomain);
    }
    let delta_ok = |d: f64| d.is_finite() && d >= 0.0;
    if !delta_ok(self.latitude_delta) || !delta_ok(self.longitude_delta) {
      return Err(GeohashError::Domain);
    }
    Ok(())
  }

  /// Lazily sweeps the cells of `length` characters covering this region.
  ///
  /// Corners outside the canonical ranges are clamped onto them first; the
  /// encoder saturates at the range edges, so this gives the edge cells.
  pub fn iter(&self, length: usize, options: &RegionOptions) -> Result<RegionIter, GeohashError> {
    if !(MIN_GEOHASH_LENGTH..=MAX_GEOHASH_LENGTH).contains(&length) {
      return Err(GeohashError::LengthDomain);
    }
    self.validate()?;
    options.validate()?;

    let bbox = self.bbox().clamped();
    let north_west = encode(bbox.north, bbox.west, length)?;
    let north_east = encode(bbox.north, bbox.east, length)?;
    let south_east = encode(bbox.south, bbox.east, length)?;
    debug!(
      "region sweep at length {} from {} (row end {}) to {}",
      length, north_west, north_east, south_east
    );

    Ok(RegionIter::from_corners(
      north_west,
      north_east,
      south_east,
      options.max_iterations,
    ))
  }

  /// All cells of `length` characters covering this region, in sweep order.
  pub fn hashes(&self, length: usize) -> Result<Vec<Geohash>, GeohashError> {
    self.hashes_with_options(length, &RegionOptions::default())
  }

  /// Same as [`GeohashRegion::hashes`] with explicit options.
  pub fn hashes_with_options(&self, length: usize, options: &RegionOptions) -> Result<Vec<Geohash>, GeohashError> {
    let iter = self.iter(length, options)?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(options.initial_capacity)?;
    for cell in iter {
      _push_cell(&mut cells, cell?)?;
    }
    Ok(cells)
  }
}

/// Appends `cell`, doubling the capacity whenever the vector is full.
fn _push_cell(cells: &mut Vec<Geohash>, cell: Geohash) -> Result<(), GeohashError> {
  if cells.len() == cells.capacity() {
    let additional = cells.capacity().max(1);
    cells.try_reserve_exact(additional)?;
  }
  cells.push(cell);
  Ok(())
}

/// Enumerates the geohash cells of `length` characters tiling the rectangle
/// centred on (`center_lat`, `center_lng`) with the given full extents.
///
/// Cells come out west to east within a row, rows north to south, starting at
/// the cell of the north-west corner.
///
/// # Returns
/// `Ok(cells)` on success. `GeohashError::LengthDomain`,
/// `GeohashError::LatLngDomain` or `GeohashError::Domain` for bad arguments,
/// `GeohashError::RegionTooLarge` if the sweep exceeds
/// [`MAX_REGION_ITERATIONS`] steps, `GeohashError::MemoryAlloc` if the result
/// cannot grow.
pub fn hashes_for_region(
  center_lat: f64,
  center_lng: f64,
  lat_delta: f64,
  lng_delta: f64,
  length: usize,
) -> Result<Vec<Geohash>, GeohashError> {
  hashes_for_region_with_options(
    center_lat,
    center_lng,
    lat_delta,
    lng_delta,
    length,
    &RegionOptions::default(),
  )
}

/// [`hashes_for_region`] with explicit [`RegionOptions`].
pub fn hashes_for_region_with_options(
  center_lat: f64,
  center_lng: f64,
  lat_delta: f64,
  lng_delta: f64,
  length: usize,
  options: &RegionOptions,
) -> Result<Vec<Geohash>, GeohashError> {
  GeohashRegion::new(LatLng::new(center_lat, center_lng), lat_delta, lng_delta).hashes_with_options(length, options)
}

/// Lazy form of [`hashes_for_region`] using the default options.
pub fn region_iter(
  center_lat: f64,
  center_lng: f64,
  lat_delta: f64,
  lng_delta: f64,
  length: usize,
) -> Result<RegionIter, GeohashError> {
  GeohashRegion::new(LatLng::new(center_lat, center_lng), lat_delta, lng_delta).iter(length, &RegionOptions::default())
}
