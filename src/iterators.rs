// src/iterators.rs

use log::{trace, warn};

use crate::traversal::get_adjacent;
use crate::types::{Direction, Geohash, GeohashError};

/// Iterator over the cells tiling a rectangular region.
///
/// Cells come out row by row, west to east within a row and rows from north
/// to south, starting at the north-west corner cell and ending at the
/// south-east one. Each sweep step (one eastward move, or one southward move
/// when the region is a single column wide) consumes one unit of the
/// iteration budget. If the budget runs out before the south-east corner is
/// reached, the iterator yields `Err(GeohashError::RegionTooLarge)` once and
/// then ends. Any other error also ends the iteration.
///
/// Build one with [`crate::GeohashRegion::iter`] or [`crate::region_iter`].
#[derive(Debug, Clone)]
pub struct RegionIter {
  south_east: Geohash,
  /// Whether the north-west and north-east corners share a cell.
  single_column: bool,
  current: Geohash,
  /// Last cell of the current row.
  east_limit: Geohash,
  /// First cell of the current row.
  west_start: Geohash,
  /// Row start produced by a wrap, handed out on the next call.
  pending: Option<Geohash>,
  remaining: usize,
  started: bool,
  done: bool,
}

impl RegionIter {
  /// Starts a sweep from the three corner cells of a region.
  pub(crate) fn from_corners(
    north_west: Geohash,
    north_east: Geohash,
    south_east: Geohash,
    max_iterations: usize,
  ) -> Self {
    let single_column = north_west == north_east;
    Self {
      south_east,
      single_column,
      current: north_west.clone(),
      east_limit: north_east,
      west_start: north_west,
      pending: None,
      remaining: max_iterations,
      started: false,
      done: false,
    }
  }

  /// Whether the region is narrower than one cell.
  #[must_use]
  pub fn is_single_column(&self) -> bool {
    self.single_column
  }

  /// Iteration budget left.
  #[must_use]
  pub fn remaining_iterations(&self) -> usize {
    self.remaining
  }

  /// Performs one sweep step and returns the cell it lands on.
  fn _step(&mut self) -> Result<Geohash, GeohashError> {
    if self.single_column {
      self.west_start = get_adjacent(self.west_start.as_str(), Direction::South)?;
      self.current = self.west_start.clone();
      return Ok(self.current.clone());
    }

    self.current = get_adjacent(self.current.as_str(), Direction::East)?;
    let landed = self.current.clone();

    if self.current == self.east_limit && self.current != self.south_east {
      self.east_limit = get_adjacent(self.east_limit.as_str(), Direction::South)?;
      self.west_start = get_adjacent(self.west_start.as_str(), Direction::South)?;
      self.current = self.west_start.clone();
      trace!("region sweep wraps to row {}..{}", self.west_start, self.east_limit);
      self.pending = Some(self.current.clone());
    }
    Ok(landed)
  }
}

impl Iterator for RegionIter {
  type Item = Result<Geohash, GeohashError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    if !self.started {
      self.started = true;
      return Some(Ok(self.current.clone()));
    }
    if let Some(cell) = self.pending.take() {
      return Some(Ok(cell));
    }
    if self.current == self.south_east {
      self.done = true;
      return None;
    }
    if self.remaining == 0 {
      warn!(
        "region sweep exhausted its iteration budget at {} before reaching {}",
        self.current, self.south_east
      );
      self.done = true;
      return Some(Err(GeohashError::RegionTooLarge));
    }
    self.remaining -= 1;

    let step = self._step();
    if step.is_err() {
      self.done = true;
    }
    Some(step)
  }
}

impl std::iter::FusedIterator for RegionIter {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geohash::string_to_geohash;

  fn hash(s: &str) -> Geohash {
    string_to_geohash(s).unwrap()
  }

  fn collect(iter: RegionIter) -> Result<Vec<String>, GeohashError> {
    iter.map(|cell| cell.map(Geohash::into_string)).collect()
  }

  #[test]
  fn test_single_cell() {
    let iter = RegionIter::from_corners(hash("ezs42"), hash("ezs42"), hash("ezs42"), 10);
    assert!(iter.is_single_column());
    assert_eq!(collect(iter).unwrap(), ["ezs42"]);
  }

  #[test]
  fn test_three_by_three() {
    let iter = RegionIter::from_corners(hash("ezefx"), hash("ezs49"), hash("ezs41"), 10);
    assert!(!iter.is_single_column());
    assert_eq!(
      collect(iter).unwrap(),
      ["ezefx", "ezs48", "ezs49", "ezefr", "ezs42", "ezs43", "ezefp", "ezs40", "ezs41"]
    );
  }

  #[test]
  fn test_single_column() {
    let iter = RegionIter::from_corners(hash("ezs48"), hash("ezs48"), hash("ezs40"), 10);
    assert!(iter.is_single_column());
    assert_eq!(collect(iter).unwrap(), ["ezs48", "ezs42", "ezs40"]);
  }

  #[test]
  fn test_budget_exhausted() {
    // The 3x3 block takes exactly six sweep steps.
    let iter = RegionIter::from_corners(hash("ezefx"), hash("ezs49"), hash("ezs41"), 6);
    assert_eq!(collect(iter).unwrap().len(), 9);

    let mut iter = RegionIter::from_corners(hash("ezefx"), hash("ezs49"), hash("ezs41"), 5);
    let items: Vec<_> = iter.by_ref().collect();
    assert_eq!(items.last(), Some(&Err(GeohashError::RegionTooLarge)));
    assert_eq!(items.iter().filter(|item| item.is_ok()).count(), 8);
    assert_eq!(iter.remaining_iterations(), 0);
    assert!(iter.next().is_none());
  }
}
