// tests/hierarchy_tests.rs

use xs_geohash::*;

#[test]
fn test_parent_prefix() {
  let child = encode(57.64911063015461, 10.40743969380855, 11).unwrap();
  for len in 1..=child.len() {
    let parent = geohash_to_parent(child.as_str(), len).unwrap();
    assert_eq!(parent.as_str(), &child.as_str()[..len]);
  }
}

#[test]
fn test_parent_of_neighbor_shares_prefix_away_from_border() {
  // "ezs42" is not on the northern border of "ezs4", so its northern neighbour
  // keeps the same parent.
  let north = get_adjacent("ezs42", Direction::North).unwrap();
  assert_eq!(
    geohash_to_parent(north.as_str(), 4).unwrap(),
    geohash_to_parent("ezs42", 4).unwrap()
  );
}

#[test]
fn test_parent_domain() {
  assert_eq!(geohash_to_parent("ezs42", 6), Err(GeohashError::LengthDomain));
  assert_eq!(geohash_to_parent("ezs42", 0), Err(GeohashError::LengthDomain));
  assert_eq!(geohash_to_parent("ezsa2", 2), Err(GeohashError::HashInvalid));
}
