// tests/indexing_tests.rs

use xs_geohash::*;

#[test]
fn test_reference_encode() {
  // Canonical reference value from the geohash literature.
  assert_eq!(encode(42.6, -5.6, 5).unwrap(), "ezs42");
}

#[test]
fn test_encode_prefixes() {
  // Longer hashes of the same point extend shorter ones.
  let (lat, lng) = (57.64911063015461, 10.40743969380855);
  let full = encode(lat, lng, MAX_GEOHASH_LENGTH).unwrap();
  assert_eq!(full, "u4pruydqqvj7zzzzzzzzzz");
  for len in MIN_GEOHASH_LENGTH..MAX_GEOHASH_LENGTH {
    let hash = encode(lat, lng, len).unwrap();
    assert!(full.as_str().starts_with(hash.as_str()), "length {}", len);
  }
}

#[test]
fn test_encode_series() {
  // A diagonal walk from (51, 5) towards (52, 6).
  let size = 1_000;
  let hashes: Vec<Geohash> = (0..size)
    .map(|i| {
      let step = f64::from(i) / f64::from(size);
      encode(51.0 + step, 5.0 + step, 5).unwrap()
    })
    .collect();
  assert_eq!(hashes.first().unwrap(), &"u15d1");
  assert!(hashes.iter().all(|h| h.len() == 5 && is_valid_geohash(h.as_str())));
}

#[test]
fn test_encode_rejects_bad_input() {
  match encode(91.0, 0.0, 5) {
    Ok(_) => panic!("Expected LatLngDomain error, got Ok"),
    Err(e) => assert_eq!(e, GeohashError::LatLngDomain),
  }
  assert_eq!(encode(0.0, 0.0, 0), Err(GeohashError::LengthDomain));
  assert_eq!(encode(0.0, 0.0, MAX_GEOHASH_LENGTH + 1), Err(GeohashError::LengthDomain));
}

#[test]
fn test_latlng_helpers() {
  let geo = LatLng::new(57.64911063015461, 10.40743969380855);
  assert_eq!(lat_lng_to_geohash(&geo, 11).unwrap(), "u4pruydqqvj");
  assert_eq!(geo.geohash(4).unwrap(), "u4pr");
}

#[test]
fn test_parse_and_validate() {
  assert!(is_valid_geohash("u4pruydqqvj"));
  assert!(!is_valid_geohash("garbage"));
  assert!(!is_valid_geohash("u$pruydqqvj"));
  assert_eq!(validate_geohash(""), Err(GeohashError::HashInvalid));

  let hash: Geohash = "u4pruydqqvj".parse().unwrap();
  assert_eq!(geohash_to_string(&hash), "u4pruydqqvj");
  assert_eq!(string_to_geohash("ezs42").unwrap(), hash_of("ezs42"));
}

fn hash_of(s: &str) -> Geohash {
  s.parse().unwrap()
}
