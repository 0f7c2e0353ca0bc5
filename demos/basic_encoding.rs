use xs_geohash::{encode, geohash_to_parent, is_valid_geohash, GeohashError, LatLng, MAX_GEOHASH_LENGTH};

fn main() -> Result<(), GeohashError> {
  println!("--- Basic Geohash Encoding Example ---");

  // 1. Define a point (e.g., San Francisco City Hall)
  let point = LatLng::new(37.779265, -122.419277);
  println!("Original Point: Lat {:.6} deg, Lng {:.6} deg", point.lat, point.lng);

  // 2. Encode it at a few lengths
  for length in [1, 5, 9, MAX_GEOHASH_LENGTH] {
    let hash = point.geohash(length)?;
    println!("Length {:>2}: {}", length, hash);
  }

  // 3. Shorter hashes are prefixes of longer ones
  let fine = encode(point.lat, point.lng, 9)?;
  let coarse = geohash_to_parent(fine.as_str(), 5)?;
  println!("Parent of {} at length 5: {}", fine, coarse);

  // 4. Validate some user input
  for input in ["9q8yy", "9Q8YY", "9q8ya", ""] {
    println!("{:?} valid: {}", input, is_valid_geohash(input));
  }

  // 5. Errors carry a code and a message
  match encode(91.0, 0.0, 5) {
    Ok(hash) => println!("Unexpected hash {}", hash),
    Err(e) => println!("Encoding lat 91 failed: {}", e),
  }

  Ok(())
}
