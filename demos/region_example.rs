use xs_geohash::{GeohashError, GeohashRegion, LatLng, RegionOptions};

fn main() -> Result<(), GeohashError> {
  println!("--- Geohash Region Example ---");

  // 1. A 0.4 x 0.4 degree box around (52, 4), near Leiden
  let region = GeohashRegion::new(LatLng::new(52.0, 4.0), 0.4, 0.4);
  let bbox = region.bbox();
  println!(
    "Box: N {:.2}, S {:.2}, E {:.2}, W {:.2}",
    bbox.north, bbox.south, bbox.east, bbox.west
  );

  // 2. Tile it at increasing lengths
  for length in 3..=6 {
    let cells = region.hashes(length)?;
    println!("Length {}: {} cells", length, cells.len());
  }

  // 3. Print the first row at length 5, lazily
  let first_row: Result<Vec<_>, _> = region.iter(5, &RegionOptions::default())?.take(10).collect();
  let first_row: Vec<String> = first_row?.into_iter().map(|h| h.into_string()).collect();
  println!("First row: {}", first_row.join(" "));

  // 4. A tight iteration budget turns large sweeps into an error
  let options = RegionOptions::new().with_max_iterations(50);
  match region.hashes_with_options(5, &options) {
    Ok(cells) => println!("Unexpected success with {} cells", cells.len()),
    Err(e) => println!("Tight budget: {}", e),
  }

  Ok(())
}
