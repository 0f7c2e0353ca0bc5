use xs_geohash::{get_adjacent, get_neighbors, neighbors_with_center, Direction, GeohashError};

fn main() -> Result<(), GeohashError> {
  println!("--- Geohash Neighbors Example ---");

  let hash = "ezs42";
  println!("Center: {}", hash);

  // 1. Single moves
  for dir in Direction::ALL {
    println!("  {:?}: {}", dir, get_adjacent(hash, dir)?);
  }

  // 2. All eight neighbours
  let neighbors = get_neighbors(hash)?;
  println!(
    "NW {} | N {} | NE {}",
    neighbors.north_west, neighbors.north, neighbors.north_east
  );
  println!("W  {} | {} | E  {}", neighbors.west, hash, neighbors.east);
  println!(
    "SW {} | S {} | SE {}",
    neighbors.south_west, neighbors.south, neighbors.south_east
  );

  // 3. Moves wrap around the antimeridian and over the poles
  println!("East of gzzzz: {}", get_adjacent("gzzzz", Direction::East)?);
  println!("North of zzzzz: {}", get_adjacent("zzzzz", Direction::North)?);

  // 4. 3x3 block, handy for proximity searches
  let block = neighbors_with_center(hash)?;
  let joined: Vec<&str> = block.iter().map(|h| h.as_str()).collect();
  println!("Search block: {}", joined.join(", "));

  Ok(())
}
