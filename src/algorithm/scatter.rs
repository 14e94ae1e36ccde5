use rand::Rng;

use crate::io::error::Result;
use crate::spatial::Map;

/// Drop randomly sized mesas at random spots until enough of the map is covered
///
/// Each mesa draws a radius in `[0, max_radius]` (capped so that it fits the
/// map) and a top-left origin that keeps its box inside the map. Coverage
/// grows by `r²` per mesa, counting a single-tile mesa as one tile. Mesas may
/// overlap. Returns the number of mesas placed.
///
/// # Errors
///
/// Returns `OutOfBounds` if a mesa does not fit the map
pub fn scatter_mesas<R: Rng + ?Sized>(
    map: &mut Map,
    max_radius: usize,
    density: f64,
    rng: &mut R,
) -> Result<usize> {
    let (width, height) = (map.width(), map.height());
    let map_area = (width * height) as f64;
    let max_radius = max_radius.min((width.min(height).saturating_sub(1)) / 2);

    let mut covered = 0usize;
    let mut placed = 0;
    while (covered as f64) / map_area < density {
        let radius = rng.random_range(0..=max_radius);
        let side = 2 * radius + 1;
        let x = rng.random_range(0..=width - side) as i32;
        let y = rng.random_range(0..=height - side) as i32;

        map.place_mesa(x, y, radius)?;
        covered += (radius * radius).max(1);
        placed += 1;
    }

    log::debug!("scattered {placed} mesas covering {covered} of {width}x{height}");
    Ok(placed)
}
