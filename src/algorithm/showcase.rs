use rand::Rng;

use crate::algorithm::connectivity::connect;
use crate::io::error::Result;
use crate::spatial::Map;
use crate::spatial::patch::Direction;

/// Number of mesas in the showcase row
pub const SHOWCASE_MESAS: usize = 5;

/// Lay out a row of mesas with radius 0 to 4 across the middle of the map
///
/// Mesa `r` is centred at `(r * (width / 5) + 5, height / 2)` with a marker
/// on its centre, and the third mesa is bridged east to the fourth. Markers
/// go down before walls are raised, so the radius-0 mesa stays unwalled.
///
/// # Errors
///
/// Returns `OutOfBounds` if the map is too small to hold the row
pub fn showcase<R: Rng + ?Sized>(map: &mut Map, rng: &mut R) -> Result<()> {
    let column_step = (map.width() / SHOWCASE_MESAS) as i32;
    let y = (map.height() / 2) as i32;

    for radius in 0..SHOWCASE_MESAS {
        let r = radius as i32;
        let x = r * column_step + 5;
        map.place_mesa(x - r, y - r, radius)?;
        map.mark(x, y)?;
    }

    map.dilate_walls();

    connect(map, 2, 3, Direction::East, rng)?;
    Ok(())
}
