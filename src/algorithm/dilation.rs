use bitvec::prelude::*;

use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileKind;

/// Row-major mask of the cells currently holding `kind`
pub fn tile_mask(grid: &TileGrid, kind: TileKind) -> BitVec {
    grid.indexed_tiles().map(|(_, _, tile)| tile == kind).collect()
}

/// Turn every void cell orthogonally adjacent to floor into wall
///
/// One ring only: sources are taken from a mask captured before any wall is
/// written, so the result does not depend on scan order. Bridges and markers
/// are neither sources nor targets. Returns the number of walls added.
pub fn dilate_walls(grid: &mut TileGrid) -> usize {
    let floor = tile_mask(grid, TileKind::Floor);
    let width = grid.width();
    let mut added = 0;

    for index in floor.iter_ones() {
        let (x, y) = ((index % width) as i32, (index / width) as i32);
        for [nx, ny] in grid.orthogonal_neighbors(x, y) {
            if grid.get(nx, ny) == Some(TileKind::Void) && grid.set(nx, ny, TileKind::Wall) {
                added += 1;
            }
        }
    }

    added
}
