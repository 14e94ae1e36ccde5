//! Bounds-checked tile grid and axis-aligned rectangles
//!
//! All map coordinate arithmetic funnels through [`Rect`] and [`TileGrid`]:
//! rectangles use signed coordinates so that out-of-range placements can be
//! represented and rejected, and the grid only ever writes after the full
//! target rectangle has been validated.

use ndarray::Array2;

use crate::io::error::{Result, out_of_bounds};
use crate::math::geometry::{interval_intersection, intervals_intersect};
use crate::spatial::tiles::TileKind;

/// Axis-aligned rectangle in map coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left column (inclusive)
    pub x: i32,
    /// Top row (inclusive)
    pub y: i32,
    /// Width in tiles
    pub width: usize,
    /// Height in tiles
    pub height: usize,
}

impl Rect {
    /// Create a rectangle from its upper-left corner and extent
    pub const fn new(x: i32, y: i32, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Column one past the right edge
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Row one past the bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Number of tiles covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if a position is within the rectangle
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether the row ranges of both rectangles intersect
    ///
    /// A straight horizontal line can then touch both rectangles.
    pub const fn rows_overlap(&self, other: &Self) -> bool {
        intervals_intersect(self.y, self.bottom(), other.y, other.bottom())
    }

    /// Whether the column ranges of both rectangles intersect
    pub const fn columns_overlap(&self, other: &Self) -> bool {
        intervals_intersect(self.x, self.right(), other.x, other.right())
    }

    /// Whether the rectangles share any tile
    pub const fn collides(&self, other: &Self) -> bool {
        self.rows_overlap(other) && self.columns_overlap(other)
    }

    /// Shared row range `[start, end)` of both rectangles
    pub fn shared_rows(&self, other: &Self) -> Option<(i32, i32)> {
        interval_intersection(self.y, self.bottom(), other.y, other.bottom())
    }

    /// Shared column range `[start, end)` of both rectangles
    pub fn shared_columns(&self, other: &Self) -> Option<(i32, i32)> {
        interval_intersection(self.x, self.right(), other.x, other.right())
    }

    /// Whether this rectangle lies entirely inside `other`
    pub const fn fits_within(&self, other: &Self) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
}

/// Dense `height` x `width` grid of tiles indexed `[y, x]`
///
/// Every cell always holds exactly one [`TileKind`]; a new grid is all
/// [`TileKind::Void`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<TileKind>,
}

impl TileGrid {
    /// Create a grid filled with void
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), TileKind::Void),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// The whole grid as a rectangle at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }

    /// Tile at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<TileKind> {
        let (col, row) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        self.cells.get([row, col]).copied()
    }

    /// Tile at column `x`, row `y`
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid
    // Out-of-range access is a caller contract violation, not a recoverable error
    #[allow(clippy::indexing_slicing)]
    pub fn tile(&self, x: usize, y: usize) -> TileKind {
        self.cells[[y, x]]
    }

    /// Overwrite the tile at `(x, y)`
    ///
    /// Returns `false` and leaves the grid untouched outside the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: TileKind) -> bool {
        let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        self.cells.get_mut([row, col]).is_some_and(|cell| {
            *cell = tile;
            true
        })
    }

    /// Validate that `rect` lies entirely inside the grid
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` naming `what` if any part of `rect` is outside
    pub fn check_fits(&self, what: &'static str, rect: &Rect) -> Result<()> {
        if rect.fits_within(&self.bounds()) {
            Ok(())
        } else {
            Err(out_of_bounds(
                what,
                [rect.x, rect.y],
                (rect.width, rect.height),
                (self.width(), self.height()),
            ))
        }
    }

    /// In-bounds orthogonal neighbours of `(x, y)`: right, left, down, up
    pub fn orthogonal_neighbors(
        &self,
        x: i32,
        y: i32,
    ) -> impl Iterator<Item = [i32; 2]> + use<> {
        let bounds = self.bounds();
        [[x + 1, y], [x - 1, y], [x, y + 1], [x, y - 1]]
            .into_iter()
            .filter(move |&[nx, ny]| bounds.contains(nx, ny))
    }

    /// Row-major iterator over `(x, y, tile)`
    pub fn indexed_tiles(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &tile)| (col as i32, row as i32, tile))
    }

    /// Row-major copy of every tile
    pub fn snapshot(&self) -> Vec<TileKind> {
        self.cells.iter().copied().collect()
    }

    /// Rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, TileKind>> {
        self.cells.rows().into_iter()
    }

    /// Count the tiles of one kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|&&tile| tile == kind).count()
    }
}
