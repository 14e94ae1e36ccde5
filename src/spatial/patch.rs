//! Rectangular tile stamps merged onto the map
//!
//! A [`Patch`] is a local grid of optional tiles with a map-relative origin.
//! `None` cells leave the underlying map untouched. Mesas and bridges are the
//! two kinds of patch; both are built here and merged by the map.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::math::geometry::rib_width;
use crate::spatial::grid::Rect;
use crate::spatial::tiles::TileKind;

/// Cardinal travel direction in screen coordinates (y grows downwards)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards lower y
    North,
    /// Towards higher x
    East,
    /// Towards higher y
    South,
    /// Towards lower x
    West,
}

impl Direction {
    /// All directions in N, E, S, W order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step `[dx, dy]`
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::North => [0, -1],
            Self::East => [1, 0],
            Self::South => [0, 1],
            Self::West => [-1, 0],
        }
    }

    /// Whether travel is along the x axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }

    /// Whether travel is towards lower coordinates
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::North | Self::West)
    }

    /// Reverse direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Position in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// What a patch represents, beyond its tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchKind {
    /// Filled disc of floor
    Mesa {
        /// Disc radius; the patch is `2r + 1` square
        radius: usize,
    },
    /// Straight one-tile-wide strip of bridge
    Bridge {
        /// Number of tiles along the travel axis
        length: usize,
        /// Travel direction the bridge was built in
        direction: Direction,
        /// Indices of the mesas it connects, in the map's mesa list
        joins: Option<[usize; 2]>,
    },
}

/// Rectangular stamp of optional tiles with a map-relative origin
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patch {
    x: i32,
    y: i32,
    tiles: Array2<Option<TileKind>>,
    kind: PatchKind,
}

impl Patch {
    /// Rasterise a disc of floor whose bounding box starts at `(x, y)`
    ///
    /// The local cell at `(dx, dy)` from the centre is floor iff
    /// `|dx| <= rib_width(r, dy)`. Radius zero gives a single tile.
    pub fn mesa(x: i32, y: i32, radius: usize) -> Self {
        let side = 2 * radius + 1;
        let r = radius as i32;
        let mut tiles = Array2::from_elem((side, side), None);

        for dy in -r..=r {
            let rib = rib_width(r, dy);
            for dx in -rib..=rib {
                if let Some(cell) = tiles.get_mut([(dy + r) as usize, (dx + r) as usize]) {
                    *cell = Some(TileKind::Floor);
                }
            }
        }

        Self {
            x,
            y,
            tiles,
            kind: PatchKind::Mesa { radius },
        }
    }

    /// Build a straight bridge of `length` tiles from `(x, y)` along `direction`
    ///
    /// The origin is normalised to the upper-left corner of the strip, so the
    /// same bridge results whichever endpoint the caller starts from.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `length` is zero
    pub fn bridge(x: i32, y: i32, length: usize, direction: Direction) -> Result<Self> {
        if length == 0 {
            return Err(invalid_parameter(
                "length",
                &length,
                &"a bridge covers at least one tile",
            ));
        }

        let [dx, dy] = direction.delta();
        let reach = length as i32 - 1;
        let (end_x, end_y) = (x + dx * reach, y + dy * reach);
        let (width, height) = if direction.is_horizontal() {
            (length, 1)
        } else {
            (1, length)
        };

        Ok(Self {
            x: x.min(end_x),
            y: y.min(end_y),
            tiles: Array2::from_elem((height, width), Some(TileKind::Bridge)),
            kind: PatchKind::Bridge {
                length,
                direction,
                joins: None,
            },
        })
    }

    /// Record which mesas a bridge connects
    #[must_use]
    pub fn with_joins(mut self, from: usize, to: usize) -> Self {
        if let PatchKind::Bridge { joins, .. } = &mut self.kind {
            *joins = Some([from, to]);
        }
        self
    }

    /// Left column
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Top row
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Bounding box in map coordinates
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    /// Patch kind and its parameters
    pub const fn kind(&self) -> &PatchKind {
        &self.kind
    }

    /// Disc radius, for mesas
    pub const fn radius(&self) -> Option<usize> {
        match self.kind {
            PatchKind::Mesa { radius } => Some(radius),
            PatchKind::Bridge { .. } => None,
        }
    }

    /// Disc centre `[x, y]` in map coordinates, for mesas
    pub const fn center(&self) -> Option<[i32; 2]> {
        match self.kind {
            PatchKind::Mesa { radius } => Some([self.x + radius as i32, self.y + radius as i32]),
            PatchKind::Bridge { .. } => None,
        }
    }

    /// Stamped tiles as `(map_x, map_y, tile)`, skipping `None` cells
    pub fn stamped_tiles(&self) -> impl Iterator<Item = (i32, i32, TileKind)> + '_ {
        let (x, y) = (self.x, self.y);
        self.tiles.indexed_iter().filter_map(move |((row, col), tile)| {
            tile.map(|kind| (x + col as i32, y + row as i32, kind))
        })
    }
}
