//! The generated map: tile grid plus the mesas and bridges stamped onto it
//!
//! The map is the only writer of its grid. Patches are validated against the
//! full grid extent before any cell is written, so a failed placement leaves
//! the map exactly as it was.

use std::fmt;

use crate::algorithm::dilation;
use crate::algorithm::generator::MapGenerator;
use crate::io::configuration::GeneratorConfig;
use crate::io::error::Result;
use crate::spatial::grid::{Rect, TileGrid};
use crate::spatial::patch::{Patch, PatchKind};
use crate::spatial::tiles::TileKind;

/// Finished or in-progress tile map
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    grid: TileGrid,
    mesas: Vec<Patch>,
    bridges: Vec<Patch>,
}

impl Map {
    /// Create an all-void map with no mesas or bridges
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: TileGrid::new(width, height),
            mesas: Vec::new(),
            bridges: Vec::new(),
        }
    }

    /// Generate a map with the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or every generation
    /// attempt fails
    pub fn generate(width: usize, height: usize, seed: u64) -> Result<Self> {
        Self::generate_with(GeneratorConfig::sized(width, height), seed)
    }

    /// Generate a map with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or every generation
    /// attempt fails
    pub fn generate_with(config: GeneratorConfig, seed: u64) -> Result<Self> {
        MapGenerator::new(config, seed)?.generate()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Tile at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`
    pub fn get(&self, x: usize, y: usize) -> TileKind {
        self.grid.tile(x, y)
    }

    /// Tile at `(x, y)`, or `None` outside the map
    pub fn try_get(&self, x: i32, y: i32) -> Option<TileKind> {
        self.grid.get(x, y)
    }

    /// Row-major copy of every tile
    pub fn snapshot(&self) -> Vec<TileKind> {
        self.grid.snapshot()
    }

    /// Read-only view of the underlying grid
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Placed mesas, in placement order
    pub fn mesas(&self) -> &[Patch] {
        &self.mesas
    }

    /// Placed bridges, in placement order
    pub fn bridges(&self) -> &[Patch] {
        &self.bridges
    }

    /// Stamp a mesa with its bounding box at `(x, y)` and return its index
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the mesa's box leaves the map
    pub fn place_mesa(&mut self, x: i32, y: i32, radius: usize) -> Result<usize> {
        let mesa = Patch::mesa(x, y, radius);
        self.merge(&mesa)?;
        self.mesas.push(mesa);
        Ok(self.mesas.len() - 1)
    }

    /// Stamp a bridge patch
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the bridge leaves the map
    pub fn place_bridge(&mut self, bridge: Patch) -> Result<()> {
        self.merge(&bridge)?;
        self.bridges.push(bridge);
        Ok(())
    }

    /// Stamp a marker tile over whatever is at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` is outside the map
    pub fn mark(&mut self, x: i32, y: i32) -> Result<()> {
        self.grid.check_fits("marker", &Rect::new(x, y, 1, 1))?;
        self.grid.set(x, y, TileKind::Marker);
        Ok(())
    }

    /// Ring every floor region with walls; returns the number of walls added
    pub fn dilate_walls(&mut self) -> usize {
        dilation::dilate_walls(&mut self.grid)
    }

    /// Whether a patch would overwrite any of the given tile kinds
    pub fn patch_covers(&self, patch: &Patch, kinds: &[TileKind]) -> bool {
        patch
            .stamped_tiles()
            .any(|(x, y, _)| self.grid.get(x, y).is_some_and(|tile| kinds.contains(&tile)))
    }

    // Validates the whole rectangle before the first write
    fn merge(&mut self, patch: &Patch) -> Result<()> {
        let what = match patch.kind() {
            PatchKind::Mesa { .. } => "mesa",
            PatchKind::Bridge { .. } => "bridge",
        };
        self.grid.check_fits(what, &patch.rect())?;

        for (x, y, tile) in patch.stamped_tiles() {
            self.grid.set(x, y, tile);
        }
        Ok(())
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
