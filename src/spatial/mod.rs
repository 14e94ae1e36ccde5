//! Spatial data structures for the generated map
//!
//! This module contains:
//! - The tile catalog
//! - The bounds-checked tile grid and rectangles
//! - Mesa and bridge patches
//! - The map that owns and stamps them

/// Bounds-checked tile grid and rectangles
pub mod grid;
/// Generated map and patch merging
pub mod map;
/// Mesa and bridge patches
pub mod patch;
/// Tile kinds, glyphs and colour categories
pub mod tiles;

pub use map::Map;
pub use tiles::TileKind;
