//! Procedural mesa-and-bridge tile maps for grid-world games
//!
//! Circular floor regions ("mesas") ringed by walls are scattered over an
//! impassable void by a recursive binary space partition, then joined by
//! straight one-tile bridges between colinear neighbours. Generation is
//! seeded and deterministic, and all-or-nothing: callers get a complete map
//! or an error.

#![forbid(unsafe_code)]

/// Mesa layout, wall dilation and bridge placement
pub mod algorithm;
/// Command-line handling, configuration, export and error handling
pub mod io;
/// Disc geometry and sampling utilities
pub mod math;
/// Tile catalog, grid, patches and the map itself
pub mod spatial;

pub use io::error::{MapError, Result};
pub use spatial::{Map, TileKind};
