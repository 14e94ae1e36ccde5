//! Mathematical utilities for map generation

/// Integer disc and interval geometry
pub mod geometry;
/// Random sampling helpers
pub mod probability;
