//! Recursive binary space partition that spreads mesas across the map
//!
//! Regions are split until they are small (both sides within twice the
//! margin) or the depth limit is hit; each leaf receives exactly one mesa
//! whose bounding box fits inside it. Every split records which mesas ended
//! up on either side so that the connectivity pass can join the halves.

use rand::Rng;

use crate::io::configuration::GeneratorConfig;
use crate::io::error::Result;
use crate::math::probability::sample_symmetric_unit;
use crate::spatial::Map;
use crate::spatial::grid::Rect;

/// Orientation of the line dividing a region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Vertical line: the width is divided into left and right halves
    Vertical,
    /// Horizontal line: the height is divided into top and bottom halves
    Horizontal,
}

/// The two sides of one split and the mesas placed in each
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiblingJoin {
    /// Mesa indices placed in the left or top half
    pub first: Vec<usize>,
    /// Mesa indices placed in the right or bottom half
    pub second: Vec<usize>,
    /// How the parent region was divided
    pub axis: SplitAxis,
    /// Depth of the parent region
    pub depth: usize,
}

/// Everything a finished partition produced besides the mesas themselves
#[derive(Clone, Debug, Default)]
pub struct PartitionOutcome {
    /// Leaf regions, in placement order
    pub leaves: Vec<Rect>,
    /// One entry per internal node, children before parents
    pub joins: Vec<SiblingJoin>,
    /// Deepest level that became a leaf
    pub deepest: usize,
}

/// Whether a region at `depth` stops splitting
pub const fn is_leaf(region: &Rect, depth: usize, margin: usize, max_depth: usize) -> bool {
    (region.width <= 2 * margin && region.height <= 2 * margin) || depth >= max_depth
}

/// Axis bias that favours dividing the longer side
///
/// Positive for tall regions, negative for wide ones, zero for squares.
pub fn split_bias(width: usize, height: usize) -> f64 {
    let (w, h) = (width as f64, height as f64);
    if h > w { 1.0 - w / h } else { -(1.0 - h / w) }
}

/// Pick the split axis for a region that is not a leaf
///
/// A side within twice the margin cannot be divided, which forces the other
/// axis; otherwise a Beta(k, k) draw on `[-1, 1]` is compared to the bias.
pub fn choose_axis<R: Rng + ?Sized>(
    region: &Rect,
    margin: usize,
    concentration: usize,
    rng: &mut R,
) -> SplitAxis {
    if region.width <= 2 * margin {
        return SplitAxis::Horizontal;
    }
    if region.height <= 2 * margin {
        return SplitAxis::Vertical;
    }

    let draw = sample_symmetric_unit(concentration, rng);
    if draw > split_bias(region.width, region.height) {
        SplitAxis::Vertical
    } else {
        SplitAxis::Horizontal
    }
}

/// Divide a region along `axis` at a uniform position at least `margin` from either edge
///
/// The divided side must exceed twice the margin.
pub fn split_region<R: Rng + ?Sized>(
    region: &Rect,
    axis: SplitAxis,
    margin: usize,
    rng: &mut R,
) -> (Rect, Rect) {
    let margin = margin as i32;
    match axis {
        SplitAxis::Vertical => {
            let at = rng.random_range(region.x + margin..=region.right() - margin);
            let left = (at - region.x) as usize;
            (
                Rect::new(region.x, region.y, left, region.height),
                Rect::new(at, region.y, region.width - left, region.height),
            )
        }
        SplitAxis::Horizontal => {
            let at = rng.random_range(region.y + margin..=region.bottom() - margin);
            let top = (at - region.y) as usize;
            (
                Rect::new(region.x, region.y, region.width, top),
                Rect::new(region.x, at, region.width, region.height - top),
            )
        }
    }
}

/// Largest radius whose `2r + 1` box fits in the given right and bottom room
pub const fn max_feasible_radius(right_room: usize, bottom_room: usize) -> usize {
    let room = if right_room < bottom_room {
        right_room
    } else {
        bottom_room
    };
    room.saturating_sub(1) / 2
}

/// Draw a mesa origin inside a leaf and a radius that keeps it there
///
/// Returns `(x, y, radius)`; the leaf must be at least one tile in each
/// direction.
pub fn leaf_mesa<R: Rng + ?Sized>(leaf: &Rect, rng: &mut R) -> (i32, i32, usize) {
    let x = rng.random_range(leaf.x..leaf.right());
    let y = rng.random_range(leaf.y..leaf.bottom());
    let limit = max_feasible_radius((leaf.right() - x) as usize, (leaf.bottom() - y) as usize);
    let radius = rng.random_range(0..=limit);
    (x, y, radius)
}

/// Recursive partitioner writing mesas into a map
pub struct Partitioner<'a, R: Rng + ?Sized> {
    map: &'a mut Map,
    rng: &'a mut R,
    margin: usize,
    max_depth: usize,
    concentration: usize,
    outcome: PartitionOutcome,
}

impl<'a, R: Rng + ?Sized> Partitioner<'a, R> {
    /// Prepare a partition of `map` using the config's margin and depth limit
    pub fn new(map: &'a mut Map, config: &GeneratorConfig, rng: &'a mut R) -> Self {
        Self {
            map,
            rng,
            margin: config.margin,
            max_depth: config.max_depth,
            concentration: config.split_concentration,
            outcome: PartitionOutcome::default(),
        }
    }

    /// Partition the whole map
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if a leaf mesa does not fit the map
    pub fn run(mut self) -> Result<PartitionOutcome> {
        let root = self.map.grid().bounds();
        self.partition(root, 0)?;
        Ok(self.outcome)
    }

    /// Partition one region and return the indices of the mesas placed in it
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if a leaf mesa does not fit the map
    pub fn partition(&mut self, region: Rect, depth: usize) -> Result<Vec<usize>> {
        if is_leaf(&region, depth, self.margin, self.max_depth) {
            return self.place_leaf(region, depth).map(|index| vec![index]);
        }

        let axis = choose_axis(&region, self.margin, self.concentration, self.rng);
        let (first_region, second_region) = split_region(&region, axis, self.margin, self.rng);

        let first = self.partition(first_region, depth + 1)?;
        let second = self.partition(second_region, depth + 1)?;

        let mut placed = Vec::with_capacity(first.len() + second.len());
        placed.extend_from_slice(&first);
        placed.extend_from_slice(&second);

        self.outcome.joins.push(SiblingJoin {
            first,
            second,
            axis,
            depth,
        });
        Ok(placed)
    }

    fn place_leaf(&mut self, leaf: Rect, depth: usize) -> Result<usize> {
        let (x, y, radius) = leaf_mesa(&leaf, self.rng);
        let index = self.map.place_mesa(x, y, radius)?;
        log::debug!(
            "leaf {}x{} at ({}, {}) depth {depth}: mesa r={radius} at ({x}, {y})",
            leaf.width,
            leaf.height,
            leaf.x,
            leaf.y
        );

        self.outcome.leaves.push(leaf);
        self.outcome.deepest = self.outcome.deepest.max(depth);
        Ok(index)
    }
}
