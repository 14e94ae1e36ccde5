//! Bridge placement between colinear mesas
//!
//! Two mesas are colinear along an axis when their bounding boxes share rows
//! (east/west neighbours) or columns (north/south neighbours); sharing both
//! means the boxes collide and the pair is never bridged. Each mesa looks
//! only at mesas placed after it, so every pair is considered once.

use rand::Rng;

use crate::algorithm::partition::SiblingJoin;
use crate::io::error::Result;
use crate::math::geometry::edge_coordinate;
use crate::math::probability::one_in;
use crate::spatial::Map;
use crate::spatial::grid::Rect;
use crate::spatial::patch::{Direction, Patch, PatchKind};
use crate::spatial::tiles::TileKind;

/// Tiles a bridge may never be stamped over
const PROTECTED_TILES: [TileKind; 2] = [TileKind::Floor, TileKind::Marker];

/// Whether two boxes are horizontally and vertically colinear
///
/// Returns `(h_overlap, v_overlap)`: shared rows mean a horizontal line can
/// touch both boxes, shared columns a vertical one.
pub const fn colinearity(a: &Rect, b: &Rect) -> (bool, bool) {
    (a.rows_overlap(b), a.columns_overlap(b))
}

/// Directions in which `to` can be reached from `from` by a straight bridge
///
/// Empty when the boxes collide or share neither rows nor columns.
pub fn bridge_directions(from: &Rect, to: &Rect) -> Vec<Direction> {
    let (h_overlap, v_overlap) = colinearity(from, to);
    if h_overlap && v_overlap {
        return Vec::new();
    }

    let mut directions = Vec::with_capacity(1);
    if h_overlap {
        directions.push(if to.x > from.x {
            Direction::East
        } else {
            Direction::West
        });
    }
    if v_overlap {
        directions.push(if to.y > from.y {
            Direction::South
        } else {
            Direction::North
        });
    }
    directions
}

/// Distance between box origins along a direction's travel axis
pub const fn axis_distance(from: &Rect, to: &Rect, direction: Direction) -> i32 {
    if direction.is_horizontal() {
        (to.x - from.x).abs()
    } else {
        (to.y - from.y).abs()
    }
}

/// Closest later mesa in each direction, indexed by [`Direction::index`]
///
/// Ties keep the first mesa found.
pub fn closest_neighbors(mesas: &[Patch], index: usize) -> [Option<usize>; 4] {
    let mut closest: [Option<(usize, i32)>; 4] = [None; 4];
    let Some(origin) = mesas.get(index).map(Patch::rect) else {
        return [None; 4];
    };

    for (other_index, other) in mesas.iter().enumerate().skip(index + 1) {
        let other_rect = other.rect();
        for direction in bridge_directions(&origin, &other_rect) {
            let distance = axis_distance(&origin, &other_rect, direction);
            if let Some(slot) = closest.get_mut(direction.index()) {
                if slot.is_none_or(|(_, best)| distance < best) {
                    *slot = Some((other_index, distance));
                }
            }
        }
    }

    closest.map(|slot| slot.map(|(other_index, _)| other_index))
}

/// Outcome of laying out a bridge between two mesas
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgePlan {
    /// A bridge patch spanning the gap
    Build(Patch),
    /// The mesas' edges already touch on the chosen line
    Adjacent,
}

/// Lay out a straight bridge from mesa `from` to mesa `to`
///
/// The crossing line is drawn uniformly from the rows (or columns) the two
/// boxes share. On that line each end sits one tile past its mesa's floor on
/// the side facing the other mesa. Returns `None` if either patch is not a
/// mesa or the boxes share no line along `direction`.
pub fn plan_bridge<R: Rng + ?Sized>(
    from: &Patch,
    to: &Patch,
    direction: Direction,
    rng: &mut R,
) -> Option<BridgePlan> {
    let ([from_cx, from_cy], [to_cx, to_cy]) = (from.center()?, to.center()?);
    let (from_r, to_r) = (from.radius()? as i32, to.radius()? as i32);
    let (from_rect, to_rect) = (from.rect(), to.rect());

    let shared = if direction.is_horizontal() {
        from_rect.shared_rows(&to_rect)?
    } else {
        from_rect.shared_columns(&to_rect)?
    };
    let line = rng.random_range(shared.0..shared.1);

    let outward = direction.is_negative();
    let (start, end) = if direction.is_horizontal() {
        (
            edge_coordinate(from_cx, from_r, line - from_cy, outward),
            edge_coordinate(to_cx, to_r, line - to_cy, !outward),
        )
    } else {
        (
            edge_coordinate(from_cy, from_r, line - from_cx, outward),
            edge_coordinate(to_cy, to_r, line - to_cx, !outward),
        )
    };

    // Ends that crossed over mean the floors already meet on this line
    let travelled = if outward { start - end } else { end - start };
    if travelled < 0 {
        return Some(BridgePlan::Adjacent);
    }

    let length = (end - start).unsigned_abs() as usize + 1;
    let (x, y) = if direction.is_horizontal() {
        (start, line)
    } else {
        (line, start)
    };

    Patch::bridge(x, y, length, direction)
        .ok()
        .map(BridgePlan::Build)
}

/// Try to bridge mesa `from` to mesa `to` travelling in `direction`
///
/// Returns whether the two mesas are now linked: by a new bridge, or because
/// their floors already touch. Bridges that would cover floor or markers are
/// skipped.
///
/// # Errors
///
/// Returns `OutOfBounds` if the bridge would leave the map
pub fn connect<R: Rng + ?Sized>(
    map: &mut Map,
    from: usize,
    to: usize,
    direction: Direction,
    rng: &mut R,
) -> Result<bool> {
    let plan = match (map.mesas().get(from), map.mesas().get(to)) {
        (Some(a), Some(b)) => plan_bridge(a, b, direction, rng),
        _ => None,
    };

    match plan {
        Some(BridgePlan::Build(bridge)) => {
            if map.patch_covers(&bridge, &PROTECTED_TILES) {
                log::debug!(
                    "skipping bridge {from}->{to} {direction:?} at ({}, {}): blocked by floor",
                    bridge.x(),
                    bridge.y()
                );
                return Ok(false);
            }
            map.place_bridge(bridge.with_joins(from, to))?;
            Ok(true)
        }
        Some(BridgePlan::Adjacent) => {
            log::debug!("mesas {from} and {to} already touch {direction:?}");
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Probabilistically bridge every mesa to its closest neighbour in each direction
///
/// Each candidate is built with probability `1 / chance`. Returns the number
/// of bridges placed.
///
/// # Errors
///
/// Returns `OutOfBounds` if a bridge would leave the map
pub fn build_bridges<R: Rng + ?Sized>(map: &mut Map, chance: u32, rng: &mut R) -> Result<usize> {
    let before = map.bridges().len();

    for index in 0..map.mesas().len() {
        let closest = closest_neighbors(map.mesas(), index);
        for direction in Direction::ALL {
            let Some(Some(other)) = closest.get(direction.index()).copied() else {
                continue;
            };
            if one_in(chance, rng) {
                connect(map, index, other, direction, rng)?;
            }
        }
    }

    Ok(map.bridges().len() - before)
}

/// Whether any placed bridge runs between the two groups of mesas
pub fn bridged_across(map: &Map, first: &[usize], second: &[usize]) -> bool {
    map.bridges().iter().any(|bridge| match bridge.kind() {
        PatchKind::Bridge {
            joins: Some([a, b]),
            ..
        } => {
            (first.contains(a) && second.contains(b)) || (first.contains(b) && second.contains(a))
        }
        _ => false,
    })
}

/// Colinear cross pairs of a split, nearest first
fn cross_candidates(map: &Map, join: &SiblingJoin) -> Vec<(i32, usize, usize, Direction)> {
    let mesas = map.mesas();
    let mut candidates = Vec::new();

    for &a in &join.first {
        let Some(a_rect) = mesas.get(a).map(Patch::rect) else {
            continue;
        };
        for &b in &join.second {
            let Some(b_rect) = mesas.get(b).map(Patch::rect) else {
                continue;
            };
            for direction in bridge_directions(&a_rect, &b_rect) {
                candidates.push((axis_distance(&a_rect, &b_rect, direction), a, b, direction));
            }
        }
    }

    // Stable sort keeps placement order among equal distances
    candidates.sort_by_key(|&(distance, ..)| distance);
    candidates
}

/// Make sure the two halves of every split are linked where geometry allows
///
/// Splits are visited children first. A split already crossed by a bridge
/// is left alone; otherwise the nearest colinear cross pair that can be
/// bridged is connected. Returns the number of splits that remain unjoined.
///
/// # Errors
///
/// Returns `OutOfBounds` if a bridge would leave the map
pub fn join_siblings<R: Rng + ?Sized>(
    map: &mut Map,
    joins: &[SiblingJoin],
    rng: &mut R,
) -> Result<usize> {
    let mut unjoined = 0;

    for join in joins {
        if bridged_across(map, &join.first, &join.second) {
            continue;
        }

        let mut linked = false;
        for (_, a, b, direction) in cross_candidates(map, join) {
            if connect(map, a, b, direction, rng)? {
                linked = true;
                break;
            }
        }

        if !linked {
            log::debug!(
                "no bridge possible across {:?} split at depth {}",
                join.axis,
                join.depth
            );
            unjoined += 1;
        }
    }

    Ok(unjoined)
}
