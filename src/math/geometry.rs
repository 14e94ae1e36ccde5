//! Integer circle and interval geometry

/// Half-length of the chord of a radius `radius` disc at `offset` from its centre
///
/// `floor(sqrt(max(0, r² - offset²)))`. Offsets beyond the radius clamp to a
/// zero-width chord rather than failing.
pub const fn rib_width(radius: i32, offset: i32) -> i32 {
    let squared = radius * radius - offset * offset;
    if squared <= 0 {
        return 0;
    }
    squared.isqrt()
}

/// Coordinate of the first tile past a disc's edge along one axis
///
/// `offset` is measured on the perpendicular axis from the disc's centre.
/// With `negative` set the step goes towards lower coordinates.
pub const fn edge_coordinate(center: i32, radius: i32, offset: i32, negative: bool) -> i32 {
    let reach = rib_width(radius, offset) + 1;
    if negative { center - reach } else { center + reach }
}

/// Whether half-open intervals `[a_start, a_end)` and `[b_start, b_end)` share a point
pub const fn intervals_intersect(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Shared part of two half-open intervals, if any
pub fn interval_intersection(
    a_start: i32,
    a_end: i32,
    b_start: i32,
    b_end: i32,
) -> Option<(i32, i32)> {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    (start < end).then_some((start, end))
}
