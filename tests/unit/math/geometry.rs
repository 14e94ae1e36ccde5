//! Tests for disc chord widths and interval helpers

#[cfg(test)]
mod tests {
    use mesagen::math::geometry::{
        edge_coordinate, interval_intersection, intervals_intersect, rib_width,
    };

    // Tests chord half-lengths against hand-computed values
    // Verified by rounding the square root instead of flooring
    #[test]
    fn test_rib_width_matches_floor_of_chord() {
        assert_eq!(rib_width(0, 0), 0);
        assert_eq!(rib_width(3, 0), 3);
        assert_eq!(rib_width(3, 1), 2);
        assert_eq!(rib_width(3, 2), 2);
        assert_eq!(rib_width(3, 3), 0);
        assert_eq!(rib_width(5, 3), 4);
        assert_eq!(rib_width(2, -1), 1);
    }

    // Tests offsets beyond the radius clamp to zero instead of failing
    // Verified by removing the non-positive guard
    #[test]
    fn test_rib_width_clamps_outside_disc() {
        assert_eq!(rib_width(3, 4), 0);
        assert_eq!(rib_width(1, -7), 0);
    }

    // Tests edge coordinates land one tile past the floor on either side
    // Verified by dropping the extra outward tile
    #[test]
    fn test_edge_coordinate_steps_past_floor() {
        assert_eq!(edge_coordinate(10, 3, 0, false), 14);
        assert_eq!(edge_coordinate(10, 3, 0, true), 6);
        assert_eq!(edge_coordinate(10, 3, 3, false), 11);
        assert_eq!(edge_coordinate(0, 0, 0, true), -1);
    }

    // Tests half-open interval overlap treats touching ends as disjoint
    // Verified by using <= in the comparison
    #[test]
    fn test_interval_overlap_is_half_open() {
        assert!(intervals_intersect(0, 5, 4, 10));
        assert!(!intervals_intersect(0, 5, 5, 10));
        assert!(intervals_intersect(3, 4, 0, 10));

        assert_eq!(interval_intersection(0, 5, 3, 10), Some((3, 5)));
        assert_eq!(interval_intersection(0, 5, 5, 10), None);
        assert_eq!(interval_intersection(2, 8, 0, 20), Some((2, 8)));
    }
}
