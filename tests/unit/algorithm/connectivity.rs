//! Tests for colinearity, bridge layout and sibling joins

#[cfg(test)]
mod tests {
    use mesagen::algorithm::connectivity::{
        BridgePlan, axis_distance, bridge_directions, bridged_across, build_bridges,
        closest_neighbors, colinearity, connect, join_siblings, plan_bridge,
    };
    use mesagen::algorithm::partition::{SiblingJoin, SplitAxis};
    use mesagen::spatial::grid::Rect;
    use mesagen::spatial::patch::{Direction, Patch};
    use mesagen::{Map, TileKind};
    use rand::{SeedableRng, rngs::StdRng};

    fn map_with_mesas(width: usize, height: usize, mesas: &[(i32, i32, usize)]) -> Map {
        let mut map = Map::new(width, height);
        for &(x, y, radius) in mesas {
            map.place_mesa(x, y, radius).unwrap();
        }
        map
    }

    // Tests side-by-side boxes are horizontally colinear only
    // Verified by using strict straddling for overlap
    #[test]
    fn test_side_by_side_boxes() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(10, 0, 5, 5);

        assert_eq!(colinearity(&a, &b), (true, false));
        assert_eq!(bridge_directions(&a, &b), vec![Direction::East]);
        assert_eq!(bridge_directions(&b, &a), vec![Direction::West]);
        assert_eq!(axis_distance(&a, &b, Direction::East), 10);
    }

    // Tests stacked boxes use screen-space north and south
    // Verified by swapping the vertical comparison
    #[test]
    fn test_stacked_boxes() {
        let top = Rect::new(0, 0, 5, 5);
        let bottom = Rect::new(2, 10, 5, 5);

        assert_eq!(colinearity(&top, &bottom), (false, true));
        assert_eq!(bridge_directions(&top, &bottom), vec![Direction::South]);
        assert_eq!(bridge_directions(&bottom, &top), vec![Direction::North]);
    }

    // Tests colliding or diagonal boxes are never bridged
    #[test]
    fn test_no_directions() {
        let a = Rect::new(0, 0, 5, 5);

        assert!(bridge_directions(&a, &Rect::new(2, 2, 5, 5)).is_empty());
        assert!(bridge_directions(&a, &Rect::new(10, 10, 5, 5)).is_empty());
    }

    // Tests only later mesas are considered and the nearest wins
    // Verified by scanning from index zero
    #[test]
    fn test_closest_neighbors() {
        let map = map_with_mesas(
            30,
            20,
            &[(0, 0, 2), (10, 0, 2), (20, 0, 2), (0, 10, 2)],
        );
        let mesas = map.mesas();

        let first = closest_neighbors(mesas, 0);
        assert_eq!(first[Direction::East.index()], Some(1));
        assert_eq!(first[Direction::South.index()], Some(3));
        assert_eq!(first[Direction::West.index()], None);

        let second = closest_neighbors(mesas, 1);
        assert_eq!(second[Direction::East.index()], Some(2));
        assert_eq!(second[Direction::West.index()], None);

        assert_eq!(closest_neighbors(mesas, 3), [None; 4]);
        assert_eq!(closest_neighbors(mesas, 9), [None; 4]);
    }

    // Tests a bridge runs from one floor edge to the other on its row
    // Verified by dropping the extra outward tile at either end
    #[test]
    fn test_connect_spans_gap() {
        for seed in 0..10 {
            let mut map = map_with_mesas(20, 5, &[(0, 0, 2), (10, 0, 2)]);
            let mut rng = StdRng::seed_from_u64(seed);

            assert!(connect(&mut map, 0, 1, Direction::East, &mut rng).unwrap());
            let bridge = map.bridges().first().unwrap();
            let rect = bridge.rect();
            assert_eq!(rect.height, 1);
            assert_eq!(map.try_get(rect.x - 1, rect.y), Some(TileKind::Floor));
            assert_eq!(map.try_get(rect.right(), rect.y), Some(TileKind::Floor));
            assert!(
                bridge
                    .stamped_tiles()
                    .all(|(x, y, _)| map.try_get(x, y) == Some(TileKind::Bridge))
            );
        }
    }

    // Tests touching floors need no bridge and a one-tile gap needs one tile
    // Verified by treating zero travel as adjacency
    #[test]
    fn test_adjacent_and_single_gap() {
        let mut rng = StdRng::seed_from_u64(1);

        let touching = map_with_mesas(4, 1, &[(0, 0, 0), (1, 0, 0)]);
        let [a, b] = touching.mesas() else {
            unreachable!("two mesas were placed");
        };
        assert_eq!(
            plan_bridge(a, b, Direction::East, &mut rng),
            Some(BridgePlan::Adjacent)
        );

        let mut gap = map_with_mesas(4, 1, &[(0, 0, 0), (2, 0, 0)]);
        assert!(connect(&mut gap, 0, 1, Direction::East, &mut rng).unwrap());
        assert_eq!(gap.bridges().first().map(Patch::rect), Some(Rect::new(1, 0, 1, 1)));
        assert_eq!(gap.to_string(), ".#.~\n");
    }

    // Tests vertical bridges agree whichever end they start from
    // Verified by normalising with start + length * delta
    #[test]
    fn test_vertical_plans_are_symmetric() {
        let mut rng = StdRng::seed_from_u64(2);
        let map = map_with_mesas(1, 4, &[(0, 0, 0), (0, 3, 0)]);
        let [top, bottom] = map.mesas() else {
            unreachable!("two mesas were placed");
        };

        let expected = Rect::new(0, 1, 1, 2);
        let cases = [
            (top, bottom, Direction::South),
            (bottom, top, Direction::North),
        ];
        for (from, to, direction) in cases {
            match plan_bridge(from, to, direction, &mut rng) {
                Some(BridgePlan::Build(bridge)) => assert_eq!(bridge.rect(), expected),
                other => unreachable!("expected a bridge, got {other:?}"),
            }
        }
    }

    // Tests bridges only join mesas
    #[test]
    fn test_plan_requires_mesas() {
        let mut rng = StdRng::seed_from_u64(3);
        let bridge = Patch::bridge(0, 0, 3, Direction::East).unwrap();
        let mesa = Patch::mesa(5, 0, 1);

        assert_eq!(plan_bridge(&bridge, &mesa, Direction::East, &mut rng), None);
    }

    // Tests a bridge through another mesa's floor is skipped without error
    // Verified by removing the protected tile check
    #[test]
    fn test_blocked_bridge_is_skipped() {
        let mut map = map_with_mesas(30, 5, &[(10, 0, 2), (0, 0, 2), (20, 0, 2)]);
        let mut rng = StdRng::seed_from_u64(4);
        let before = map.snapshot();

        assert!(!connect(&mut map, 1, 2, Direction::East, &mut rng).unwrap());
        assert!(map.bridges().is_empty());
        assert_eq!(map.snapshot(), before);
    }

    // Tests certain bridging links each mesa to its closest eastern neighbour
    // Verified by connecting to the farthest neighbour
    #[test]
    fn test_build_bridges_with_certainty() {
        let mut map = map_with_mesas(30, 5, &[(0, 0, 2), (10, 0, 2), (20, 0, 2)]);
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(build_bridges(&mut map, 1, &mut rng).unwrap(), 2);
        assert!(bridged_across(&map, &[0], &[1]));
        assert!(bridged_across(&map, &[2], &[1]));
        assert!(!bridged_across(&map, &[0], &[2]));
    }

    // Tests unbridged splits get exactly one bridge
    // Verified by skipping the already-bridged check
    #[test]
    fn test_join_siblings_bridges_split() {
        let mut map = map_with_mesas(20, 5, &[(0, 0, 2), (10, 0, 2)]);
        let mut rng = StdRng::seed_from_u64(6);
        let joins = vec![SiblingJoin {
            first: vec![0],
            second: vec![1],
            axis: SplitAxis::Vertical,
            depth: 0,
        }];

        assert_eq!(join_siblings(&mut map, &joins, &mut rng).unwrap(), 0);
        assert_eq!(map.bridges().len(), 1);
        assert_eq!(join_siblings(&mut map, &joins, &mut rng).unwrap(), 0);
        assert_eq!(map.bridges().len(), 1);
    }

    // Tests splits without a colinear cross pair are reported
    #[test]
    fn test_join_siblings_reports_unjoined() {
        let mut map = map_with_mesas(20, 20, &[(0, 0, 1), (10, 10, 1)]);
        let mut rng = StdRng::seed_from_u64(7);
        let joins = vec![SiblingJoin {
            first: vec![0],
            second: vec![1],
            axis: SplitAxis::Horizontal,
            depth: 3,
        }];

        assert_eq!(join_siblings(&mut map, &joins, &mut rng).unwrap(), 1);
        assert!(map.bridges().is_empty());
    }
}
