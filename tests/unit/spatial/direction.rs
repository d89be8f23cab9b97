//! Tests for compass directions and wall indexing

#[cfg(test)]
mod tests {
    use mazecarve::Direction;

    // Wall indices follow North=0, East=1, South=2, West=3
    #[test]
    fn test_index_round_trip_matches_wall_layout() {
        let expected = [
            (Direction::North, 0),
            (Direction::East, 1),
            (Direction::South, 2),
            (Direction::West, 3),
        ];
        for (direction, index) in expected {
            assert_eq!(direction.index(), index);
            assert_eq!(Direction::from_index(index), Some(direction));
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn test_opposite_is_a_half_turn() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    // Opposite directions cancel out
    #[test]
    fn test_offsets_cancel_with_opposite() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::North.offset(), (0, 1));
        assert_eq!(Direction::East.offset(), (1, 0));
    }

    #[test]
    fn test_horizontal_walls_are_north_and_south() {
        assert!(Direction::North.is_horizontal());
        assert!(Direction::South.is_horizontal());
        assert!(!Direction::East.is_horizontal());
        assert!(!Direction::West.is_horizontal());
        assert_eq!(Direction::West.to_string(), "west");
    }
}
