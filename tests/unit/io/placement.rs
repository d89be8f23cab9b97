//! Tests for world-space floor and wall placements

#[cfg(test)]
mod tests {
    use mazecarve::io::placement::{Placement, PlacementKind, PlacementRenderer};
    use mazecarve::io::render::render;
    use mazecarve::{Direction, GeneratorConfig, Grid, MazeError, generate};

    fn maze(width: usize, height: usize) -> Grid {
        let Ok(maze) = generate(width, height, GeneratorConfig::seeded(17)) else {
            unreachable!("{width}x{height} generation should succeed");
        };
        maze
    }

    fn wall(cell: [usize; 2], side: Direction, position: [f32; 3], yaw_degrees: f32) -> Placement {
        Placement {
            kind: PlacementKind::Wall,
            cell,
            side: Some(side),
            position,
            yaw_degrees,
        }
    }

    #[test]
    fn test_single_cell_gets_floor_and_four_walls() {
        let Ok(mut renderer) = PlacementRenderer::new(2.0) else {
            unreachable!("positive cell size should be valid");
        };
        assert_eq!(render(&maze(1, 1), &mut renderer).ok(), Some(1));

        let expected = vec![
            Placement {
                kind: PlacementKind::Floor,
                cell: [0, 0],
                side: None,
                position: [0.0, 0.0, 0.0],
                yaw_degrees: 0.0,
            },
            wall([0, 0], Direction::North, [0.0, 0.0, 1.0], 0.0),
            wall([0, 0], Direction::East, [1.0, 0.0, 0.0], 90.0),
            wall([0, 0], Direction::South, [0.0, 0.0, -1.0], 0.0),
            wall([0, 0], Direction::West, [-1.0, 0.0, 0.0], 90.0),
        ];
        assert_eq!(renderer.into_placements(), expected);
    }

    #[test]
    fn test_floor_is_centred_on_scaled_cell_position() {
        let Ok(mut renderer) = PlacementRenderer::new(3.0) else {
            unreachable!("positive cell size should be valid");
        };
        assert!(render(&maze(3, 2), &mut renderer).is_ok());

        let floor = renderer
            .placements()
            .iter()
            .find(|placement| placement.kind == PlacementKind::Floor && placement.cell == [2, 1])
            .copied();
        assert_eq!(
            floor,
            Some(Placement {
                kind: PlacementKind::Floor,
                cell: [2, 1],
                side: None,
                position: [6.0, 0.0, 3.0],
                yaw_degrees: 0.0,
            })
        );
    }

    // A 2x2 perfect maze has 12 boundaries, 3 of them open
    #[test]
    fn test_shared_walls_are_duplicated_unless_deduplicated() {
        let grid = maze(2, 2);

        let Ok(mut per_cell) = PlacementRenderer::new(1.0) else {
            unreachable!("positive cell size should be valid");
        };
        assert!(render(&grid, &mut per_cell).is_ok());
        assert_eq!(per_cell.count(PlacementKind::Floor), 4);
        assert_eq!(per_cell.count(PlacementKind::Wall), 10);

        let Ok(mut once) = PlacementRenderer::new(1.0).map(PlacementRenderer::with_shared_walls_once)
        else {
            unreachable!("positive cell size should be valid");
        };
        assert!(render(&grid, &mut once).is_ok());
        assert_eq!(once.count(PlacementKind::Floor), 4);
        assert_eq!(once.count(PlacementKind::Wall), 9);
    }

    #[test]
    fn test_non_positive_cell_sizes_are_rejected() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                PlacementRenderer::new(size),
                Err(MazeError::InvalidParameter {
                    parameter: "cell_size",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_export_json_writes_tagged_records() {
        let Ok(temp_dir) = tempfile::tempdir() else {
            unreachable!("temporary directory should be creatable");
        };
        let path = temp_dir.path().join("nested").join("placements.json");

        let Ok(mut renderer) = PlacementRenderer::new(2.0) else {
            unreachable!("positive cell size should be valid");
        };
        assert!(render(&maze(1, 1), &mut renderer).is_ok());
        assert!(renderer.export_json(&path).is_ok());

        let Ok(text) = std::fs::read_to_string(&path) else {
            unreachable!("exported file should be readable");
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) else {
            unreachable!("exported file should be valid JSON");
        };
        let Some(records) = value.as_array() else {
            unreachable!("placements should serialize as an array");
        };
        assert_eq!(records.len(), 5);

        let floor = records.first();
        assert_eq!(
            floor.and_then(|record| record.get("kind")),
            Some(&serde_json::json!("floor"))
        );
        assert!(floor.and_then(|record| record.get("side")).is_none());

        let north = records.get(1);
        assert_eq!(
            north.and_then(|record| record.get("side")),
            Some(&serde_json::json!("north"))
        );
        assert_eq!(
            north.and_then(|record| record.get("cell")),
            Some(&serde_json::json!([0, 0]))
        );
    }
}
