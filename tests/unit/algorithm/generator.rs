//! Tests for the resumable backtracker state machine

#[cfg(test)]
mod tests {
    use mazecarve::algorithm::generator::{GenerationPhase, StepEvent};
    use mazecarve::algorithm::selection::ScriptedSelector;
    use mazecarve::{Cell, Direction, GeneratorConfig, Grid, MazeError, MazeGenerator, generate};

    fn grid(width: usize, height: usize) -> Grid {
        let Ok(grid) = Grid::new(width, height) else {
            unreachable!("{width}x{height} grid should be valid");
        };
        grid
    }

    fn scripted(
        width: usize,
        height: usize,
        choices: Vec<usize>,
    ) -> MazeGenerator<ScriptedSelector> {
        let Ok(generator) =
            MazeGenerator::with_chooser(grid(width, height), (0, 0), ScriptedSelector::new(choices))
        else {
            unreachable!("origin start should be valid");
        };
        generator
    }

    // A row only ever offers the eastern neighbor, then unwinds the whole path
    #[test]
    fn test_step_sequence_on_a_row() {
        let mut generator = scripted(3, 1, vec![0]);
        assert_eq!(generator.phase(), GenerationPhase::Running);
        assert_eq!(generator.frontier(), vec![(0, 0)]);

        let expected = [
            StepEvent::Carved {
                from: (0, 0),
                to: (1, 0),
                direction: Direction::East,
            },
            StepEvent::Carved {
                from: (1, 0),
                to: (2, 0),
                direction: Direction::East,
            },
            StepEvent::Backtracked { cell: (2, 0) },
            StepEvent::Backtracked { cell: (1, 0) },
            StepEvent::Backtracked { cell: (0, 0) },
        ];
        for event in expected {
            assert_eq!(generator.step().ok(), Some(event));
        }

        assert_eq!(generator.phase(), GenerationPhase::Done);
        assert_eq!(generator.step().ok(), Some(StepEvent::Finished));
        assert_eq!(generator.step().ok(), Some(StepEvent::Finished));
        assert_eq!(generator.carved_count(), 2);
        assert_eq!(generator.iteration(), 5);
    }

    // The top of the frontier is inspected, not popped, until it dead-ends
    #[test]
    fn test_current_cell_stays_on_frontier_until_dead_ended() {
        let mut generator = scripted(2, 2, vec![0]);

        assert!(generator.step().is_ok());
        assert_eq!(generator.current(), Some((0, 1)));
        assert!(generator.step().is_ok());
        assert!(generator.step().is_ok());
        assert_eq!(generator.frontier(), vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(generator.phase(), GenerationPhase::Running);

        assert_eq!(
            generator.step().ok(),
            Some(StepEvent::Backtracked { cell: (1, 0) })
        );
        assert_eq!(generator.phase(), GenerationPhase::Backtracking);
        assert_eq!(generator.frontier_len(), 3);
        assert_eq!(
            generator.visit_order(),
            vec![(0, 0), (0, 1), (1, 1), (1, 0)]
        );
    }

    #[test]
    fn test_scripted_choices_pick_among_unvisited_in_direction_order() {
        // From the origin of a 2x2 grid the candidates are [North, East]
        let mut generator = scripted(2, 2, vec![1]);
        assert_eq!(
            generator.step().ok(),
            Some(StepEvent::Carved {
                from: (0, 0),
                to: (1, 0),
                direction: Direction::East,
            })
        );
    }

    #[test]
    fn test_run_clears_exactly_cells_minus_one_pairs() {
        let generator = scripted(6, 4, vec![3, 1, 4, 1, 5, 9, 2, 6]);
        let Ok(grid) = generator.run() else {
            unreachable!("scripted run should complete");
        };
        assert_eq!(grid.visited_count(), 24);

        let cleared_sides: usize = grid
            .cells()
            .map(|(_, _, cell)| 4 - cell.walls().count())
            .sum();
        assert_eq!(cleared_sides, 2 * 23);
    }

    #[test]
    fn test_run_with_reports_every_step() {
        let generator = scripted(4, 4, vec![2, 0, 1]);
        let mut carved = 0;
        let mut backtracked = 0;

        let result = generator.run_with(|event, state| match event {
            StepEvent::Carved { to, .. } => {
                carved += 1;
                assert_eq!(state.current(), Some(*to));
            }
            StepEvent::Backtracked { .. } => backtracked += 1,
            StepEvent::Finished => unreachable!("Finished is not reported"),
        });

        assert!(result.is_ok());
        assert_eq!(carved, 15);
        // Every visited cell is pushed once and popped once
        assert_eq!(backtracked, 16);
    }

    #[test]
    fn test_visits_follow_visitation_order() {
        let Ok(mut generator) = MazeGenerator::new(grid(3, 3), GeneratorConfig::seeded(5)) else {
            unreachable!("seeded generator should be valid");
        };
        while !generator.is_done() {
            assert!(generator.step().is_ok());
        }

        let visits = generator.visits();
        assert_eq!(visits.len(), 9);
        assert_eq!(visits.first().map(|&(x, y, _)| (x, y)), Some((0, 0)));
        for (x, y, walls) in visits {
            assert_eq!(generator.grid().cell(x, y).map(Cell::walls), Some(walls));
        }
    }

    #[test]
    fn test_custom_start_is_first_visited() {
        let config = GeneratorConfig::seeded(11).with_start(2, 1);
        let Ok(generator) = MazeGenerator::new(grid(4, 3), config) else {
            unreachable!("start inside the grid should be valid");
        };
        assert_eq!(generator.seed(), 11);
        assert_eq!(generator.current(), Some((2, 1)));
        assert!(generator.grid().is_visited(2, 1));
        assert_eq!(generator.grid().visited_count(), 1);
    }

    #[test]
    fn test_start_outside_grid_is_rejected() {
        let config = GeneratorConfig::seeded(1).with_start(3, 0);
        assert!(matches!(
            MazeGenerator::new(grid(3, 3), config),
            Err(MazeError::OutOfBounds { x: 3, y: 0, .. })
        ));
    }

    #[test]
    fn test_reused_grid_is_rejected() {
        let mut used = grid(2, 2);
        assert!(used.mark_visited(1, 1).is_ok());
        assert!(matches!(
            MazeGenerator::new(used, GeneratorConfig::seeded(1)),
            Err(MazeError::InvalidParameter {
                parameter: "grid",
                ..
            })
        ));
    }

    #[test]
    fn test_generate_rejects_invalid_dimensions() {
        assert!(matches!(
            generate(0, 4, GeneratorConfig::default()),
            Err(MazeError::InvalidDimension { axis: "width", .. })
        ));
        assert!(matches!(
            generate(4, -2, GeneratorConfig::default()),
            Err(MazeError::InvalidDimension { axis: "height", .. })
        ));
    }

    #[test]
    fn test_into_grid_keeps_partial_progress() {
        let mut generator = scripted(3, 3, vec![0]);
        assert!(generator.step().is_ok());
        assert!(generator.step().is_ok());
        let partial = generator.into_grid();
        assert_eq!(partial.visited_count(), 3);
    }
}
