//! Tests for plain-text maze drawing

#[cfg(test)]
mod tests {
    use mazecarve::io::ascii::{AsciiRenderer, render_ascii};
    use mazecarve::io::render::Renderer;
    use mazecarve::{Direction, GeneratorConfig, Grid, MazeError, Walls, generate};

    #[test]
    fn test_single_cell_is_a_closed_box() {
        let Ok(single) = generate(1, 1, GeneratorConfig::seeded(1)) else {
            unreachable!("1x1 generation should succeed");
        };
        let Ok(drawing) = render_ascii(&single) else {
            unreachable!("finished grid should render");
        };
        assert_eq!(drawing, "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn test_row_is_one_open_corridor() {
        let Ok(row) = generate(5, 1, GeneratorConfig::seeded(8)) else {
            unreachable!("5x1 generation should succeed");
        };
        let Ok(drawing) = render_ascii(&row) else {
            unreachable!("finished grid should render");
        };

        let border = "+---+---+---+---+---+";
        let expected = format!("{border}\n|{}|\n{border}\n", " ".repeat(19));
        assert_eq!(drawing, expected);
    }

    // The top row is drawn first, so its south opening shows in the third line
    #[test]
    fn test_north_is_drawn_at_the_top() {
        let mut drawing = AsciiRenderer::new(2, 2);
        let mut walls = Walls::ALL;
        walls.remove(Direction::South);
        drawing.emit_cell(1, 1, walls);

        let text = drawing.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines.first().copied(), Some("+---+---+"));
        assert_eq!(lines.get(2).copied(), Some("+---+   +"));
    }

    #[test]
    fn test_unfinished_grid_is_not_drawn() {
        let Ok(fresh) = Grid::new(2, 3) else {
            unreachable!("2x3 grid should be valid");
        };
        assert!(matches!(
            render_ascii(&fresh),
            Err(MazeError::IncompleteGeneration { unvisited: 6 })
        ));
    }
}
