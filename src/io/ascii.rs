//! Plain-text maze drawing with north at the top

use std::fmt;

use crate::io::error::Result;
use crate::io::render::{Renderer, render};
use crate::spatial::{Direction, Grid, Walls};

/// Renderer collecting cells into a `+---+` style text drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    walls: Vec<Walls>,
}

impl AsciiRenderer {
    /// Create a drawing surface for a `width × height` grid
    ///
    /// Cells that are never emitted are drawn fully walled.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            walls: vec![Walls::ALL; width * height],
        }
    }

    fn walls_at(&self, x: usize, y: usize) -> Walls {
        self.walls
            .get(y * self.width + x)
            .copied()
            .unwrap_or(Walls::ALL)
    }
}

impl Renderer for AsciiRenderer {
    fn emit_cell(&mut self, x: usize, y: usize, walls: Walls) {
        if x < self.width
            && y < self.height
            && let Some(slot) = self.walls.get_mut(y * self.width + x)
        {
            *slot = walls;
        }
    }
}

impl fmt::Display for AsciiRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(top) = self.height.checked_sub(1) else {
            return Ok(());
        };

        for x in 0..self.width {
            let edge = if self.walls_at(x, top).contains(Direction::North) {
                "---"
            } else {
                "   "
            };
            write!(f, "+{edge}")?;
        }
        writeln!(f, "+")?;

        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let side = if self.walls_at(x, y).contains(Direction::West) {
                    '|'
                } else {
                    ' '
                };
                write!(f, "{side}   ")?;
            }
            let east = self
                .width
                .checked_sub(1)
                .is_none_or(|last| self.walls_at(last, y).contains(Direction::East));
            writeln!(f, "{}", if east { '|' } else { ' ' })?;

            for x in 0..self.width {
                let edge = if self.walls_at(x, y).contains(Direction::South) {
                    "---"
                } else {
                    "   "
                };
                write!(f, "+{edge}")?;
            }
            writeln!(f, "+")?;
        }
        Ok(())
    }
}

/// Draw a finished grid as text
///
/// # Errors
///
/// Returns `IncompleteGeneration` if the grid has unvisited cells
pub fn render_ascii(grid: &Grid) -> Result<String> {
    let mut drawing = AsciiRenderer::new(grid.width(), grid.height());
    render(grid, &mut drawing)?;
    Ok(drawing.to_string())
}
