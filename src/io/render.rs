//! Per-cell emission surface between a finished grid and its renderers

use crate::io::error::{MazeError, Result};
use crate::spatial::{Grid, Walls};

/// Consumer of a finished maze, one cell at a time
///
/// Implemented for any `FnMut(usize, usize, Walls)` closure, so a plain
/// callback can stand in for an instantiation hook.
pub trait Renderer {
    /// Receive the final wall set of the cell at `(x, y)`
    fn emit_cell(&mut self, x: usize, y: usize, walls: Walls);
}

impl<F> Renderer for F
where
    F: FnMut(usize, usize, Walls),
{
    fn emit_cell(&mut self, x: usize, y: usize, walls: Walls) {
        self(x, y, walls);
    }
}

/// Emit every cell of `grid` to `renderer` exactly once, in row-major order
///
/// Returns the number of emitted cells.
///
/// # Errors
///
/// Returns `IncompleteGeneration` if any cell has not been visited yet; no
/// cell is emitted in that case
pub fn render<R>(grid: &Grid, renderer: &mut R) -> Result<usize>
where
    R: Renderer + ?Sized,
{
    let unvisited = grid.cell_count() - grid.visited_count();
    if unvisited > 0 {
        return Err(MazeError::IncompleteGeneration { unvisited });
    }

    let mut emitted = 0;
    for (x, y, cell) in grid.cells() {
        renderer.emit_cell(x, y, cell.walls());
        emitted += 1;
    }
    Ok(emitted)
}
