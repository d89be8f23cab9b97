//! Structural checks of a carved grid
//!
//! Treats cells as graph nodes and cleared wall pairs as edges. A perfect maze
//! is a spanning tree: connected with exactly `cells - 1` edges.

use bitvec::{bitvec, vec::BitVec};

use crate::spatial::{Direction, Grid};

/// Structural summary of a grid's passages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeReport {
    /// Number of cells in the grid
    pub cell_count: usize,
    /// Cleared wall pairs between adjacent cells, each counted once
    pub passage_count: usize,
    /// Cells reachable from `(0, 0)` through cleared walls
    pub reachable_from_origin: usize,
    /// Adjacent pairs whose shared boundary is cleared on one side only
    pub asymmetric_walls: usize,
    /// Cleared walls on the outer edge of the grid
    pub boundary_breaches: usize,
    /// Cells the generator never entered
    pub unvisited: usize,
    /// Cells with exactly one opening
    pub dead_ends: usize,
}

impl MazeReport {
    /// Inspect every cell and boundary of `grid`
    pub fn analyze(grid: &Grid) -> Self {
        let mut passage_count = 0;
        let mut asymmetric_walls = 0;
        let mut boundary_breaches = 0;
        let mut unvisited = 0;
        let mut dead_ends = 0;

        for (x, y, cell) in grid.cells() {
            let walls = cell.walls();
            if !cell.is_visited() {
                unvisited += 1;
            }
            if walls.count() == 3 {
                dead_ends += 1;
            }

            for direction in Direction::ALL {
                let open = !walls.contains(direction);
                match grid.neighbor(x, y, direction) {
                    None if open => boundary_breaches += 1,
                    None => {}
                    Some((nx, ny)) => {
                        // East and North own the shared boundary to count it once
                        if matches!(direction, Direction::East | Direction::North) {
                            let mirrored_open = !grid.has_wall(nx, ny, direction.opposite());
                            if open != mirrored_open {
                                asymmetric_walls += 1;
                            } else if open {
                                passage_count += 1;
                            }
                        }
                    }
                }
            }
        }

        Self {
            cell_count: grid.cell_count(),
            passage_count,
            reachable_from_origin: flood_fill_count(grid, 0, 0),
            asymmetric_walls,
            boundary_breaches,
            unvisited,
            dead_ends,
        }
    }

    /// Whether every cell is reachable from the origin
    pub const fn is_connected(&self) -> bool {
        self.reachable_from_origin == self.cell_count
    }

    /// Whether the passage graph has no cycles
    ///
    /// Only meaningful for a connected grid, where a tree has exactly
    /// `cells - 1` edges.
    pub const fn is_acyclic(&self) -> bool {
        self.passage_count + 1 == self.cell_count
    }

    /// Whether the grid is a perfect maze with consistent wall state
    pub const fn is_perfect(&self) -> bool {
        self.asymmetric_walls == 0
            && self.boundary_breaches == 0
            && self.unvisited == 0
            && self.is_connected()
            && self.is_acyclic()
    }
}

/// Count cells reachable from `(x, y)` by walking through cleared walls
///
/// A passage is only followed when it is cleared on both sides.
pub fn flood_fill_count(grid: &Grid, x: usize, y: usize) -> usize {
    let Some(start) = grid.index_of(x, y) else {
        return 0;
    };

    let mut seen: BitVec = bitvec![0; grid.cell_count()];
    seen.set(start, true);
    let mut pending = vec![(x, y)];
    let mut reached = 0;

    while let Some((cx, cy)) = pending.pop() {
        reached += 1;
        for (direction, nx, ny) in grid.neighbors_in_bounds(cx, cy) {
            let passable = !grid.has_wall(cx, cy, direction)
                && !grid.has_wall(nx, ny, direction.opposite());
            if !passable {
                continue;
            }
            if let Some(index) = grid.index_of(nx, ny)
                && seen.get(index).as_deref() == Some(&false)
            {
                seen.set(index, true);
                pending.push((nx, ny));
            }
        }
    }

    reached
}
