//! Resumable recursive backtracker and one-call maze generation

use crate::{
    algorithm::selection::{Chooser, RandomSelector},
    io::error::{MazeError, Result, invalid_parameter},
    spatial::{Direction, Grid, Walls, grid::signed_coordinate},
};
use num_traits::PrimInt;
use std::fmt;

/// Runtime parameters for one generation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for neighbor selection; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Start cell; `(0, 0)` when absent
    pub start: Option<(usize, usize)>,
}

impl GeneratorConfig {
    /// Configuration with a fixed seed and the default start cell
    pub const fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            start: None,
        }
    }

    /// Replace the start cell
    #[must_use]
    pub const fn with_start(mut self, x: usize, y: usize) -> Self {
        self.start = Some((x, y));
        self
    }
}

/// Where the backtracker stands after its most recent step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Last step carved into a new cell (or nothing has happened yet)
    Running,
    /// Last step popped a dead-ended cell off the frontier
    Backtracking,
    /// Frontier is empty; every reachable cell has been visited
    Done,
}

/// Outcome of a single backtracker step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// A wall pair was cleared and the neighbor became the new current cell
    Carved {
        /// Cell the passage was carved from
        from: (usize, usize),
        /// Newly visited cell
        to: (usize, usize),
        /// Side of `from` that was opened
        direction: Direction,
    },
    /// The current cell had no unvisited neighbors and was popped
    Backtracked {
        /// Popped cell
        cell: (usize, usize),
    },
    /// Nothing left to do
    Finished,
}

/// Randomized recursive backtracker over a [`Grid`]
///
/// The frontier is an explicit stack of flat cell indices. Each step inspects
/// the top of the stack without popping it; the cell is only popped once it
/// has no unvisited neighbors left, which yields long winding corridors.
/// Every carve clears one wall pair, so a finished run has cleared exactly
/// `width * height - 1` of them.
pub struct MazeGenerator<C = RandomSelector> {
    grid: Grid,
    chooser: C,
    frontier: Vec<usize>,
    visit_order: Vec<usize>,
    phase: GenerationPhase,
    carved: usize,
    iteration: usize,
}

impl MazeGenerator<RandomSelector> {
    /// Prepare a seeded run over a freshly constructed grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The start cell lies outside the grid (`OutOfBounds`)
    /// - The grid already has visited cells (`InvalidParameter`)
    pub fn new(grid: Grid, config: GeneratorConfig) -> Result<Self> {
        let chooser = config
            .seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::new);
        Self::with_chooser(grid, config.start.unwrap_or((0, 0)), chooser)
    }

    /// Seed driving this run
    pub const fn seed(&self) -> u64 {
        self.chooser.seed()
    }
}

impl<C: Chooser> MazeGenerator<C> {
    /// Prepare a run with an injected choice source
    ///
    /// The start cell is marked visited and pushed onto the frontier.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The start cell lies outside the grid (`OutOfBounds`)
    /// - The grid already has visited cells (`InvalidParameter`)
    pub fn with_chooser(mut grid: Grid, start: (usize, usize), chooser: C) -> Result<Self> {
        let visited = grid.visited_count();
        if visited > 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{visited} visited cells"),
                &"generation needs a freshly constructed grid",
            ));
        }

        let (x, y) = start;
        grid.mark_visited(x, y)?;
        let start_index = index_in(&grid, x, y)?;

        let mut frontier = Vec::with_capacity(grid.cell_count().min(1 << 16));
        frontier.push(start_index);
        let mut visit_order = Vec::with_capacity(grid.cell_count());
        visit_order.push(start_index);

        Ok(Self {
            grid,
            chooser,
            frontier,
            visit_order,
            phase: GenerationPhase::Running,
            carved: 0,
            iteration: 0,
        })
    }

    /// Perform one iteration of the backtracker
    ///
    /// Calling this after the run is done keeps returning `Finished`.
    ///
    /// # Errors
    ///
    /// Returns an error if the choice source picks an index outside the
    /// candidate list, or if a grid mutation reports `OutOfBounds` (both
    /// indicate a bug rather than a recoverable condition)
    pub fn step(&mut self) -> Result<StepEvent> {
        let Some(&current) = self.frontier.last() else {
            self.phase = GenerationPhase::Done;
            return Ok(StepEvent::Finished);
        };
        self.iteration += 1;
        let (x, y) = coords_in(&self.grid, current)?;

        let unvisited: Vec<(Direction, usize, usize)> = self
            .grid
            .neighbors_in_bounds(x, y)
            .into_iter()
            .filter(|&(_, nx, ny)| !self.grid.is_visited(nx, ny))
            .collect();

        if unvisited.is_empty() {
            self.frontier.pop();
            self.phase = if self.frontier.is_empty() {
                GenerationPhase::Done
            } else {
                GenerationPhase::Backtracking
            };
            return Ok(StepEvent::Backtracked { cell: (x, y) });
        }

        let pick = self.chooser.choose(unvisited.len());
        let &(direction, nx, ny) = unvisited.get(pick).ok_or_else(|| {
            invalid_parameter(
                "choice",
                &pick,
                &format!("must be below {}", unvisited.len()),
            )
        })?;

        self.grid.clear_wall_pair(x, y, direction)?;
        self.grid.mark_visited(nx, ny)?;
        let next = index_in(&self.grid, nx, ny)?;
        self.frontier.push(next);
        self.visit_order.push(next);
        self.carved += 1;
        self.phase = GenerationPhase::Running;

        Ok(StepEvent::Carved {
            from: (x, y),
            to: (nx, ny),
            direction,
        })
    }

    /// Step until the frontier is empty and hand the grid back
    ///
    /// # Errors
    ///
    /// Propagates any error from [`MazeGenerator::step`]
    pub fn run(self) -> Result<Grid> {
        self.run_with(|_, _| {})
    }

    /// Step to completion, reporting every step to `observer`
    ///
    /// The observer sees the event together with the generator state right
    /// after the step. The closing `Finished` event is not reported.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`MazeGenerator::step`]
    pub fn run_with<F>(mut self, mut observer: F) -> Result<Grid>
    where
        F: FnMut(&StepEvent, &Self),
    {
        while !self.is_done() {
            let event = self.step()?;
            if event != StepEvent::Finished {
                observer(&event, &self);
            }
        }
        Ok(self.grid)
    }

    /// Current phase of the state machine
    pub const fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Whether the frontier has emptied
    pub const fn is_done(&self) -> bool {
        matches!(self.phase, GenerationPhase::Done)
    }

    /// Grid as carved so far
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Give up the generator and keep the grid in whatever state it reached
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Cell at the top of the frontier
    pub fn current(&self) -> Option<(usize, usize)> {
        self.frontier
            .last()
            .and_then(|&index| self.grid.coords_of(index))
    }

    /// Frontier from the start cell (bottom) to the current cell (top)
    pub fn frontier(&self) -> Vec<(usize, usize)> {
        self.frontier
            .iter()
            .filter_map(|&index| self.grid.coords_of(index))
            .collect()
    }

    /// Frontier depth
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Coordinates in the order cells were first visited
    pub fn visit_order(&self) -> Vec<(usize, usize)> {
        self.visit_order
            .iter()
            .filter_map(|&index| self.grid.coords_of(index))
            .collect()
    }

    /// `(x, y, walls)` in visitation order, with walls as they stand now
    pub fn visits(&self) -> Vec<(usize, usize, Walls)> {
        self.visit_order()
            .into_iter()
            .filter_map(|(x, y)| self.grid.cell(x, y).map(|cell| (x, y, cell.walls())))
            .collect()
    }

    /// Number of wall pairs cleared so far
    pub const fn carved_count(&self) -> usize {
        self.carved
    }

    /// Number of steps that carved or backtracked
    pub const fn iteration(&self) -> usize {
        self.iteration
    }
}

impl<C> fmt::Debug for MazeGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MazeGenerator")
            .field("dimensions", &self.grid.dimensions())
            .field("phase", &self.phase)
            .field("frontier_len", &self.frontier.len())
            .field("carved", &self.carved)
            .field("iteration", &self.iteration)
            .finish_non_exhaustive()
    }
}

/// Generate a complete perfect maze in one call
///
/// # Errors
///
/// Returns an error if:
/// - Either dimension is not positive (`InvalidDimension`)
/// - The configured start cell lies outside the grid (`OutOfBounds`)
pub fn generate<T>(width: T, height: T, config: GeneratorConfig) -> Result<Grid>
where
    T: PrimInt + fmt::Display,
{
    let grid = Grid::new(width, height)?;
    MazeGenerator::new(grid, config)?.run()
}

fn index_in(grid: &Grid, x: usize, y: usize) -> Result<usize> {
    grid.index_of(x, y).ok_or(MazeError::OutOfBounds {
        x: signed_coordinate(x),
        y: signed_coordinate(y),
        width: grid.width(),
        height: grid.height(),
    })
}

fn coords_in(grid: &Grid, index: usize) -> Result<(usize, usize)> {
    grid.coords_of(index).ok_or(MazeError::OutOfBounds {
        x: signed_coordinate(index % grid.width()),
        y: signed_coordinate(index / grid.width()),
        width: grid.width(),
        height: grid.height(),
    })
}
