//! Perfect maze generation with a seeded recursive backtracker
//!
//! A rectangular grid of four-walled cells is carved into a spanning tree by
//! randomized depth-first search. The finished grid is handed to renderers
//! that emit each cell exactly once (floor/wall placements, text, PNG).

#![forbid(unsafe_code)]

/// Maze carving: the resumable backtracker and its random choice source
pub mod algorithm;
/// Structural verification of generated mazes
pub mod analysis;
/// Input/output operations, renderers and error handling
pub mod io;
/// Grid, cell and compass direction data structures
pub mod spatial;

pub use algorithm::generator::{GeneratorConfig, MazeGenerator, generate};
pub use io::error::{MazeError, Result};
pub use spatial::{Cell, Direction, Grid, Walls};
