//! Spatial data structures for maze grids
//!
//! This module contains:
//! - Compass directions and wall indexing
//! - The cell grid with bounds checks, neighbor queries and wall-pair removal

/// Compass directions addressing the four walls of a cell
pub mod direction;
/// Grid and cell state management
pub mod grid;

pub use direction::Direction;
pub use grid::{Cell, Grid, Walls};
