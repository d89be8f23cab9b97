//! Grid of four-walled cells with bounds-checked neighbor queries
//!
//! Cells are stored row-major in a single `height × width` array (row = `y`,
//! column = `x`) and addressed either by coordinate pair or by flat index
//! `y * width + x`. Wall state is only ever mutated in pairs, which keeps every
//! shared boundary symmetric between its two cells.

use std::fmt;

use bitvec::{order::Lsb0, view::BitView};
use ndarray::Array2;
use num_traits::PrimInt;

use crate::io::configuration::MAX_GRID_CELLS;
use crate::io::error::{MazeError, Result};
use crate::spatial::direction::Direction;

const ALL_WALLS: u8 = 0b1111;

/// Set of standing walls around one cell
///
/// Bit `i` is the wall on side `Direction::from_index(i)`; a set bit means
/// the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls {
    bits: u8,
}

impl Walls {
    /// All four walls standing
    pub const ALL: Self = Self { bits: ALL_WALLS };
    /// No walls standing
    pub const NONE: Self = Self { bits: 0 };

    /// Build from a raw wall byte, ignoring bits above the four sides
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            bits: bits & ALL_WALLS,
        }
    }

    /// Raw wall byte, bit `i` for direction index `i`
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Whether the wall on `direction` is standing
    pub fn contains(self, direction: Direction) -> bool {
        self.bits
            .view_bits::<Lsb0>()
            .get(direction.index())
            .is_some_and(|bit| *bit)
    }

    /// Knock down the wall on `direction`
    pub fn remove(&mut self, direction: Direction) {
        self.bits
            .view_bits_mut::<Lsb0>()
            .set(direction.index(), false);
    }

    /// Number of standing walls
    pub fn count(self) -> usize {
        self.bits.view_bits::<Lsb0>().count_ones()
    }

    /// Standing walls in direction order
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        self.bits
            .view_bits::<Lsb0>()
            .iter_ones()
            .filter_map(Direction::from_index)
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Wall flags indexed by direction (North, East, South, West)
    pub fn to_array(self) -> [bool; 4] {
        Direction::ALL.map(|direction| self.contains(direction))
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [char; 4] = ['N', 'E', 'S', 'W'];
        for (direction, letter) in Direction::ALL.into_iter().zip(LETTERS) {
            let shown = if self.contains(direction) { letter } else { '-' };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}

/// One grid unit: a visited flag and four walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    visited: bool,
    walls: Walls,
}

impl Cell {
    /// Whether the generator has entered this cell
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Current wall set
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Current wall set as a raw byte
    pub const fn wall_bits(&self) -> u8 {
        self.walls.bits()
    }
}

/// Rectangular grid owning every cell of a maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid with every cell unvisited and fully walled
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either dimension is not positive, does not
    /// fit in `usize`, or the cell count exceeds `MAX_GRID_CELLS`.
    pub fn new<T>(width: T, height: T) -> Result<Self>
    where
        T: PrimInt + fmt::Display,
    {
        let width = checked_dimension("width", width)?;
        let height = checked_dimension("height", height)?;

        width
            .checked_mul(height)
            .filter(|&count| count <= MAX_GRID_CELLS)
            .ok_or_else(|| MazeError::InvalidDimension {
                axis: "area",
                value: format!("{width}x{height}"),
                reason: format!("grid may hold at most {MAX_GRID_CELLS} cells"),
            })?;

        Ok(Self {
            cells: Array2::from_elem((height, width), Cell::default()),
            width,
            height,
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether `(x, y)` lies inside the grid
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Flat index of `(x, y)`
    pub const fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if self.contains(x, y) {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Coordinates of a flat index
    pub const fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.cell_count() {
            Some((index % self.width, index / self.width))
        } else {
            None
        }
    }

    /// Cell at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get([y, x])
    }

    /// Whether the cell at `(x, y)` has been visited; false outside the grid
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_visited)
    }

    /// Whether the wall on `direction` of `(x, y)` is standing; false outside the grid
    pub fn has_wall(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.cell(x, y)
            .is_some_and(|cell| cell.walls().contains(direction))
    }

    /// Mark `(x, y)` as entered by the generator
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` lies outside the grid
    pub fn mark_visited(&mut self, x: usize, y: usize) -> Result<()> {
        let (width, height) = self.dimensions();
        let cell = self
            .cells
            .get_mut([y, x])
            .ok_or_else(|| {
                out_of_bounds(signed_coordinate(x), signed_coordinate(y), width, height)
            })?;
        cell.visited = true;
        Ok(())
    }

    /// Coordinates of the in-bounds neighbor of `(x, y)` on `direction`
    pub const fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        if !self.contains(x, y) {
            return None;
        }
        match direction {
            Direction::North if y + 1 < self.height => Some((x, y + 1)),
            Direction::East if x + 1 < self.width => Some((x + 1, y)),
            Direction::South if y > 0 => Some((x, y - 1)),
            Direction::West if x > 0 => Some((x - 1, y)),
            _ => None,
        }
    }

    /// Up to four adjacent in-bounds coordinates with the connecting direction
    ///
    /// Neighbors are listed in direction order (North, East, South, West).
    pub fn neighbors_in_bounds(&self, x: usize, y: usize) -> Vec<(Direction, usize, usize)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                self.neighbor(x, y, direction)
                    .map(|(nx, ny)| (direction, nx, ny))
            })
            .collect()
    }

    /// Knock down the wall on `direction` of `(x, y)` and its mirror on the neighbor
    ///
    /// Nothing is modified when the call fails.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `(x, y)` or the neighbor on `direction` lies
    /// outside the grid
    pub fn clear_wall_pair(&mut self, x: usize, y: usize, direction: Direction) -> Result<()> {
        let (width, height) = self.dimensions();
        if !self.contains(x, y) {
            return Err(out_of_bounds(
                signed_coordinate(x),
                signed_coordinate(y),
                width,
                height,
            ));
        }

        let Some((nx, ny)) = self.neighbor(x, y, direction) else {
            let (dx, dy) = direction.offset();
            return Err(out_of_bounds(
                signed_coordinate(x).saturating_add(dx),
                signed_coordinate(y).saturating_add(dy),
                width,
                height,
            ));
        };

        if let Some(cell) = self.cells.get_mut([y, x]) {
            cell.walls.remove(direction);
        }
        if let Some(cell) = self.cells.get_mut([ny, nx]) {
            cell.walls.remove(direction.opposite());
        }
        Ok(())
    }

    /// All cells as `(x, y, cell)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| (x, y, cell))
    }

    /// Number of visited cells
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// One wall byte per cell in row-major order
    ///
    /// Two grids with equal fingerprints have bit-identical wall layouts.
    pub fn wall_fingerprint(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::wall_bits).collect()
    }
}

fn checked_dimension<T>(axis: &'static str, value: T) -> Result<usize>
where
    T: PrimInt + fmt::Display,
{
    if value <= T::zero() {
        return Err(MazeError::InvalidDimension {
            axis,
            value: value.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    value.to_usize().ok_or_else(|| MazeError::InvalidDimension {
        axis,
        value: value.to_string(),
        reason: "does not fit the address space".to_string(),
    })
}

/// Coordinate as reported in `OutOfBounds`, saturating at `i64::MAX`
pub(crate) fn signed_coordinate(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

const fn out_of_bounds(x: i64, y: i64, width: usize, height: usize) -> MazeError {
    MazeError::OutOfBounds {
        x,
        y,
        width,
        height,
    }
}
