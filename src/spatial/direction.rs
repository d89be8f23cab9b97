//! Compass directions and the wall index each one addresses

use serde::Serialize;
use std::fmt;

/// One of the four sides of a cell
///
/// The discriminant is the wall index inside a cell. North points towards
/// increasing `y` and East towards increasing `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards `y + 1`
    North = 0,
    /// Towards `x + 1`
    East = 1,
    /// Towards `y - 1`
    South = 2,
    /// Towards `x - 1`
    West = 3,
}

impl Direction {
    /// All directions in wall index order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Wall index of this direction inside a cell
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for a wall index, if the index names one
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::North),
            1 => Some(Self::East),
            2 => Some(Self::South),
            3 => Some(Self::West),
            _ => None,
        }
    }

    /// The direction rotated by 180 degrees
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Coordinate step `(dx, dy)` taken when moving in this direction
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Whether the wall on this side runs along the x axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}
