//! Floor and wall placements in world units
//!
//! Each cell becomes one floor piece centred on `(x * size, 0, y * size)` and
//! one wall piece per standing wall, pushed half a cell towards that side.
//! Walls running along the x axis (north/south) keep yaw 0°, the others are
//! turned by 90°.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::io::error::{MazeError, Result, file_system_error, invalid_parameter};
use crate::io::render::Renderer;
use crate::spatial::{Direction, Walls};

/// What a placement instantiates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    /// Floor tile under a cell
    Floor,
    /// Wall segment on one side of a cell
    Wall,
}

/// One instantiation request in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Floor or wall
    pub kind: PlacementKind,
    /// Grid cell the piece belongs to
    pub cell: [usize; 2],
    /// Side of the cell for walls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Direction>,
    /// World position `[x, y, z]`; the grid lies in the `y = 0` plane
    pub position: [f32; 3],
    /// Rotation about the vertical axis in degrees
    pub yaw_degrees: f32,
}

/// Renderer turning cells into floor and wall placements
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRenderer {
    cell_size: f32,
    shared_walls_once: bool,
    placements: Vec<Placement>,
}

impl PlacementRenderer {
    /// Create a renderer for cells of `cell_size` world units
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `cell_size` is not a positive finite number
    pub fn new(cell_size: f32) -> Result<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be a positive finite number",
            ));
        }
        Ok(Self {
            cell_size,
            shared_walls_once: false,
            placements: Vec::new(),
        })
    }

    /// Emit each shared boundary once instead of once per adjacent cell
    ///
    /// Interior south and west walls are skipped because the neighbor's north
    /// or east wall covers the same boundary.
    #[must_use]
    pub const fn with_shared_walls_once(mut self) -> Self {
        self.shared_walls_once = true;
        self
    }

    /// Placements emitted so far, in emission order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Take the emitted placements
    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    /// Number of emitted placements of `kind`
    pub fn count(&self, kind: PlacementKind) -> usize {
        self.placements
            .iter()
            .filter(|placement| placement.kind == kind)
            .count()
    }

    /// Write the placements as a pretty-printed JSON array
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory or the file cannot be created
    /// - Serialization fails
    pub fn export_json(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.placements).map_err(|e| {
            MazeError::Serialization {
                path: output_path.to_path_buf(),
                source: e,
            }
        })
    }

    const fn skips(&self, x: usize, y: usize, side: Direction) -> bool {
        self.shared_walls_once
            && match side {
                Direction::South => y > 0,
                Direction::West => x > 0,
                Direction::North | Direction::East => false,
            }
    }
}

impl Renderer for PlacementRenderer {
    fn emit_cell(&mut self, x: usize, y: usize, walls: Walls) {
        let centre = [x as f32 * self.cell_size, 0.0, y as f32 * self.cell_size];
        self.placements.push(Placement {
            kind: PlacementKind::Floor,
            cell: [x, y],
            side: None,
            position: centre,
            yaw_degrees: 0.0,
        });

        let half = self.cell_size / 2.0;
        for side in walls.iter() {
            if self.skips(x, y, side) {
                continue;
            }
            let (dx, dz) = side.offset();
            self.placements.push(Placement {
                kind: PlacementKind::Wall,
                cell: [x, y],
                side: Some(side),
                position: [
                    (dx as f32).mul_add(half, centre[0]),
                    0.0,
                    (dz as f32).mul_add(half, centre[2]),
                ],
                yaw_degrees: if side.is_horizontal() { 0.0 } else { 90.0 },
            });
        }
    }
}
