//! PNG export of finished mazes
//!
//! Cells are laid out with north at the top of the image. Every lattice corner
//! gets a wall-colored post so openings read as gaps between posts.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{FLOOR_COLOR, MAX_IMAGE_PIXELS, WALL_COLOR};
use crate::io::error::{MazeError, Result, file_system_error, invalid_parameter};
use crate::io::render::{Renderer, render};
use crate::spatial::{Direction, Grid, Walls};

/// Pixel geometry shared by still images and animation frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    /// Edge length of one cell in pixels, including one wall thickness
    pub cell_pixels: u32,
    /// Wall thickness in pixels
    pub wall_pixels: u32,
}

impl CellGeometry {
    /// Validate a cell/wall pixel pair
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the wall is not thinner than the cell,
    /// either size is zero, or a cell plus its wall does not fit in `u32`
    pub fn new(cell_pixels: u32, wall_pixels: u32) -> Result<Self> {
        if wall_pixels == 0
            || cell_pixels <= wall_pixels
            || cell_pixels.checked_add(wall_pixels).is_none()
        {
            return Err(invalid_parameter(
                "cell_pixels",
                &format!("{cell_pixels} (wall {wall_pixels})"),
                &"cells must be wider than a non-zero wall",
            ));
        }
        Ok(Self {
            cell_pixels,
            wall_pixels,
        })
    }

    /// Image size `(width, height)` in pixels for a grid of the given size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a side does not fit in `u32` or the
    /// image would exceed `MAX_IMAGE_PIXELS`
    pub fn image_size(self, width: usize, height: usize) -> Result<(u32, u32)> {
        let (Some(img_width), Some(img_height)) = (self.span(width), self.span(height)) else {
            return Err(invalid_parameter(
                "image_size",
                &format!("{width}x{height} cells"),
                &"pixel dimensions overflow u32",
            ));
        };

        let pixels = u64::from(img_width) * u64::from(img_height);
        if pixels > MAX_IMAGE_PIXELS {
            return Err(invalid_parameter(
                "image_size",
                &format!("{img_width}x{img_height} pixels"),
                &format!("images may hold at most {MAX_IMAGE_PIXELS} pixels"),
            ));
        }
        Ok((img_width, img_height))
    }

    fn span(self, cells: usize) -> Option<u32> {
        u32::try_from(cells)
            .ok()?
            .checked_mul(self.cell_pixels)?
            .checked_add(self.wall_pixels)
    }

    /// Paint one cell: floor, corner posts and standing walls
    pub(crate) fn paint_cell(
        self,
        img: &mut RgbaImage,
        grid_height: usize,
        (x, y): (usize, usize),
        walls: Walls,
        floor: Rgba<u8>,
    ) {
        let cell = self.cell_pixels;
        let wall = self.wall_pixels;
        let row = grid_height.saturating_sub(y.saturating_add(1));
        let (Some(left), Some(top)) = (self.offset(x), self.offset(row)) else {
            return;
        };
        let right = left.saturating_add(cell);
        let bottom = top.saturating_add(cell);
        let span = cell.saturating_add(wall);
        let wall_color = Rgba(WALL_COLOR);

        fill_rect(img, left, top, span, span, floor);

        for (px, py) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            fill_rect(img, px, py, wall, wall, wall_color);
        }

        for side in walls.iter() {
            let (px, py, w, h) = match side {
                Direction::North => (left, top, span, wall),
                Direction::South => (left, bottom, span, wall),
                Direction::West => (left, top, wall, span),
                Direction::East => (right, top, wall, span),
            };
            fill_rect(img, px, py, w, h, wall_color);
        }
    }

    fn offset(self, index: usize) -> Option<u32> {
        u32::try_from(index).ok()?.checked_mul(self.cell_pixels)
    }
}

fn fill_rect(img: &mut RgbaImage, left: u32, top: u32, width: u32, height: u32, color: Rgba<u8>) {
    for py in top..top.saturating_add(height) {
        for px in left..left.saturating_add(width) {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

/// Renderer painting cells into an RGBA image
pub struct ImageRenderer {
    img: RgbaImage,
    geometry: CellGeometry,
    grid_height: usize,
}

impl ImageRenderer {
    /// Create a blank canvas sized for a `width × height` grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the canvas size is rejected by
    /// [`CellGeometry::image_size`]; nothing is allocated in that case
    pub fn new(width: usize, height: usize, geometry: CellGeometry) -> Result<Self> {
        let (img_width, img_height) = geometry.image_size(width, height)?;
        Ok(Self {
            img: RgbaImage::from_pixel(img_width, img_height, Rgba(FLOOR_COLOR)),
            geometry,
            grid_height: height,
        })
    }

    /// Painted image
    pub const fn image(&self) -> &RgbaImage {
        &self.img
    }

    /// Save the painted image; the format follows the file extension
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The image cannot be saved to the specified path
    pub fn save(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        self.img
            .save(output_path)
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}

impl Renderer for ImageRenderer {
    fn emit_cell(&mut self, x: usize, y: usize, walls: Walls) {
        self.geometry.paint_cell(
            &mut self.img,
            self.grid_height,
            (x, y),
            walls,
            Rgba(FLOOR_COLOR),
        );
    }
}

/// Export a finished grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid has unvisited cells
/// - The image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(grid: &Grid, geometry: CellGeometry, output_path: &Path) -> Result<()> {
    let mut canvas = ImageRenderer::new(grid.width(), grid.height(), geometry)?;
    render(grid, &mut canvas)?;
    canvas.save(output_path)
}
