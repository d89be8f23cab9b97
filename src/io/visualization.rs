//! Step capture and GIF generation for carving visualization

use std::path::Path;

use image::{Delay, Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};

use crate::algorithm::generator::StepEvent;
use crate::io::configuration::{
    FLOOR_COLOR, FRONTIER_COLOR, MAX_GIF_FRAMES, UNVISITED_COLOR, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{MazeError, Result, file_system_error};
use crate::io::image::CellGeometry;
use crate::spatial::{Direction, Grid};

/// Records backtracker steps to replay them as an animation
///
/// Only carve and backtrack events are kept; the grid itself is rebuilt from
/// the events when frames are rendered.
#[derive(Debug, Clone)]
pub struct CarveCapture {
    events: Vec<StepEvent>,
    width: usize,
    height: usize,
    start: (usize, usize),
}

impl CarveCapture {
    /// Prepare a capture for a `width × height` run starting at `start`
    pub fn new(width: usize, height: usize, start: (usize, usize)) -> Self {
        Self {
            events: Vec::with_capacity(width.saturating_mul(height).saturating_mul(2).min(1 << 16)),
            width,
            height,
            start,
        }
    }

    /// Record one generator step
    pub fn record(&mut self, event: &StepEvent) {
        if *event != StepEvent::Finished {
            self.events.push(*event);
        }
    }

    /// All recorded events in order
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Number of recorded carve events
    pub fn carve_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, StepEvent::Carved { .. }))
            .count()
    }

    /// Export the recorded run as an animated GIF
    ///
    /// Frames are taken after carve events. Fast frame rates are folded into
    /// the slowest rate viewers honour by skipping frames, and long runs are
    /// thinned so at most `MAX_GIF_FRAMES` frames are rendered. Frames are
    /// rendered one at a time as the encoder consumes them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No events were captured
    /// - A frame would exceed `MAX_IMAGE_PIXELS`
    /// - The recorded events do not replay on a fresh grid
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &Path,
        geometry: CellGeometry,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.events.is_empty() {
            return Err(MazeError::InvalidParameter {
                parameter: "visualization",
                value: "empty".to_string(),
                reason: "No carving steps captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let viewer_skip = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };
        let length_skip = self.carve_count().div_ceil(MAX_GIF_FRAMES).max(1);
        let skip_factor = viewer_skip.max(length_skip);

        let image_size = geometry.image_size(self.width, self.height)?;
        self.replay()?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut frames = FrameReplay {
            events: &self.events,
            position: 0,
            grid: self.fresh_grid()?,
            path: vec![self.start],
            geometry,
            image_size,
            delay_ms: effective_delay_ms,
            skip_factor,
            carves: 0,
            stage: ReplayStage::Opening,
            error: None,
        };

        let mut encoder = GifEncoder::new(file);
        encoder
            .encode_frames(frames.by_ref())
            .map_err(|e| MazeError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        frames.error.map_or(Ok(()), Err)
    }

    /// Replay every recorded event onto a fresh grid
    ///
    /// # Errors
    ///
    /// Returns an error if the events do not describe a valid carve sequence
    /// for this grid size and start cell
    pub fn replay(&self) -> Result<Grid> {
        let mut grid = self.fresh_grid()?;
        for event in &self.events {
            if let StepEvent::Carved {
                from,
                to,
                direction,
            } = *event
            {
                apply_carve(&mut grid, from, to, direction)?;
            }
        }
        Ok(grid)
    }

    fn fresh_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.width, self.height)?;
        grid.mark_visited(self.start.0, self.start.1)?;
        Ok(grid)
    }
}

fn apply_carve(
    grid: &mut Grid,
    from: (usize, usize),
    to: (usize, usize),
    direction: Direction,
) -> Result<()> {
    grid.clear_wall_pair(from.0, from.1, direction)?;
    grid.mark_visited(to.0, to.1)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ReplayStage {
    Opening,
    Carving,
    Closed,
}

/// Renders animation frames one at a time while replaying a capture
struct FrameReplay<'a> {
    events: &'a [StepEvent],
    position: usize,
    grid: Grid,
    path: Vec<(usize, usize)>,
    geometry: CellGeometry,
    image_size: (u32, u32),
    delay_ms: u32,
    skip_factor: usize,
    carves: usize,
    stage: ReplayStage,
    error: Option<MazeError>,
}

impl FrameReplay<'_> {
    fn render_frame(&self, current: Option<(usize, usize)>, delay_ms: u32) -> Frame {
        let (img_width, img_height) = self.image_size;
        let mut img = RgbaImage::from_pixel(img_width, img_height, Rgba(UNVISITED_COLOR));

        for (x, y, cell) in self.grid.cells() {
            let floor = if current == Some((x, y)) {
                FRONTIER_COLOR
            } else if cell.is_visited() {
                FLOOR_COLOR
            } else {
                UNVISITED_COLOR
            };
            self.geometry.paint_cell(
                &mut img,
                self.grid.height(),
                (x, y),
                cell.walls(),
                Rgba(floor),
            );
        }

        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

impl Iterator for FrameReplay<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        match self.stage {
            ReplayStage::Opening => {
                self.stage = ReplayStage::Carving;
                return Some(self.render_frame(self.path.last().copied(), self.delay_ms));
            }
            ReplayStage::Closed => return None,
            ReplayStage::Carving => {}
        }

        while let Some(&event) = self.events.get(self.position) {
            self.position += 1;
            match event {
                StepEvent::Carved {
                    from,
                    to,
                    direction,
                } => {
                    if let Err(error) = apply_carve(&mut self.grid, from, to, direction) {
                        self.error = Some(error);
                        self.stage = ReplayStage::Closed;
                        return None;
                    }
                    self.path.push(to);
                    self.carves += 1;
                    if self.carves % self.skip_factor == 0 {
                        return Some(self.render_frame(self.path.last().copied(), self.delay_ms));
                    }
                }
                StepEvent::Backtracked { .. } => {
                    self.path.pop();
                }
                StepEvent::Finished => {}
            }
        }

        // Final frame displays longer for better visibility
        self.stage = ReplayStage::Closed;
        Some(self.render_frame(None, self.delay_ms.saturating_mul(25)))
    }
}
