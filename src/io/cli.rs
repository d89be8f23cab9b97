//! Command-line interface for generating and exporting a single maze

use crate::algorithm::generator::{GeneratorConfig, MazeGenerator};
use crate::analysis::topology::MazeReport;
use crate::io::ascii::render_ascii;
use crate::io::configuration::{
    CELL_PIXELS, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_OUTPUT_NAME, DEFAULT_SEED,
    DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, PLACEMENTS_SUFFIX, VISUALIZATION_SUFFIX, WALL_PIXELS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{CellGeometry, export_maze_as_png};
use crate::io::placement::PlacementRenderer;
use crate::io::progress::GenerationProgress;
use crate::io::render::render;
use crate::io::visualization::CarveCapture;
use crate::spatial::Grid;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Carve perfect mazes with a seeded recursive backtracker"
)]
/// Command-line arguments for the maze generation tool
// CLI tools commonly need multiple boolean flags for output selection
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Maze width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Draw a fresh seed instead of using --seed
    #[arg(long, conflicts_with = "seed")]
    pub random_seed: bool,

    /// Column of the start cell
    #[arg(long)]
    pub start_x: Option<usize>,

    /// Row of the start cell
    #[arg(long)]
    pub start_y: Option<usize>,

    /// Directory receiving output files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Base name for output files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub name: String,

    /// Print the maze as text to stdout
    #[arg(short, long)]
    pub ascii: bool,

    /// Write the maze as a PNG image
    #[arg(short, long)]
    pub png: bool,

    /// Write floor and wall placements as JSON
    #[arg(short = 'P', long)]
    pub placements: bool,

    /// Emit each shared wall once in placement output
    #[arg(long)]
    pub dedupe_walls: bool,

    /// World-space edge length of one cell in placement output
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// Write the carving process as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and the summary line should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Whether any file or text output was requested explicitly
    pub const fn has_explicit_output(&self) -> bool {
        self.ascii || self.png || self.placements || self.visualize
    }

    /// Whether the text drawing should be printed
    ///
    /// Text is the fallback when no output was requested.
    pub const fn wants_ascii(&self) -> bool {
        self.ascii || !self.has_explicit_output()
    }

    /// Generator configuration from the seed and start arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if only one start coordinate is given
    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        let start = match (self.start_x, self.start_y) {
            (Some(x), Some(y)) => Some((x, y)),
            (None, None) => None,
            (Some(x), None) => {
                return Err(invalid_parameter(
                    "start_y",
                    &"<missing>",
                    &format!("--start-x {x} needs a matching --start-y"),
                ));
            }
            (None, Some(y)) => {
                return Err(invalid_parameter(
                    "start_x",
                    &"<missing>",
                    &format!("--start-y {y} needs a matching --start-x"),
                ));
            }
        };

        Ok(GeneratorConfig {
            seed: (!self.random_seed).then_some(self.seed),
            start,
        })
    }

    /// Path of an output file named `<name><suffix>.<extension>`
    pub fn output_path(&self, suffix: &str, extension: &str) -> PathBuf {
        self.output
            .join(format!("{}{suffix}.{extension}", self.name))
    }
}

/// Runs one generation and writes the requested outputs
pub struct MazeJob {
    cli: Cli,
}

impl MazeJob {
    /// Create a job from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the maze and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Arguments are invalid (dimensions, start cell, cell size)
    /// - A requested PNG or GIF would exceed `MAX_IMAGE_PIXELS`
    /// - Any output file cannot be written
    // Allow print for the summary line and the text drawing
    #[allow(clippy::print_stderr, clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let config = self.cli.generator_config()?;
        let placement_renderer = if self.cli.placements {
            let renderer = PlacementRenderer::new(self.cli.cell_size)?;
            Some(if self.cli.dedupe_walls {
                renderer.with_shared_walls_once()
            } else {
                renderer
            })
        } else {
            None
        };
        let geometry = CellGeometry::new(CELL_PIXELS, WALL_PIXELS)?;
        if self.cli.png || self.cli.visualize {
            geometry.image_size(self.cli.width, self.cli.height)?;
        }

        let grid = Grid::new(self.cli.width, self.cli.height)?;
        let generator = MazeGenerator::new(grid, config)?;
        let seed = generator.seed();
        let start = generator.current().unwrap_or((0, 0));
        let (width, height) = generator.grid().dimensions();

        let progress =
            GenerationProgress::new(generator.grid().cell_count(), self.cli.should_show_progress());
        let mut capture = self
            .cli
            .visualize
            .then(|| CarveCapture::new(width, height, start));

        let started = Instant::now();
        let grid = generator.run_with(|event, _| {
            progress.observe(event);
            if let Some(capture) = capture.as_mut() {
                capture.record(event);
            }
        })?;
        progress.finish();
        let elapsed = started.elapsed();

        if self.cli.should_show_progress() {
            let report = MazeReport::analyze(&grid);
            eprintln!(
                "Carved {width}x{height} maze from ({}, {}) with seed {seed} in {elapsed:.2?}: {} passages, {} dead ends",
                start.0, start.1, report.passage_count, report.dead_ends
            );
        }

        if self.cli.wants_ascii() {
            print!("{}", render_ascii(&grid)?);
        }

        if self.cli.png {
            let path = self.cli.output_path("", "png");
            export_maze_as_png(&grid, geometry, &path)?;
            if self.cli.should_show_progress() {
                eprintln!("Wrote {}", path.display());
            }
        }

        if let Some(mut renderer) = placement_renderer {
            render(&grid, &mut renderer)?;
            let path = self.cli.output_path(PLACEMENTS_SUFFIX, "json");
            renderer.export_json(&path)?;
            if self.cli.should_show_progress() {
                eprintln!(
                    "Wrote {} placements to {}",
                    renderer.placements().len(),
                    path.display()
                );
            }
        }

        if let Some(capture) = &capture {
            let path = self.cli.output_path(VISUALIZATION_SUFFIX, "gif");
            capture.export_gif(&path, geometry, GIF_FRAME_DELAY_MS)?;
            if self.cli.should_show_progress() {
                eprintln!("Wrote {}", path.display());
            }
        }

        Ok(())
    }
}
