//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 10;
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 10;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// World-space edge length of one cell for placement output
pub const DEFAULT_CELL_SIZE: f32 = 2.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed number of cells in one grid
pub const MAX_GRID_CELLS: usize = 64_000_000;

// Raster output settings
/// Edge length of one cell in PNG and GIF output (pixels)
pub const CELL_PIXELS: u32 = 16;
/// Thickness of a wall in PNG and GIF output (pixels)
pub const WALL_PIXELS: u32 = 2;
/// Largest raster (width × height pixels) a PNG or GIF frame may have
pub const MAX_IMAGE_PIXELS: u64 = 1 << 26;
/// Floor color of carved cells
pub const FLOOR_COLOR: [u8; 4] = [245, 241, 230, 255];
/// Color of cells the generator has not entered yet
pub const UNVISITED_COLOR: [u8; 4] = [60, 64, 72, 255];
/// Highlight color of the cell currently at the top of the frontier
pub const FRONTIER_COLOR: [u8; 4] = [222, 98, 64, 255];
/// Wall color
pub const WALL_COLOR: [u8; 4] = [28, 30, 36, 255];

// Animation settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames in one animation; longer runs skip frames evenly
pub const MAX_GIF_FRAMES: usize = 600;

// Progress bar display settings
/// Grids smaller than this generate without a progress bar
pub const PROGRESS_MIN_CELLS: usize = 250_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Default base name for output files
pub const DEFAULT_OUTPUT_NAME: &str = "maze";
/// Suffix added to placement output files
pub const PLACEMENTS_SUFFIX: &str = "_placements";
/// Suffix added to animation output files
pub const VISUALIZATION_SUFFIX: &str = "_carving";
