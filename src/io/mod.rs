//! Input/output operations: CLI, configuration, errors and renderers

/// Plain-text maze drawing
pub mod ascii;
/// Command-line parsing and the generate-then-export job
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export and pixel geometry
pub mod image;
/// Floor and wall placements in world units
pub mod placement;
/// Terminal progress display
pub mod progress;
/// Per-cell emission surface for renderers
pub mod render;
/// Carving capture and GIF export
pub mod visualization;
