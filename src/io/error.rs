//! Error types for grid construction, generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimensions rejected at construction
    InvalidDimension {
        /// Which dimension was rejected (`width`, `height` or `area`)
        axis: &'static str,
        /// Provided value
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coordinate outside the grid
    ///
    /// Unreachable through the generation entry points; indicates a caller
    /// passing unchecked coordinates to the grid.
    OutOfBounds {
        /// Column of the offending coordinate (may be negative)
        x: i64,
        /// Row of the offending coordinate (may be negative)
        y: i64,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Rendering was requested before every cell was visited
    IncompleteGeneration {
        /// Number of cells the generator has not entered yet
        unvisited: usize,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to serialize placements
    Serialization {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                axis,
                value,
                reason,
            } => {
                write!(f, "Invalid grid {axis} '{value}': {reason}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinate ({x}, {y}) is outside the {width}x{height} grid"
                )
            }
            Self::IncompleteGeneration { unvisited } => {
                write!(
                    f,
                    "Generation is incomplete: {unvisited} cells have not been visited"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize placements to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MazeError {
    MazeError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
