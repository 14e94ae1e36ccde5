//! Error types for map generation and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all map operations
#[derive(Debug)]
pub enum MapError {
    /// A patch would be merged partially or fully outside the map grid
    ///
    /// Detected before any cell is written, so the grid is never left
    /// half-stamped.
    OutOfBounds {
        /// What was being placed (`"mesa"`, `"bridge"`, `"marker"`)
        what: &'static str,
        /// Patch origin in map coordinates (x, y)
        origin: [i32; 2],
        /// Patch extent (width, height)
        extent: (usize, usize),
        /// Map dimensions (width, height)
        map_dimensions: (usize, usize),
    },

    /// Generator parameter validation failed
    InvalidParameter {
        /// Configuration field that was rejected
        parameter: &'static str,
        /// Rejected value, formatted
        value: String,
        /// Accepted range or rule
        reason: String,
    },

    /// Every generation attempt failed
    GenerationFailed {
        /// Number of attempts made
        attempts: usize,
        /// Error raised by the final attempt
        last: Box<MapError>,
    },

    /// Rendered PNG could not be written
    ImageExport {
        /// Target PNG path
        path: PathBuf,
        /// Encoder or write error
        source: image::ImageError,
    },

    /// A file or directory operation failed
    FileSystem {
        /// File or directory involved
        path: PathBuf,
        /// Short name of the failed step
        operation: &'static str,
        /// Cause reported by the OS
        source: std::io::Error,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                what,
                origin,
                extent,
                map_dimensions,
            } => {
                write!(
                    f,
                    "{what} at ({}, {}) of size {}x{} does not fit in {}x{} map",
                    origin[0], origin[1], extent.0, extent.1, map_dimensions.0, map_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid {parameter} {value}: {reason}")
            }
            Self::GenerationFailed { attempts, last } => {
                write!(f, "map generation failed after {attempts} attempts: {last}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "cannot write map image '{}': {source}",
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
                    "cannot {operation} '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::GenerationFailed { last, .. } => Some(last.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for map results
pub type Result<T> = std::result::Result<T, MapError>;

impl From<image::ImageError> for MapError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl MapError {
    /// Whether a fresh generation attempt could avoid this error
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

/// Build an `InvalidParameter` error from any displayable value and reason
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a patch placement
pub const fn out_of_bounds(
    what: &'static str,
    origin: [i32; 2],
    extent: (usize, usize),
    map_dimensions: (usize, usize),
) -> MapError {
    MapError::OutOfBounds {
        what,
        origin,
        extent,
        map_dimensions,
    }
}
