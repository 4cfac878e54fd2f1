//! Error types and context management for loop tracing operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::position::Position;

/// Main error type for all loop tracing operations
#[derive(Debug)]
pub enum PipeError {
    /// Input text does not describe a usable grid
    ///
    /// Raised for ragged rows, a missing or repeated start marker, and grids
    /// exceeding the dimension limit.
    MalformedInput {
        /// Description of what's wrong with the input
        reason: String,
        /// Offending position in padded grid coordinates, when one exists
        position: Option<Position>,
    },

    /// Not exactly two neighbours claim a connection to the start
    AmbiguousStart {
        /// Position of the start marker
        start: Position,
        /// Every neighbour whose pipe points back at the start
        claimants: Vec<Position>,
    },

    /// The walk reached a tile without exactly one way onward
    BrokenLoop {
        /// Tile at which the walk could not continue
        position: Position,
        /// Tile the walk arrived from
        previous: Position,
        /// Transition count when the walk stopped
        step: usize,
        /// Explanation of why the walk stopped
        reason: String,
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

    /// Failed to save a rendered loop to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Any other error, tagged with the input file being processed
    InFile {
        /// Input file the error belongs to
        path: PathBuf,
        /// The underlying error
        source: Box<PipeError>,
    },
}

impl fmt::Display for PipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { reason, position } => match position {
                Some(pos) => write!(f, "Malformed input at {pos}: {reason}"),
                None => write!(f, "Malformed input: {reason}"),
            },
            Self::AmbiguousStart { start, claimants } => {
                let listed = claimants
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "Ambiguous start at {start}: expected 2 connecting neighbours, found {} [{listed}]",
                    claimants.len()
                )
            }
            Self::BrokenLoop {
                position,
                previous,
                step,
                reason,
            } => {
                write!(
                    f,
                    "Broken loop at {position} (from {previous}, step {step}): {reason}"
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
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InFile { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for PipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InFile { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for loop tracing results
pub type Result<T> = std::result::Result<T, PipeError>;

/// Enriches errors with the input file they arose from
pub trait WithContext<T> {
    /// Tag an error with the input file being processed
    ///
    /// Errors already tagged keep their original path.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`PipeError::InFile`]
    fn with_file(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PipeError>,
{
    fn with_file(self, path: &Path) -> Result<T> {
        self.map_err(|e| match e.into() {
            tagged @ PipeError::InFile { .. } => tagged,
            error => PipeError::InFile {
                path: path.to_path_buf(),
                source: Box::new(error),
            },
        })
    }
}

/// Create a malformed input error without a position
pub fn malformed(reason: &impl ToString) -> PipeError {
    PipeError::MalformedInput {
        reason: reason.to_string(),
        position: None,
    }
}

/// Create a malformed input error pointing at `position`
pub fn malformed_at(position: Position, reason: &impl ToString) -> PipeError {
    PipeError::MalformedInput {
        reason: reason.to_string(),
        position: Some(position),
    }
}
