//! Error types for analysis, solving, and the I/O boundary

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
///
/// I/O failures and solver failures are distinct variants and never
/// conflated: a missing file is not a contradiction. `Contradiction` is the
/// only recoverable variant; the solve loop catches it and rolls back to the
/// last snapshot. Everything else aborts the solve.
#[derive(Debug)]
pub enum SolverError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// A collapse was requested on a cell that is already fixed
    ///
    /// Caller logic error; never raised by the solve loop itself and never
    /// retried.
    AlreadyCollapsed {
        /// Grid position (row, col) of the offending cell
        position: [usize; 2],
    },

    /// A forced symbol is not among the target cell's candidates
    ///
    /// Caller logic error, treated the same as `AlreadyCollapsed`.
    ChoiceNotViable {
        /// Grid position (row, col) of the target cell
        position: [usize; 2],
        /// The symbol index that was forced
        symbol: usize,
    },

    /// Propagation emptied a candidate set or hit a disagreeing fixed cell
    ///
    /// The ordinary failure mode of constraint search. The grid is left
    /// partially mutated; the solve loop discards it and restores the last
    /// snapshot.
    Contradiction {
        /// Grid position (row, col) where the contradiction surfaced
        position: [usize; 2],
    },

    /// The restart budget ran out before the grid collapsed
    ///
    /// Some rule sets admit no solution for a given shape; without this cap
    /// the snapshot-retry loop would run forever.
    Unsolvable {
        /// Total collapse attempts made
        attempts: usize,
        /// Output grid dimensions (rows, cols)
        grid_dimensions: (usize, usize),
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::AlreadyCollapsed { position } => {
                write!(
                    f,
                    "Cell ({}, {}) is already collapsed",
                    position[0], position[1]
                )
            }
            Self::ChoiceNotViable { position, symbol } => {
                write!(
                    f,
                    "Symbol {symbol} is not a candidate at cell ({}, {})",
                    position[0], position[1]
                )
            }
            Self::Contradiction { position } => {
                write!(
                    f,
                    "Contradiction at cell ({}, {}): no candidates remain",
                    position[0], position[1]
                )
            }
            Self::Unsolvable {
                attempts,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "No solution found after {attempts} attempts (grid size {}x{})",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<image::ImageError> for SolverError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SolverError {
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
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable input or output path
pub fn path_error(msg: &str) -> SolverError {
    SolverError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
