//! Input/output operations, configuration, and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for analysis, solving, and the I/O boundary
pub mod error;
/// PNG conversion between pixel buffers and symbol grids
pub mod image;
/// Solve progress tracking
pub mod progress;
