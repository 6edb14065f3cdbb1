//! Algorithm constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Maximum accepted adjacency radius
pub const MAX_RADIUS: u32 = 16;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default restart budget before a solve is declared unsolvable
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Default adjacency radius for rule extraction
pub const DEFAULT_RADIUS: u32 = 1;

/// Default output grid width in cells
pub const DEFAULT_OUTPUT_WIDTH: usize = 48;

/// Default output grid height in cells
pub const DEFAULT_OUTPUT_HEIGHT: usize = 48;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_collapsed";

/// Pixel edge length each output cell is scaled to on export
pub const DEFAULT_UPSCALE: u32 = 20;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
