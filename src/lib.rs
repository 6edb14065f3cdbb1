//! Wave function collapse texture synthesis from a sample grid
//!
//! The system derives local adjacency rules and symbol weights from a small
//! sample, then collapses an all-possibilities output grid cell by cell,
//! propagating constraints and rolling back to a snapshot on contradiction,
//! until every cell holds exactly one symbol.

#![forbid(unsafe_code)]

/// Core solver: candidate sets, entropy selection, propagation, solve loop
pub mod algorithm;
/// Sample analysis: symbol interning, weights, adjacency rules
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities
pub mod math;
/// Wave grid state management
pub mod spatial;

pub use io::error::{Result, SolverError};
