//! Mathematical utilities for the algorithm

/// Shannon entropy over unnormalized weights
pub mod entropy;
