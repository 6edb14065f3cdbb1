//! Top-level solve loop with snapshot rollback and a restart budget
//!
//! Each step snapshots the grid, collapses the lowest-entropy cell, and lets
//! propagation cascade. A contradiction discards the mutated grid and
//! restores the snapshot; the step is then retried with fresh randomness.
//! The restart budget bounds that retry loop, since some rule sets admit no
//! solution for a given output shape.

use crate::{
    algorithm::cache::{CacheStats, EntropyCache},
    algorithm::propagation::collapse,
    algorithm::selection::select_lowest_entropy,
    analysis::rules::Ruleset,
    io::configuration::{DEFAULT_MAX_ATTEMPTS, MAX_GRID_DIMENSION},
    io::error::{Result, SolverError, invalid_parameter},
    spatial::grid::WaveGrid,
};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hash::Hash;

/// Seeded random selector for reproducible stochastic choices
///
/// All randomness in a solve flows through one selector, so a fixed seed
/// reproduces the exact output grid.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Weighted random selection over occurrence counts
    ///
    /// Returns an index into the weights slice using the cumulative
    /// distribution. All-zero weights fall back to the first index.
    pub fn weighted_choice(&mut self, weights: &[u64]) -> usize {
        let total: u64 = weights.iter().sum();
        if total == 0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total as f64;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight as f64;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }

    /// Uniform random index below `len`
    pub fn uniform_choice(&mut self, len: usize) -> usize {
        if len < 2 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Parameters controlling the solve loop
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Restarts tolerated before giving up as unsolvable
    pub max_attempts: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Wave function collapse solver for one output grid
///
/// Owns the grid for the duration of the solve. The ruleset is borrowed
/// read-only, so one ruleset can back any number of solver instances.
pub struct Solver<'a, S> {
    ruleset: &'a Ruleset<S>,
    grid: WaveGrid,
    selector: RandomSelector,
    entropy_cache: EntropyCache,
    config: SolverConfig,
    restarts: usize,
}

impl<'a, S> Solver<'a, S>
where
    S: Clone + Eq + Hash,
{
    /// Create a solver for a `rows` x `cols` output grid
    ///
    /// Every cell starts undetermined over the full symbol alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the ruleset's alphabet is empty or either
    /// dimension is zero or exceeds the maximum grid dimension.
    pub fn new(
        ruleset: &'a Ruleset<S>,
        rows: usize,
        cols: usize,
        config: SolverConfig,
        seed: u64,
    ) -> Result<Self> {
        if ruleset.symbol_count() == 0 {
            return Err(SolverError::InvalidSourceData {
                reason: "symbol alphabet is empty".to_string(),
            });
        }
        if rows == 0 || rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &rows,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if cols == 0 || cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "cols",
                &cols,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        Ok(Self {
            ruleset,
            grid: WaveGrid::new(rows, cols, ruleset.symbol_count()),
            selector: RandomSelector::new(seed),
            entropy_cache: EntropyCache::new(),
            config,
            restarts: 0,
        })
    }

    /// Access the current grid state
    pub const fn grid(&self) -> &WaveGrid {
        &self.grid
    }

    /// Number of snapshot restores performed so far
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Entropy cache hit/miss counters
    pub const fn cache_stats(&self) -> &CacheStats {
        &self.entropy_cache.stats
    }

    /// Run one snapshot-collapse-propagate step
    ///
    /// Returns `Ok(false)` once the grid is fully collapsed, `Ok(true)` while
    /// more steps are needed (including after a rollback).
    ///
    /// # Errors
    ///
    /// Returns `Unsolvable` when the restart budget is exhausted, or any
    /// non-contradiction error from the collapse machinery.
    pub fn step(&mut self) -> Result<bool> {
        if self.grid.is_collapsed() {
            return Ok(false);
        }

        let snapshot = self.grid.clone();
        let Some(index) = select_lowest_entropy(
            &self.grid,
            self.ruleset.weights(),
            &mut self.entropy_cache,
            &mut self.selector,
        ) else {
            return Ok(false);
        };

        match collapse(
            &mut self.grid,
            index,
            self.ruleset.adjacency(),
            self.ruleset.weights(),
            &mut self.selector,
            None,
        ) {
            Ok(()) => Ok(true),
            Err(SolverError::Contradiction { .. }) => {
                self.grid = snapshot;
                self.restarts += 1;
                if self.restarts >= self.config.max_attempts {
                    Err(SolverError::Unsolvable {
                        attempts: self.restarts,
                        grid_dimensions: (self.grid.rows(), self.grid.cols()),
                    })
                } else {
                    Ok(true)
                }
            }
            Err(other) => Err(other),
        }
    }

    /// Run steps until the grid is fully collapsed, then decode it
    ///
    /// # Errors
    ///
    /// Returns `Unsolvable` when the restart budget is exhausted, or any
    /// non-contradiction error from the collapse machinery.
    pub fn solve(mut self) -> Result<Array2<S>> {
        while self.step()? {}
        self.into_symbols()
    }

    /// Decode the collapsed grid back into caller symbols
    ///
    /// # Errors
    ///
    /// Returns an error if any cell is still undetermined.
    pub fn into_symbols(self) -> Result<Array2<S>> {
        let indices = self
            .grid
            .symbol_indices()
            .ok_or_else(|| SolverError::InvalidSourceData {
                reason: "grid is not fully collapsed".to_string(),
            })?;

        let mut symbols = Vec::with_capacity(indices.len());
        for &index in &indices {
            let symbol =
                self.ruleset
                    .table()
                    .symbol(index)
                    .ok_or_else(|| SolverError::InvalidSourceData {
                        reason: format!("symbol index {index} has no table entry"),
                    })?;
            symbols.push(symbol.clone());
        }

        Array2::from_shape_vec((self.grid.rows(), self.grid.cols()), symbols).map_err(
            |_shape_err| SolverError::InvalidSourceData {
                reason: "collapsed grid shape mismatch".to_string(),
            },
        )
    }
}
