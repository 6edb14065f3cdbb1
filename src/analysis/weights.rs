//! Symbol occurrence weights derived from the sample
//!
//! Weights drive both the entropy score that orders collapses and the biased
//! random draw that picks a concrete symbol. They are counted once during
//! analysis and never change afterwards.

use crate::algorithm::bitset::SymbolBitset;
use ndarray::Array2;

/// Occurrence count per symbol index, immutable after construction
///
/// Every symbol observed in the sample has a count of at least one, and the
/// counts sum to the sample's cell count.
#[derive(Debug, Clone)]
pub struct WeightTable {
    counts: Vec<u64>,
    total: u64,
}

impl WeightTable {
    /// Count symbol occurrences across an index-valued sample grid
    pub fn from_indexed_sample(indexed: &Array2<usize>, symbol_count: usize) -> Self {
        let mut counts = vec![0u64; symbol_count];
        for &index in indexed {
            if let Some(count) = counts.get_mut(index) {
                *count += 1;
            }
        }
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Occurrence count for a symbol index, zero for unknown indices
    pub fn weight(&self, symbol: usize) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of symbols the table covers
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Test whether the table covers no symbols
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Gather the weights of every symbol in a candidate set
    ///
    /// Order follows ascending symbol index, matching `SymbolBitset::iter`.
    pub fn gather(&self, candidates: &SymbolBitset) -> Vec<u64> {
        candidates.iter().map(|symbol| self.weight(symbol)).collect()
    }
}
