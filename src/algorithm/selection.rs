//! Entropy-guided choice of the next cell to collapse
//!
//! Lower entropy means a more constrained cell; collapsing the most
//! constrained cell first keeps contradictions shallow. Scores come from the
//! shared memo cache, so ties are exact: identical candidate multisets
//! produce bit-identical scores.

use crate::algorithm::cache::EntropyCache;
use crate::algorithm::executor::RandomSelector;
use crate::analysis::weights::WeightTable;
use crate::spatial::grid::{Cell, WaveGrid};
use std::cmp::Ordering;

/// Pick the undetermined cell with the lowest entropy score
///
/// Cells achieving the minimum score tie, and the winner is drawn uniformly
/// at random among them. Collapsed cells are excluded. Returns `None` when no
/// undetermined cell remains.
pub fn select_lowest_entropy(
    grid: &WaveGrid,
    weights: &WeightTable,
    cache: &mut EntropyCache,
    selector: &mut RandomSelector,
) -> Option<[usize; 2]> {
    let mut minimum = f64::INFINITY;
    let mut ties: Vec<[usize; 2]> = Vec::new();

    for (index, cell) in grid.indexed_iter() {
        let Cell::Undetermined(candidates) = cell else {
            continue;
        };

        let score = cache.score(weights.gather(candidates));
        match score.partial_cmp(&minimum) {
            Some(Ordering::Less) => {
                minimum = score;
                ties.clear();
                ties.push(index);
            }
            Some(Ordering::Equal) => ties.push(index),
            _ => {}
        }
    }

    if ties.is_empty() {
        return None;
    }
    let winner = selector.uniform_choice(ties.len());
    ties.get(winner).copied()
}
