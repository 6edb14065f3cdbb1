//! Cell collapse and constraint propagation
//!
//! Fixing a cell to one symbol shrinks the candidate sets of its constrained
//! neighbors. A neighbor narrowed to a single candidate must itself collapse,
//! which propagates further; those cascading collapses run through an
//! explicit worklist rather than call recursion, so cascade depth is bounded
//! by queue memory instead of the call stack.

use crate::algorithm::executor::RandomSelector;
use crate::analysis::rules::AdjacencyRules;
use crate::analysis::weights::WeightTable;
use crate::io::error::{Result, SolverError, invalid_parameter};
use crate::spatial::grid::{Cell, WaveGrid};
use std::collections::VecDeque;

/// A cell that must collapse to a specific symbol, queued during a cascade
#[derive(Debug, Clone, Copy)]
struct PendingCollapse {
    index: [usize; 2],
    symbol: usize,
}

/// Collapse one cell and propagate the consequences
///
/// The target cell must be undetermined. The symbol is `forced` when given,
/// otherwise drawn at random with probability proportional to each
/// candidate's sample weight. After the cell is fixed, every constrained
/// in-bounds neighbor has its candidate set intersected with the allowed set
/// for the chosen symbol and direction; a neighbor left with one candidate is
/// queued for a forced collapse of its own, and the queue drains until the
/// cascade settles.
///
/// On contradiction the grid is left partially mutated. Callers must not
/// trust it and restore from their snapshot.
///
/// # Errors
///
/// - `AlreadyCollapsed` if the target cell is already fixed.
/// - `ChoiceNotViable` if `forced` is not among the target's candidates.
/// - `Contradiction` if propagation empties a candidate set or reaches a
///   collapsed neighbor that disagrees with the chosen symbol.
pub fn collapse(
    grid: &mut WaveGrid,
    index: [usize; 2],
    rules: &AdjacencyRules,
    weights: &WeightTable,
    selector: &mut RandomSelector,
    forced: Option<usize>,
) -> Result<()> {
    let chosen = choose_symbol(grid, index, weights, selector, forced)?;

    let mut queue = VecDeque::new();
    queue.push_back(PendingCollapse {
        index,
        symbol: chosen,
    });

    while let Some(pending) = queue.pop_front() {
        match grid.cell(pending.index) {
            // A sibling cascade path already fixed this cell
            Some(Cell::Collapsed(symbol)) if *symbol == pending.symbol => continue,
            Some(Cell::Collapsed(_)) | None => {
                return Err(SolverError::Contradiction {
                    position: pending.index,
                });
            }
            Some(Cell::Undetermined(candidates)) => {
                if !candidates.contains(pending.symbol) {
                    return Err(SolverError::Contradiction {
                        position: pending.index,
                    });
                }
            }
        }

        if let Some(cell) = grid.cell_mut(pending.index) {
            *cell = Cell::Collapsed(pending.symbol);
        }

        propagate_from(grid, pending, rules, &mut queue)?;
    }

    Ok(())
}

/// Validate the target cell and settle on the symbol to fix it to
fn choose_symbol(
    grid: &WaveGrid,
    index: [usize; 2],
    weights: &WeightTable,
    selector: &mut RandomSelector,
    forced: Option<usize>,
) -> Result<usize> {
    let cell = grid.cell(index).ok_or_else(|| {
        invalid_parameter(
            "position",
            &format!("({}, {})", index[0], index[1]),
            &"outside the grid",
        )
    })?;

    let candidates = match cell {
        Cell::Collapsed(_) => return Err(SolverError::AlreadyCollapsed { position: index }),
        Cell::Undetermined(candidates) => candidates,
    };

    match forced {
        Some(symbol) => {
            if candidates.contains(symbol) {
                Ok(symbol)
            } else {
                Err(SolverError::ChoiceNotViable {
                    position: index,
                    symbol,
                })
            }
        }
        None => {
            let options = candidates.to_vec();
            let candidate_weights = weights.gather(candidates);
            let drawn = selector.weighted_choice(&candidate_weights);
            options
                .get(drawn)
                .copied()
                .ok_or(SolverError::Contradiction { position: index })
        }
    }
}

/// Apply one collapsed cell's constraints to its neighbors
fn propagate_from(
    grid: &mut WaveGrid,
    source: PendingCollapse,
    rules: &AdjacencyRules,
    queue: &mut VecDeque<PendingCollapse>,
) -> Result<()> {
    for (direction, allowed) in rules.constraints(source.symbol) {
        let Some(neighbor_index) = grid.neighbor(source.index, direction) else {
            continue;
        };

        match grid.cell_mut(neighbor_index) {
            None => continue,
            Some(Cell::Collapsed(symbol)) => {
                if !allowed.contains(*symbol) {
                    return Err(SolverError::Contradiction {
                        position: neighbor_index,
                    });
                }
            }
            Some(Cell::Undetermined(candidates)) => {
                let narrowed = candidates.intersection(allowed);
                if narrowed.is_empty() {
                    return Err(SolverError::Contradiction {
                        position: neighbor_index,
                    });
                }
                if let Some(sole) = narrowed.sole_symbol() {
                    queue.push_back(PendingCollapse {
                        index: neighbor_index,
                        symbol: sole,
                    });
                }
                *candidates = narrowed;
            }
        }
    }

    Ok(())
}
