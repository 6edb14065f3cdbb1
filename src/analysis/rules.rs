//! Adjacency rule extraction from a sample grid
//!
//! One pass over the sample produces everything the solver needs: the symbol
//! table, the occurrence weights, and the per-direction adjacency constraints
//! with their reverse entries.

use crate::algorithm::bitset::SymbolBitset;
use crate::analysis::symbols::SymbolTable;
use crate::analysis::weights::WeightTable;
use crate::io::error::{Result, SolverError, invalid_parameter};
use ndarray::Array2;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Relative grid offset between a cell and one of its constrained neighbors
///
/// `dx` moves along columns, `dy` along rows. Directions are always nonzero
/// and stored together with their exact negation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Direction {
    /// Column offset
    pub dx: i32,
    /// Row offset
    pub dy: i32,
}

impl Direction {
    /// Create a direction from column and row offsets
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// The exact negation of this direction
    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// The diagonal-inclusive unit directions, scaled per axis by every distance
/// up to `radius`
///
/// For `radius` 1 this is the 8 immediate neighbors. Larger radii add the
/// anisotropic products `(i·dx, j·dy)` for each distance pair, matching the
/// single-cell-at-offset semantics documented on [`analyze`].
pub fn scaled_directions(radius: u32) -> Vec<Direction> {
    const UNITS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

    let mut offsets = std::collections::BTreeSet::new();
    let radius = radius as i32;
    for i in 1..=radius {
        for j in 1..=radius {
            for (ux, uy) in UNITS {
                offsets.insert((ux * i, uy * j));
                offsets.insert((-ux * i, -uy * j));
            }
        }
    }

    offsets
        .into_iter()
        .map(|(dx, dy)| Direction::new(dx, dy))
        .collect()
}

/// Per-symbol adjacency constraints observed in the sample
///
/// Maps each symbol index and direction to the set of symbols seen at that
/// offset anywhere in the sample. Insertion keeps the bidirectional closure:
/// recording that `t` may sit at direction `d` from `s` also records that `s`
/// may sit at `-d` from `t`.
#[derive(Debug, Clone)]
pub struct AdjacencyRules {
    allowed: Vec<BTreeMap<Direction, SymbolBitset>>,
    symbol_count: usize,
}

impl AdjacencyRules {
    /// Create an empty rule table for an alphabet of the given size
    pub fn new(symbol_count: usize) -> Self {
        Self {
            allowed: vec![BTreeMap::new(); symbol_count],
            symbol_count,
        }
    }

    /// Record that `neighbor` was observed at direction `direction` from
    /// `symbol`, plus the reverse entry
    pub fn allow(&mut self, symbol: usize, direction: Direction, neighbor: usize) {
        self.insert_one_way(symbol, direction, neighbor);
        self.insert_one_way(neighbor, direction.reversed(), symbol);
    }

    fn insert_one_way(&mut self, symbol: usize, direction: Direction, neighbor: usize) {
        let capacity = self.symbol_count;
        if let Some(directions) = self.allowed.get_mut(symbol) {
            directions
                .entry(direction)
                .or_insert_with(|| SymbolBitset::new(capacity))
                .insert(neighbor);
        }
    }

    /// The symbols allowed at `direction` from `symbol`, if any were observed
    pub fn allowed(&self, symbol: usize, direction: Direction) -> Option<&SymbolBitset> {
        self.allowed.get(symbol).and_then(|map| map.get(&direction))
    }

    /// Iterate the constrained directions for a symbol in deterministic order
    pub fn constraints(
        &self,
        symbol: usize,
    ) -> impl Iterator<Item = (Direction, &SymbolBitset)> + '_ {
        self.allowed
            .get(symbol)
            .into_iter()
            .flat_map(|map| map.iter().map(|(direction, set)| (*direction, set)))
    }

    /// Size of the symbol alphabet
    pub const fn symbol_count(&self) -> usize {
        self.symbol_count
    }
}

/// Everything extracted from one sample: symbol table, weights, adjacency
///
/// Created once and read-only afterwards, so one `Ruleset` can back any
/// number of concurrent solves.
#[derive(Debug, Clone)]
pub struct Ruleset<S> {
    table: SymbolTable<S>,
    weights: WeightTable,
    adjacency: AdjacencyRules,
}

impl<S> Ruleset<S>
where
    S: Clone + Eq + Hash,
{
    /// The symbol table mapping caller symbols to dense indices
    pub const fn table(&self) -> &SymbolTable<S> {
        &self.table
    }

    /// The occurrence weight table
    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// The adjacency constraint table
    pub const fn adjacency(&self) -> &AdjacencyRules {
        &self.adjacency
    }

    /// Number of distinct symbols in the alphabet
    pub fn symbol_count(&self) -> usize {
        self.table.len()
    }
}

/// Extract weights and adjacency rules from a sample grid
///
/// Scans every cell once, counting symbol occurrences and recording which
/// symbol sits at each scaled unit offset. Offsets falling outside the sample
/// contribute nothing; there is no wraparound. A 1×1 sample yields a single
/// weight entry and no adjacency constraints.
///
/// For `radius` greater than 1 only the single cell at each scaled offset is
/// inspected, not the cells between; the radius acts as a neighbor-offset
/// scale rather than a window.
///
/// # Errors
///
/// Returns an error if the sample has no cells or `radius` is zero.
pub fn analyze<S>(sample: &Array2<S>, radius: u32) -> Result<Ruleset<S>>
where
    S: Clone + Eq + Hash,
{
    if sample.is_empty() {
        return Err(SolverError::InvalidSourceData {
            reason: "sample grid has no cells".to_string(),
        });
    }
    if radius == 0 {
        return Err(invalid_parameter(
            "radius",
            &radius,
            &"must be at least 1",
        ));
    }

    let (table, indexed) = SymbolTable::from_sample(sample);
    let weights = WeightTable::from_indexed_sample(&indexed, table.len());
    let mut adjacency = AdjacencyRules::new(table.len());

    let (rows, cols) = indexed.dim();
    let directions = scaled_directions(radius);

    for ((row, col), &symbol) in indexed.indexed_iter() {
        for &direction in &directions {
            let target_row = row as i32 + direction.dy;
            let target_col = col as i32 + direction.dx;
            if target_row < 0
                || target_col < 0
                || target_row >= rows as i32
                || target_col >= cols as i32
            {
                continue;
            }
            if let Some(&neighbor) = indexed.get((target_row as usize, target_col as usize)) {
                adjacency.allow(symbol, direction, neighbor);
            }
        }
    }

    Ok(Ruleset {
        table,
        weights,
        adjacency,
    })
}
