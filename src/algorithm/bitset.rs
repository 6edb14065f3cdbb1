use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset tracking which symbols remain possible for a cell
///
/// Indices are the dense 0-based symbol indices assigned during sample
/// analysis. Provides O(1) membership testing and word-parallel intersection,
/// the two operations propagation spends all its time in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolBitset {
    bits: BitVec,
}

impl SymbolBitset {
    /// Create a bitset with no symbols present
    pub fn new(symbol_count: usize) -> Self {
        Self {
            bits: bitvec![0; symbol_count],
        }
    }

    /// Create a bitset containing every symbol of the alphabet
    pub fn all(symbol_count: usize) -> Self {
        Self {
            bits: bitvec![1; symbol_count],
        }
    }

    /// Insert a symbol index
    ///
    /// Indices at or beyond the alphabet size are ignored.
    pub fn insert(&mut self, symbol: usize) {
        if symbol < self.bits.len() {
            self.bits.set(symbol, true);
        }
    }

    /// Test symbol membership
    pub fn contains(&self, symbol: usize) -> bool {
        self.bits.get(symbol).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no symbols are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count symbols in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Size of the underlying alphabet
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// The single member, if exactly one symbol remains
    pub fn sole_symbol(&self) -> Option<usize> {
        (self.count() == 1).then(|| self.bits.iter_ones().next()).flatten()
    }

    /// Iterate over the symbol indices present in the set
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all symbol indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for SymbolBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SymbolBitset({} symbols: {:?})",
            self.count(),
            self.to_vec()
        )
    }
}
