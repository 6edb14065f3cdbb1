//! Wave grid state for one solve attempt
//!
//! Each cell is either still undetermined, carrying the set of symbols it
//! could yet become, or collapsed to exactly one symbol. An empty candidate
//! set is not a representable cell state; propagation reports a contradiction
//! instead of storing one. The grid is fixed-size for the life of a solve
//! attempt and a full clone of it is the solver's rollback snapshot.

use crate::algorithm::bitset::SymbolBitset;
use crate::analysis::rules::Direction;
use ndarray::Array2;

/// State of one grid location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Not yet fixed; carries the non-empty set of remaining candidates
    Undetermined(SymbolBitset),
    /// Fixed to exactly one symbol index
    Collapsed(usize),
}

impl Cell {
    /// Test whether the cell has been fixed to one symbol
    pub const fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed(_))
    }

    /// The remaining candidate set, for undetermined cells
    pub const fn candidates(&self) -> Option<&SymbolBitset> {
        match self {
            Self::Undetermined(candidates) => Some(candidates),
            Self::Collapsed(_) => None,
        }
    }

    /// The fixed symbol index, for collapsed cells
    pub const fn symbol(&self) -> Option<usize> {
        match self {
            Self::Undetermined(_) => None,
            Self::Collapsed(symbol) => Some(*symbol),
        }
    }
}

/// 2-D array of cells with fixed dimensions
///
/// Owned exclusively by the solver during a solve attempt. Cloning the whole
/// grid is the snapshot operation backing contradiction rollback.
#[derive(Debug, Clone)]
pub struct WaveGrid {
    cells: Array2<Cell>,
}

impl WaveGrid {
    /// Create a grid with every cell undetermined over the full alphabet
    pub fn new(rows: usize, cols: usize, symbol_count: usize) -> Self {
        let cells = Array2::from_elem(
            (rows, cols),
            Cell::Undetermined(SymbolBitset::all(symbol_count)),
        );
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total cell count
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Borrow the cell at `[row, col]`, if in bounds
    pub fn cell(&self, index: [usize; 2]) -> Option<&Cell> {
        self.cells.get((index[0], index[1]))
    }

    /// Mutably borrow the cell at `[row, col]`, if in bounds
    pub fn cell_mut(&mut self, index: [usize; 2]) -> Option<&mut Cell> {
        self.cells.get_mut((index[0], index[1]))
    }

    /// The in-bounds neighbor of a cell along a direction
    ///
    /// Directions move `dx` along columns and `dy` along rows. Offsets that
    /// leave the grid return `None`; there is no wraparound.
    pub fn neighbor(&self, index: [usize; 2], direction: Direction) -> Option<[usize; 2]> {
        let row = index[0] as i32 + direction.dy;
        let col = index[1] as i32 + direction.dx;
        if row < 0 || col < 0 || row >= self.rows() as i32 || col >= self.cols() as i32 {
            return None;
        }
        Some([row as usize, col as usize])
    }

    /// Test whether every cell holds exactly one symbol
    pub fn is_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Number of cells already fixed to one symbol
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Iterate all cells with their `[row, col]` indices in row-major order
    pub fn indexed_iter(&self) -> impl Iterator<Item = ([usize; 2], &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ([row, col], cell))
    }

    /// Extract the symbol indices of a fully collapsed grid
    ///
    /// Returns `None` if any cell is still undetermined.
    pub fn symbol_indices(&self) -> Option<Array2<usize>> {
        let mut indices = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            indices.push(cell.symbol()?);
        }
        Array2::from_shape_vec((self.rows(), self.cols()), indices).ok()
    }
}
