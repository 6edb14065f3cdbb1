//! Tests for occurrence counting and weight gathering

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use wavetile::algorithm::bitset::SymbolBitset;
    use wavetile::analysis::weights::WeightTable;

    fn indexed(rows: usize, cols: usize, cells: &[usize]) -> Array2<usize> {
        Array2::from_shape_vec((rows, cols), cells.to_vec()).unwrap()
    }

    // Counts sum to the sample's total cell count
    #[test]
    fn test_weight_conservation() {
        let table = WeightTable::from_indexed_sample(&indexed(2, 3, &[0, 1, 0, 2, 0, 1]), 3);

        assert_eq!(table.weight(0), 3);
        assert_eq!(table.weight(1), 2);
        assert_eq!(table.weight(2), 1);
        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 3);
    }

    // Unknown symbol indices weigh nothing
    #[test]
    fn test_unknown_index() {
        let table = WeightTable::from_indexed_sample(&indexed(1, 2, &[0, 0]), 1);
        assert_eq!(table.weight(7), 0);
    }

    // Gathering follows ascending symbol index order
    #[test]
    fn test_gather_order() {
        let table = WeightTable::from_indexed_sample(&indexed(1, 6, &[0, 1, 1, 2, 2, 2]), 3);

        let mut candidates = SymbolBitset::new(3);
        candidates.insert(2);
        candidates.insert(0);

        assert_eq!(table.gather(&candidates), vec![1, 3]);
    }

    #[test]
    fn test_empty_table() {
        let table = WeightTable::from_indexed_sample(&indexed(0, 0, &[]), 0);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }
}
