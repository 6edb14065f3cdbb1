//! Tests for symbol interning and index round-trips

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use wavetile::analysis::symbols::SymbolTable;

    // Indices follow first-encounter order and repeated interns are stable
    #[test]
    fn test_intern_order() {
        let mut table = SymbolTable::new();
        assert_eq!(table.intern(&'B'), 0);
        assert_eq!(table.intern(&'A'), 1);
        assert_eq!(table.intern(&'B'), 0);
        assert_eq!(table.len(), 2);
    }

    // Index and symbol lookups invert each other
    #[test]
    fn test_round_trip() {
        let mut table = SymbolTable::new();
        let index = table.intern(&"water");
        assert_eq!(table.index_of(&"water"), Some(index));
        assert_eq!(table.symbol(index), Some(&"water"));
        assert_eq!(table.index_of(&"lava"), None);
        assert_eq!(table.symbol(99), None);
    }

    // Sample interning walks row-major, so indices are reproducible
    #[test]
    fn test_from_sample() {
        let sample = Array2::from_shape_vec((2, 2), vec!['X', 'Y', 'Y', 'Z']).unwrap();
        let (table, indexed) = SymbolTable::from_sample(&sample);

        assert_eq!(table.len(), 3);
        assert_eq!(table.index_of(&'X'), Some(0));
        assert_eq!(table.index_of(&'Y'), Some(1));
        assert_eq!(table.index_of(&'Z'), Some(2));
        assert_eq!(
            indexed,
            Array2::from_shape_vec((2, 2), vec![0, 1, 1, 2]).unwrap()
        );
    }

    #[test]
    fn test_empty_table() {
        let table: SymbolTable<char> = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
