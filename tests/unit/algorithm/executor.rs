//! Tests for the solve loop, restart accounting, and decode path

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use wavetile::SolverError;
    use wavetile::algorithm::executor::{Solver, SolverConfig};
    use wavetile::analysis::rules::{Ruleset, analyze};

    fn ruleset(rows: usize, cols: usize, cells: &[char]) -> Ruleset<char> {
        let sample = Array2::from_shape_vec((rows, cols), cells.to_vec()).unwrap();
        analyze(&sample, 1).unwrap()
    }

    // Zero or oversized dimensions are rejected up front
    #[test]
    fn test_invalid_dimensions_rejected() {
        let rules = ruleset(1, 2, &['A', 'B']);

        let zero_rows = Solver::new(&rules, 0, 4, SolverConfig::default(), 0);
        assert!(matches!(
            zero_rows,
            Err(SolverError::InvalidParameter { parameter: "rows", .. })
        ));

        let huge_cols = Solver::new(&rules, 4, 10_001, SolverConfig::default(), 0);
        assert!(matches!(
            huge_cols,
            Err(SolverError::InvalidParameter { parameter: "cols", .. })
        ));
    }

    // Stepping past full collapse reports completion instead of working
    #[test]
    fn test_step_reports_completion() {
        let rules = ruleset(2, 2, &['A', 'A', 'A', 'A']);
        let mut solver = Solver::new(&rules, 2, 3, SolverConfig::default(), 0).unwrap();

        let mut steps = 0;
        while solver.step().unwrap() {
            steps += 1;
            assert!(steps <= 6, "uniform alphabet must collapse within one pass");
        }

        assert!(solver.grid().is_collapsed());
        assert_eq!(solver.grid().collapsed_count(), 6);
        assert!(!solver.step().unwrap());
    }

    // A single-symbol alphabet never needs a rollback
    #[test]
    fn test_uniform_solve_has_no_restarts() {
        let rules = ruleset(2, 2, &['A', 'A', 'A', 'A']);
        let mut solver = Solver::new(&rules, 4, 4, SolverConfig::default(), 5).unwrap();
        while solver.step().unwrap() {}

        assert_eq!(solver.restarts(), 0);
        let output = solver.into_symbols().unwrap();
        assert!(output.iter().all(|&symbol| symbol == 'A'));
    }

    // Decoding is only valid once every cell is fixed
    #[test]
    fn test_decode_requires_full_collapse() {
        let rules = ruleset(1, 2, &['A', 'B']);
        let solver = Solver::new(&rules, 3, 3, SolverConfig::default(), 0).unwrap();

        let result = solver.into_symbols();
        assert!(matches!(result, Err(SolverError::InvalidSourceData { .. })));
    }

    // Selection consults the entropy cache on every step
    #[test]
    fn test_entropy_cache_is_exercised() {
        let rules = ruleset(2, 2, &['A', 'B', 'B', 'A']);
        let mut solver = Solver::new(&rules, 4, 4, SolverConfig::default(), 1).unwrap();
        while solver.step().unwrap() {}

        let stats = solver.cache_stats();
        assert!(stats.misses >= 1);
        assert!(stats.hits >= 1, "repeated candidate sets should hit");
    }
}
