//! Tests for error display formatting and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use wavetile::SolverError;
    use wavetile::io::error::invalid_parameter;

    #[test]
    fn test_contradiction_display() {
        let error = SolverError::Contradiction { position: [3, 7] };
        assert_eq!(
            error.to_string(),
            "Contradiction at cell (3, 7): no candidates remain"
        );
    }

    #[test]
    fn test_already_collapsed_display() {
        let error = SolverError::AlreadyCollapsed { position: [0, 2] };
        assert_eq!(error.to_string(), "Cell (0, 2) is already collapsed");
    }

    #[test]
    fn test_choice_not_viable_display() {
        let error = SolverError::ChoiceNotViable {
            position: [1, 1],
            symbol: 4,
        };
        assert_eq!(
            error.to_string(),
            "Symbol 4 is not a candidate at cell (1, 1)"
        );
    }

    #[test]
    fn test_unsolvable_display() {
        let error = SolverError::Unsolvable {
            attempts: 1000,
            grid_dimensions: (16, 9),
        };
        assert_eq!(
            error.to_string(),
            "No solution found after 1000 attempts (grid size 16x9)"
        );
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("radius", &0, &"must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'radius' = '0': must be at least 1"
        );
    }

    // File system errors keep their underlying cause reachable
    #[test]
    fn test_filesystem_source_chain() {
        let error = SolverError::FileSystem {
            path: PathBuf::from("out/result.png"),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };
        assert!(error.to_string().contains("create directory"));
        assert!(error.source().is_some());
    }

    // Solver failures have no underlying source
    #[test]
    fn test_solver_errors_have_no_source() {
        let error = SolverError::Contradiction { position: [0, 0] };
        assert!(error.source().is_none());
    }
}
