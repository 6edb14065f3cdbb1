//! Tests for command-line argument parsing and derived settings

#[cfg(test)]
mod tests {
    use clap::Parser;
    use wavetile::io::cli::Cli;
    use wavetile::io::configuration::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_RADIUS,
        DEFAULT_SEED,
    };

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wavetile", "sample.png"]).unwrap();
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.radius, DEFAULT_RADIUS);
        assert_eq!(cli.attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(
            cli.output_shape(),
            (DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH)
        );
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::try_parse_from([
            "wavetile", "in.png", "--seed", "7", "--radius", "2", "--attempts", "50", "--quiet",
            "--no-skip",
        ])
        .unwrap();
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.radius, 2);
        assert_eq!(cli.attempts, 50);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // A lone dimension implies a square output
    #[test]
    fn test_output_shape_squares_single_dimension() {
        let cli = Cli::try_parse_from(["wavetile", "in.png", "-w", "12"]).unwrap();
        assert_eq!(cli.output_shape(), (12, 12));

        let cli = Cli::try_parse_from(["wavetile", "in.png", "-H", "9"]).unwrap();
        assert_eq!(cli.output_shape(), (9, 9));

        let cli = Cli::try_parse_from(["wavetile", "in.png", "-w", "12", "-H", "9"]).unwrap();
        assert_eq!(cli.output_shape(), (9, 12));
    }

    #[test]
    fn test_target_is_required() {
        assert!(Cli::try_parse_from(["wavetile"]).is_err());
    }
}
