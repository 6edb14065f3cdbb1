//! Tests for the weighted-choice entropy formula

#[cfg(test)]
mod tests {
    use wavetile::math::entropy::shannon_entropy;

    // A single outcome carries no uncertainty regardless of its weight
    #[test]
    fn test_single_weight_is_zero() {
        assert!(shannon_entropy(&[1]).abs() < 1e-12);
        assert!(shannon_entropy(&[17]).abs() < 1e-12);
    }

    // Two equal outcomes score ln(2)
    #[test]
    fn test_uniform_pair() {
        let entropy = shannon_entropy(&[1, 1]);
        assert!((entropy - std::f64::consts::LN_2).abs() < 1e-12);
    }

    // ln(Σw) − Σ(w·ln w) / Σw evaluated by hand for {2, 1}
    #[test]
    fn test_weighted_pair() {
        let expected = 3f64.ln() - (2.0 * 2f64.ln()) / 3.0;
        assert!((shannon_entropy(&[2, 1]) - expected).abs() < 1e-12);
    }

    // Skewed weights are less uncertain than uniform ones
    #[test]
    fn test_skew_lowers_entropy() {
        assert!(shannon_entropy(&[9, 1]) < shannon_entropy(&[5, 5]));
    }

    // Degenerate inputs score zero instead of producing NaN
    #[test]
    fn test_degenerate_inputs() {
        assert!(shannon_entropy(&[]).abs() < 1e-12);
        assert!(shannon_entropy(&[0, 0]).abs() < 1e-12);
        assert!(shannon_entropy(&[0, 3]).abs() < 1e-12);
    }
}
