/// Shannon entropy of a weighted choice over unnormalized occurrence counts
///
/// Computes `ln(Σw) − Σ(w·ln w) / Σw`, the entropy of drawing one outcome
/// with probability proportional to its weight. Lower values mean a more
/// constrained choice, which is what collapse ordering ranks by. Zero weights
/// contribute nothing; an empty or all-zero weight list scores zero.
pub fn shannon_entropy(weights: &[u64]) -> f64 {
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let weighted_log_sum: f64 = weights
        .iter()
        .filter(|&&w| w > 0)
        .map(|&w| {
            let w = w as f64;
            w * w.ln()
        })
        .sum();

    total.ln() - weighted_log_sum / total
}
