use crate::math::entropy::shannon_entropy;
use std::collections::HashMap;

/// Key for caching entropy scores
///
/// Entropy only depends on the multiset of candidate weights, so the key is
/// the weight list in sorted order. Two cells with the same candidates in a
/// different iteration order share one cache entry.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct WeightKey {
    weights: Vec<u64>,
}

impl WeightKey {
    /// Canonicalize a weight list into a cache key
    pub fn new(mut weights: Vec<u64>) -> Self {
        weights.sort_unstable();
        Self { weights }
    }

    /// The canonicalized weights backing this key
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }
}

/// Memoization cache for entropy calculations
///
/// The score itself is cheap, but selection recomputes it for every
/// undetermined cell on every step; most cells share a handful of distinct
/// candidate sets, so the hit rate is high.
#[derive(Default)]
pub struct EntropyCache {
    scores: HashMap<WeightKey, f64>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl EntropyCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Entropy score for a candidate weight list, computed at most once per
    /// distinct multiset of weights
    pub fn score(&mut self, weights: Vec<u64>) -> f64 {
        use std::collections::hash_map::Entry;

        let key = WeightKey::new(weights);
        match self.scores.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let score = shannon_entropy(entry.key().weights());
                *entry.insert(score)
            }
        }
    }
}
