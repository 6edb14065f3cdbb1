/// Efficient bitset implementation for candidate symbol tracking
pub mod bitset;
/// Memoization cache for entropy scores
pub mod cache;
/// Top-level solve loop with snapshot rollback and restart budget
pub mod executor;
/// Cell collapse and worklist constraint propagation
pub mod propagation;
/// Entropy-guided selection of the next cell to collapse
pub mod selection;
