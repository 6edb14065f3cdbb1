//! Sample analysis producing the solver's rule tables

/// Adjacency rule extraction and the combined ruleset
pub mod rules;
/// Symbol interning between caller alphabets and dense indices
pub mod symbols;
/// Symbol occurrence weights derived from the sample
pub mod weights;
