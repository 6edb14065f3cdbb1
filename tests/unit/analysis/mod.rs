pub mod symbols;
pub mod weights;
