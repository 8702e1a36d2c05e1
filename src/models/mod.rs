pub mod pair;

pub use pair::{is_standardized, standardize, PairMapping};
