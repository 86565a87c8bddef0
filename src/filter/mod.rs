//! Constraint extraction and word filtering

mod constraints;
mod engine;

pub use constraints::{Constraints, extract_constraints};
pub use engine::filter_words;
