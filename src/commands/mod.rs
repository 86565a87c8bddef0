//! Command implementations

mod filter;

pub use filter::{FilterReport, FilterRequest, run_filter};
