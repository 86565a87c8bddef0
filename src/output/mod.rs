//! Terminal output formatting

mod display;

pub use display::print_filter_report;
