//! Wordle Board Assistant
//!
//! An interactive aid for the daily five-letter word puzzle: drag 26 letter
//! tokens onto a board of five ordered slots, mark letters as absent, present,
//! or correctly placed, and filter a candidate word list against the marks.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::core::Word;
//! use wordle_board::filter::{Constraints, filter_words};
//!
//! let words = vec![
//!     Word::new("apple").unwrap(),
//!     Word::new("grape").unwrap(),
//!     Word::new("mango").unwrap(),
//! ];
//!
//! let mut constraints = Constraints::default();
//! constraints.exclude(b'g');
//!
//! let matches = filter_words(&words, &constraints);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].text(), "apple");
//! ```

// Core domain types
pub mod core;

// Board state: token arena, piles, layout
pub mod board;

// Pointer gesture handling
pub mod interaction;

// Constraint extraction and word filtering
pub mod filter;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
