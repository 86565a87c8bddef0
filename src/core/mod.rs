//! Core domain types for the letter board

mod geometry;
mod letter;
mod token;
mod word;

pub use geometry::{Collidable, Point, Positionable};
pub use letter::{LETTERS, Letter};
pub use token::{Mark, Renderable, TOKEN_HALF_EXTENT, Token, TokenId, Visual};
pub use word::{Word, WordError};

/// Number of board slots; also the candidate word length.
pub const SLOT_COUNT: usize = 5;
