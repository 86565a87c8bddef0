//! Board state: token arena, pile registry, fixed layout

pub mod layout;

mod piles;
mod state;

pub use piles::PileRegistry;
pub use state::{Board, PileMat};
