//! Pointer gesture handling
//!
//! Translates press / motion / release events into token and pile mutations.
//! All state scoped to one gesture (the held token set and pick-up positions)
//! lives here, along with the global assignment mode.

mod controller;

pub use controller::{AssignmentMode, InteractionController};
