//! Drag-and-drop gesture controller
//!
//! The rules a release must follow, in order:
//!
//! 1. Every drop onto a colliding pile spawns one fresh duplicate per held
//!    token at the held token's home position, whether or not the drop is
//!    accepted. The template always stays reusable.
//! 2. Present mode stacks freely; correct mode accepts one token per pile and
//!    bounces the rest back home unmarked.
//! 3. A release away from every pile resets displaced tokens to their homes.
//!    A single token whose pick-up position equals its home is instead an
//!    exclusion toggle; that non-drag click is the only way to mark a letter
//!    as absent.

use crate::board::layout;
use crate::board::Board;
use crate::core::{Collidable, Point, Positionable, TokenId};

/// Global assignment mode, active at the moment of a drop.
///
/// Flipped by one explicit user action; earlier assignments keep the mark
/// they were given when dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentMode {
    /// Drops assert the letter occupies the slot
    #[default]
    Correct,
    /// Drops assert the letter is present but not at the slot
    Present,
}

impl AssignmentMode {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Correct => Self::Present,
            Self::Present => Self::Correct,
        }
    }
}

/// Translates pointer events into board mutations.
#[derive(Debug, Default)]
pub struct InteractionController {
    mode: AssignmentMode,
    held: Vec<TokenId>,
    pickup_positions: Vec<Point>,
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn mode(&self) -> AssignmentMode {
        self.mode
    }

    /// Flip the assignment mode for subsequent drops
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.flipped();
    }

    /// Is a gesture in progress?
    #[must_use]
    pub fn is_holding(&self) -> bool {
        !self.held.is_empty()
    }

    /// Forget any in-flight gesture (board reset)
    pub fn reset(&mut self) {
        self.held.clear();
        self.pickup_positions.clear();
    }

    /// Pointer pressed at a board point.
    ///
    /// Picks up the topmost plain token under the pointer, or flips an
    /// excluded token back to plain; excluded tokens are never draggable.
    pub fn press(&mut self, board: &mut Board, point: Point) {
        // A gesture must fully resolve before the next press lands.
        debug_assert!(self.held.is_empty(), "press while a gesture is unresolved");
        self.held.clear();
        self.pickup_positions.clear();

        let Some(id) = board.token_at(point) else {
            return;
        };

        if board.token(id).excluded() {
            // Re-press toggles back; duplicates stay inert inside the call.
            board.token_mut(id).toggle_excluded();
            return;
        }

        self.held.push(id);
        self.pickup_positions.push(board.token(id).position());
        board.pull_to_top(id);
        // Should already be out of any pile, but picking up must never leave
        // stale membership behind.
        board.release_from_pile(id);
    }

    /// Pointer moved while holding tokens
    pub fn motion(&mut self, board: &mut Board, dx: f32, dy: f32) {
        for &id in &self.held {
            let pos = board.token(id).position();
            board
                .token_mut(id)
                .set_position(Point::new(pos.x + dx, pos.y + dy));
        }
    }

    /// Pointer released: drop on the nearest colliding pile or reset
    pub fn release(&mut self, board: &mut Board) {
        if self.held.is_empty() {
            return;
        }

        let primary = self.held[0];
        let mat = board.nearest_mat(board.token(primary).position());

        if board.token(primary).overlaps(&mat) {
            self.drop_on_pile(board, mat.slot());
        } else {
            self.reset_held(board);
        }

        self.held.clear();
        self.pickup_positions.clear();
    }

    fn drop_on_pile(&mut self, board: &mut Board, slot: usize) {
        for &id in &self.held {
            // The template (or its stand-in) is replenished on every drop,
            // accepted or rejected.
            board.spawn_duplicate(id);

            match self.mode {
                AssignmentMode::Present => {
                    let base = board
                        .pile_top_position(slot)
                        .map_or(layout::pile_center(slot), |top| {
                            Point::new(top.x, top.y + layout::STACK_OFFSET)
                        });
                    board.assign_present(id, slot);
                    board.token_mut(id).set_position(base);
                }
                AssignmentMode::Correct => {
                    if board.assign_correct(id, slot) {
                        board.token_mut(id).set_position(layout::pile_center(slot));
                    } else {
                        // Occupied: bounce home unmarked, occupant untouched.
                        let home = board.token(id).home();
                        board.release_from_pile(id);
                        board.token_mut(id).set_position(home);
                    }
                }
            }
        }
    }

    fn reset_held(&mut self, board: &mut Board) {
        let primary = self.held[0];
        let primary_home = board.token(primary).home();
        let pickup = self.pickup_positions[0];

        if primary_home != pickup {
            // Displaced: everything goes back to rest, unmarked.
            for &id in &self.held {
                let home = board.token(id).home();
                board.release_from_pile(id);
                board.token_mut(id).set_position(home);
            }
        }

        if self.held.len() == 1 && pickup == primary_home {
            // Picked up in place: the click means "toggle exclusion".
            board.release_from_pile(primary);
            board.token_mut(primary).set_position(primary_home);
            board.token_mut(primary).toggle_excluded();
        }
    }
}
