//! Constraint extraction from board state
//!
//! Walks all tokens and all piles once and produces the three constraint
//! sets the filter engine consumes: excluded letters, correct
//! letter-at-slot pairs, and present-but-misplaced pairs.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::{Mark, SLOT_COUNT};

/// The three constraint sets accumulated on the board.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Letters marked as absent from the answer
    pub excluded: FxHashSet<u8>,
    /// `(letter, slot)` pairs asserting the letter occupies the slot
    pub correct: Vec<(u8, usize)>,
    /// `(letter, slot)` pairs asserting the letter is present elsewhere
    pub present: Vec<(u8, usize)>,
}

impl Constraints {
    /// Add an excluded letter
    pub fn exclude(&mut self, letter: u8) {
        self.excluded.insert(letter);
    }

    /// Require a letter at a slot
    pub fn require_at(&mut self, letter: u8, slot: usize) {
        self.correct.push((letter, slot));
    }

    /// Require a letter to be present but not at a slot
    pub fn require_elsewhere(&mut self, letter: u8, slot: usize) {
        self.present.push((letter, slot));
    }

    /// No constraints at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty() && self.correct.is_empty() && self.present.is_empty()
    }
}

/// Read the accumulated marks off the board.
///
/// Excluded letters are gathered from every token regardless of pile
/// membership; correct and present pairs come from pile membership, pairing
/// each member's letter with the pile's slot.
#[must_use]
pub fn extract_constraints(board: &Board) -> Constraints {
    let mut constraints = Constraints::default();

    for token in board.tokens() {
        if token.excluded() {
            constraints.exclude(token.letter().as_byte());
        }
    }

    for slot in 0..SLOT_COUNT {
        for &id in board.piles().tokens_in(slot) {
            let token = board.token(id);
            match token.mark() {
                Mark::CorrectAt(s) if s == slot => {
                    constraints.require_at(token.letter().as_byte(), slot);
                }
                Mark::PresentAt(s) if s == slot => {
                    constraints.require_elsewhere(token.letter().as_byte(), slot);
                }
                _ => {}
            }
        }
    }

    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout;
    use crate::core::Point;
    use crate::interaction::InteractionController;

    fn click(ctrl: &mut InteractionController, board: &mut Board, at: Point) {
        ctrl.press(board, at);
        ctrl.release(board);
    }

    fn drag(ctrl: &mut InteractionController, board: &mut Board, from: Point, slot: usize) {
        ctrl.press(board, from);
        let target = layout::pile_center(slot);
        ctrl.motion(board, target.x - from.x, target.y - from.y);
        ctrl.release(board);
    }

    #[test]
    fn empty_board_yields_empty_constraints() {
        let board = Board::new();
        let constraints = extract_constraints(&board);
        assert!(constraints.is_empty());
    }

    #[test]
    fn extraction_reflects_board_marks() {
        let mut board = Board::new();
        let mut ctrl = InteractionController::new();

        // Board order is keyboard order: q w e r t ...
        click(&mut ctrl, &mut board, layout::home_position(0)); // exclude q
        drag(&mut ctrl, &mut board, layout::home_position(1), 0); // w correct at 0
        ctrl.toggle_mode();
        drag(&mut ctrl, &mut board, layout::home_position(2), 3); // e present at 3

        let constraints = extract_constraints(&board);
        assert!(constraints.excluded.contains(&b'q'));
        assert_eq!(constraints.excluded.len(), 1);
        assert_eq!(constraints.correct, vec![(b'w', 0)]);
        assert_eq!(constraints.present, vec![(b'e', 3)]);
    }

    #[test]
    fn stacked_present_tokens_each_yield_a_pair() {
        let mut board = Board::new();
        let mut ctrl = InteractionController::new();
        ctrl.toggle_mode();

        drag(&mut ctrl, &mut board, layout::home_position(0), 2);
        drag(&mut ctrl, &mut board, layout::home_position(1), 2);

        let constraints = extract_constraints(&board);
        assert_eq!(constraints.present, vec![(b'q', 2), (b'w', 2)]);
    }

    #[test]
    fn toggled_back_letters_are_not_excluded() {
        let mut board = Board::new();
        let mut ctrl = InteractionController::new();
        let q = layout::home_position(0);

        click(&mut ctrl, &mut board, q);
        ctrl.press(&mut board, q); // press on excluded token flips it back

        let constraints = extract_constraints(&board);
        assert!(constraints.is_empty());
    }
}
