//! Pile membership and mark assignment
//!
//! Five ordered piles, one per answer slot. A pile in correct mode holds at
//! most one token; a pile in present mode stacks freely. The registry is the
//! only code that sets pile marks, so membership and marks cannot drift apart.

use crate::core::{Mark, SLOT_COUNT, Token, TokenId};

/// Owns the five ordered slots and their token membership.
#[derive(Debug, Default)]
pub struct PileRegistry {
    piles: [Vec<TokenId>; SLOT_COUNT],
}

impl PileRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens currently in a slot, oldest first
    ///
    /// # Panics
    /// Panics if `slot >= SLOT_COUNT`.
    #[must_use]
    pub fn tokens_in(&self, slot: usize) -> &[TokenId] {
        &self.piles[slot]
    }

    /// Which pile holds this token, if any?
    #[must_use]
    pub fn pile_for(&self, id: TokenId) -> Option<usize> {
        self.piles
            .iter()
            .position(|pile| pile.contains(&id))
    }

    /// Is a slot empty?
    #[must_use]
    pub fn is_empty(&self, slot: usize) -> bool {
        self.piles[slot].is_empty()
    }

    /// Assign a token to a slot with a correct-position mark.
    ///
    /// Returns `false` without touching anything if the slot is already
    /// occupied; a correct-mode occupant can only be replaced by removing it
    /// first.
    pub fn assign_correct(&mut self, token: &mut Token, slot: usize) -> bool {
        if !self.piles[slot].is_empty() {
            return false;
        }
        self.remove(token.id());
        self.piles[slot].push(token.id());
        token.set_mark(Mark::CorrectAt(slot));
        true
    }

    /// Assign a token to a slot with a present-but-misplaced mark.
    ///
    /// Stacking is permitted; the token is appended behind earlier occupants.
    pub fn assign_present(&mut self, token: &mut Token, slot: usize) {
        self.remove(token.id());
        self.piles[slot].push(token.id());
        token.set_mark(Mark::PresentAt(slot));
    }

    /// Remove a token from whatever pile holds it and clear its mark.
    pub fn release(&mut self, token: &mut Token) {
        self.remove(token.id());
        token.clear_mark();
    }

    /// Drop all pile membership.
    pub fn clear(&mut self) {
        for pile in &mut self.piles {
            pile.clear();
        }
    }

    // Scans every pile so a token found in two (an invariant violation) is
    // silently repaired rather than crashed on.
    fn remove(&mut self, id: TokenId) {
        for pile in &mut self.piles {
            pile.retain(|&member| member != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Point};

    fn token(index: usize) -> Token {
        let letter = Letter::from_char('a').unwrap();
        Token::new(TokenId::new(index), letter, Point::new(0.0, 0.0))
    }

    #[test]
    fn assign_correct_takes_empty_pile() {
        let mut piles = PileRegistry::new();
        let mut t = token(0);

        assert!(piles.assign_correct(&mut t, 2));
        assert_eq!(t.mark(), Mark::CorrectAt(2));
        assert_eq!(piles.pile_for(t.id()), Some(2));
        assert_eq!(piles.tokens_in(2), &[t.id()]);
    }

    #[test]
    fn assign_correct_rejects_occupied_pile() {
        let mut piles = PileRegistry::new();
        let mut first = token(0);
        let mut second = token(1);

        assert!(piles.assign_correct(&mut first, 0));
        assert!(!piles.assign_correct(&mut second, 0));

        // Occupant untouched, rejected token unmarked
        assert_eq!(first.mark(), Mark::CorrectAt(0));
        assert_eq!(second.mark(), Mark::Unoccupied);
        assert_eq!(piles.tokens_in(0).len(), 1);
    }

    #[test]
    fn assign_present_stacks() {
        let mut piles = PileRegistry::new();
        let mut first = token(0);
        let mut second = token(1);

        piles.assign_present(&mut first, 3);
        piles.assign_present(&mut second, 3);

        assert_eq!(piles.tokens_in(3), &[first.id(), second.id()]);
        assert_eq!(first.mark(), Mark::PresentAt(3));
        assert_eq!(second.mark(), Mark::PresentAt(3));
    }

    #[test]
    fn release_clears_mark_and_membership() {
        let mut piles = PileRegistry::new();
        let mut t = token(0);

        piles.assign_present(&mut t, 1);
        piles.release(&mut t);

        assert_eq!(t.mark(), Mark::Unoccupied);
        assert_eq!(piles.pile_for(t.id()), None);
        assert!(piles.is_empty(1));
    }

    #[test]
    fn reassignment_moves_between_piles() {
        let mut piles = PileRegistry::new();
        let mut t = token(0);

        piles.assign_present(&mut t, 0);
        piles.assign_present(&mut t, 4);

        assert_eq!(piles.pile_for(t.id()), Some(4));
        assert!(piles.is_empty(0));
        assert_eq!(t.mark(), Mark::PresentAt(4));
    }

    #[test]
    fn clear_empties_every_pile() {
        let mut piles = PileRegistry::new();
        let mut a = token(0);
        let mut b = token(1);
        piles.assign_present(&mut a, 0);
        piles.assign_present(&mut b, 4);

        piles.clear();
        for slot in 0..SLOT_COUNT {
            assert!(piles.is_empty(slot));
        }
    }
}
