//! Board state
//!
//! Owns the token arena, draw order, pile mats, and the pile registry. Board
//! setup creates one template token per letter; duplicates are spawned lazily
//! on drops. A reset tears everything down and reruns setup.

use super::layout::{self, PILE_HALF_EXTENT};
use super::piles::PileRegistry;
use crate::core::{Collidable, Letter, Point, Positionable, SLOT_COUNT, Token, TokenId};

/// One of the five fixed drop targets.
#[derive(Debug, Clone, Copy)]
pub struct PileMat {
    slot: usize,
    center: Point,
}

impl PileMat {
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }
}

impl Collidable for PileMat {
    fn center(&self) -> Point {
        self.center
    }

    fn half_extents(&self) -> (f32, f32) {
        (PILE_HALF_EXTENT, PILE_HALF_EXTENT)
    }
}

/// Full board state.
#[derive(Debug)]
pub struct Board {
    tokens: Vec<Token>,
    draw_order: Vec<TokenId>,
    mats: [PileMat; SLOT_COUNT],
    piles: PileRegistry,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Set up a fresh board: 26 template tokens at home, empty piles
    #[must_use]
    pub fn new() -> Self {
        let tokens: Vec<Token> = Letter::board_order()
            .enumerate()
            .map(|(i, letter)| Token::new(TokenId::new(i), letter, layout::home_position(i)))
            .collect();
        let draw_order = tokens.iter().map(Token::id).collect();

        let mats = std::array::from_fn(|slot| PileMat {
            slot,
            center: layout::pile_center(slot),
        });

        Self {
            tokens,
            draw_order,
            mats,
            piles: PileRegistry::new(),
        }
    }

    /// Tear down all tokens and piles and rerun setup
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub fn token_mut(&mut self, id: TokenId) -> &mut Token {
        &mut self.tokens[id.index()]
    }

    /// All tokens, templates and duplicates
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Token ids in draw order, bottom first
    #[must_use]
    pub fn draw_order(&self) -> &[TokenId] {
        &self.draw_order
    }

    #[must_use]
    pub fn piles(&self) -> &PileRegistry {
        &self.piles
    }

    #[must_use]
    pub fn mats(&self) -> &[PileMat] {
        &self.mats
    }

    /// Topmost token whose bounding box contains the point
    #[must_use]
    pub fn token_at(&self, point: Point) -> Option<TokenId> {
        self.draw_order
            .iter()
            .rev()
            .copied()
            .find(|&id| self.token(id).contains(point))
    }

    /// The pile mat nearest to a point
    #[must_use]
    pub fn nearest_mat(&self, point: Point) -> PileMat {
        *self
            .mats
            .iter()
            .min_by(|a, b| {
                a.center()
                    .distance_to(point)
                    .total_cmp(&b.center().distance_to(point))
            })
            .expect("board always has five mats")
    }

    /// Move a token to the top of the draw order
    pub fn pull_to_top(&mut self, id: TokenId) {
        self.draw_order.retain(|&other| other != id);
        self.draw_order.push(id);
    }

    /// Spawn a fresh duplicate of a token's letter at that token's home
    pub fn spawn_duplicate(&mut self, of: TokenId) -> TokenId {
        let id = TokenId::new(self.tokens.len());
        let dup = self.token(of).spawn_duplicate(id);
        self.tokens.push(dup);
        self.draw_order.push(id);
        id
    }

    /// Assign a token to a slot in correct mode; `false` if the slot is taken
    pub fn assign_correct(&mut self, id: TokenId, slot: usize) -> bool {
        let token = &mut self.tokens[id.index()];
        self.piles.assign_correct(token, slot)
    }

    /// Assign a token to a slot in present mode (stacking allowed)
    pub fn assign_present(&mut self, id: TokenId, slot: usize) {
        let token = &mut self.tokens[id.index()];
        self.piles.assign_present(token, slot);
    }

    /// Remove a token from any pile and clear its mark
    pub fn release_from_pile(&mut self, id: TokenId) {
        let token = &mut self.tokens[id.index()];
        self.piles.release(token);
    }

    /// Position of the topmost token in a slot, if any
    #[must_use]
    pub fn pile_top_position(&self, slot: usize) -> Option<Point> {
        self.piles
            .tokens_in(slot)
            .last()
            .map(|&id| self.token(id).position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mark, Renderable, Visual};

    #[test]
    fn setup_creates_26_templates_at_home() {
        let board = Board::new();
        assert_eq!(board.tokens().count(), 26);

        for token in board.tokens() {
            assert!(!token.is_duplicate());
            assert_eq!(token.position(), token.home());
            assert_eq!(token.visual(), Visual::Plain);
        }
    }

    #[test]
    fn token_at_respects_draw_order() {
        let mut board = Board::new();
        let home = layout::home_position(0);
        let first = board.token_at(home).unwrap();

        // Park another token on top of the first one's home
        let other = TokenId::new(5);
        board.token_mut(other).set_position(home);
        board.pull_to_top(other);

        assert_eq!(board.token_at(home), Some(other));
        assert_ne!(board.token_at(home), Some(first));
    }

    #[test]
    fn token_at_misses_empty_space() {
        let board = Board::new();
        assert_eq!(board.token_at(Point::new(650.0, 470.0)), None);
    }

    #[test]
    fn nearest_mat_picks_closest_slot() {
        let board = Board::new();
        for slot in 0..SLOT_COUNT {
            let near = layout::pile_center(slot);
            assert_eq!(board.nearest_mat(near).slot(), slot);
        }
    }

    #[test]
    fn spawn_duplicate_appends_on_top() {
        let mut board = Board::new();
        let template = TokenId::new(0);

        let dup = board.spawn_duplicate(template);
        assert_eq!(board.tokens().count(), 27);
        assert!(board.token(dup).is_duplicate());
        assert_eq!(board.draw_order().last(), Some(&dup));
        assert_eq!(board.token(dup).home(), board.token(template).home());
    }

    #[test]
    fn reset_recreates_initial_layout() {
        let mut board = Board::new();
        let id = TokenId::new(3);
        board.spawn_duplicate(id);
        board.assign_present(id, 2);
        board.token_mut(TokenId::new(1)).toggle_excluded();

        board.reset();

        assert_eq!(board.tokens().count(), 26);
        for token in board.tokens() {
            assert_eq!(token.mark(), Mark::Unoccupied);
            assert!(!token.excluded());
        }
        for slot in 0..SLOT_COUNT {
            assert!(board.piles().is_empty(slot));
        }
    }

    #[test]
    fn pile_top_position_tracks_last_member() {
        let mut board = Board::new();
        assert_eq!(board.pile_top_position(0), None);

        let id = TokenId::new(2);
        board.token_mut(id).set_position(layout::pile_center(0));
        board.assign_present(id, 0);

        assert_eq!(board.pile_top_position(0), Some(layout::pile_center(0)));
    }
}
