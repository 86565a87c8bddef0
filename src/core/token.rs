//! Letter token state
//!
//! A token is one draggable letter unit. Each of the 26 letters starts with a
//! single template token at a home position; dropping a token on a pile spawns
//! a fresh duplicate at the home position so the template stays reusable.
//!
//! A token's visible variant is derived from `(excluded, mark, is_duplicate)`,
//! never stored separately: excluded and a pile mark are mutually exclusive
//! because excluded tokens are not draggable.

use super::geometry::{Collidable, Point, Positionable};
use super::letter::Letter;

/// Half width/height of a token's bounding box (64 px sprite at 0.9 scale).
pub const TOKEN_HALF_EXTENT: f32 = 28.8;

/// Opaque token identity, stable for the token's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(usize);

impl TokenId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// Pile assignment mark.
///
/// Set when the token is assigned to a pile, cleared when it is removed; the
/// slot index always matches the pile that holds the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    /// Not assigned to any pile
    #[default]
    Unoccupied,
    /// This letter occupies exactly this slot in the answer
    CorrectAt(usize),
    /// This letter is in the answer but not at this slot
    PresentAt(usize),
}

impl Mark {
    /// Slot index of the assignment, if any
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self {
            Self::Unoccupied => None,
            Self::CorrectAt(slot) | Self::PresentAt(slot) => Some(slot),
        }
    }
}

/// Renderable variant of a token, consumed by the display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Plain,
    Excluded,
    Correct,
    Present,
}

/// Visual-variant query for the rendering collaborator.
pub trait Renderable {
    fn visual(&self) -> Visual;
}

/// One draggable letter token.
#[derive(Debug, Clone)]
pub struct Token {
    id: TokenId,
    letter: Letter,
    excluded: bool,
    mark: Mark,
    is_duplicate: bool,
    home: Point,
    position: Point,
}

impl Token {
    /// Create a template token at rest at its home position
    pub(crate) fn new(id: TokenId, letter: Letter, home: Point) -> Self {
        Self {
            id,
            letter,
            excluded: false,
            mark: Mark::Unoccupied,
            is_duplicate: false,
            home,
            position: home,
        }
    }

    /// Spawn a fresh duplicate of this token's letter at this token's home
    pub(crate) fn spawn_duplicate(&self, id: TokenId) -> Self {
        Self {
            id,
            letter: self.letter,
            excluded: false,
            mark: Mark::Unoccupied,
            is_duplicate: true,
            home: self.home,
            position: self.home,
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> bool {
        self.excluded
    }

    #[inline]
    #[must_use]
    pub const fn mark(&self) -> Mark {
        self.mark
    }

    #[inline]
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        self.is_duplicate
    }

    /// Rest coordinates when not assigned to any pile
    #[inline]
    #[must_use]
    pub const fn home(&self) -> Point {
        self.home
    }

    /// Flip the excluded flag.
    ///
    /// A duplicate's excluded flag is inert; the call is a no-op and returns
    /// `false`.
    pub fn toggle_excluded(&mut self) -> bool {
        if self.is_duplicate {
            return false;
        }
        self.excluded = !self.excluded;
        true
    }

    /// Set the pile mark; called only by the pile registry during assignment
    pub(crate) fn set_mark(&mut self, mark: Mark) {
        self.mark = mark;
    }

    /// Reset to unoccupied; called on removal from a pile or reset-to-home
    pub(crate) fn clear_mark(&mut self) {
        self.mark = Mark::Unoccupied;
    }
}

impl Positionable for Token {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

impl Collidable for Token {
    fn center(&self) -> Point {
        self.position
    }

    fn half_extents(&self) -> (f32, f32) {
        (TOKEN_HALF_EXTENT, TOKEN_HALF_EXTENT)
    }
}

impl Renderable for Token {
    fn visual(&self) -> Visual {
        if self.excluded {
            Visual::Excluded
        } else {
            match self.mark {
                Mark::Unoccupied => Visual::Plain,
                Mark::CorrectAt(_) => Visual::Correct,
                Mark::PresentAt(_) => Visual::Present,
            }
        }
    }
}
