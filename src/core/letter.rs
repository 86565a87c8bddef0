//! Letter identity for board tokens
//!
//! The 26 letters are kept in keyboard order, matching the three board rows
//! (10 / 9 / 7). A token's letter is fixed at creation.

use std::fmt;

/// Keyboard-order layout of the 26 letters, top row first.
pub const LETTERS: [char; 26] = [
    'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', 'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l',
    'z', 'x', 'c', 'v', 'b', 'n', 'm',
];

/// One of the 26 lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a Letter from a char, normalizing to lowercase
    ///
    /// Returns `None` for anything outside a-z/A-Z.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self(c.to_ascii_lowercase() as u8))
    }

    /// Get the lowercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    /// Get the lowercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Iterate all 26 letters in board (keyboard) order
    pub fn board_order() -> impl Iterator<Item = Self> {
        LETTERS.iter().map(|&c| Self(c as u8))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_order_covers_alphabet_once() {
        let letters: Vec<Letter> = Letter::board_order().collect();
        assert_eq!(letters.len(), 26);

        let mut bytes: Vec<u8> = letters.iter().map(|l| l.as_byte()).collect();
        bytes.sort_unstable();
        bytes.dedup();
        assert_eq!(bytes.len(), 26);
        assert_eq!(bytes[0], b'a');
        assert_eq!(bytes[25], b'z');
    }

    #[test]
    fn board_order_starts_with_top_row() {
        let letters: Vec<char> = Letter::board_order().map(Letter::as_char).collect();
        assert_eq!(&letters[..10], &['q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p']);
    }

    #[test]
    fn from_char_normalizes_case() {
        assert_eq!(Letter::from_char('A'), Letter::from_char('a'));
        assert_eq!(Letter::from_char('q').unwrap().as_char(), 'q');
    }

    #[test]
    fn from_char_rejects_non_letters() {
        assert!(Letter::from_char('3').is_none());
        assert!(Letter::from_char(' ').is_none());
        assert!(Letter::from_char('é').is_none());
    }
}
