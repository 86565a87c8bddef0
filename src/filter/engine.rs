//! Word filter engine
//!
//! Applies the three constraint sets to a candidate word list in a fixed
//! order, each stage narrowing the surviving set:
//!
//! 1. drop words containing any excluded letter;
//! 2. keep words with the required letter at each correct slot;
//! 3. keep words containing each present letter somewhere other than its
//!    marked slot.
//!
//! Order is preserved and nothing is deduplicated. A letter that is both
//! excluded and required eliminates every match; that contradiction is the
//! player's to notice.

use super::constraints::Constraints;
use crate::core::Word;

/// Filter a word list against the accumulated constraints.
///
/// Pure function of its inputs; returns the surviving subsequence.
///
/// # Examples
/// ```
/// use wordle_board::core::Word;
/// use wordle_board::filter::{Constraints, filter_words};
///
/// let words: Vec<Word> = ["apple", "aback", "brown"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut constraints = Constraints::default();
/// constraints.require_at(b'a', 0);
///
/// let matches = filter_words(&words, &constraints);
/// assert_eq!(matches.len(), 2);
/// ```
#[must_use]
pub fn filter_words<'a>(words: &'a [Word], constraints: &Constraints) -> Vec<&'a Word> {
    let mut survivors: Vec<&Word> = words
        .iter()
        .filter(|word| !constraints.excluded.iter().any(|&letter| word.has_letter(letter)))
        .collect();

    survivors.retain(|word| {
        constraints
            .correct
            .iter()
            .all(|&(letter, slot)| word.char_at(slot) == letter)
    });

    survivors.retain(|word| {
        constraints
            .present
            .iter()
            .all(|&(letter, slot)| word.has_letter(letter) && word.char_at(slot) != letter)
    });

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn texts<'a>(matched: &[&'a Word]) -> Vec<&'a str> {
        matched.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn excluded_letter_drops_words() {
        // Scenario A
        let list = words(&["apple", "grape", "mango"]);
        let mut constraints = Constraints::default();
        constraints.exclude(b'g');

        assert_eq!(texts(&filter_words(&list, &constraints)), vec!["apple"]);
    }

    #[test]
    fn correct_pair_keeps_positional_matches() {
        // Scenario B
        let list = words(&["apple", "aback", "brown"]);
        let mut constraints = Constraints::default();
        constraints.require_at(b'a', 0);

        assert_eq!(
            texts(&filter_words(&list, &constraints)),
            vec!["apple", "aback"]
        );
    }

    #[test]
    fn present_pair_requires_letter_elsewhere() {
        // Scenario C: the letter must appear, but not at the marked slot
        let list = words(&["apple", "eagle", "melee"]);
        let mut constraints = Constraints::default();
        constraints.require_elsewhere(b'e', 0);

        assert_eq!(
            texts(&filter_words(&list, &constraints)),
            vec!["apple", "melee"]
        );
    }

    #[test]
    fn present_pair_drops_words_missing_the_letter() {
        let list = words(&["brown", "crane"]);
        let mut constraints = Constraints::default();
        constraints.require_elsewhere(b'e', 0);

        assert_eq!(texts(&filter_words(&list, &constraints)), vec!["crane"]);
    }

    #[test]
    fn no_constraints_returns_input_unchanged() {
        let list = words(&["apple", "grape", "mango"]);
        let constraints = Constraints::default();

        assert_eq!(
            texts(&filter_words(&list, &constraints)),
            vec!["apple", "grape", "mango"]
        );
    }

    #[test]
    fn stages_never_grow_the_candidate_set() {
        let list = words(&["apple", "grape", "mango", "melee", "eagle", "crane"]);

        let mut constraints = Constraints::default();
        let full = filter_words(&list, &constraints).len();

        constraints.exclude(b'g');
        let after_exclude = filter_words(&list, &constraints).len();

        constraints.require_at(b'e', 4);
        let after_correct = filter_words(&list, &constraints).len();

        constraints.require_elsewhere(b'a', 0);
        let after_present = filter_words(&list, &constraints).len();

        assert!(full >= after_exclude);
        assert!(after_exclude >= after_correct);
        assert!(after_correct >= after_present);
    }

    #[test]
    fn excluded_letters_never_survive() {
        let list = words(&["apple", "grape", "mango", "melee", "eagle", "gnome"]);
        let mut constraints = Constraints::default();
        constraints.exclude(b'g');
        constraints.exclude(b'm');

        for word in filter_words(&list, &constraints) {
            assert!(!word.has_letter(b'g'));
            assert!(!word.has_letter(b'm'));
        }
    }

    #[test]
    fn contradictory_constraints_eliminate_everything() {
        // Excluded wins: stage 1 removes every word the later stages require
        let list = words(&["apple", "aback"]);
        let mut constraints = Constraints::default();
        constraints.exclude(b'a');
        constraints.require_at(b'a', 0);

        assert!(filter_words(&list, &constraints).is_empty());
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let list = words(&["crane", "apple", "crane"]);
        let constraints = Constraints::default();

        assert_eq!(
            texts(&filter_words(&list, &constraints)),
            vec!["crane", "apple", "crane"]
        );
    }

    #[test]
    fn empty_result_is_valid_output() {
        let list = words(&["apple"]);
        let mut constraints = Constraints::default();
        constraints.exclude(b'a');

        assert!(filter_words(&list, &constraints).is_empty());
    }
}
