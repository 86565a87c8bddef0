//! One-shot filter command
//!
//! Runs the constraint filter without the board: constraints come in as CLI
//! flags (`--exclude qz --correct a@0 --present e@2`) instead of accumulated
//! marks.

use std::path::PathBuf;

use crate::core::{Letter, SLOT_COUNT, Word};
use crate::filter::{Constraints, filter_words};
use crate::wordlists::{WORDS, loader};

/// Parsed constraint flags for a one-shot filter run.
#[derive(Debug, Default)]
pub struct FilterRequest {
    /// Letters marked as absent
    pub excluded: Vec<u8>,
    /// `(letter, slot)` pairs asserting a letter's position
    pub correct: Vec<(u8, usize)>,
    /// `(letter, slot)` pairs asserting presence away from a slot
    pub present: Vec<(u8, usize)>,
    /// Optional word list file; the embedded list is used when absent
    pub wordlist: Option<PathBuf>,
}

impl FilterRequest {
    /// Build a request from raw flag values.
    ///
    /// `excluded` is a run of letters (`"qzx"`); `correct` and `present` use
    /// `letter@slot` syntax with slots numbered 0-4.
    ///
    /// # Errors
    /// Returns a message describing the first malformed flag.
    pub fn parse(
        excluded: Option<&str>,
        correct: &[String],
        present: &[String],
        wordlist: Option<PathBuf>,
    ) -> Result<Self, String> {
        let excluded = excluded
            .unwrap_or_default()
            .chars()
            .map(|c| {
                Letter::from_char(c)
                    .map(Letter::as_byte)
                    .ok_or_else(|| format!("'{c}' is not a letter"))
            })
            .collect::<Result<Vec<u8>, String>>()?;

        let correct = correct
            .iter()
            .map(|pair| parse_pair(pair))
            .collect::<Result<Vec<_>, _>>()?;
        let present = present
            .iter()
            .map(|pair| parse_pair(pair))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded,
            correct,
            present,
            wordlist,
        })
    }

    fn constraints(&self) -> Constraints {
        let mut constraints = Constraints::default();
        for &letter in &self.excluded {
            constraints.exclude(letter);
        }
        for &(letter, slot) in &self.correct {
            constraints.require_at(letter, slot);
        }
        for &(letter, slot) in &self.present {
            constraints.require_elsewhere(letter, slot);
        }
        constraints
    }
}

/// Outcome of a one-shot filter run.
#[derive(Debug)]
pub struct FilterReport {
    /// Surviving words, input order preserved
    pub matches: Vec<String>,
    /// Number of words scanned
    pub total: usize,
}

/// Run the filter once and collect a report.
///
/// # Errors
/// Returns a message if the word list file cannot be read.
pub fn run_filter(request: &FilterRequest) -> Result<FilterReport, String> {
    let words: Vec<Word> = match &request.wordlist {
        Some(path) => loader::load_from_file(path)
            .map_err(|e| format!("Cannot read word list {}: {e}", path.display()))?,
        None => loader::words_from_slice(WORDS),
    };

    let constraints = request.constraints();
    let matches = filter_words(&words, &constraints)
        .iter()
        .map(|word| word.text().to_string())
        .collect();

    Ok(FilterReport {
        matches,
        total: words.len(),
    })
}

/// Parse a `letter@slot` pair like `a@0`
fn parse_pair(pair: &str) -> Result<(u8, usize), String> {
    let (letter, slot) = pair
        .split_once('@')
        .ok_or_else(|| format!("'{pair}' is not letter@slot"))?;

    let mut chars = letter.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(format!("'{pair}' must name exactly one letter"));
    };
    let letter = Letter::from_char(c)
        .map(Letter::as_byte)
        .ok_or_else(|| format!("'{c}' is not a letter"))?;

    let slot: usize = slot
        .parse()
        .map_err(|_| format!("'{pair}' has a non-numeric slot"))?;
    if slot >= SLOT_COUNT {
        return Err(format!("slot {slot} is out of range 0-{}", SLOT_COUNT - 1));
    }

    Ok((letter, slot))
}
