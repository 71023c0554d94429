//! Letter-frequency guesser
//!
//! Narrows candidates like the rederiving guesser, but instead of picking at
//! random it guesses the unguessed letter that occurs most often across the
//! surviving words.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::candidates::{cull, letter_counts, most_frequent, next_unguessed_letter};
use super::derived::rematch;
use super::{GuessError, Guesser, LetterHistory};
use crate::core::{Feedback, ObscuredWord};

/// Guesses the most frequent unguessed letter among the candidate words
///
/// Occurrences are counted per letter position, so repeated letters weigh
/// more. Ties go to the alphabetically earliest letter.
#[derive(Debug, Clone)]
pub struct FrequentLetterGuesser {
    candidates: Vec<String>,
    history: LetterHistory,
}

impl FrequentLetterGuesser {
    #[must_use]
    pub fn new(word_length: usize, words: &[String]) -> Self {
        Self {
            candidates: cull(word_length, words, &FxHashSet::default()),
            history: LetterHistory::new(),
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub const fn history(&self) -> &LetterHistory {
        &self.history
    }

    /// Most frequent letter in `words` that has not been guessed yet
    ///
    /// # Errors
    /// Returns [`GuessError::TableFlip`] if every letter was guessed already.
    pub fn select_most_frequent_letter(&self, words: &[String]) -> Result<char, GuessError> {
        let counts = letter_counts(words, &self.history);
        let letter = most_frequent(&counts).ok_or(GuessError::TableFlip)?;
        debug!(%letter, count = counts[&letter], candidates = words.len(), "most frequent letter");
        Ok(letter)
    }
}

impl Guesser for FrequentLetterGuesser {
    fn guess(&mut self, _obscured: &ObscuredWord) -> Result<char, GuessError> {
        match self.candidates.as_slice() {
            [] => Err(GuessError::TableFlip),
            [word] => next_unguessed_letter(word, &self.history).ok_or(GuessError::TableFlip),
            words => self.select_most_frequent_letter(words),
        }
    }

    fn update_state(
        &mut self,
        feedback: &Feedback,
        obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        self.history.record(feedback);
        self.candidates = rematch(&self.candidates, &self.history, obscured)?;
        Ok(())
    }
}
