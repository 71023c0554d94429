//! Hangman game state machine
//!
//! A `Game` holds the secret word and every letter guessed so far. Guesses are
//! only ever recorded through [`Game::submit_guess`], which makes it the single
//! source of truth for winning and losing.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::{debug, warn};

use super::{Feedback, ObscuredWord};

/// Default guess budget
pub const DEFAULT_MAX_GUESSES: usize = 8;

/// A guess was submitted to a game that no longer accepts guesses
///
/// This always points at a misbehaving driver or guesser: a well-behaved
/// driver stops once [`Game::is_game_over`] is true.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheaterError {
    #[error("Attempt to make guesses after {max_guesses} guesses")]
    OutOfGuesses { max_guesses: usize },

    #[error("Attempt to make guesses after the word was already guessed")]
    AlreadyWon,
}

/// A single game of Hangman
///
/// The guess budget bounds every distinct guess, correct or not.
#[derive(Debug, Clone)]
pub struct Game {
    secret_word: String,
    max_guesses: usize,
    correct_guesses: BTreeSet<char>,
    incorrect_guesses: BTreeSet<char>,
}

impl Game {
    /// Start a game for `word` (lowercased) with a budget of `max_guesses`
    ///
    /// # Examples
    /// ```
    /// use hangman_guessers::core::Game;
    ///
    /// let mut game = Game::new("Sisyphean", 10);
    /// assert_eq!(game.obscured_word().to_string(), ".........");
    ///
    /// game.submit_guess("sea".chars()).unwrap();
    /// assert_eq!(game.obscured_word().to_string(), "s.s...ea.");
    /// ```
    #[must_use]
    pub fn new(word: &str, max_guesses: usize) -> Self {
        Self {
            secret_word: word.to_lowercase(),
            max_guesses,
            correct_guesses: BTreeSet::new(),
            incorrect_guesses: BTreeSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn correct_guesses(&self) -> &BTreeSet<char> {
        &self.correct_guesses
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_guesses(&self) -> &BTreeSet<char> {
        &self.incorrect_guesses
    }

    /// The secret word with unguessed letters hidden
    #[must_use]
    pub fn obscured_word(&self) -> ObscuredWord {
        ObscuredWord::new(
            self.secret_word
                .chars()
                .map(|letter| self.correct_guesses.contains(&letter).then_some(letter))
                .collect(),
        )
    }

    /// Total number of distinct letters guessed
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.correct_guesses.len() + self.incorrect_guesses.len()
    }

    /// Number of letters guessed that are not in the word
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.incorrect_guesses.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guess_count())
    }

    /// Whether every distinct letter of the secret word has been guessed
    #[must_use]
    pub fn has_won(&self) -> bool {
        let letters: BTreeSet<char> = self.secret_word.chars().collect();
        letters == self.correct_guesses
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.has_won() || self.remaining_guesses() == 0
    }

    /// Process each guessed letter against the secret word
    ///
    /// Letters that were already guessed are skipped without consuming budget.
    /// Returns the correctness of every newly processed letter.
    ///
    /// # Errors
    ///
    /// Returns [`CheaterError`] when a new letter arrives after the game is
    /// over. Letters processed before the offending one remain recorded.
    pub fn submit_guess<I>(&mut self, letters: I) -> Result<Feedback, CheaterError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut feedback = Feedback::new();

        for letter in letters.into_iter().flat_map(char::to_lowercase) {
            if self.correct_guesses.contains(&letter) || self.incorrect_guesses.contains(&letter) {
                debug!(%letter, "skipping resubmitted letter");
                continue;
            }

            if self.has_won() {
                warn!(%letter, "guess submitted after the game was won");
                return Err(CheaterError::AlreadyWon);
            }
            if self.remaining_guesses() == 0 {
                warn!(%letter, max_guesses = self.max_guesses, "guess submitted without budget");
                return Err(CheaterError::OutOfGuesses {
                    max_guesses: self.max_guesses,
                });
            }

            let correct = self.secret_word.contains(letter);
            if correct {
                self.correct_guesses.insert(letter);
            } else {
                self.incorrect_guesses.insert(letter);
            }
            feedback.record(letter, correct);
        }

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(letters: &str) -> BTreeSet<char> {
        letters.chars().collect()
    }

    #[test]
    fn new_game_starts_empty() {
        let game = Game::new("Foobar", 5);
        assert_eq!(game.secret_word(), "foobar");
        assert_eq!(game.max_guesses(), 5);
        assert!(game.correct_guesses().is_empty());
        assert!(game.incorrect_guesses().is_empty());
        assert_eq!(game.remaining_guesses(), 5);
    }

    #[test]
    fn obscured_word_hides_unguessed_letters() {
        let mut game = Game::new("sisyphean", 20);
        assert_eq!(game.obscured_word().to_string(), ".........");

        game.submit_guess("sea".chars()).unwrap();
        assert_eq!(game.obscured_word().to_string(), "s.s...ea.");

        game.submit_guess("sisyphean".chars()).unwrap();
        assert_eq!(game.obscured_word().to_string(), "sisyphean");
    }

    #[test]
    fn remaining_guesses_counts_every_guess() {
        let mut game = Game::new("ebullient", 10);
        game.submit_guess("ebul".chars()).unwrap();
        game.submit_guess("aoy".chars()).unwrap();
        assert_eq!(game.guess_count(), 7);
        assert_eq!(game.failure_count(), 3);
        assert_eq!(game.remaining_guesses(), 3);
    }

    #[test]
    fn game_over_on_win_and_on_exhausted_budget() {
        let mut game = Game::new("zeitgeist", 10);
        assert!(!game.is_game_over());
        game.submit_guess("zeitgs".chars()).unwrap();
        assert!(game.has_won());
        assert!(game.is_game_over());

        let mut game = Game::new("zeitgeist", 4);
        game.submit_guess("abcd".chars()).unwrap();
        assert!(!game.has_won());
        assert!(game.is_game_over());
    }

    #[test]
    fn has_won_needs_every_letter() {
        let mut game = Game::new("stochastic", 20);
        game.submit_guess("stoch".chars()).unwrap();
        assert!(!game.has_won());
        game.submit_guess("ai".chars()).unwrap();
        assert!(game.has_won());
    }

    #[test]
    fn resubmissions_are_ignored() {
        let mut game = Game::new("stygian", 4);
        game.submit_guess("aieo".chars()).unwrap();
        assert!(game.is_game_over());

        let feedback = game.submit_guess("aieo".chars()).unwrap();
        assert!(feedback.is_empty());
        assert_eq!(game.correct_guesses(), &set("ai"));
        assert_eq!(game.incorrect_guesses(), &set("eo"));
    }

    #[test]
    fn catches_cheaters() {
        let mut game = Game::new("toroidal", 2);
        let err = game.submit_guess("aei".chars()).unwrap_err();
        assert_eq!(err, CheaterError::OutOfGuesses { max_guesses: 2 });
        assert_eq!(err.to_string(), "Attempt to make guesses after 2 guesses");
        assert_eq!(game.correct_guesses(), &set("a"));
        assert_eq!(game.incorrect_guesses(), &set("e"));
    }

    #[test]
    fn rejects_guesses_after_win() {
        let mut game = Game::new("aa", 10);
        game.submit_guess("a".chars()).unwrap();
        assert_eq!(
            game.submit_guess("b".chars()).unwrap_err(),
            CheaterError::AlreadyWon
        );
    }

    #[test]
    fn categorizes_guesses() {
        let mut game = Game::new("disenfranchisement", 10);
        game.submit_guess("aeiou".chars()).unwrap();
        assert_eq!(game.correct_guesses(), &set("aei"));
        assert_eq!(game.incorrect_guesses(), &set("ou"));
    }

    #[test]
    fn returns_letter_correctness() {
        let mut game = Game::new("reactionary", 8);
        let feedback = game.submit_guess("AEIOU".chars()).unwrap();
        let expected: Feedback = [
            ('a', true),
            ('e', true),
            ('i', true),
            ('o', true),
            ('u', false),
        ]
        .into_iter()
        .collect();
        assert_eq!(feedback, expected);
    }

    proptest! {
        #[test]
        fn guess_sets_stay_consistent(word in "[a-z]{1,12}", guesses in "[a-z]{0,30}") {
            let mut game = Game::new(&word, 26);
            // A win part way through rejects the rest; the sets must hold either way.
            let _ = game.submit_guess(guesses.chars());

            prop_assert!(game.correct_guesses().is_disjoint(game.incorrect_guesses()));
            for letter in game.correct_guesses() {
                prop_assert!(word.contains(*letter));
            }
            for letter in game.incorrect_guesses() {
                prop_assert!(!word.contains(*letter));
            }
            let unique: BTreeSet<char> = word.chars().collect();
            prop_assert_eq!(game.has_won(), &unique == game.correct_guesses());
        }

        #[test]
        fn resubmission_consumes_no_budget(word in "[a-z]{1,12}", guesses in "[a-z]{1,8}") {
            let mut game = Game::new(&word, 26);
            prop_assume!(game.submit_guess(guesses.chars()).is_ok());
            let remaining = game.remaining_guesses();
            let correct = game.correct_guesses().clone();
            let incorrect = game.incorrect_guesses().clone();

            let feedback = game.submit_guess(guesses.chars()).unwrap();
            prop_assert!(feedback.is_empty());
            prop_assert_eq!(game.remaining_guesses(), remaining);
            prop_assert_eq!(game.correct_guesses(), &correct);
            prop_assert_eq!(game.incorrect_guesses(), &incorrect);
        }
    }
}
