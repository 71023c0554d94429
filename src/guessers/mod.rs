//! Guessing strategies
//!
//! Every strategy implements [`Guesser`]. [`GuesserType`] wraps the fixed set
//! of strategies so a driver can pick one by name at runtime while keeping
//! static dispatch.

pub mod candidates;
pub mod derived;
pub mod frequency;
pub mod manual;
pub mod markov;
pub mod naive;

use std::fmt;
use std::io;

use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{Feedback, ObscuredWord};

pub use derived::{
    DerivedAlphabetGuesser, OrderedDerivedAlphabetGuesser, RederivedAlphabetGuesser,
};
pub use frequency::FrequentLetterGuesser;
pub use manual::ManualGuesser;
pub use markov::{MarkovGuesser, TransitionTable};
pub use naive::{OrderedRandomGuesser, RandomGuesser};

/// Errors a guesser can raise while choosing a letter or absorbing feedback
#[derive(Debug, Error)]
pub enum GuessError {
    /// No candidate word or no unguessed letter is left to offer
    ///
    /// Usually means the secret word is missing from the dictionary.
    #[error("No possible solution found")]
    TableFlip,

    /// The external input source failed or closed
    #[error("failed to read guess")]
    Input(#[from] io::Error),
}

/// A Hangman guessing strategy
///
/// The driver calls [`guess`](Guesser::guess) while the game is running, submits
/// the letter to the game, then hands the resulting feedback and the new
/// obscured word to [`update_state`](Guesser::update_state).
pub trait Guesser {
    /// Choose the next letter to guess
    ///
    /// # Errors
    /// Returns [`GuessError::TableFlip`] when the strategy has nothing left to offer.
    fn guess(&mut self, obscured: &ObscuredWord) -> Result<char, GuessError>;

    /// Refine internal state from the latest feedback
    ///
    /// # Errors
    /// Returns [`GuessError::TableFlip`] when no candidate word survives.
    fn update_state(
        &mut self,
        feedback: &Feedback,
        obscured: &ObscuredWord,
    ) -> Result<(), GuessError>;
}

/// Letters a guesser has had reported back, split by correctness
#[derive(Debug, Clone, Default)]
pub struct LetterHistory {
    correct: FxHashSet<char>,
    incorrect: FxHashSet<char>,
}

impl LetterHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every letter in `feedback`
    pub fn record(&mut self, feedback: &Feedback) {
        for (letter, correct) in feedback.iter() {
            if correct {
                self.correct.insert(letter);
            } else {
                self.incorrect.insert(letter);
            }
        }
    }

    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.correct.contains(&letter) || self.incorrect.contains(&letter)
    }

    #[must_use]
    pub const fn correct(&self) -> &FxHashSet<char> {
        &self.correct
    }

    #[must_use]
    pub const fn incorrect(&self) -> &FxHashSet<char> {
        &self.incorrect
    }
}

/// Registry names of every strategy, in presentation order
pub const GUESSER_NAMES: &[&str] = &[
    "manual",
    "random",
    "ordered-random",
    "derived",
    "ordered-derived",
    "rederived",
    "frequent",
    "markov",
    "markov-2",
];

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of a strategy while maintaining static dispatch.
/// Strategies carrying a random source or transition tables are boxed.
pub enum GuesserType {
    /// Human input
    Manual(ManualGuesser),
    /// Shuffled alphabet
    Random(RandomGuesser),
    /// Shuffled alphabet, vowels first
    OrderedRandom(OrderedRandomGuesser),
    /// Shuffled dictionary alphabet
    Derived(DerivedAlphabetGuesser),
    /// Shuffled dictionary alphabet, vowels first
    OrderedDerived(OrderedDerivedAlphabetGuesser),
    /// Random letter from the surviving candidates
    Rederived(Box<RederivedAlphabetGuesser>),
    /// Most frequent letter among the surviving candidates
    Frequent(FrequentLetterGuesser),
    /// Markov chain follower of the revealed prefix
    Markov(Box<MarkovGuesser>),
}

impl Guesser for GuesserType {
    fn guess(&mut self, obscured: &ObscuredWord) -> Result<char, GuessError> {
        match self {
            Self::Manual(g) => g.guess(obscured),
            Self::Random(g) => g.guess(obscured),
            Self::OrderedRandom(g) => g.guess(obscured),
            Self::Derived(g) => g.guess(obscured),
            Self::OrderedDerived(g) => g.guess(obscured),
            Self::Rederived(g) => g.guess(obscured),
            Self::Frequent(g) => g.guess(obscured),
            Self::Markov(g) => g.guess(obscured),
        }
    }

    fn update_state(
        &mut self,
        feedback: &Feedback,
        obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        match self {
            Self::Manual(g) => g.update_state(feedback, obscured),
            Self::Random(g) => g.update_state(feedback, obscured),
            Self::OrderedRandom(g) => g.update_state(feedback, obscured),
            Self::Derived(g) => g.update_state(feedback, obscured),
            Self::OrderedDerived(g) => g.update_state(feedback, obscured),
            Self::Rederived(g) => g.update_state(feedback, obscured),
            Self::Frequent(g) => g.update_state(feedback, obscured),
            Self::Markov(g) => g.update_state(feedback, obscured),
        }
    }
}

impl GuesserType {
    /// Create a guesser from its registry name
    ///
    /// Supported names are listed in [`GUESSER_NAMES`]. Returns `None` for an
    /// unknown name. The manual guesser reads from stdin.
    #[must_use]
    pub fn from_name(
        name: &str,
        word_length: usize,
        words: &[String],
        rng: StdRng,
    ) -> Option<Self> {
        let guesser = match name {
            "manual" => Self::Manual(ManualGuesser::stdin()),
            "random" => Self::Random(RandomGuesser::new(rng)),
            "ordered-random" => Self::OrderedRandom(OrderedRandomGuesser::new(rng)),
            "derived" => Self::Derived(DerivedAlphabetGuesser::new(word_length, words, rng)),
            "ordered-derived" => {
                Self::OrderedDerived(OrderedDerivedAlphabetGuesser::new(word_length, words, rng))
            }
            "rederived" => {
                let guesser = RederivedAlphabetGuesser::new(word_length, words, rng);
                Self::Rederived(Box::new(guesser))
            }
            "frequent" => Self::Frequent(FrequentLetterGuesser::new(word_length, words)),
            "markov" => Self::Markov(Box::new(MarkovGuesser::new(word_length, words))),
            "markov-2" => {
                let guesser = MarkovGuesser::with_second_order(word_length, words);
                Self::Markov(Box::new(guesser))
            }
            _ => return None,
        };
        Some(guesser)
    }

    /// Human-readable strategy label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual(_) => "ManualGuesser",
            Self::Random(_) => "RandomGuesser",
            Self::OrderedRandom(_) => "OrderedRandomGuesser",
            Self::Derived(_) => "DerivedAlphabetGuesser",
            Self::OrderedDerived(_) => "OrderedDerivedAlphabetGuesser",
            Self::Rederived(_) => "RederivedAlphabetGuesser",
            Self::Frequent(_) => "FrequentLetterGuesser",
            Self::Markov(g) if g.has_second_order() => "SecondOrderMarkovGuesser",
            Self::Markov(_) => "MarkovGuesser",
        }
    }
}

impl fmt::Display for GuesserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn words() -> Vec<String> {
        ["latter", "barrel", "rabbit", "gauche"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn build(name: &str) -> Option<GuesserType> {
        GuesserType::from_name(name, 6, &words(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn every_registered_name_builds() {
        for &name in GUESSER_NAMES {
            assert!(build(name).is_some(), "{name} is not registered");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(build("psychic").is_none());
    }

    #[test]
    fn labels_distinguish_markov_orders() {
        let first = build("markov").unwrap();
        let second = build("markov-2").unwrap();
        assert_eq!(first.label(), "MarkovGuesser");
        assert_eq!(second.to_string(), "SecondOrderMarkovGuesser");
    }

    #[test]
    fn registry_is_smaller_than_a_random_source() {
        assert!(size_of::<GuesserType>() < size_of::<StdRng>());
    }

    #[test]
    fn letter_history_records_feedback() {
        let mut history = LetterHistory::new();
        let feedback: Feedback = [('g', true), ('p', false)].into_iter().collect();
        history.record(&feedback);

        assert!(history.correct().contains(&'g'));
        assert!(history.incorrect().contains(&'p'));
        assert!(history.is_guessed('g'));
        assert!(!history.is_guessed('x'));
    }

    #[test]
    fn table_flip_message() {
        assert_eq!(
            GuessError::TableFlip.to_string(),
            "No possible solution found"
        );
    }
}
