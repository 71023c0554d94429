//! Core domain types for Hangman
//!
//! The game state machine and the two values it hands to guessers each turn:
//! the obscured word and the per-letter feedback.

mod feedback;
mod game;
mod obscured;

pub use feedback::Feedback;
pub use game::{CheaterError, DEFAULT_MAX_GUESSES, Game};
pub use obscured::{ObscuredWord, PLACEHOLDER};
