//! Hangman Guessers
//!
//! A Hangman simulator that pits word-list-aware guessing strategies against a
//! hidden word: random alphabets, candidate pattern matching, letter frequency
//! and a Markov chain letter predictor.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_guessers::commands::{PlayConfig, play};
//! use hangman_guessers::guessers::FrequentLetterGuesser;
//! use hangman_guessers::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["latter", "barrel", "rabbit", "gauche"]);
//! let mut guesser = FrequentLetterGuesser::new(6, &words);
//!
//! let config = PlayConfig::new("latter".to_string());
//! let result = play(&config, "FrequentLetterGuesser", &mut guesser, None).unwrap();
//! assert!(result.success);
//! ```

// Core domain types
pub mod core;

// Guessing strategies
pub mod guessers;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
