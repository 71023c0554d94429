//! Word lists for Hangman
//!
//! Dictionaries are plain files of whitespace-delimited words.

pub mod loader;

/// Dictionary used when no word file is given
pub const DEFAULT_WORDFILE: &str = "/usr/share/dict/words";
