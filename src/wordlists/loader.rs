//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or string slices.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words from a file of whitespace-delimited words
///
/// Words are lowercased. Entries with anything other than ASCII letters are
/// skipped, as are repeats.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_guessers::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_words(&content);
    debug!(path = %path.as_ref().display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split `content` into normalized dictionary words
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    normalize(content.split_whitespace())
}

/// Convert a string slice to normalized dictionary words
///
/// # Examples
/// ```
/// use hangman_guessers::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Foo", "bar", "foo", "don't"]);
/// assert_eq!(words, vec!["foo", "bar"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize(slice.iter().copied())
}

fn normalize<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words
        .map(str::to_lowercase)
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
