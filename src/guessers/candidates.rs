//! Candidate word filtering
//!
//! Pure functions shared by the word-list-aware guessers: narrowing the
//! dictionary, deriving alphabets, and counting letters.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::hash::BuildHasher;

use super::LetterHistory;
use crate::core::ObscuredWord;

/// The lowercase English alphabet
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Vowels, guessed first by the ordered strategies
pub const VOWELS: &str = "aeiou";

#[inline]
#[must_use]
pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(letter)
}

/// Words of length `word_length` containing none of the `excluded` letters
///
/// Order is preserved.
///
/// # Examples
/// ```
/// use hangman_guessers::guessers::candidates::cull;
/// use rustc_hash::FxHashSet;
///
/// let words = ["haberdashery", "horticulture", "thalassophobia"].map(String::from);
/// let culled = cull(12, &words, &FxHashSet::default());
/// assert_eq!(culled, vec!["haberdashery", "horticulture"]);
/// ```
#[must_use]
pub fn cull<S: BuildHasher>(
    word_length: usize,
    words: &[String],
    excluded: &HashSet<char, S>,
) -> Vec<String> {
    words
        .iter()
        .filter(|word| word.chars().count() == word_length)
        .filter(|word| !word.chars().any(|letter| excluded.contains(&letter)))
        .cloned()
        .collect()
}

/// Every distinct letter appearing in `words`
#[must_use]
pub fn derive_alphabet<S: AsRef<str>>(words: &[S]) -> BTreeSet<char> {
    words
        .iter()
        .flat_map(|word| word.as_ref().chars())
        .collect()
}

/// Words consistent with the revealed letters of `pattern`
///
/// Hidden positions match any letter; the word length must match.
#[must_use]
pub fn match_pattern(pattern: &ObscuredWord, words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|word| pattern.matches(word))
        .cloned()
        .collect()
}

/// Split `letters` into `(consonants, vowels)`, keeping their order
#[must_use]
pub fn split_vowels<I: IntoIterator<Item = char>>(letters: I) -> (Vec<char>, Vec<char>) {
    letters.into_iter().partition(|&letter| !is_vowel(letter))
}

/// Occurrences of every letter across `words`, skipping guessed letters
#[must_use]
pub fn letter_counts(words: &[String], history: &LetterHistory) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for letter in words.iter().flat_map(|word| word.chars()) {
        if !history.is_guessed(letter) {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

/// The highest count in `counts`, ties going to the earliest letter
#[must_use]
pub fn most_frequent<'a, I>(counts: I) -> Option<char>
where
    I: IntoIterator<Item = (&'a char, &'a usize)>,
{
    counts
        .into_iter()
        .fold(None, |best: Option<(char, usize)>, (&letter, &count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((letter, count)),
        })
        .map(|(letter, _)| letter)
}

/// First letter of `word` that has not been guessed yet
///
/// Used to spell out the last remaining candidate one letter per turn.
#[must_use]
pub fn next_unguessed_letter(word: &str, history: &LetterHistory) -> Option<char> {
    word.chars().find(|&letter| !history.is_guessed(letter))
}
