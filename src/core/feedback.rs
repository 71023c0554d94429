//! Per-turn guess feedback

use std::collections::BTreeMap;

/// Correctness of every letter newly processed by one guess submission
///
/// Letters that were already guessed before the submission do not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    letters: BTreeMap<char, bool>,
}

impl Feedback {
    /// Empty feedback
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, letter: char, correct: bool) {
        self.letters.insert(letter, correct);
    }

    /// Whether `letter` was processed, and if so whether it was correct
    #[must_use]
    pub fn get(&self, letter: char) -> Option<bool> {
        self.letters.get(&letter).copied()
    }

    /// Iterate over `(letter, correct)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.letters
            .iter()
            .map(|(&letter, &correct)| (letter, correct))
    }

    /// Letters reported as present in the secret word
    pub fn correct(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().filter(|(_, correct)| *correct).map(|(l, _)| l)
    }

    /// Letters reported as absent from the secret word
    pub fn incorrect(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().filter(|(_, correct)| !*correct).map(|(l, _)| l)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<(char, bool)> for Feedback {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}
