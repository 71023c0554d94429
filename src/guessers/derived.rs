//! Derived-alphabet guessers
//!
//! These restrict guesses to letters that actually occur in dictionary words.
//! The plain variants fix their alphabet up front; the rederiving variant
//! narrows its candidate words after every turn.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use tracing::debug;

use super::candidates::{cull, derive_alphabet, match_pattern, next_unguessed_letter, split_vowels};
use super::{GuessError, Guesser, LetterHistory};
use crate::core::{Feedback, ObscuredWord};

/// Narrow `candidates` to words still consistent with everything known
///
/// Drops words containing an incorrect letter, then words that disagree with
/// the revealed letters of `obscured`.
///
/// # Errors
/// Returns [`GuessError::TableFlip`] when nothing survives.
pub(crate) fn rematch(
    candidates: &[String],
    history: &LetterHistory,
    obscured: &ObscuredWord,
) -> Result<Vec<String>, GuessError> {
    let culled = cull(obscured.len(), candidates, history.incorrect());
    let matched = match_pattern(obscured, &culled);
    debug!(
        before = candidates.len(),
        after = matched.len(),
        pattern = %obscured,
        "rematched candidates"
    );

    if matched.is_empty() {
        return Err(GuessError::TableFlip);
    }
    Ok(matched)
}

/// Guesses letters from the dictionary's alphabet in a random order
///
/// The alphabet is derived once from the whole dictionary and never
/// recomputed.
#[derive(Debug, Clone)]
pub struct DerivedAlphabetGuesser {
    word_length: usize,
    candidates: Vec<String>,
    alphabet: Vec<char>,
    excluded: FxHashSet<char>,
}

impl DerivedAlphabetGuesser {
    #[must_use]
    pub fn new(word_length: usize, words: &[String], mut rng: StdRng) -> Self {
        let mut alphabet: Vec<char> = derive_alphabet(words).into_iter().collect();
        alphabet.shuffle(&mut rng);
        Self::with_alphabet(word_length, words, alphabet)
    }

    fn with_alphabet(word_length: usize, words: &[String], alphabet: Vec<char>) -> Self {
        let excluded = FxHashSet::default();
        Self {
            word_length,
            candidates: cull(word_length, words, &excluded),
            alphabet,
            excluded,
        }
    }

    /// Dictionary words of the right length without excluded letters
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Letters not guessed yet; the last one is guessed next
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        &self.alphabet
    }
}

impl Guesser for DerivedAlphabetGuesser {
    fn guess(&mut self, _obscured: &ObscuredWord) -> Result<char, GuessError> {
        self.alphabet.pop().ok_or(GuessError::TableFlip)
    }

    fn update_state(
        &mut self,
        feedback: &Feedback,
        _obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        let before = self.excluded.len();
        self.excluded.extend(feedback.incorrect());
        if self.excluded.len() != before {
            self.candidates = cull(self.word_length, &self.candidates, &self.excluded);
        }
        Ok(())
    }
}

/// Like [`DerivedAlphabetGuesser`], but guesses vowels before consonants
#[derive(Debug, Clone)]
pub struct OrderedDerivedAlphabetGuesser {
    inner: DerivedAlphabetGuesser,
}

impl OrderedDerivedAlphabetGuesser {
    #[must_use]
    pub fn new(word_length: usize, words: &[String], mut rng: StdRng) -> Self {
        let (mut consonants, mut vowels) = split_vowels(derive_alphabet(words));
        consonants.shuffle(&mut rng);
        vowels.shuffle(&mut rng);
        consonants.extend(vowels);

        Self {
            inner: DerivedAlphabetGuesser::with_alphabet(word_length, words, consonants),
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        self.inner.candidates()
    }

    /// Letters not guessed yet; the last one is guessed next
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        self.inner.remaining()
    }
}

impl Guesser for OrderedDerivedAlphabetGuesser {
    fn guess(&mut self, obscured: &ObscuredWord) -> Result<char, GuessError> {
        self.inner.guess(obscured)
    }

    fn update_state(
        &mut self,
        feedback: &Feedback,
        obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        self.inner.update_state(feedback, obscured)
    }
}

/// Guesses a random letter from the words still consistent with the board
///
/// Candidates are narrowed once per turn in
/// [`update_state`](Guesser::update_state). Once a single word remains, its
/// letters are guessed in order.
#[derive(Debug, Clone)]
pub struct RederivedAlphabetGuesser {
    candidates: Vec<String>,
    history: LetterHistory,
    rng: StdRng,
}

impl RederivedAlphabetGuesser {
    #[must_use]
    pub fn new(word_length: usize, words: &[String], rng: StdRng) -> Self {
        Self {
            candidates: cull(word_length, words, &FxHashSet::default()),
            history: LetterHistory::new(),
            rng,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Letters of the surviving candidates that have not been guessed
    #[must_use]
    pub fn alphabet(&self) -> BTreeSet<char> {
        derive_alphabet(&self.candidates)
            .into_iter()
            .filter(|&letter| !self.history.is_guessed(letter))
            .collect()
    }
}

impl Guesser for RederivedAlphabetGuesser {
    fn guess(&mut self, _obscured: &ObscuredWord) -> Result<char, GuessError> {
        match self.candidates.as_slice() {
            [] => Err(GuessError::TableFlip),
            [word] => next_unguessed_letter(word, &self.history).ok_or(GuessError::TableFlip),
            _ => {
                let alphabet: Vec<char> = self.alphabet().into_iter().collect();
                alphabet
                    .choose(&mut self.rng)
                    .copied()
                    .ok_or(GuessError::TableFlip)
            }
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
