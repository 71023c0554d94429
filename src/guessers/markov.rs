//! Markov chain guesser
//!
//! Learns which letters tend to follow which in the candidate words, then
//! guesses the most likely follower of the letters revealed so far.
//!
//! A transition table of order N maps every run of N tokens to the letters
//! seen right after it. Runs at the start of a word are padded with
//! [`Token::Start`], so the first letter is predicted from `[Start; N]`.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::candidates::{cull, derive_alphabet, most_frequent, next_unguessed_letter};
use super::derived::rematch;
use super::{GuessError, Guesser, LetterHistory};
use crate::core::{Feedback, ObscuredWord};

/// One step of a Markov state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// Before the first letter of a word
    Start,
    Letter(char),
}

/// Letter transition counts of a fixed order
#[derive(Debug, Clone)]
pub struct TransitionTable {
    order: usize,
    transitions: FxHashMap<Vec<Token>, BTreeMap<char, usize>>,
}

impl TransitionTable {
    /// Count every `order`-token state and the letter following it in `words`
    ///
    /// # Panics
    /// Panics if `order` is zero.
    ///
    /// # Examples
    /// ```
    /// use hangman_guessers::guessers::markov::{Token, TransitionTable};
    ///
    /// let table = TransitionTable::train(1, &["ab", "abab", "ac"]);
    /// let followers = table.followers(&[Token::Letter('a')]).unwrap();
    /// assert_eq!(followers[&'b'], 3);
    /// assert_eq!(followers[&'c'], 1);
    /// ```
    #[must_use]
    pub fn train<S: AsRef<str>>(order: usize, words: &[S]) -> Self {
        assert!(order > 0, "transition order must be at least 1");

        let mut transitions: FxHashMap<Vec<Token>, BTreeMap<char, usize>> = FxHashMap::default();
        for word in words {
            let mut state = vec![Token::Start; order];
            for letter in word.as_ref().chars() {
                *transitions
                    .entry(state.clone())
                    .or_default()
                    .entry(letter)
                    .or_insert(0) += 1;
                state.remove(0);
                state.push(Token::Letter(letter));
            }
        }

        Self { order, transitions }
    }

    #[inline]
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Letters seen after `state`, with their counts
    #[must_use]
    pub fn followers(&self, state: &[Token]) -> Option<&BTreeMap<char, usize>> {
        self.transitions.get(state)
    }

    /// The state formed by the last `order` letters of `prefix`
    ///
    /// Short prefixes are padded with [`Token::Start`] on the left.
    #[must_use]
    pub fn state_for(&self, prefix: &[char]) -> Vec<Token> {
        let known = prefix.len().min(self.order);
        let mut state = vec![Token::Start; self.order - known];
        let recent = &prefix[prefix.len() - known..];
        state.extend(recent.iter().map(|&l| Token::Letter(l)));
        state
    }

    /// Most frequent follower of `state` accepted by `eligible`
    ///
    /// Ties go to the alphabetically earliest letter.
    pub fn most_frequent_follower<F>(&self, state: &[Token], eligible: F) -> Option<char>
    where
        F: Fn(char) -> bool,
    {
        let followers = self.followers(state)?;
        most_frequent(followers.iter().filter(|&(&letter, _)| eligible(letter)))
    }
}

/// Guesses the most likely letter after the revealed prefix of the word
///
/// The first hidden position is the target. With nothing revealed before
/// it, the start-of-word distribution is used; otherwise the revealed letters
/// right before it form the state. The second-order variant uses a two-letter
/// state when two letters are known, and falls back to the first-order table.
#[derive(Debug, Clone)]
pub struct MarkovGuesser {
    candidates: Vec<String>,
    alphabet: BTreeSet<char>,
    history: LetterHistory,
    first_order: TransitionTable,
    second_order: Option<TransitionTable>,
}

impl MarkovGuesser {
    /// First-order guesser trained on the dictionary words of `word_length`
    #[must_use]
    pub fn new(word_length: usize, words: &[String]) -> Self {
        let candidates = cull(word_length, words, &FxHashSet::default());
        Self {
            alphabet: derive_alphabet(&candidates),
            first_order: TransitionTable::train(1, &candidates),
            second_order: None,
            candidates,
            history: LetterHistory::new(),
        }
    }

    /// Guesser consulting a second-order table before the first-order one
    #[must_use]
    pub fn with_second_order(word_length: usize, words: &[String]) -> Self {
        let mut guesser = Self::new(word_length, words);
        guesser.second_order = Some(TransitionTable::train(2, &guesser.candidates));
        guesser
    }

    #[must_use]
    pub const fn has_second_order(&self) -> bool {
        self.second_order.is_some()
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Letters of the surviving candidates
    #[must_use]
    pub const fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Most frequent eligible follower of `state` in `table`
    ///
    /// Eligible letters are unguessed and part of the current alphabet.
    ///
    /// # Errors
    /// Returns [`GuessError::TableFlip`] when no follower is eligible.
    pub fn select_most_frequent_follower(
        &self,
        table: &TransitionTable,
        state: &[Token],
    ) -> Result<char, GuessError> {
        table
            .most_frequent_follower(state, |letter| {
                !self.history.is_guessed(letter) && self.alphabet.contains(&letter)
            })
            .ok_or(GuessError::TableFlip)
    }

    fn predict(&self, obscured: &ObscuredWord) -> Result<char, GuessError> {
        if obscured.is_revealed() {
            return Err(GuessError::TableFlip);
        }
        let prefix = obscured.revealed_prefix();

        if let Some(table) = self.second_order.as_ref().filter(|_| prefix.len() >= 2) {
            let state = table.state_for(&prefix);
            if let Ok(letter) = self.select_most_frequent_follower(table, &state) {
                return Ok(letter);
            }
            debug!(order = table.order(), ?state, "state exhausted, trying first order");
        }

        let state = self.first_order.state_for(&prefix);
        let letter = self.select_most_frequent_follower(&self.first_order, &state)?;
        debug!(%letter, ?state, "markov follower");
        Ok(letter)
    }
}

impl Guesser for MarkovGuesser {
    fn guess(&mut self, obscured: &ObscuredWord) -> Result<char, GuessError> {
        match self.candidates.as_slice() {
            [] => Err(GuessError::TableFlip),
            [word] => next_unguessed_letter(word, &self.history).ok_or(GuessError::TableFlip),
            _ => self.predict(obscured),
        }
    }

    fn update_state(
        &mut self,
        feedback: &Feedback,
        obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        self.history.record(feedback);
        self.candidates = rematch(&self.candidates, &self.history, obscured)?;
        self.alphabet = derive_alphabet(&self.candidates);
        Ok(())
    }
}
