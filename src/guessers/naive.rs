//! Naive guessers with no word-list awareness

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::candidates::{ALPHABET, split_vowels};
use super::{GuessError, Guesser};
use crate::core::{Feedback, ObscuredWord};

/// Guesses the alphabet in a random order
///
/// The order is fixed at construction, so no letter is offered twice.
#[derive(Debug, Clone)]
pub struct RandomGuesser {
    alphabet: Vec<char>,
}

impl RandomGuesser {
    #[must_use]
    pub fn new(mut rng: StdRng) -> Self {
        let mut alphabet: Vec<char> = ALPHABET.chars().collect();
        alphabet.shuffle(&mut rng);
        Self { alphabet }
    }

    /// Letters not guessed yet; the last one is guessed next
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        &self.alphabet
    }
}

impl Guesser for RandomGuesser {
    fn guess(&mut self, _obscured: &ObscuredWord) -> Result<char, GuessError> {
        self.alphabet.pop().ok_or(GuessError::TableFlip)
    }

    fn update_state(
        &mut self,
        _feedback: &Feedback,
        _obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        Ok(())
    }
}

/// Guesses the alphabet in a random order, vowels first
#[derive(Debug, Clone)]
pub struct OrderedRandomGuesser {
    alphabet: Vec<char>,
}

impl OrderedRandomGuesser {
    #[must_use]
    pub fn new(mut rng: StdRng) -> Self {
        let (mut consonants, mut vowels) = split_vowels(ALPHABET.chars());
        consonants.shuffle(&mut rng);
        vowels.shuffle(&mut rng);

        // Guesses pop from the tail
        consonants.extend(vowels);
        Self {
            alphabet: consonants,
        }
    }

    /// Letters not guessed yet; the last one is guessed next
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        &self.alphabet
    }
}

impl Guesser for OrderedRandomGuesser {
    fn guess(&mut self, _obscured: &ObscuredWord) -> Result<char, GuessError> {
        self.alphabet.pop().ok_or(GuessError::TableFlip)
    }

    fn update_state(
        &mut self,
        _feedback: &Feedback,
        _obscured: &ObscuredWord,
    ) -> Result<(), GuessError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guessers::candidates::VOWELS;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn random_alphabet_is_shuffled_permutation() {
        let guesser = RandomGuesser::new(rng());
        let sorted: Vec<char> = ALPHABET.chars().collect();
        assert_ne!(guesser.remaining(), sorted.as_slice());
        assert_eq!(
            guesser.remaining().iter().copied().collect::<BTreeSet<_>>(),
            ALPHABET.chars().collect::<BTreeSet<char>>()
        );
    }

    #[test]
    fn random_guess_pops_last_letter() {
        let mut guesser = RandomGuesser::new(rng());
        let last = *guesser.remaining().last().unwrap();
        assert_eq!(guesser.guess(&ObscuredWord::hidden(3)).unwrap(), last);
        assert!(!guesser.remaining().contains(&last));
    }

    #[test]
    fn same_seed_same_order() {
        assert_eq!(
            RandomGuesser::new(rng()).remaining(),
            RandomGuesser::new(rng()).remaining()
        );
    }

    #[test]
    fn random_guesser_runs_dry_after_alphabet() {
        let mut guesser = RandomGuesser::new(rng());
        let word = ObscuredWord::hidden(3);
        let offered: BTreeSet<char> = (0..26).map(|_| guesser.guess(&word).unwrap()).collect();
        assert_eq!(offered.len(), 26);
        assert!(matches!(guesser.guess(&word), Err(GuessError::TableFlip)));
    }

    #[test]
    fn ordered_alphabet_ends_in_vowels() {
        let guesser = OrderedRandomGuesser::new(rng());
        let alphabet = guesser.remaining();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(
            alphabet[21..].iter().copied().collect::<BTreeSet<_>>(),
            VOWELS.chars().collect::<BTreeSet<char>>()
        );
    }

    #[test]
    fn ordered_guesser_offers_vowels_first() {
        let mut guesser = OrderedRandomGuesser::new(rng());
        let word = ObscuredWord::hidden(5);
        let first_five: BTreeSet<char> = (0..5).map(|_| guesser.guess(&word).unwrap()).collect();
        assert_eq!(first_five, VOWELS.chars().collect::<BTreeSet<char>>());
    }
}
