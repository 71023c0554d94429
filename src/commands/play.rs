//! Single game driver
//!
//! Runs the guess / submit / update loop between one guesser and one game.

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::{CheaterError, DEFAULT_MAX_GUESSES, Game};
use crate::guessers::{GuessError, Guesser, GuesserType, OrderedRandomGuesser};
use crate::output::{print_game_status, print_guess};

/// Errors that abort a game
#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Cheater(#[from] CheaterError),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("unknown guesser \"{0}\"")]
    UnknownGuesser(String),
}

/// Configuration for playing a word
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub secret: String,
    pub max_guesses: usize,
    /// Switch to an ordered random guesser after a dead end
    pub fallback: bool,
    /// Print the board before every guess and each letter as it is played
    pub verbose: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: DEFAULT_MAX_GUESSES,
            fallback: false,
            verbose: false,
        }
    }
}

/// A single processed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: char,
    pub correct: bool,
    /// Obscured word after the guess
    pub discovered: String,
}

/// Result of playing a word
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub guesser: String,
    pub secret: String,
    pub discovered: String,
    pub correct: usize,
    pub incorrect: usize,
    pub success: bool,
    /// The guesser ran out of candidates before the game ended
    pub dead_end: bool,
    /// The fallback guesser took over at some point
    pub fell_back: bool,
    pub turns: Vec<Turn>,
}

impl PlayResult {
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.correct + self.incorrect
    }
}

/// Play one game of `config.secret` with `guesser`
///
/// A dead end hands control to `fallback` when one is given; otherwise the
/// game stops and the result is marked as a dead end. With `config.verbose`
/// the board is printed before every guess.
///
/// # Errors
///
/// Returns an error if the game rejects a guess or the guesser fails for any
/// reason other than a dead end.
pub fn play<G: Guesser>(
    config: &PlayConfig,
    label: &str,
    guesser: &mut G,
    mut fallback: Option<&mut dyn Guesser>,
) -> Result<PlayResult, PlayError> {
    let mut game = Game::new(&config.secret, config.max_guesses);
    let mut turns = Vec::new();
    let mut fell_back = false;
    let mut dead_end = false;

    while !game.is_game_over() {
        if config.verbose {
            print_game_status(&game);
        }

        let recorded = turns.len();
        let outcome = match fallback.as_deref_mut() {
            Some(backup) if fell_back => take_turn(backup, &mut game, &mut turns),
            _ => take_turn(&mut *guesser, &mut game, &mut turns),
        };

        if config.verbose {
            for turn in &turns[recorded..] {
                print_guess(label, turn.letter, turn.correct);
            }
        }

        match outcome {
            Ok(()) => {}
            Err(PlayError::Guess(GuessError::TableFlip)) if !fell_back && fallback.is_some() => {
                warn!(guesser = label, discovered = %game.obscured_word(), "falling back");
                fell_back = true;
            }
            Err(PlayError::Guess(GuessError::TableFlip)) => {
                warn!(guesser = label, discovered = %game.obscured_word(), "dead end");
                dead_end = true;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    let result = PlayResult {
        guesser: label.to_string(),
        secret: game.secret_word().to_string(),
        discovered: game.obscured_word().to_string(),
        correct: game.correct_guesses().len(),
        incorrect: game.failure_count(),
        success: game.has_won(),
        dead_end,
        fell_back,
        turns,
    };
    info!(
        guesser = label,
        secret = %result.secret,
        success = result.success,
        attempts = result.attempts(),
        "game finished"
    );
    Ok(result)
}

/// Guess, submit and update once
///
/// The processed guess is pushed onto `turns` before the guesser sees the
/// feedback. Resubmitted letters leave no turn behind.
fn take_turn<G: Guesser + ?Sized>(
    guesser: &mut G,
    game: &mut Game,
    turns: &mut Vec<Turn>,
) -> Result<(), PlayError> {
    let letter = guesser.guess(&game.obscured_word())?;
    let feedback = game.submit_guess([letter])?;
    let obscured = game.obscured_word();

    let Some((letter, correct)) = feedback.iter().next() else {
        debug!(%letter, "letter already guessed");
        return Ok(());
    };

    debug!(%letter, correct, discovered = %obscured, "turn");
    turns.push(Turn {
        letter,
        correct,
        discovered: obscured.to_string(),
    });

    if game.is_game_over() {
        return Ok(());
    }
    guesser.update_state(&feedback, &obscured)?;
    Ok(())
}

/// Build the guesser registered as `name` and play one game with it
///
/// `words` is the dictionary handed to the guesser. Guesser randomness is
/// drawn from `rng`.
///
/// # Errors
///
/// Returns [`PlayError::UnknownGuesser`] for an unregistered name, or any
/// error from [`play`].
pub fn play_named(
    config: &PlayConfig,
    name: &str,
    words: &[String],
    rng: &mut StdRng,
) -> Result<PlayResult, PlayError> {
    let word_length = config.secret.chars().count();
    let mut guesser = GuesserType::from_name(name, word_length, words, StdRng::from_rng(rng))
        .ok_or_else(|| PlayError::UnknownGuesser(name.to_string()))?;
    let label = guesser.label();

    if config.fallback {
        let mut backup = OrderedRandomGuesser::new(StdRng::from_rng(rng));
        play(config, label, &mut guesser, Some(&mut backup))
    } else {
        play(config, label, &mut guesser, None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::commands::automated_guessers;
    use crate::core::{Feedback, ObscuredWord};
    use crate::guessers::{FrequentLetterGuesser, RandomGuesser};
    use proptest::prelude::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    /// Guesses a fixed sequence of letters
    struct Scripted(Vec<char>);

    impl Guesser for Scripted {
        fn guess(&mut self, _obscured: &ObscuredWord) -> Result<char, GuessError> {
            if self.0.is_empty() {
                return Err(GuessError::TableFlip);
            }
            Ok(self.0.remove(0))
        }

        fn update_state(
            &mut self,
            _feedback: &Feedback,
            _obscured: &ObscuredWord,
        ) -> Result<(), GuessError> {
            Ok(())
        }
    }

    /// Remembers every letter the wrapped guesser offers
    struct Recording<G> {
        inner: G,
        offered: Vec<char>,
    }

    impl<G: Guesser> Guesser for Recording<G> {
        fn guess(&mut self, obscured: &ObscuredWord) -> Result<char, GuessError> {
            let letter = self.inner.guess(obscured)?;
            self.offered.push(letter);
            Ok(letter)
        }

        fn update_state(
            &mut self,
            feedback: &Feedback,
            obscured: &ObscuredWord,
        ) -> Result<(), GuessError> {
            self.inner.update_state(feedback, obscured)
        }
    }

    #[test]
    fn frequent_guesser_wins_with_word_in_dictionary() {
        let words = strings(&["gauche", "latter", "barrel", "rabbit"]);
        let config = PlayConfig::new("latter".to_string());
        let mut guesser = FrequentLetterGuesser::new(6, &words);

        let result = play(&config, "FrequentLetterGuesser", &mut guesser, None).unwrap();

        assert!(result.success);
        assert!(!result.dead_end);
        assert_eq!(result.discovered, "latter");
        assert_eq!(result.turns.len(), result.attempts());
    }

    #[test]
    fn records_every_turn() {
        let config = PlayConfig::new("toroidal".to_string());
        let mut guesser = Scripted(vec!['o', 'z', 't']);

        let result = play(&config, "Scripted", &mut guesser, None).unwrap();

        let letters: Vec<char> = result.turns.iter().map(|t| t.letter).collect();
        assert_eq!(letters, vec!['o', 'z', 't']);
        assert_eq!(result.turns[0].discovered, ".o.o....");
        assert!(!result.turns[1].correct);
        assert_eq!(result.turns[2].discovered, "to.o....");
        assert!(result.dead_end);
    }

    #[test]
    fn resubmissions_are_not_recorded() {
        let config = PlayConfig::new("ox".to_string());
        let mut guesser = Scripted(vec!['o', 'o', 'x']);

        let result = play(&config, "Scripted", &mut guesser, None).unwrap();

        assert!(result.success);
        assert_eq!(result.turns.len(), 2);
    }

    #[test]
    fn loses_when_budget_runs_out() {
        let mut config = PlayConfig::new("quixotic".to_string());
        config.max_guesses = 3;
        let mut guesser = Scripted(vec!['a', 'b', 'c', 'd']);

        let result = play(&config, "Scripted", &mut guesser, None).unwrap();

        assert!(!result.success);
        assert!(!result.dead_end);
        assert_eq!(result.correct, 1);
        assert_eq!(result.incorrect, 2);
        assert_eq!(result.discovered, ".......c");
    }

    #[test]
    fn dead_end_hands_over_to_fallback() {
        let mut config = PlayConfig::new("ox".to_string());
        config.max_guesses = 26;
        let mut guesser = Scripted(vec![]);
        let mut backup = RandomGuesser::new(StdRng::seed_from_u64(3));

        let result = play(&config, "Scripted", &mut guesser, Some(&mut backup)).unwrap();

        assert!(result.fell_back);
        assert!(!result.dead_end);
        assert!(result.success);
    }

    #[test]
    fn play_named_rejects_unknown_guesser() {
        let config = PlayConfig::new("ox".to_string());
        let err = play_named(&config, "psychic", &[], &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, PlayError::UnknownGuesser(_)));
    }

    #[test]
    fn rederived_dead_end_without_word_in_dictionary() {
        let config = PlayConfig::new("ornery".to_string());
        let words = strings(&["ox"]);

        let mut rng = StdRng::seed_from_u64(1);

        let result = play_named(&config, "rederived", &words, &mut rng).unwrap();

        assert!(result.dead_end);
        assert!(!result.success);
        assert!(result.turns.is_empty());
    }

    proptest! {
        #[test]
        fn games_end_within_budget(word in "[a-z]{1,12}", seed in any::<u64>(), max in 1usize..30) {
            let mut config = PlayConfig::new(word);
            config.max_guesses = max;
            let mut guesser = RandomGuesser::new(StdRng::seed_from_u64(seed));

            let result = play(&config, "RandomGuesser", &mut guesser, None).unwrap();

            prop_assert!(result.turns.len() <= max);
            prop_assert_eq!(result.turns.len(), result.attempts());
            prop_assert!(!result.dead_end);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn guessers_never_repeat(word in "[a-z]{2,9}", seed in any::<u64>(), max in 1usize..27) {
            let mut words = strings(&["latter", "barrel", "rabbit", "gauche", "toroidal"]);
            words.push(word.clone());
            let mut config = PlayConfig::new(word.clone());
            config.max_guesses = max;

            for name in automated_guessers() {
                let rng = StdRng::seed_from_u64(seed);
                let inner = GuesserType::from_name(name, word.len(), &words, rng).unwrap();
                let label = inner.label();
                let mut guesser = Recording { inner, offered: Vec::new() };

                let result = play(&config, label, &mut guesser, None).unwrap();

                let distinct: BTreeSet<char> = guesser.offered.iter().copied().collect();
                prop_assert_eq!(distinct.len(), guesser.offered.len(), "{}", label);
                prop_assert!(result.turns.len() <= max);
                prop_assert_eq!(result.turns.len(), result.attempts());
            }
        }

        #[test]
        fn verbose_play_matches_quiet_play(word in "[a-z]{1,6}", seed in any::<u64>()) {
            let mut config = PlayConfig::new(word);
            let mut quiet = RandomGuesser::new(StdRng::seed_from_u64(seed));
            let expected = play(&config, "RandomGuesser", &mut quiet, None).unwrap();

            config.verbose = true;
            let mut loud = RandomGuesser::new(StdRng::seed_from_u64(seed));
            let result = play(&config, "RandomGuesser", &mut loud, None).unwrap();

            prop_assert_eq!(result.turns, expected.turns);
        }
    }
}
