//! Compare every automated guesser on the same word

use rand::rngs::StdRng;

use super::play::{PlayConfig, PlayError, PlayResult, play_named};
use crate::guessers::GUESSER_NAMES;

/// Registry names of every guesser that needs no human input
pub fn automated_guessers() -> impl Iterator<Item = &'static str> {
    GUESSER_NAMES
        .iter()
        .copied()
        .filter(|&name| name != "manual")
}

/// Play `config.secret` once with each automated guesser
///
/// Every guesser draws its randomness from `rng` in registry order, so a
/// seeded `rng` reproduces the whole comparison.
///
/// # Errors
///
/// Returns the first error raised by any game.
pub fn compare_guessers(
    config: &PlayConfig,
    words: &[String],
    rng: &mut StdRng,
) -> Result<Vec<PlayResult>, PlayError> {
    automated_guessers()
        .map(|name| play_named(config, name, words, rng))
        .collect()
}
