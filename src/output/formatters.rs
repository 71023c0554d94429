//! Formatting utilities for terminal output

use crate::commands::PlayResult;
use crate::core::Game;

/// Summarize a game's guess counts
///
/// # Examples
/// ```
/// use hangman_guessers::output::formatters::guess_status;
///
/// assert_eq!(guess_status(7, 7, 0), "7 attempts (7 correct, 0 incorrect)");
/// ```
#[must_use]
pub fn guess_status(attempts: usize, correct: usize, incorrect: usize) -> String {
    format!("{attempts} attempts ({correct} correct, {incorrect} incorrect)")
}

/// Game state shown before each guess
///
/// # Examples
/// ```
/// use hangman_guessers::core::Game;
/// use hangman_guessers::output::formatters::game_status;
///
/// let game = Game::new("toroidal", 8);
/// assert_eq!(
///     game_status(&game),
///     "........\nIncorrect guesses: \nRemaining guesses: 8"
/// );
/// ```
#[must_use]
pub fn game_status(game: &Game) -> String {
    let incorrect: Vec<String> = game
        .incorrect_guesses()
        .iter()
        .map(ToString::to_string)
        .collect();
    format!(
        "{}\nIncorrect guesses: {}\nRemaining guesses: {}",
        game.obscured_word(),
        incorrect.join(" "),
        game.remaining_guesses()
    )
}

/// One-line outcome of a finished game
#[must_use]
pub fn outcome_line(result: &PlayResult) -> String {
    let status = guess_status(result.attempts(), result.correct, result.incorrect);
    if result.success {
        format!(
            "{} successfully guessed \"{}\" after {status}",
            result.guesser, result.secret
        )
    } else {
        format!(
            "{} failed to guess \"{}\" (discovered \"{}\") after {status}",
            result.guesser, result.secret, result.discovered
        )
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
