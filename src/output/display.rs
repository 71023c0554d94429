//! Display functions for command results

use super::formatters::{create_progress_bar, game_status, outcome_line};
use crate::commands::{BenchmarkResult, PlayResult};
use crate::core::Game;
use crate::guessers::GuessError;
use colored::Colorize;

/// Print the board a guesser is about to play against
pub fn print_game_status(game: &Game) {
    println!("{}\n", game_status(game));
}

/// Print a letter as it is played
pub fn print_guess(label: &str, letter: char, correct: bool) {
    let mark = if correct { "✓".green() } else { "✗".red() };
    println!(
        "{} guessed {} {mark}\n",
        label.bright_cyan(),
        letter.to_string().bold()
    );
}

/// Print the result of playing a word
pub fn print_play_result(result: &PlayResult) {
    if result.fell_back {
        println!("{}", "Fell back to ordered random guessing".yellow());
    }

    let line = outcome_line(result);
    if result.success {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
    if result.dead_end {
        println!("  {}", GuessError::TableFlip.to_string().yellow());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BENCHMARK:".bright_cyan().bold(),
        result.guesser.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let games = result.games.max(1) as f64;
    let rows = [
        ("Wins", result.wins, "green"),
        ("Losses", result.losses, "red"),
        ("Dead ends", result.dead_ends, "yellow"),
    ];

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    for (label, count, color) in rows {
        let pct = count as f64 / games * 100.0;
        let bar = create_progress_bar(count as f64, games, 30);
        println!(
            "   {label:<17} [{}] {count:4} ({pct:5.1}%)",
            bar.color(color)
        );
    }
    if result.fallbacks > 0 {
        println!("   Fallbacks:        {}", result.fallbacks);
    }

    println!("\n📈 {}", "Guesses:".bright_cyan().bold());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses()).bright_yellow().bold()
    );
    println!("   Average misses:   {:.2}", result.average_failures());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
}
