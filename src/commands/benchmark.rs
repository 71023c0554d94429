//! Benchmark command
//!
//! Plays many random dictionary words and summarizes how a guesser fared.

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};
use tracing::info;

use super::play::{PlayConfig, PlayError, play_named};
use crate::core::DEFAULT_MAX_GUESSES;

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub max_guesses: usize,
    pub fallback: bool,
    /// Draw a progress bar on stderr
    pub progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            max_guesses: DEFAULT_MAX_GUESSES,
            fallback: false,
            progress: false,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub guesser: String,
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub dead_ends: usize,
    pub fallbacks: usize,
    pub total_guesses: usize,
    pub total_failures: usize,
    pub duration: Duration,
}

impl BenchmarkResult {
    fn new(guesser: String) -> Self {
        Self {
            guesser,
            games: 0,
            wins: 0,
            losses: 0,
            dead_ends: 0,
            fallbacks: 0,
            total_guesses: 0,
            total_failures: 0,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.games)
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        ratio(self.total_guesses, self.games)
    }

    #[must_use]
    pub fn average_failures(&self) -> f64 {
        ratio(self.total_failures, self.games)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// Play `config.games` random words from `words` with the guesser `name`
///
/// Secrets are drawn with replacement. Each game gets its own guesser built
/// against the full dictionary.
///
/// # Errors
///
/// Returns an error for an unknown guesser name or a game that aborts. Dead
/// ends are counted, not raised.
pub fn run_benchmark(
    config: &BenchmarkConfig,
    name: &str,
    words: &[String],
    rng: &mut StdRng,
) -> Result<BenchmarkResult, PlayError> {
    let start = Instant::now();
    let mut result = BenchmarkResult::new(name.to_string());

    let pb = if config.progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };
    pb.set_message(name.to_string());

    for _ in 0..config.games {
        let Some(secret) = words.choose(rng) else {
            break;
        };

        let mut play_config = PlayConfig::new(secret.clone());
        play_config.max_guesses = config.max_guesses;
        play_config.fallback = config.fallback;

        let outcome = play_named(&play_config, name, words, rng)?;
        result.guesser.clone_from(&outcome.guesser);
        result.games += 1;
        result.total_guesses += outcome.attempts();
        result.total_failures += outcome.incorrect;
        if outcome.fell_back {
            result.fallbacks += 1;
        }

        if outcome.success {
            result.wins += 1;
        } else if outcome.dead_end {
            result.dead_ends += 1;
        } else {
            result.losses += 1;
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    result.duration = start.elapsed();

    info!(
        guesser = %result.guesser,
        games = result.games,
        wins = result.wins,
        dead_ends = result.dead_ends,
        "benchmark finished"
    );
    Ok(result)
}
