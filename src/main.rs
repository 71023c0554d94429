//! Hangman Guessers - CLI
//!
//! Plays Hangman with one or every guessing strategy, or benchmarks a strategy
//! over many random dictionary words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_guessers::{
    commands::{
        BenchmarkConfig, PlayConfig, automated_guessers, compare_guessers, play_named,
        run_benchmark,
    },
    core::DEFAULT_MAX_GUESSES,
    guessers::GUESSER_NAMES,
    output::{print_benchmark_result, print_play_result},
    wordlists::{
        DEFAULT_WORDFILE,
        loader::{load_from_file, words_from_slice},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman simulator pitting guessing strategies against a hidden word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesser: manual, random, ordered-random, derived, ordered-derived,
    /// rederived, frequent, markov, markov-2 (default: every automated guesser)
    #[arg(short, long, global = true)]
    guesser: Option<String>,

    /// Secret word (default: random dictionary word)
    #[arg(short, long, global = true)]
    word: Option<String>,

    /// Dictionary file of whitespace-delimited words [default: /usr/share/dict/words,
    /// or just the secret word when only --word is given]
    #[arg(short = 'f', long, global = true)]
    wordfile: Option<String>,

    /// Maximum number of guesses per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    count: usize,

    /// Seed for reproducible guessing
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Switch to an ordered random guesser after a dead end
    #[arg(long, global = true)]
    fallback: bool,

    /// Show the board before every guess (always on for the manual guesser)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single word with one guesser, or with every automated one (default)
    Play,

    /// Benchmark guessers over random dictionary words
    Benchmark {
        /// Number of games per guesser
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,
    },
}

/// Load the dictionary
///
/// With no word file, a given secret word stands in as the whole dictionary.
fn load_words(wordfile: Option<&str>, word: Option<&str>) -> Result<Vec<String>> {
    match (wordfile, word) {
        (None, Some(word)) => Ok(words_from_slice(&[word])),
        (path, _) => {
            let path = path.unwrap_or(DEFAULT_WORDFILE);
            load_from_file(path).with_context(|| format!("failed to load word list {path}"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();

    let unknown = cli
        .guesser
        .as_deref()
        .filter(|name| !GUESSER_NAMES.contains(name));
    if let Some(name) = unknown {
        bail!(
            "unknown guesser \"{name}\" (expected one of: {})",
            GUESSER_NAMES.join(", ")
        );
    }

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, &mut rng),
        Commands::Benchmark { games } => run_benchmark_command(&cli, games, &mut rng),
    }
}

fn run_play_command(cli: &Cli, rng: &mut StdRng) -> Result<()> {
    let word = cli.word.as_deref();
    let words = load_words(cli.wordfile.as_deref(), word)?;

    let secret = match word {
        Some(word) => word.to_lowercase(),
        None => words
            .choose(rng)
            .cloned()
            .context("the dictionary has no usable words")?,
    };

    let mut config = PlayConfig::new(secret);
    config.max_guesses = cli.count;
    config.fallback = cli.fallback;
    config.verbose = cli.verbose || cli.guesser.as_deref() == Some("manual");

    if let Some(name) = cli.guesser.as_deref() {
        let result = play_named(&config, name, &words, rng)?;
        print_play_result(&result);
    } else {
        for result in compare_guessers(&config, &words, rng)? {
            print_play_result(&result);
        }
    }
    Ok(())
}

fn run_benchmark_command(cli: &Cli, games: usize, rng: &mut StdRng) -> Result<()> {
    let words = load_words(cli.wordfile.as_deref(), None)?;
    if words.is_empty() {
        bail!("the dictionary has no usable words");
    }

    let mut config = BenchmarkConfig::new(games);
    config.max_guesses = cli.count;
    config.fallback = cli.fallback;
    config.progress = true;

    let names: Vec<&str> = match cli.guesser.as_deref() {
        Some("manual") => bail!("the manual guesser cannot be benchmarked"),
        Some(name) => vec![name],
        None => automated_guessers().collect(),
    };

    println!("Running benchmark on {games} random words...");
    for name in names {
        let result = run_benchmark(&config, name, &words, rng)?;
        print_benchmark_result(&result);
    }
    Ok(())
}
