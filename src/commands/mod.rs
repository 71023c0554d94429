//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod play;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use compare::{automated_guessers, compare_guessers};
pub use play::{PlayConfig, PlayError, PlayResult, Turn, play, play_named};
