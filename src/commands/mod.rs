//! Command implementations

pub mod benchmark;
pub mod console;
pub mod solve;

pub use benchmark::{BenchmarkResult, pick_targets, progress_bar, run_benchmark};
pub use console::run_console;
pub use solve::{SolveConfig, SolveResult, SolveStep, play_game, solve_word};
