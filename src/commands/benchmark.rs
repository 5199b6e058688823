//! Benchmark command
//!
//! Lets the solver play many games and reports how many guesses it needed.
//! Games run in parallel, each with its own session and seeded RNG.

use super::solve::play_game;
use crate::core::Word;
use crate::game::{GameError, GameSession, GameState, SessionConfig};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    /// Guesses summed over won games
    pub total_guesses: usize,
    pub average_guesses: f64,
    /// Guess count -> number of games won with it
    pub distribution: HashMap<usize, usize>,
    /// Hidden words the solver failed to find
    pub failures: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Pick `count` distinct hidden words from `words` (all of them if fewer)
#[must_use]
pub fn pick_targets(words: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Progress bar styled for benchmark runs
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb
}

/// Run one game per target word
///
/// Game `i` is seeded with `seed + i`, so a run is repeatable regardless of
/// thread scheduling.
///
/// # Errors
///
/// Returns an error if a target is not in `words`.
pub fn run_benchmark<S: Strategy + Sync>(
    words: &[Word],
    targets: &[Word],
    strategy: &S,
    config: SessionConfig,
    seed: u64,
    progress: Option<&ProgressBar>,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let games: Vec<(String, bool, usize)> = targets
        .par_iter()
        .enumerate()
        .map(|(i, target)| -> Result<(String, bool, usize), GameError> {
            let rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let mut session =
                GameSession::with_hidden_word(words.to_vec(), target.text(), config, rng)?;
            let steps = play_game(&mut session, strategy);

            if let Some(pb) = progress {
                pb.inc(1);
            }

            Ok((
                target.text().to_string(),
                session.state() == GameState::Won,
                steps.len(),
            ))
        })
        .collect::<Result<_, _>>()?;

    if let Some(pb) = progress {
        pb.finish_with_message("Complete!");
    }

    let duration = start.elapsed();
    let total_games = games.len();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    for (word, won, guesses) in games {
        if won {
            total_guesses += guesses;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(word);
        }
    }
    let wins = total_games - failures.len();
    log::info!(
        "benchmark: {wins}/{total_games} won in {:.2}s",
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        total_games,
        wins,
        total_guesses,
        average_guesses: if wins == 0 {
            0.0
        } else {
            total_guesses as f64 / wins as f64
        },
        distribution,
        failures,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
