//! Word solving command
//!
//! Lets the solver play a game against a chosen hidden word and records
//! every step.

use crate::core::{Feedback, Word};
use crate::game::{GameError, GameSession, GameState, SessionConfig};
use crate::solver::Strategy;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub session: SessionConfig,
    pub seed: u64,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            session: SessionConfig::default(),
            seed: 0,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub target: String,
}

/// A single guess in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play `session` to the end, letting `strategy` choose every guess
///
/// Stops early only if the strategy has nothing left to offer.
pub fn play_game<S: Strategy, R: Rng>(
    session: &mut GameSession<R>,
    strategy: &S,
) -> Vec<SolveStep> {
    let mut steps = Vec::new();

    while session.state() == GameState::InProgress {
        let candidates = session.candidates();
        let Some(guess) = strategy
            .select_guess(&candidates, session.rng_mut())
            .cloned()
        else {
            break;
        };

        // Every pick comes from the candidate set, so it is always accepted
        let Ok(result) = session.guess(guess.text()) else {
            break;
        };

        steps.push(SolveStep {
            word: result.guess,
            feedback: result.feedback,
            candidates_before: candidates.len(),
            candidates_after: result.remaining,
        });
    }

    steps
}

/// Solve a specific word using the given word list and strategy
///
/// # Errors
///
/// Returns an error if the word list is empty or the target is not in it.
pub fn solve_word<S: Strategy>(
    words: &[Word],
    config: SolveConfig,
    strategy: &S,
) -> Result<SolveResult, GameError> {
    let mut session = GameSession::with_hidden_word(
        words.to_vec(),
        &config.target,
        config.session,
        StdRng::seed_from_u64(config.seed),
    )?;

    let steps = play_game(&mut session, strategy);

    Ok(SolveResult {
        success: session.state() == GameState::Won,
        steps,
        target: config.target.trim().to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FrequencyStrategy, RandomStrategy};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_word_succeeds() {
        let words = words_from_slice(&["apple", "angle", "ample", "amble", "axles"]);
        let result = solve_word(&words, SolveConfig::new("apple".into()), &FrequencyStrategy).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "apple");
        assert_eq!(result.steps.last().map(|s| s.word.text()), Some("apple"));
        assert!(result.steps.last().unwrap().feedback.is_win());
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let words = words_from_slice(&WORDS[..200]);
        let target = WORDS[150];
        let result = solve_word(&words, SolveConfig::new(target.into()), &FrequencyStrategy).unwrap();

        assert!(!result.steps.is_empty());
        assert!(result.steps.len() <= 6);
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let words = words_from_slice(&["apple", "angle"]);
        let result = solve_word(&words, SolveConfig::new("zzzzz".into()), &FrequencyStrategy);
        assert!(matches!(result, Err(GameError::UnknownWord(_))));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let words = words_from_slice(&[
            "bills", "fills", "hills", "kills", "mills", "pills", "tills", "wills",
        ]);
        let mut config = SolveConfig::new("wills".into());
        config.session = config.session.with_max_guesses(3);

        let result = solve_word(&words, config, &RandomStrategy).unwrap();
        assert!(result.steps.len() <= 3);
    }

    #[test]
    fn solve_is_repeatable_with_seed() {
        let words = words_from_slice(&WORDS[..100]);
        let target = WORDS[42];

        let run = || {
            let mut config = SolveConfig::new(target.into());
            config.seed = 9;
            solve_word(&words, config, &RandomStrategy)
                .unwrap()
                .steps
                .into_iter()
                .map(|s| s.word)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
