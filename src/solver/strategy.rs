//! Guess selection strategies
//!
//! Defines the Strategy trait used by the automated solver to pick its next
//! guess from the remaining candidates.

use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` if `candidates` is empty.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Positional letter frequency (default)
    Frequency(FrequencyStrategy),
    /// Uniform pick among candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates, rng),
            Self::Random(s) => s.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Positional letter frequency strategy
///
/// Scores each candidate by how common its letters are at each position
/// across the remaining candidates, plus how many candidates contain each of
/// its distinct letters. Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    fn tally(candidates: &[Word]) -> ([[u32; 26]; WORD_LENGTH], [u32; 26]) {
        let mut positional = [[0u32; 26]; WORD_LENGTH];
        let mut containing = [0u32; 26];

        for word in candidates {
            let mut seen = [false; 26];
            for (i, &letter) in word.chars().iter().enumerate() {
                let idx = usize::from(letter - b'a');
                positional[i][idx] += 1;
                if !seen[idx] {
                    seen[idx] = true;
                    containing[idx] += 1;
                }
            }
        }

        (positional, containing)
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        _rng: &mut R,
    ) -> Option<&'a Word> {
        let (positional, containing) = Self::tally(candidates);

        let score = |word: &Word| -> u32 {
            let mut seen = [false; 26];
            let mut total = 0;
            for (i, &letter) in word.chars().iter().enumerate() {
                let idx = usize::from(letter - b'a');
                total += positional[i][idx];
                if !seen[idx] {
                    seen[idx] = true;
                    total += containing[idx];
                }
            }
            total
        };

        // max_by_key keeps the last maximum, so walk in reverse to prefer the first
        candidates.iter().rev().max_by_key(|word| score(word))
    }
}

/// Random strategy
///
/// Uniform pick among the remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [Word],
        rng: &mut R,
    ) -> Option<&'a Word> {
        candidates.choose(rng)
    }
}
