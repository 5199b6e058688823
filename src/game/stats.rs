//! Win/loss tally across games

use super::Outcome;

/// Running statistics for a series of games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won on guess `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses + 1],
        }
    }

    /// Record a finished game; `Continue` outcomes are ignored
    pub fn record(&mut self, outcome: &Outcome, guess_count: usize) {
        match outcome {
            Outcome::Continue => {}
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(guess_count) {
                    *slot += 1;
                }
            }
            Outcome::Lost { .. } => self.total_games += 1,
        }
    }

    /// Percentage of games won (0 when nothing has been played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::new(6);
        stats.record(&Outcome::Won, 3);
        stats.record(&Outcome::Continue, 2);
        stats.record(
            &Outcome::Lost {
                hidden: Word::new("apple").unwrap(),
            },
            6,
        );

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[3], 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_win_rate_is_zero() {
        assert!(Statistics::new(6).win_rate().abs() < f64::EPSILON);
    }
}
