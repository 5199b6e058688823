//! Game session state machine
//!
//! A session owns the hidden word, the narrowing candidate index and the
//! guess counter. Each valid guess is scored, the candidates are filtered,
//! and a structured [`GuessResult`] goes back to the front end.

use super::{GameError, SessionConfig};
use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::dictionary::DictionaryIndex;
use crate::solver::filter_candidates;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a valid guess did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Won,
    /// Out of guesses; the hidden word is revealed
    Lost { hidden: Word },
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Word,
    pub feedback: Feedback,
    pub outcome: Outcome,
    /// Random sample of remaining candidates; empty once the game is over
    pub suggestions: Vec<Word>,
    /// Candidates left after this guess
    pub remaining: usize,
}

/// One game of Wordle over a fixed word list
///
/// The random source is injected so games can be replayed from a seed.
pub struct GameSession<R: Rng = StdRng> {
    config: SessionConfig,
    word_list: Vec<Word>,
    full: DictionaryIndex,
    candidates: DictionaryIndex,
    hidden: Word,
    guess_count: usize,
    state: GameState,
    history: Vec<(Word, Feedback)>,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Start a game with a hidden word drawn uniformly from `words`
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameSession, GameState, SessionConfig};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let session = GameSession::new(words, SessionConfig::default(), StdRng::seed_from_u64(1)).unwrap();
    /// assert_eq!(session.state(), GameState::InProgress);
    /// assert_eq!(session.guess_count(), 0);
    /// ```
    pub fn new(words: Vec<Word>, config: SessionConfig, mut rng: R) -> Result<Self, GameError> {
        let full = DictionaryIndex::build(words.iter().cloned());
        let hidden = draw_hidden(&full, &mut rng)?;

        Ok(Self {
            config,
            word_list: words,
            candidates: full.clone(),
            full,
            hidden,
            guess_count: 0,
            state: GameState::InProgress,
            history: Vec::new(),
            rng,
        })
    }

    /// Start a game on a chosen hidden word
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if `words` is empty, or
    /// `GameError::UnknownWord` if `hidden` is not one of them.
    pub fn with_hidden_word(
        words: Vec<Word>,
        hidden: &str,
        config: SessionConfig,
        rng: R,
    ) -> Result<Self, GameError> {
        let mut session = Self::new(words, config, rng)?;
        let normalized = hidden.trim().to_lowercase();
        if !session.full.contains(&normalized) {
            return Err(GameError::UnknownWord(normalized));
        }
        session.hidden =
            Word::new(normalized.as_str()).map_err(|_| GameError::UnknownWord(normalized))?;
        Ok(session)
    }

    /// Submit a guess
    ///
    /// Rejected guesses leave the counter and the candidates untouched.
    ///
    /// # Errors
    /// - `GameError::SessionTerminal` once the game is won or lost
    /// - `GameError::InvalidLength` if the guess is not five letters
    /// - `GameError::UnknownWord` if the guess is not in the dictionary
    pub fn guess(&mut self, input: &str) -> Result<GuessResult, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::SessionTerminal);
        }

        let normalized = input.trim().to_lowercase();
        let len = normalized.chars().count();
        if len != WORD_LENGTH {
            return Err(GameError::InvalidLength(len));
        }

        let known = if self.config.restrict_to_candidates {
            self.candidates.contains(&normalized)
        } else {
            self.full.contains(&normalized)
        };
        if !known {
            return Err(GameError::UnknownWord(normalized));
        }
        let guess =
            Word::new(normalized.as_str()).map_err(|_| GameError::UnknownWord(normalized))?;

        self.guess_count += 1;
        let feedback = Feedback::score(&guess, &self.hidden);
        self.history.push((guess.clone(), feedback));

        let outcome = if feedback.is_win() {
            self.state = GameState::Won;
            Outcome::Won
        } else if self.guess_count >= self.config.max_guesses {
            self.state = GameState::Lost;
            Outcome::Lost {
                hidden: self.hidden.clone(),
            }
        } else {
            let narrowed = filter_candidates(&self.candidates.all(), &guess, &feedback);
            self.candidates.replace(narrowed);
            Outcome::Continue
        };

        let suggestions = if outcome == Outcome::Continue {
            self.suggestions()
        } else {
            Vec::new()
        };

        Ok(GuessResult {
            guess,
            feedback,
            outcome,
            suggestions,
            remaining: self.candidates.len(),
        })
    }

    /// Start over: full dictionary, fresh hidden word, zero guesses
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the word list is empty.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.full = DictionaryIndex::build(self.word_list.iter().cloned());
        self.hidden = draw_hidden(&self.full, &mut self.rng)?;
        self.candidates = self.full.clone();
        self.guess_count = 0;
        self.state = GameState::InProgress;
        self.history.clear();
        Ok(())
    }

    /// Random sample of up to `suggestion_count` remaining candidates
    pub fn suggestions(&mut self) -> Vec<Word> {
        let remaining = self.candidates.all();
        remaining
            .choose_multiple(&mut self.rng, self.config.suggestion_count)
            .cloned()
            .collect()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.guess_count)
    }

    /// The hidden word, revealed only once the game is over
    #[must_use]
    pub fn hidden_word(&self) -> Option<&Word> {
        self.state.is_terminal().then_some(&self.hidden)
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Snapshot of the words still consistent with every guess so far
    #[must_use]
    pub fn candidates(&self) -> Vec<Word> {
        self.candidates.all()
    }

    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Size of the full dictionary the hidden word is drawn from
    #[must_use]
    pub const fn dictionary_size(&self) -> usize {
        self.full.len()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Random source, shared with solver strategies
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

fn draw_hidden<R: Rng + ?Sized>(index: &DictionaryIndex, rng: &mut R) -> Result<Word, GameError> {
    index
        .all()
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyDictionary)
}
