//! Errors returned by a game session

use crate::core::WORD_LENGTH;
use std::fmt;

/// Why a guess or a new game was rejected
///
/// None of these end the process; the front end reports them and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Guess does not have exactly five letters (holds the length given)
    InvalidLength(usize),
    /// Guess is not in the dictionary
    UnknownWord(String),
    /// Game already won or lost; call `reset` first
    SessionTerminal,
    /// No words available to start a game
    EmptyDictionary,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Please enter a {WORD_LENGTH}-letter word (got {len})")
            }
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
            Self::SessionTerminal => write!(f, "The game is over; start a new game first"),
            Self::EmptyDictionary => write!(f, "The word list is empty"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            GameError::InvalidLength(3).to_string(),
            "Please enter a 5-letter word (got 3)"
        );
        assert_eq!(
            GameError::UnknownWord("zzzzz".into()).to_string(),
            "'zzzzz' is not in the word list"
        );
        assert!(GameError::EmptyDictionary.to_string().contains("empty"));
    }
}
