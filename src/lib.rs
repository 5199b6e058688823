//! Wordle
//!
//! A Wordle game engine: a trie-backed dictionary, two-pass feedback scoring,
//! candidate filtering, and a game session that suggests words still possible.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::core::{Feedback, Word};
//! use wordle_game::game::{GameSession, Outcome, SessionConfig};
//! use wordle_game::wordlists::loader::words_from_slice;
//!
//! // Score a guess
//! let guess = Word::new("nines").unwrap();
//! let hidden = Word::new("sheen").unwrap();
//! assert_eq!(Feedback::score(&guess, &hidden).to_string(), "YXXGY");
//!
//! // Play a game
//! let words = words_from_slice(&["apple", "angle", "ample", "amble"]);
//! let mut session = GameSession::with_hidden_word(
//!     words,
//!     "apple",
//!     SessionConfig::default(),
//!     StdRng::seed_from_u64(7),
//! )
//! .unwrap();
//!
//! let result = session.guess("angle").unwrap();
//! assert_eq!(result.remaining, 3);
//! assert_eq!(session.guess("apple").unwrap().outcome, Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Trie dictionary index
pub mod dictionary;

// Candidate filtering and guess selection
pub mod solver;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
