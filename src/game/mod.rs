//! Game session: turns, termination and reset
//!
//! Front ends drive a [`GameSession`] and render the structured results it
//! returns. The session performs no I/O.

mod config;
mod error;
mod session;
mod stats;

pub use config::{MAX_GUESSES, SUGGESTION_COUNT, SessionConfig};
pub use error::GameError;
pub use session::{GameSession, GameState, GuessResult, Outcome};
pub use stats::Statistics;
