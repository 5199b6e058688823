//! Session configuration

/// Default number of guesses before a game is lost
pub const MAX_GUESSES: usize = 6;

/// Default size of the suggestion sample returned after each guess
pub const SUGGESTION_COUNT: usize = 6;

/// Tunable rules for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_guesses: usize,
    pub suggestion_count: usize,
    /// Only accept guesses still in the narrowed candidate set.
    /// When off, any word from the full list is a valid guess.
    pub restrict_to_candidates: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            suggestion_count: SUGGESTION_COUNT,
            restrict_to_candidates: true,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    #[must_use]
    pub const fn with_suggestion_count(mut self, suggestion_count: usize) -> Self {
        self.suggestion_count = suggestion_count;
        self
    }

    #[must_use]
    pub const fn with_restrict_to_candidates(mut self, restrict: bool) -> Self {
        self.restrict_to_candidates = restrict;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.suggestion_count, 6);
        assert!(config.restrict_to_candidates);
    }

    #[test]
    fn builders_override_fields() {
        let config = SessionConfig::new()
            .with_max_guesses(4)
            .with_suggestion_count(5)
            .with_restrict_to_candidates(false);
        assert_eq!(config.max_guesses, 4);
        assert_eq!(config.suggestion_count, 5);
        assert!(!config.restrict_to_candidates);
    }
}
