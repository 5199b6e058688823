//! Candidate filtering
//!
//! Narrows a candidate list to the words that could have produced a given
//! feedback row. Duplicate letters are handled fully: an Absent mark on a
//! letter that is also Correct/Present elsewhere in the guess caps the
//! candidate's count of that letter instead of banning it.

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// How many copies of a letter a candidate may hold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LetterBound {
    /// Copies confirmed by Correct/Present marks
    min: u8,
    /// An Absent mark on the letter pins the count to `min`
    exact: bool,
}

/// Everything one (guess, feedback) pair says about the hidden word
#[derive(Debug, Clone)]
pub struct Constraint {
    guess: [u8; WORD_LENGTH],
    marks: [Mark; WORD_LENGTH],
    bounds: FxHashMap<u8, LetterBound>,
}

impl Constraint {
    #[must_use]
    pub fn new(guess: &Word, feedback: &Feedback) -> Self {
        let mut bounds: FxHashMap<u8, LetterBound> = FxHashMap::default();

        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            let bound = bounds.entry(letter).or_default();
            match mark {
                Mark::Correct | Mark::Present => bound.min += 1,
                Mark::Absent => bound.exact = true,
            }
        }

        Self {
            guess: *guess.chars(),
            marks: *feedback.marks(),
            bounds,
        }
    }

    /// Check a candidate against every positional and letter-count rule
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        let positional = self
            .guess
            .iter()
            .zip(&self.marks)
            .zip(candidate.chars())
            .all(|((&g, &mark), &c)| match mark {
                Mark::Correct => c == g,
                // A letter sitting here would have been scored Correct
                Mark::Present | Mark::Absent => c != g,
            });

        positional
            && self.bounds.iter().all(|(&letter, bound)| {
                let count = candidate.count_of(letter);
                if bound.exact {
                    count == bound.min
                } else {
                    count >= bound.min
                }
            })
    }
}

/// Return the candidates consistent with `feedback` for `guess`
///
/// The input is left untouched; the result keeps the input order.
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, Word};
/// use wordle_game::solver::filter_candidates;
///
/// let candidates: Vec<Word> = ["apple", "ample", "axles"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("angle").unwrap();
/// let feedback = Feedback::parse("GXXGG").unwrap();
///
/// let kept = filter_candidates(&candidates, &guess, &feedback);
/// assert_eq!(kept.len(), 2);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    let constraint = Constraint::new(guess, feedback);
    candidates
        .iter()
        .filter(|candidate| constraint.admits(candidate))
        .cloned()
        .collect()
}

/// Check whether `candidate` as the hidden word would score `guess` as `feedback`
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: &Feedback) -> bool {
    Feedback::score(guess, candidate) == *feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<&str> {
        list.iter().map(Word::text).collect()
    }

    const POOL: &[&str] = &[
        "apple", "angle", "ample", "amble", "axles", "crane", "crate", "slate", "sheep", "speed",
        "sheen", "nines", "erase", "eerie", "robot", "floor", "geese", "there", "three", "steer",
        "lemon", "melon", "level", "abbey", "kebab", "babes", "mamma", "llama",
    ];

    #[test]
    fn apple_scenario_exact_membership() {
        let candidates = words(&["apple", "angle", "ample", "amble", "axles"]);
        let guess = Word::new("angle").unwrap();
        let hidden = Word::new("apple").unwrap();
        let feedback = Feedback::score(&guess, &hidden);

        let kept = filter_candidates(&candidates, &guess, &feedback);
        assert_eq!(texts(&kept), ["apple", "ample", "amble"]);
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let candidates = words(&["apple", "angle", "axles"]);
        let before = candidates.clone();
        let guess = Word::new("angle").unwrap();

        let _ = filter_candidates(&candidates, &guess, &Feedback::ALL_ABSENT);
        assert_eq!(candidates, before);
    }

    #[test]
    fn correct_requires_letter_in_place() {
        let candidates = words(&["crane", "crate", "slate"]);
        let guess = Word::new("crane").unwrap();
        let feedback = Feedback::parse("GGGXG").unwrap();

        assert_eq!(texts(&filter_candidates(&candidates, &guess, &feedback)), ["crate"]);
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let candidates = words(&["lemon", "melon", "level"]);
        let guess = Word::new("lemon").unwrap();
        // L somewhere but not first; everything else absent
        let feedback = Feedback::parse("YXXXX").unwrap();

        assert!(filter_candidates(&candidates, &guess, &feedback).is_empty());

        let feedback = Feedback::parse("YGYGG").unwrap();
        assert_eq!(texts(&filter_candidates(&candidates, &guess, &feedback)), ["melon"]);
    }

    #[test]
    fn absent_with_duplicate_caps_letter_count() {
        // SPEED vs SHEEP scores the D absent but both E's correct
        let guess = Word::new("speed").unwrap();
        let hidden = Word::new("sheep").unwrap();
        let feedback = Feedback::score(&guess, &hidden);

        let candidates = words(&["sheep", "speed", "sheen", "steer", "geese"]);
        let kept = filter_candidates(&candidates, &guess, &feedback);
        assert_eq!(texts(&kept), ["sheep"]);
    }

    #[test]
    fn absent_duplicate_does_not_ban_letter() {
        // EERIE vs CRANE: E at 4 correct, E at 0 and 1 absent, R present
        let guess = Word::new("eerie").unwrap();
        let feedback = Feedback::parse("XXYXG").unwrap();

        let candidates = words(&["crane", "there", "three", "geese"]);
        let kept = filter_candidates(&candidates, &guess, &feedback);
        // THERE and THREE have two E's; GEESE has no R
        assert_eq!(texts(&kept), ["crane"]);
    }

    #[test]
    fn constraint_matches_rescoring_on_pool() {
        let pool = words(POOL);
        for guess in &pool {
            for hidden in &pool {
                let feedback = Feedback::score(guess, hidden);
                let constraint = Constraint::new(guess, &feedback);
                for candidate in &pool {
                    assert_eq!(
                        constraint.admits(candidate),
                        is_consistent(candidate, guess, &feedback),
                        "guess {guess}, hidden {hidden}, candidate {candidate}, feedback {feedback}"
                    );
                }
            }
        }
    }

    #[test]
    fn hidden_word_always_survives() {
        let pool = words(POOL);
        for guess in &pool {
            for hidden in &pool {
                let feedback = Feedback::score(guess, hidden);
                let kept = filter_candidates(&pool, guess, &feedback);
                assert!(kept.contains(hidden), "{hidden} dropped after {guess}");
                assert!(kept.iter().all(|w| pool.contains(w)));
            }
        }
    }
}
