//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess as coloured tiles, one per letter
#[must_use]
pub fn colorize_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match mark {
                Mark::Correct => tile.black().on_green().bold().to_string(),
                Mark::Present => tile.black().on_yellow().bold().to_string(),
                Mark::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Uppercase, comma-separated word list
#[must_use]
pub fn format_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_words_joins_uppercase() {
        let words = vec![Word::new("amble").unwrap(), Word::new("ample").unwrap()];
        assert_eq!(format_words(&words), "AMBLE, AMPLE");
        assert_eq!(format_words(&[]), "");
    }

    #[test]
    fn colorize_guess_keeps_letters() {
        let guess = Word::new("angle").unwrap();
        let feedback = Feedback::parse("GXXGG").unwrap();
        let tiles = colorize_guess(&guess, &feedback);
        for letter in ["A", "N", "G", "L", "E"] {
            assert!(tiles.contains(letter));
        }
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
