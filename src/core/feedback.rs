//! Wordle feedback scoring and representation
//!
//! Each position of a guess receives one [`Mark`]:
//! - Correct: letter in the right position
//! - Present: letter in the word, wrong position
//! - Absent: letter not in the word (or every copy already accounted for)
//!
//! [`Feedback`] is the row of five marks produced for one guess.

use super::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Letter code used in text feedback (G/Y/X)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    /// Coloured square used in emoji feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a mark from a letter code or emoji square
    ///
    /// Accepts `G`/`g`/🟩, `Y`/`y`/🟨 and `X`/`x`/`-`/`_`/⬜/⬛.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess: one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess is the hidden word)
    pub const ALL_CORRECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// All absent
    pub const ALL_ABSENT: Self = Self([Mark::Absent; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Score `guess` against `hidden`
    ///
    /// Implements Wordle's duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the pool of
    ///    hidden letters still available
    /// 2. Second pass: mark a letter present only while the pool still holds
    ///    an unclaimed copy of it, claiming that copy
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let hidden = Word::new("sheep").unwrap();
    /// assert_eq!(Feedback::score(&guess, &hidden).to_string(), "GYGGX");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, hidden: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = hidden.letter_counts();

        // Allow: index needed to compare guess[i], hidden[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == hidden.char_at(i) {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            let letter = guess.char_at(i);
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Count how many positions carry `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Parse feedback from a string like "GYXXG" or "🟩🟨⬜⬜🟩"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-XG").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut chars = s.trim().chars();

        for slot in &mut marks {
            *slot = Mark::from_char(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Render as coloured squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
