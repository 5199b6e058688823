//! Five-letter dictionary words
//!
//! Everything a guess or a hidden word needs: validated text plus the raw
//! letter bytes used by scoring and filtering.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase ASCII word of exactly [`WORD_LENGTH`] letters
///
/// Comparison, ordering and hashing follow the text, so sorted words come
/// out in dictionary order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Why a string could not become a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Holds the number of characters given
    InvalidLength(usize),
    NonAscii,
    /// Digits, spaces, punctuation
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected {WORD_LENGTH} letters, found {len}")
            }
            Self::NonAscii => write!(f, "only the letters a-z are allowed"),
            Self::InvalidCharacters => write!(f, "word may contain letters only"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Validate and lowercase `text`
    ///
    /// Length is measured in characters, so a multi-byte input reports the
    /// number of letters the user typed.
    ///
    /// # Errors
    /// - `InvalidLength` unless there are exactly five characters
    /// - `NonAscii` for accented or other non-ASCII letters
    /// - `InvalidCharacters` for anything that is not a letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, WordError};
    ///
    /// let word = Word::new("Sheep").unwrap();
    /// assert_eq!(word.text(), "sheep");
    ///
    /// assert_eq!(Word::new("sheeps"), Err(WordError::InvalidLength(6)));
    /// assert_eq!(Word::new("sh33p"), Err(WordError::InvalidCharacters));
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letter bytes in position order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`.
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.letters.iter().filter(|&&l| l == letter).count() as u8
    }

    /// Occurrences of every letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        self.letters
            .iter()
            .fold(FxHashMap::default(), |mut counts, &letter| {
                *counts.entry(letter).or_insert(0) += 1;
                counts
            })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_five_letters() {
        let word = Word::new("sheep").unwrap();
        assert_eq!(word.text(), "sheep");
        assert_eq!(word.chars(), b"sheep");
        assert_eq!(word.to_string(), "sheep");
    }

    #[test]
    fn mixed_case_is_lowered() {
        assert_eq!(Word::new("NiNeS").unwrap(), Word::new("nines").unwrap());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(Word::new("apples"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("app"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn length_is_counted_in_characters() {
        // Five characters, six bytes
        assert_eq!(Word::new("crèpe"), Err(WordError::NonAscii));
    }

    #[test]
    fn rejects_non_letters() {
        for bad in ["ap1le", "ap le", "appl!", "a-ple"] {
            assert_eq!(Word::new(bad), Err(WordError::InvalidCharacters), "{bad}");
        }
    }

    #[test]
    fn letter_queries() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.char_at(0), b's');
        assert_eq!(word.char_at(4), b'd');
        assert!(word.has_letter(b'p'));
        assert!(!word.has_letter(b'a'));
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn letter_counts_cover_duplicates() {
        let counts = Word::new("sheep").unwrap().letter_counts();
        assert_eq!(counts[&b'e'], 2);
        assert_eq!(counts[&b's'], 1);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn sorts_in_dictionary_order() {
        let mut words: Vec<Word> = ["ample", "amble", "apple", "angle"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["amble", "ample", "angle", "apple"]);
    }
}
