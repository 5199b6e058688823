//! Live set of valid words backed by a [`Trie`]

use super::Trie;
use crate::core::Word;

/// Membership index over a set of words
///
/// The member set is only ever swapped wholesale through [`replace`], never
/// edited word by word.
///
/// [`replace`]: DictionaryIndex::replace
#[derive(Debug, Default, Clone)]
pub struct DictionaryIndex {
    trie: Trie,
}

impl DictionaryIndex {
    /// Build an index from a list of words; duplicates are stored once
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::dictionary::DictionaryIndex;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("crane").unwrap()];
    /// let index = DictionaryIndex::build(words);
    /// assert_eq!(index.len(), 1);
    /// assert!(index.contains("CRANE"));
    /// ```
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word);
        }
        Self { trie }
    }

    /// Exact membership test, case-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&word.to_lowercase())
    }

    /// Snapshot of the members in lexicographic order
    #[must_use]
    pub fn all(&self) -> Vec<Word> {
        self.trie.words()
    }

    /// Swap the member set for `words`
    pub fn replace<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = Word>,
    {
        *self = Self::build(words);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.trie.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn build_deduplicates() {
        let index = DictionaryIndex::build(words(&["apple", "angle", "apple"]));
        assert_eq!(index.len(), 2);
        assert_eq!(index.all(), words(&["angle", "apple"]));
    }

    #[test]
    fn contains_normalizes_case() {
        let index = DictionaryIndex::build(words(&["apple"]));
        assert!(index.contains("apple"));
        assert!(index.contains("APPLE"));
        assert!(index.contains("aPpLe"));
        assert!(!index.contains("ample"));
    }

    #[test]
    fn contains_is_idempotent() {
        let index = DictionaryIndex::build(words(&["apple", "angle"]));
        for _ in 0..3 {
            assert!(index.contains("angle"));
            assert!(!index.contains("axles"));
        }
    }

    #[test]
    fn replace_swaps_members() {
        let mut index = DictionaryIndex::build(words(&["apple", "angle", "amble"]));
        index.replace(words(&["apple"]));

        assert_eq!(index.len(), 1);
        assert!(index.contains("apple"));
        assert!(!index.contains("angle"));
        assert_eq!(index.all(), words(&["apple"]));
    }

    #[test]
    fn empty_index() {
        let index = DictionaryIndex::build(Vec::new());
        assert!(index.is_empty());
        assert!(index.all().is_empty());
    }
}
