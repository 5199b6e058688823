//! Prefix tree over word bytes

use crate::core::Word;
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    /// Set on the node that ends a stored word
    word: Option<Word>,
}

/// Prefix tree keyed by letter, storing each word at its terminal node
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word
    ///
    /// Returns `false` if the word was already present.
    pub fn insert(&mut self, word: Word) -> bool {
        let mut node = &mut self.root;
        for &letter in word.chars() {
            node = node.children.entry(letter).or_default();
        }

        if node.word.is_some() {
            return false;
        }

        node.word = Some(word);
        self.len += 1;
        true
    }

    /// Exact lookup; prefixes of stored words do not match
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let mut node = &self.root;
        for letter in text.bytes() {
            match node.children.get(&letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.word.is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All stored words in lexicographic order
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        let mut out = Vec::with_capacity(self.len);
        collect(&self.root, &mut out);
        out
    }
}

fn collect(node: &TrieNode, out: &mut Vec<Word>) {
    if let Some(word) = &node.word {
        out.push(word.clone());
    }

    let mut letters: Vec<u8> = node.children.keys().copied().collect();
    letters.sort_unstable();
    for letter in letters {
        collect(&node.children[&letter], out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut trie = Trie::new();
        assert!(trie.insert(word("crane")));
        assert!(trie.insert(word("crate")));

        assert!(trie.contains("crane"));
        assert!(trie.contains("crate"));
        assert!(!trie.contains("crank"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn prefix_is_not_a_member() {
        let mut trie = Trie::new();
        trie.insert(word("crane"));

        assert!(!trie.contains("cra"));
        assert!(!trie.contains(""));
        assert!(!trie.contains("cranes"));
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert(word("apple")));
        assert!(!trie.insert(word("apple")));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.words(), vec![word("apple")]);
    }

    #[test]
    fn words_are_sorted() {
        let mut trie = Trie::new();
        for w in ["slate", "apple", "ample", "crane", "angle"] {
            trie.insert(word(w));
        }

        let texts: Vec<String> = trie.words().iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["ample", "angle", "apple", "crane", "slate"]);
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert!(trie.words().is_empty());
        assert!(!trie.contains("crane"));
    }
}
