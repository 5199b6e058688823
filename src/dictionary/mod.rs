//! Dictionary of valid words
//!
//! A prefix tree holds the live candidate set; [`DictionaryIndex`] is the
//! build/contains/all/replace surface the game session works against.

mod index;
mod trie;

pub use index::DictionaryIndex;
pub use trie::Trie;
