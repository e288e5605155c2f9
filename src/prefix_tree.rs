//! Prefix tree (trie) over the `char`s of words.
//!
//! Each edge is labelled with one Unicode scalar value; no normalization
//! is applied, so visually equal strings with different code points are different words.
//!
//! # Examples
//!
//! ```
//! use datastructs::prefix_tree::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.put("tea");
//! tree.put("ten");
//!
//! assert!(tree.contains("tea"));
//! assert!(!tree.contains("te"));
//! assert!(tree.contains_prefix("te"));
//! assert_eq!(tree.len(), 2);
//! ```
use std::collections::BTreeMap;

use crate::builder::{Build, Builder};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
struct Node {
    terminal: bool,
    kids: BTreeMap<char, Node>,
}

/// Set of words searchable by prefix.
#[derive(Debug, Clone, Default)]
pub struct PrefixTree {
    root: Node,
    len: usize,
}

impl PrefixTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct words stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if no word is stored.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `word`, returning `true` if it was not stored yet.
    ///
    /// The empty word is ignored.
    pub fn put(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.kids.entry(c).or_default());
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Checks if `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.terminal)
    }

    /// Checks if some stored word starts with `prefix`.
    ///
    /// The empty prefix is never contained, even when words are stored.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.find(prefix).is_some()
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.kids.get(&c))
    }
}

/// Builder that inserts words into a [`PrefixTree`].
#[derive(Debug, Clone, Default)]
pub struct PrefixTreeBuilder {
    tree: PrefixTree,
}

impl Builder for PrefixTreeBuilder {
    type Item = String;
    type Build = PrefixTree;

    fn push(&mut self, item: Self::Item) -> Result<()> {
        self.tree.put(&item);
        Ok(())
    }

    fn build(self) -> Self::Build {
        self.tree
    }
}

impl Build for PrefixTree {
    type Builder = PrefixTreeBuilder;

    fn builder() -> Self::Builder {
        PrefixTreeBuilder::default()
    }
}
