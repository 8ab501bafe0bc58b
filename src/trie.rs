//! Prefix tree over the dictionary with heuristic-guided completion.
//!
//! [`Trie`] owns the root [`TrieNode`](node::TrieNode) and the id allocator
//! used to build it. Words are lowercased on insertion. Heuristic weights are
//! computed on demand: the first completion query after an insertion
//! recomputes them with [`HeuristicStrategy::LongestCompletion`] unless
//! another strategy has been set up explicitly.

pub mod heuristic;
pub mod node;
mod search;

use std::io::BufRead;
use std::path::Path;

use log::{debug, trace};

use crate::error::Result;
use crate::spelling::dictionary::{self, LoadStats};
use crate::trie::heuristic::HeuristicStrategy;
use crate::trie::node::{NodeIdAllocator, TrieNode};

/// A dictionary trie.
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
    allocator: NodeIdAllocator,
    weighted_by: Option<HeuristicStrategy>,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie with its own id allocator.
    pub fn new() -> Self {
        Trie::with_allocator(NodeIdAllocator::new())
    }

    /// Create an empty trie drawing node ids from `allocator`.
    pub fn with_allocator(allocator: NodeIdAllocator) -> Self {
        let root = TrieNode::root(&allocator);
        Trie {
            root,
            allocator,
            weighted_by: None,
            word_count: 0,
        }
    }

    /// Build a trie from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Build a trie from a reader yielding one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut trie = Trie::new();
        dictionary::load_lines(reader, &mut trie)?;
        Ok(trie)
    }

    /// Insert every word of a dictionary file, one per line.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadStats> {
        dictionary::load_file(path, self)
    }

    /// Insert a word, lowercasing it first. Returns `true` if it was new.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        let added = self.root.insert(&word, &self.allocator);
        if added {
            trace!("inserted {word:?}");
            self.word_count += 1;
            self.weighted_by = None;
        }
        added
    }

    /// Whether `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.root
            .descend(&word.to_lowercase())
            .is_some_and(|node| !node.is_root() && node.is_terminal())
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut TrieNode {
        &mut self.root
    }

    pub fn allocator(&self) -> &NodeIdAllocator {
        &self.allocator
    }

    /// The strategy behind the stored weights, if they are current.
    pub fn heuristic_strategy(&self) -> Option<HeuristicStrategy> {
        self.weighted_by
    }

    /// Recompute every node weight with `strategy`.
    pub fn setup_heuristics(&mut self, strategy: HeuristicStrategy) -> Result<()> {
        strategy.setup(&mut self.root)?;
        self.weighted_by = Some(strategy);
        debug!(
            "computed {} heuristics for {} words",
            strategy, self.word_count
        );
        Ok(())
    }

    fn ensure_heuristics(&mut self) -> Result<()> {
        if self.weighted_by.is_none() {
            self.setup_heuristics(HeuristicStrategy::default())?;
        }
        Ok(())
    }

    /// Up to `max_results` completions of `prefix`, heaviest branch first.
    pub fn find_completions(&mut self, prefix: &str, max_results: usize) -> Result<Vec<String>> {
        self.ensure_heuristics()?;
        Ok(search::find_completions(&self.root, prefix, max_results))
    }

    /// Every completion of `prefix` the search can reach.
    pub fn find_all_completions(&mut self, prefix: &str) -> Result<Vec<String>> {
        self.ensure_heuristics()?;
        Ok(search::find_all_completions(&self.root, prefix))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
