//! Per-node heuristic weights that steer the completion search.
//!
//! Weights are computed bottom-up from the root: leaves get a value derived
//! from their depth and every inner node takes the largest weight among its
//! children. The root itself is pinned to 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BlurError, Result};
use crate::fuzzy::FuzzySearcher;
use crate::trie::Trie;
use crate::trie::node::TrieNode;

/// Numerator of the [`HeuristicStrategy::ShortestCompletion`] leaf weight.
pub const PRECISION_MULTIPLIER: u32 = i32::MAX as u32;

/// How leaf weights are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeuristicStrategy {
    /// Leaf weight is its depth, so deeper (longer) words are explored first.
    #[default]
    LongestCompletion,
    /// Leaf weight is `PRECISION_MULTIPLIER / depth`. Inner nodes still take
    /// the maximum of their children.
    ShortestCompletion,
}

impl HeuristicStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            HeuristicStrategy::LongestCompletion => "longest",
            HeuristicStrategy::ShortestCompletion => "shortest",
        }
    }

    /// Recompute the weight of every node below `root`.
    ///
    /// # Errors
    ///
    /// [`BlurError::State`] if `root` is not a root node.
    pub(crate) fn setup(&self, root: &mut TrieNode) -> Result<()> {
        if !root.is_root() {
            return Err(BlurError::state(format!(
                "heuristics must be computed from the root node, not node {}",
                root.id()
            )));
        }

        root.set_heuristic(0);
        for child in root.children_mut() {
            self.compute(child)?;
        }
        Ok(())
    }

    fn compute(&self, node: &mut TrieNode) -> Result<()> {
        if node.is_leaf() {
            let weight = self.leaf_weight(node.depth())?;
            node.set_heuristic(weight);
            return Ok(());
        }

        let mut best = 0;
        for child in node.children_mut() {
            self.compute(child)?;
            best = best.max(child.heuristic());
        }
        node.set_heuristic(best);
        Ok(())
    }

    fn leaf_weight(&self, depth: usize) -> Result<u32> {
        let depth = u32::try_from(depth)
            .map_err(|_| BlurError::invalid_argument(format!("trie depth {depth} too large")))?;
        match self {
            HeuristicStrategy::LongestCompletion => Ok(depth),
            HeuristicStrategy::ShortestCompletion => PRECISION_MULTIPLIER
                .checked_div(depth)
                .ok_or_else(|| BlurError::state("leaf at depth 0 has no shortest-completion weight")),
        }
    }

    /// Fuzzy lookup of `query` ranked under this strategy.
    ///
    /// # Errors
    ///
    /// [`BlurError::NotImplemented`] for [`HeuristicStrategy::ShortestCompletion`].
    pub fn fuzzy_search(&self, trie: &mut Trie, query: &str, count: usize) -> Result<Vec<String>> {
        match self {
            HeuristicStrategy::LongestCompletion => FuzzySearcher::new().search(trie, query, count),
            HeuristicStrategy::ShortestCompletion => Err(BlurError::not_implemented(
                "fuzzy search ranked by shortest completion",
            )),
        }
    }
}

impl fmt::Display for HeuristicStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
