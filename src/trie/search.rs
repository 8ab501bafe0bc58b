//! Greedy best-first completion extraction.
//!
//! A search session walks down to the node matching the prefix and then
//! repeatedly follows the heaviest child until it reaches a leaf. Each leaf it
//! reaches is emitted once and retired, and the weights along the path are
//! lowered to the best remaining sibling so the next descent explores the
//! next branch. Weights live in a per-session snapshot keyed by node id; the
//! trie itself is not touched, so concurrent searches over the same trie are
//! safe.
//!
//! The order is only locally best-first: a branch is followed while its
//! weight leads among siblings, which is not a global top-k. Among children of
//! equal weight the one with the smallest character wins.

use ahash::AHashMap;

use crate::trie::node::{NodeId, TrieNode};

/// Completions of `prefix` below `root`, at most `max_results` of them.
///
/// Uses the weights currently stored in the trie; [`Trie`](crate::trie::Trie)
/// makes sure they exist before calling in. An empty prefix, a prefix that
/// leaves the trie, or a prefix ending on a leaf yields nothing.
pub(crate) fn find_completions(root: &TrieNode, prefix: &str, max_results: usize) -> Vec<String> {
    if max_results == 0 {
        return Vec::new();
    }
    collect(root, prefix, Some(max_results))
}

/// Like [`find_completions`] but keeps extracting until every reachable leaf
/// with positive weight has been emitted.
pub(crate) fn find_all_completions(root: &TrieNode, prefix: &str) -> Vec<String> {
    collect(root, prefix, None)
}

fn collect(root: &TrieNode, prefix: &str, limit: Option<usize>) -> Vec<String> {
    if prefix.is_empty() {
        return Vec::new();
    }

    let prefix = prefix.to_lowercase();
    let Some(start) = root.descend(&prefix) else {
        return Vec::new();
    };

    let mut session = SearchSession::default();
    session.seed_children(start);

    // The start node contributes the last prefix character itself.
    let mut path = prefix;
    path.pop();

    while session.best_child_weight(start) > 0 {
        session.extract(start, &mut path);
        if limit.is_some_and(|max| session.results.len() >= max) {
            break;
        }
    }

    session.results
}

#[derive(Default)]
struct SearchSession {
    weights: AHashMap<NodeId, u32>,
    results: Vec<String>,
}

impl SearchSession {
    /// Bring the children of `node` into the snapshot unless already there.
    fn seed_children(&mut self, node: &TrieNode) {
        for child in node.children().values() {
            self.weights.entry(child.id()).or_insert(child.heuristic());
        }
    }

    fn weight(&self, node: &TrieNode) -> Option<u32> {
        self.weights.get(&node.id()).copied()
    }

    fn best_child_weight(&self, node: &TrieNode) -> u32 {
        node.children()
            .values()
            .filter_map(|child| self.weight(child))
            .max()
            .unwrap_or(0)
    }

    /// The first child in character order holding the strictly greatest
    /// positive weight.
    fn best_child<'a>(&self, node: &'a TrieNode) -> Option<&'a TrieNode> {
        let mut best: Option<(&TrieNode, u32)> = None;
        for child in node.children().values() {
            let Some(weight) = self.weight(child) else {
                continue;
            };
            if weight > best.map_or(0, |(_, w)| w) {
                best = Some((child, weight));
            }
        }
        best.map(|(child, _)| child)
    }

    fn extract(&mut self, node: &TrieNode, path: &mut String) {
        if let Some(ch) = node.value() {
            path.push(ch);
        }

        if node.is_leaf() {
            self.results.push(path.clone());
            self.weights.insert(node.id(), 0);
        } else if let Some(next) = self.best_child(node) {
            self.seed_children(next);
            self.extract(next, path);
            let remaining = self.best_child_weight(node);
            self.weights.insert(node.id(), remaining);
        } else {
            self.weights.insert(node.id(), 0);
        }

        if node.value().is_some() {
            path.pop();
        }
    }
}
