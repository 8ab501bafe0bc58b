//! Trie nodes and their identity allocator.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity of a node, unique per [`NodeIdAllocator`].
pub type NodeId = u64;

/// Hands out monotonically increasing node ids.
///
/// Clones share the same counter, so one allocator can serve several tries
/// built on different threads without handing out duplicate ids.
#[derive(Debug, Clone, Default)]
pub struct NodeIdAllocator {
    last: Arc<AtomicU64>,
}

impl NodeIdAllocator {
    /// Create a fresh allocator whose first id is 1.
    pub fn new() -> Self {
        NodeIdAllocator::default()
    }

    /// Allocate the next id.
    pub fn next_id(&self) -> NodeId {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}

/// A node of the dictionary trie.
///
/// The root carries no character and sits at depth 0; every child is one
/// level deeper than its parent. Children are ordered by character, which
/// fixes the tie-break order used by the completion search.
#[derive(Debug, Clone)]
pub struct TrieNode {
    id: NodeId,
    value: Option<char>,
    depth: usize,
    heuristic: u32,
    terminal: bool,
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    pub(crate) fn root(allocator: &NodeIdAllocator) -> Self {
        TrieNode::new(None, 0, allocator.next_id())
    }

    fn new(value: Option<char>, depth: usize, id: NodeId) -> Self {
        TrieNode {
            id,
            value,
            depth,
            heuristic: 0,
            terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// Walk `word` from this node, creating missing children. Returns `true`
    /// if `word` was not already recorded as a word below this node.
    pub(crate) fn insert(&mut self, word: &str, allocator: &NodeIdAllocator) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = self;
        for ch in word.chars() {
            let depth = node.depth + 1;
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| TrieNode::new(Some(ch), depth, allocator.next_id()));
        }

        let added = !node.terminal;
        node.terminal = true;
        added
    }

    /// Follow `path` character by character from this node.
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = self;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The character on the edge into this node; `None` only for the root.
    pub fn value(&self) -> Option<char> {
        self.value
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    pub(crate) fn set_heuristic(&mut self, heuristic: u32) {
        self.heuristic = heuristic;
    }

    pub fn children(&self) -> &BTreeMap<char, TrieNode> {
        &self.children
    }

    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    pub(crate) fn child_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&ch)
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut TrieNode> {
        self.children.values_mut()
    }

    /// Whether a dictionary word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.value.is_none()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::node_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> (TrieNode, NodeIdAllocator) {
        let allocator = NodeIdAllocator::new();
        let mut root = TrieNode::root(&allocator);
        for word in words {
            root.insert(word, &allocator);
        }
        (root, allocator)
    }

    #[test]
    fn test_root_invariants() {
        let (root, _) = build(&[]);
        assert!(root.is_root());
        assert!(root.is_leaf());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.value(), None);
    }

    #[test]
    fn test_depth_follows_parent() {
        let (root, _) = build(&["hats", "happy"]);
        fn check(node: &TrieNode) {
            for child in node.children().values() {
                assert_eq!(child.depth(), node.depth() + 1);
                assert!(!child.is_root());
                check(child);
            }
        }
        check(&root);

        let s = root.descend("hats").unwrap();
        assert_eq!(s.value(), Some('s'));
        assert_eq!(s.depth(), 4);
        assert!(s.is_leaf());
        assert!(root.descend("hx").is_none());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let (mut root, allocator) = build(&["hat", "hats"]);
        let before = root.node_count();

        assert!(!root.insert("hat", &allocator));
        assert!(!root.insert("hats", &allocator));
        assert!(root.insert("ha", &allocator));

        assert_eq!(root.node_count(), before);
        assert_eq!(before, 5);
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let (root, allocator) = build(&["ab", "ac"]);
        let a = root.child('a').unwrap();
        let b = a.child('b').unwrap();
        let c = a.child('c').unwrap();

        assert!(root.id() < a.id());
        assert!(a.id() < b.id());
        assert!(b.id() < c.id());
        assert_eq!(allocator.allocated(), 4);
    }

    #[test]
    fn test_shared_allocator_across_threads() {
        let allocator = NodeIdAllocator::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let allocator = allocator.clone();
                std::thread::spawn(move || {
                    let mut root = TrieNode::root(&allocator);
                    root.insert("abc", &allocator);
                    vec![
                        root.id(),
                        root.descend("a").unwrap().id(),
                        root.descend("ab").unwrap().id(),
                        root.descend("abc").unwrap().id(),
                    ]
                })
            })
            .collect();

        let mut ids: Vec<NodeId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
