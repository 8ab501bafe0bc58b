//! Candidate strings tagged with the number of edits that produced them.

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A `(text, distance)` pair.
///
/// Equality and hashing look at `text` only, so a set never holds two
/// candidates with the same spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate spelling.
    pub text: String,
    /// Number of primitive edits used to produce it.
    pub distance: usize,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new<S: Into<String>>(text: S, distance: usize) -> Self {
        Candidate {
            text: text.into(),
            distance,
        }
    }

    /// The candidate spelling.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Candidate {}

// Must agree with `str`'s hash for the `Borrow<str>` lookups below.
impl Hash for Candidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.as_str().hash(state);
    }
}

impl Borrow<str> for Candidate {
    fn borrow(&self) -> &str {
        &self.text
    }
}

/// A set of candidates keyed by text where the lower distance wins on merge.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    inner: AHashSet<Candidate>,
}

impl CandidateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        CandidateSet {
            inner: AHashSet::new(),
        }
    }

    /// Create an empty set with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        CandidateSet {
            inner: AHashSet::with_capacity(capacity),
        }
    }

    /// Insert a candidate, keeping the smaller distance if the text is
    /// already present. Returns `true` if the set changed.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if let Some(existing) = self.inner.get(candidate.text.as_str())
            && existing.distance <= candidate.distance
        {
            return false;
        }
        self.inner.replace(candidate);
        true
    }

    /// Merge every candidate of `other` into this set.
    pub fn extend<I: IntoIterator<Item = Candidate>>(&mut self, other: I) {
        for candidate in other {
            self.insert(candidate);
        }
    }

    /// Look up a candidate by text.
    pub fn get(&self, text: &str) -> Option<&Candidate> {
        self.inner.get(text)
    }

    /// Check if a spelling is present.
    pub fn contains(&self, text: &str) -> bool {
        self.inner.contains(text)
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.inner.iter()
    }

    /// Consume the set, ordered by distance then text.
    pub fn into_sorted_vec(self) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self.inner.into_iter().collect();
        candidates.sort_by(|a, b| (a.distance, &a.text).cmp(&(b.distance, &b.text)));
        candidates
    }
}

impl IntoIterator for CandidateSet {
    type Item = Candidate;
    type IntoIter = std::collections::hash_set::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl FromIterator<Candidate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_distance() {
        assert_eq!(Candidate::new("hat", 0), Candidate::new("hat", 2));
        assert_ne!(Candidate::new("hat", 1), Candidate::new("hats", 1));
    }

    #[test]
    fn test_lower_distance_wins() {
        let mut set = CandidateSet::new();
        assert!(set.insert(Candidate::new("hat", 2)));
        assert!(set.insert(Candidate::new("hat", 1)));
        assert!(!set.insert(Candidate::new("hat", 2)));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("hat").unwrap().distance, 1);
    }

    #[test]
    fn test_sorted_by_distance_then_text() {
        let set: CandidateSet = vec![
            Candidate::new("hats", 2),
            Candidate::new("hat", 0),
            Candidate::new("bat", 1),
            Candidate::new("at", 1),
        ]
        .into_iter()
        .collect();

        let texts: Vec<String> = set.into_sorted_vec().into_iter().map(|c| c.text).collect();
        assert_eq!(texts, vec!["hat", "at", "bat", "hats"]);
    }

    #[test]
    fn test_sorted_vec_keeps_closest_spelling() {
        let mut set = CandidateSet::new();
        set.insert(Candidate::new("hat", 2));
        set.insert(Candidate::new("bat", 1));
        set.insert(Candidate::new("hat", 0));
        set.insert(Candidate::new("at", 1));

        let sorted = set.into_sorted_vec();
        let pairs: Vec<(&str, usize)> = sorted.iter().map(|c| (c.text(), c.distance)).collect();
        assert_eq!(pairs, vec![("hat", 0), ("at", 1), ("bat", 1)]);
    }
}
