//! # Blur
//!
//! Fuzzy word completion over a dictionary trie.
//!
//! ## Features
//!
//! - Edit-distance neighbourhoods ("blurs") of a word up to distance 2
//! - Prefix tree with per-node heuristic weights
//! - Greedy best-first completion search
//! - Fuzzy search that combines the two and ranks by length and distance
//! - Command line front end

pub mod cli;
pub mod error;
pub mod fuzzy;
pub mod spelling;
pub mod trie;
pub mod util;

pub mod prelude {
    pub use crate::error::{BlurError, Result};
    pub use crate::fuzzy::{FuzzyConfig, FuzzySearcher, ScoredCompletion};
    pub use crate::spelling::{Candidate, CandidateSet, blur, variants_of};
    pub use crate::trie::Trie;
    pub use crate::trie::heuristic::HeuristicStrategy;
    pub use crate::util::levenshtein::levenshtein_distance;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
