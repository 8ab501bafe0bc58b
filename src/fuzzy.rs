//! End-to-end fuzzy lookup.
//!
//! [`FuzzySearcher`] blurs the query, runs a completion search for every
//! variant, merges the completions and ranks them by
//! `length - distance * distance_penalty`, longest and closest first.

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BlurError, Result};
use crate::spelling::candidate::Candidate;
use crate::spelling::variants::{MAX_BLUR_DISTANCE, blur};
use crate::trie::Trie;
use crate::trie::heuristic::HeuristicStrategy;

/// Configuration for fuzzy lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Maximum edit distance of the query variants (at most 2).
    pub max_distance: usize,
    /// Queries shorter than this return no results.
    pub min_query_length: usize,
    /// Completions longer than `max_length_multiplier * len(query) +
    /// max_length_slack` characters are dropped.
    pub max_length_multiplier: usize,
    /// See `max_length_multiplier`.
    pub max_length_slack: usize,
    /// Score penalty per edit.
    pub distance_penalty: usize,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        FuzzyConfig {
            max_distance: 2,
            min_query_length: 3,
            max_length_multiplier: 2,
            max_length_slack: 3,
            distance_penalty: 4,
        }
    }
}

impl FuzzyConfig {
    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.max_distance > MAX_BLUR_DISTANCE {
            return Err(BlurError::invalid_argument(format!(
                "max_distance must be at most {MAX_BLUR_DISTANCE}, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }

    /// Longest completion kept for a query of `query_len` characters.
    /// Saturates at `usize::MAX`.
    pub fn max_completion_length(&self, query_len: usize) -> usize {
        query_len
            .saturating_mul(self.max_length_multiplier)
            .saturating_add(self.max_length_slack)
    }

    /// `length - distance * distance_penalty`, saturating at the `i64` bounds.
    pub fn score(&self, length: usize, distance: usize) -> i64 {
        let length = i64::try_from(length).unwrap_or(i64::MAX);
        let distance = i64::try_from(distance).unwrap_or(i64::MAX);
        let penalty = i64::try_from(self.distance_penalty).unwrap_or(i64::MAX);
        length.saturating_sub(distance.saturating_mul(penalty))
    }
}

/// A ranked fuzzy match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCompletion {
    /// The completed dictionary word.
    pub text: String,
    /// Edits between the query and the prefix that produced this completion.
    pub distance: usize,
    /// `length - distance * distance_penalty`.
    pub score: i64,
}

/// Fuzzy completion over a [`Trie`].
#[derive(Debug, Clone, Default)]
pub struct FuzzySearcher {
    config: FuzzyConfig,
}

impl FuzzySearcher {
    /// Create a searcher with the default configuration.
    pub fn new() -> Self {
        FuzzySearcher {
            config: FuzzyConfig::default(),
        }
    }

    /// Create a searcher with a custom configuration.
    pub fn with_config(config: FuzzyConfig) -> Result<Self> {
        config.validate()?;
        Ok(FuzzySearcher { config })
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// The best `count` completions for `query`.
    pub fn search(&self, trie: &mut Trie, query: &str, count: usize) -> Result<Vec<String>> {
        Ok(self
            .search_scored(trie, query, count)?
            .into_iter()
            .map(|completion| completion.text)
            .collect())
    }

    /// Like [`FuzzySearcher::search`], keeping the distance and score.
    ///
    /// Heuristics are recomputed over the whole trie on every call.
    pub fn search_scored(
        &self,
        trie: &mut Trie,
        query: &str,
        count: usize,
    ) -> Result<Vec<ScoredCompletion>> {
        let query = query.trim().to_lowercase();
        let query_len = query.chars().count();
        if query_len < self.config.min_query_length || count == 0 {
            return Ok(Vec::new());
        }

        let variants = blur(self.config.max_distance, &query)?.into_sorted_vec();
        trie.setup_heuristics(HeuristicStrategy::LongestCompletion)?;

        let max_len = self.config.max_completion_length(query_len);
        let mut merged: Vec<Candidate> = Vec::new();
        let mut positions: AHashMap<String, usize> = AHashMap::new();

        for variant in &variants {
            for completion in trie.find_completions(&variant.text, count)? {
                if completion.chars().count() > max_len {
                    continue;
                }
                match positions.get(&completion) {
                    Some(&index) => {
                        if merged[index].distance > variant.distance {
                            merged[index].distance = variant.distance;
                        }
                    }
                    None => {
                        positions.insert(completion.clone(), merged.len());
                        merged.push(Candidate::new(completion, variant.distance));
                    }
                }
            }
        }

        let mut ranked: Vec<ScoredCompletion> = merged
            .into_iter()
            .map(|candidate| {
                let score = self.config.score(candidate.char_len(), candidate.distance);
                ScoredCompletion {
                    text: candidate.text,
                    distance: candidate.distance,
                    score,
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            "fuzzy search {:?}: {} variants, {} completions",
            query,
            variants.len(),
            ranked.len()
        );

        ranked.truncate(count);
        Ok(ranked)
    }
}
