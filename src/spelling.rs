//! Spelling primitives for fuzzy lookup.
//!
//! This module holds the alphabet and its noise tuples, the candidate value
//! type, the edit-distance variant generator, and dictionary loading.

pub mod alphabet;
pub mod candidate;
pub mod dictionary;
pub mod variants;

pub use candidate::{Candidate, CandidateSet};
pub use variants::{blur, variants_of};
