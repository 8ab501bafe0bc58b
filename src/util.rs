//! Shared utility modules used across blur components.

pub mod levenshtein;
