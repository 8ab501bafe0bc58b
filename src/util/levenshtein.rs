//! Levenshtein edit distance.
//!
//! Backs the `distance` command and checks variants produced by the blur
//! generator. Neither function restricts the alphabet; distances are counted
//! in `char`s.

use std::cmp::min;

use crate::error::{BlurError, Result};

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Two rows are enough: each row only reads the previous one.
    let mut prev_row: Vec<usize> = (0..=len1).collect();
    let mut curr_row = vec![0; len1 + 1];

    for (j, &c2) in s2_chars.iter().enumerate() {
        curr_row[0] = j + 1;

        for (i, &c1) in s1_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };

            curr_row[i + 1] = min(
                min(
                    curr_row[i] + 1,     // insertion
                    prev_row[i + 1] + 1, // deletion
                ),
                prev_row[i] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len1]
}

/// Levenshtein distance for inputs that may be absent.
///
/// An empty string is a valid input; a missing one is an
/// [`BlurError::InvalidArgument`].
pub fn checked_levenshtein(s1: Option<&str>, s2: Option<&str>) -> Result<usize> {
    match (s1, s2) {
        (Some(a), Some(b)) => Ok(levenshtein_distance(a, b)),
        _ => Err(BlurError::invalid_argument("strings must not be absent")),
    }
}
