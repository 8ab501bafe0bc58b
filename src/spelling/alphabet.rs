//! The fixed symbol set and its order-independent "noise" tuples.
//!
//! Variant generation is parameterised by tuples of alphabet symbols: one
//! symbol per insertion or substitution slot. Only non-decreasing tuples are
//! produced (`"ab"` but never `"ba"`); the generator tries both role
//! assignments itself.

use std::sync::LazyLock;

use crate::error::{BlurError, Result};

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_SIZE: usize = 29;

/// Lowercase letters followed by space, hyphen and apostrophe.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', ' ', '-', '\'',
];

/// Highest supported tuple order.
pub const MAX_ORDER: usize = 3;

static COMBINATIONS: LazyLock<[Vec<String>; MAX_ORDER]> = LazyLock::new(build_combinations);

/// Returns `true` if `c` belongs to the alphabet.
pub fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == ' ' || c == '-' || c == '\''
}

/// Returns `true` if every character of `word` belongs to the alphabet.
pub fn is_alphabet_word(word: &str) -> bool {
    word.chars().all(is_alphabet_char)
}

/// Every non-decreasing tuple of `order` alphabet symbols, concatenated.
///
/// Tuples are listed in lexicographic order over their alphabet indices
/// (`i <= j <= k`). The tables are computed once per process.
///
/// # Errors
///
/// [`BlurError::InvalidArgument`] unless `order` is 1, 2 or 3.
pub fn combinations(order: usize) -> Result<&'static [String]> {
    if !(1..=MAX_ORDER).contains(&order) {
        return Err(BlurError::invalid_argument(format!(
            "combination order must be 1, 2 or 3, got {order}"
        )));
    }
    Ok(&COMBINATIONS[order - 1])
}

fn build_combinations() -> [Vec<String>; MAX_ORDER] {
    let mut first = Vec::with_capacity(ALPHABET_SIZE);
    let mut second = Vec::new();
    let mut third = Vec::new();

    for i in 0..ALPHABET_SIZE {
        first.push(ALPHABET[i].to_string());
        for j in i..ALPHABET_SIZE {
            second.push([ALPHABET[i], ALPHABET[j]].iter().collect());
            for k in j..ALPHABET_SIZE {
                third.push([ALPHABET[i], ALPHABET[j], ALPHABET[k]].iter().collect());
            }
        }
    }

    [first, second, third]
}
