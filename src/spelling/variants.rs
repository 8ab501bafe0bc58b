//! Edit-distance variant generation ("blurring").
//!
//! [`blur`] enumerates every string within one or two primitive edits
//! (insertion, deletion, substitution) of a word, using only alphabet
//! symbols for inserted and substituted characters. Each noise tuple from
//! [`combinations`](crate::spelling::alphabet::combinations) drives one pass of
//! [`variants_of`], which scans every position pair `(i, j)` with
//! `0 <= i < j <= len + 1` and applies a fixed table of edit rules.
//!
//! Rules are expressed in the coordinates of the original word. An insertion
//! anchored at `g` goes into the gap before character `g` (so `g == len`
//! appends); deletions and substitutions anchor on a character index. A
//! deletion anchored past the end of the word is a no-op, which is how the
//! insertion+deletion rule also reproduces plain insertions at the last
//! scan column.

use log::debug;

use crate::error::{BlurError, Result};
use crate::spelling::alphabet::combinations;
use crate::spelling::candidate::{Candidate, CandidateSet};

/// Largest edit distance the generator supports.
pub const MAX_BLUR_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
    Insert,
    Delete,
    Substitute,
}

impl EditKind {
    fn consumes_char(self) -> bool {
        !matches!(self, EditKind::Delete)
    }
}

#[derive(Debug, Clone, Copy)]
struct Edit {
    kind: EditKind,
    at: usize,
    ch: char,
}

/// One row of the rule table: which edits to apply for a scan pair `(i, j)`
/// over a word of length `len`, and where to anchor them.
struct EditRule {
    kinds: &'static [EditKind],
    applies: fn(i: usize, j: usize, len: usize) -> bool,
    anchors: fn(i: usize, j: usize) -> [usize; 2],
}

use EditKind::{Delete, Insert, Substitute};

const SINGLE_EDIT_RULES: &[EditRule] = &[
    // insertion
    EditRule {
        kinds: &[Insert],
        applies: |i, j, _| j == i + 1,
        anchors: |i, _| [i, i],
    },
    // deletion
    EditRule {
        kinds: &[Delete],
        applies: |i, j, len| j == i + 1 && j <= len,
        anchors: |i, _| [i, i],
    },
    // substitution
    EditRule {
        kinds: &[Substitute],
        applies: |i, j, len| j == i + 1 && j <= len,
        anchors: |i, _| [i, i],
    },
];

const DOUBLE_EDIT_RULES: &[EditRule] = &[
    // insertion+insertion
    EditRule {
        kinds: &[Insert, Insert],
        applies: |_, _, _| true,
        anchors: |i, j| [i, j - 1],
    },
    // substitution+substitution
    EditRule {
        kinds: &[Substitute, Substitute],
        applies: |_, j, len| j < len,
        anchors: |i, j| [i, j],
    },
    // insertion+substitution
    EditRule {
        kinds: &[Insert, Substitute],
        applies: |_, j, len| j <= len,
        anchors: |i, j| [i, j - 1],
    },
    // substitution+insertion
    EditRule {
        kinds: &[Substitute, Insert],
        applies: |_, j, len| j <= len,
        anchors: |i, j| [i, j],
    },
    // deletion+deletion
    EditRule {
        kinds: &[Delete, Delete],
        applies: |_, j, len| j < len,
        anchors: |i, j| [i, j],
    },
    // deletion+insertion
    EditRule {
        kinds: &[Delete, Insert],
        applies: |_, j, len| j <= len,
        anchors: |i, j| [i, j],
    },
    // insertion+deletion
    EditRule {
        kinds: &[Insert, Delete],
        applies: |_, j, len| j <= len,
        anchors: |i, j| [i, j],
    },
    // deletion+substitution
    EditRule {
        kinds: &[Delete, Substitute],
        applies: |_, j, len| j < len,
        anchors: |i, j| [i, j],
    },
    // substitution+deletion
    EditRule {
        kinds: &[Substitute, Delete],
        applies: |_, j, len| j < len,
        anchors: |i, j| [i, j],
    },
];

/// Every string within `max_distance` edits of `raw_word`.
///
/// The word is trimmed and lowercased first. The result always contains the
/// normalised word itself at distance 0; every other member carries the
/// smallest number of edits that produced it.
///
/// # Errors
///
/// [`BlurError::InvalidArgument`] if `max_distance` exceeds 2.
pub fn blur(max_distance: usize, raw_word: &str) -> Result<CandidateSet> {
    if max_distance > MAX_BLUR_DISTANCE {
        return Err(BlurError::invalid_argument(format!(
            "blur supports edit distances up to {MAX_BLUR_DISTANCE}, got {max_distance}"
        )));
    }

    let word = raw_word.trim().to_lowercase();
    let chars: Vec<char> = word.chars().collect();

    let mut variants = CandidateSet::with_capacity(1 << 12);
    variants.insert(Candidate::new(word.clone(), 0));

    for distance in 1..=max_distance {
        for noise in combinations(distance)? {
            let alt: Vec<char> = noise.chars().collect();
            collect_variants(&alt, &chars, &word, &mut variants);
        }
    }

    debug!(
        "blurred {:?} to distance {}: {} variants",
        word,
        max_distance,
        variants.len()
    );
    Ok(variants)
}

/// Variants of `word` that use exactly the noise characters in `alt_chars`.
///
/// The edit distance is `alt_chars.len()`. With no noise characters the
/// result is the word itself at distance 0; otherwise the word is excluded.
/// Order of `alt_chars` is irrelevant: both role assignments are tried.
///
/// # Errors
///
/// [`BlurError::InvalidArgument`] if more than two noise characters are given.
pub fn variants_of(alt_chars: &[char], word: &str) -> Result<CandidateSet> {
    let mut variants = CandidateSet::new();
    match alt_chars.len() {
        0 => {
            variants.insert(Candidate::new(word, 0));
        }
        1 | 2 => {
            let chars: Vec<char> = word.chars().collect();
            collect_variants(alt_chars, &chars, word, &mut variants);
        }
        n => {
            return Err(BlurError::invalid_argument(format!(
                "variant generation supports edit distances below 3, got {n}"
            )));
        }
    }
    Ok(variants)
}

fn collect_variants(alt: &[char], chars: &[char], word: &str, sink: &mut CandidateSet) {
    let distance = alt.len();
    let rules = if distance == 1 {
        SINGLE_EDIT_RULES
    } else {
        DOUBLE_EDIT_RULES
    };
    let len = chars.len();
    let mut buf = String::with_capacity(word.len() + 2);

    for i in 0..=len + 1 {
        for j in i + 1..=len + 1 {
            for rule in rules {
                if !(rule.applies)(i, j, len) {
                    continue;
                }
                let anchors = (rule.anchors)(i, j);
                let consumed = rule.kinds.iter().filter(|k| k.consumes_char()).count();

                for fill in role_assignments(alt, consumed) {
                    let mut fill = fill.iter().copied();
                    let mut edits = [Edit {
                        kind: Delete,
                        at: usize::MAX,
                        ch: '\0',
                    }; 2];
                    for (slot, &kind) in rule.kinds.iter().enumerate() {
                        edits[slot] = Edit {
                            kind,
                            at: anchors[slot],
                            ch: if kind.consumes_char() {
                                fill.next().unwrap_or('\0')
                            } else {
                                '\0'
                            },
                        };
                    }

                    apply_edits(chars, &edits[..rule.kinds.len()], &mut buf);
                    if buf.is_empty() || buf == word {
                        continue;
                    }
                    if sink.get(&buf).is_some_and(|c| c.distance <= distance) {
                        continue;
                    }
                    sink.insert(Candidate::new(buf.as_str(), distance));
                }
            }
        }
    }
}

/// The character sequences that fill `consumed` insert/substitute slots.
///
/// Two slots take both noise characters in both orders; a single slot takes
/// each noise character on its own.
fn role_assignments(alt: &[char], consumed: usize) -> Vec<[char; 2]> {
    match (consumed, alt) {
        (0, _) => vec![['\0', '\0']],
        (1, _) => alt.iter().map(|&c| [c, '\0']).collect(),
        (_, [a, b]) => vec![[*a, *b], [*b, *a]],
        _ => Vec::new(),
    }
}

fn apply_edits(chars: &[char], edits: &[Edit], out: &mut String) {
    out.clear();
    for k in 0..=chars.len() {
        for edit in edits {
            if edit.kind == Insert && edit.at == k {
                out.push(edit.ch);
            }
        }
        if k == chars.len() {
            break;
        }
        match edits.iter().find(|e| e.kind != Insert && e.at == k) {
            Some(Edit {
                kind: Substitute,
                ch,
                ..
            }) => out.push(*ch),
            Some(_) => {}
            None => out.push(chars[k]),
        }
    }
}
