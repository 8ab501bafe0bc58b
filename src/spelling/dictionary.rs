//! Dictionary loading: one word per line into a [`Trie`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::alphabet::is_alphabet_word;
use crate::trie::Trie;

/// Summary of a dictionary load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Lines that added a new word.
    pub inserted: usize,
    /// Lines that repeated a word already present.
    pub duplicates: usize,
    /// Empty lines and lines with symbols outside the alphabet.
    pub skipped: usize,
}

/// Normalise one dictionary line, or `None` if it should be skipped.
pub fn normalize_entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() || !is_alphabet_word(&word) {
        return None;
    }
    Some(word)
}

/// Insert every line of `reader` into `trie`.
///
/// Read failures are returned as [`BlurError::Io`](crate::error::BlurError::Io)
/// with the underlying error attached.
pub fn load_lines<R: BufRead>(reader: R, trie: &mut Trie) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        match normalize_entry(&line) {
            Some(word) => {
                if trie.insert(&word) {
                    stats.inserted += 1;
                } else {
                    stats.duplicates += 1;
                }
            }
            None => {
                if !line.trim().is_empty() {
                    debug!("skipping dictionary line {}: {:?}", line_num + 1, line);
                }
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

/// Load a dictionary file with one word per line.
pub fn load_file<P: AsRef<Path>>(path: P, trie: &mut Trie) -> Result<LoadStats> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let stats = load_lines(BufReader::new(file), trie)?;

    info!(
        "loaded {} words from {} ({} duplicates, {} skipped)",
        stats.inserted,
        path.display(),
        stats.duplicates,
        stats.skipped
    );
    Ok(stats)
}
