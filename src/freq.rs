//! Character frequency tables.

use std::collections::HashMap;

/// Count occurrences of every distinct character in `text`.
pub fn count_chars(text: &str) -> HashMap<char, u64> {
    let mut counts = HashMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// (character, count) pairs sorted by count descending.
///
/// Ties are broken by character code ascending. The tie order is an
/// implementation detail chosen for reproducible output, not a contract.
pub fn ranked(text: &str) -> Vec<(char, u64)> {
    let mut pairs: Vec<(char, u64)> = count_chars(text).into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    pairs
}
