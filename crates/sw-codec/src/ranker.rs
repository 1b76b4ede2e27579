//! Candidate ranking by estimated savings.

use sw_core::Candidate;

/// Per-entry dictionary overhead: separator, newline and the code itself.
pub const ENTRY_OVERHEAD: i64 = 3;

/// Chars saved by coding `text` everywhere it occurs, before code cost.
pub fn benefit(text: &str, frequency: usize) -> i64 {
    (text.chars().count() * frequency) as i64 - ENTRY_OVERHEAD
}

/// Merge words and phrases into one list, best first.
///
/// The order decides who gets the scarce single-symbol codes. Ties keep
/// insertion order: words first, then phrases.
pub fn rank(words: Vec<Candidate>, phrases: Vec<Candidate>) -> Vec<Candidate> {
    let mut ranked: Vec<(i64, Candidate)> = words
        .into_iter()
        .chain(phrases)
        .map(|c| (benefit(&c.text, c.frequency), c))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, c)| c).collect()
}
