//! Phrase detection over repeated runs of 2..K tokens.
//!
//! Windows are slices of the rendered token stream, so sliding a window costs
//! nothing to render. Windows are bucketed by a rolling hash over per-token
//! hashes and counted by exact text inside each bucket.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use sw_core::{Candidate, Token};

const ROLL_BASE: u64 = 0x0000_0100_0000_01b3;

fn hash_str(s: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

/// Rolling hash over a fixed-width window of token hashes.
struct RollingHash {
    value: u64,
    /// ROLL_BASE^(width-1), to drop the leading token.
    lead_weight: u64,
}

impl RollingHash {
    fn new(hashes: &[u64]) -> Self {
        let mut value = 0u64;
        let mut lead_weight = 1u64;
        for (i, h) in hashes.iter().enumerate() {
            value = value.wrapping_mul(ROLL_BASE).wrapping_add(*h);
            if i > 0 {
                lead_weight = lead_weight.wrapping_mul(ROLL_BASE);
            }
        }
        Self { value, lead_weight }
    }

    fn roll(&mut self, outgoing: u64, incoming: u64) {
        self.value = self
            .value
            .wrapping_sub(outgoing.wrapping_mul(self.lead_weight))
            .wrapping_mul(ROLL_BASE)
            .wrapping_add(incoming);
    }
}

/// Distinct rendered phrase inside one hash bucket.
struct Slot<'a> {
    text: &'a str,
    count: usize,
    first: usize,
}

#[derive(Debug)]
struct PhraseHit {
    candidate: Candidate,
    discovery: usize,
}

impl PhraseHit {
    fn score(&self) -> usize {
        self.candidate.char_len() * self.candidate.frequency
    }
}

/// Count every window of `width` tokens, resolving hash collisions by exact match.
fn count_windows<'a>(
    rendered: &'a str,
    bounds: &[usize],
    hashes: &[u64],
    width: usize,
) -> HashMap<u64, Vec<Slot<'a>>> {
    let mut buckets: HashMap<u64, Vec<Slot<'a>>> = HashMap::new();
    let windows = hashes.len() + 1 - width;
    let mut rolling = RollingHash::new(&hashes[..width]);

    for start in 0..windows {
        if start > 0 {
            rolling.roll(hashes[start - 1], hashes[start + width - 1]);
        }
        let text = &rendered[bounds[start]..bounds[start + width]];
        let bucket = buckets.entry(rolling.value).or_default();
        match bucket.iter_mut().find(|slot| slot.text == text) {
            Some(slot) => slot.count += 1,
            None => bucket.push(Slot { text, count: 1, first: start }),
        }
    }
    buckets
}

fn distinct_words(window: &[Token<'_>]) -> usize {
    window
        .iter()
        .filter(|t| t.is_word())
        .map(|t| t.value)
        .collect::<HashSet<_>>()
        .len()
}

/// Drop every phrase contained in a longer accepted phrase.
fn dedup_longest(mut hits: Vec<PhraseHit>) -> Vec<PhraseHit> {
    hits.sort_by(|a, b| b.candidate.char_len().cmp(&a.candidate.char_len()));
    let mut accepted: Vec<PhraseHit> = Vec::with_capacity(hits.len());
    for hit in hits {
        let contained = accepted
            .iter()
            .any(|a| a.candidate.text.contains(hit.candidate.text.as_str()));
        if !contained {
            accepted.push(hit);
        }
    }
    accepted
}

/// Find repeated phrases of 2..=`max_phrase_tokens` tokens.
///
/// A phrase is kept when it occurs at least `min_frequency` times (windows
/// may overlap), renders to at least `min_rendered_length` chars and holds
/// at least two distinct words. Repeats of a single word are left to word
/// coding and grouping.
pub fn detect(
    tokens: &[Token<'_>],
    max_phrase_tokens: usize,
    min_frequency: usize,
    min_rendered_length: usize,
) -> Vec<Candidate> {
    if tokens.len() < 2 || max_phrase_tokens < 2 {
        return Vec::new();
    }

    let mut rendered = String::new();
    let mut bounds = Vec::with_capacity(tokens.len() + 1);
    for token in tokens {
        bounds.push(rendered.len());
        rendered.push_str(token.value);
    }
    bounds.push(rendered.len());
    let hashes: Vec<u64> = tokens.iter().map(|t| hash_str(t.value)).collect();

    let mut hits = Vec::new();
    for width in 2..=max_phrase_tokens.min(tokens.len()) {
        let buckets = count_windows(&rendered, &bounds, &hashes, width);

        let mut found: Vec<&Slot<'_>> = buckets
            .values()
            .filter(|bucket| bucket.iter().map(|s| s.count).sum::<usize>() >= min_frequency)
            .flatten()
            .filter(|slot| {
                slot.count >= min_frequency
                    && slot.text.chars().count() >= min_rendered_length
                    && distinct_words(&tokens[slot.first..slot.first + width]) >= 2
            })
            .collect();
        found.sort_by_key(|slot| slot.first);

        for slot in found {
            let discovery = hits.len();
            hits.push(PhraseHit {
                candidate: Candidate::new(slot.text, slot.count),
                discovery,
            });
        }
    }
    tracing::debug!(raw = hits.len(), "phrase windows admitted");

    let mut hits = dedup_longest(hits);
    hits.sort_by(|a, b| b.score().cmp(&a.score()).then(a.discovery.cmp(&b.discovery)));
    hits.into_iter().map(|h| h.candidate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(text: &str, frequency: usize, discovery: usize) -> PhraseHit {
        PhraseHit { candidate: Candidate::new(text, frequency), discovery }
    }

    #[test]
    fn rolling_matches_fresh_hash() {
        let hashes = [11u64, 22, 33, 44, 55];
        let mut rolling = RollingHash::new(&hashes[0..3]);
        rolling.roll(hashes[0], hashes[3]);
        assert_eq!(rolling.value, RollingHash::new(&hashes[1..4]).value);
        rolling.roll(hashes[1], hashes[4]);
        assert_eq!(rolling.value, RollingHash::new(&hashes[2..5]).value);
    }

    #[test]
    fn dedup_drops_contained_subphrase() {
        let hits = vec![hit("quick brown", 5, 0), hit("the quick brown fox", 3, 1)];
        let kept = dedup_longest(hits);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].candidate.text, "the quick brown fox");
    }

    #[test]
    fn dedup_keeps_unrelated() {
        let hits = vec![hit("lorem ipsum", 2, 0), hit("dolor sit amet", 2, 1)];
        assert_eq!(dedup_longest(hits).len(), 2);
    }

    #[test]
    fn bucket_collision_counts_exactly() {
        // Force every window into one bucket: exact text must still separate them.
        let rendered = "ab cd ab ef";
        let bounds = [0, 2, 3, 5, 6, 8, 9, 11];
        let hashes = [0u64; 7];
        let buckets = count_windows(rendered, &bounds, &hashes, 2);
        assert_eq!(buckets.len(), 1);
        let slots = buckets.values().next().unwrap();
        let ab = slots.iter().find(|s| s.text == "ab ").unwrap();
        assert_eq!(ab.count, 2);
        assert_eq!(ab.first, 0);
        assert!(slots.iter().all(|s| s.text != "ab cd"));
    }
}
