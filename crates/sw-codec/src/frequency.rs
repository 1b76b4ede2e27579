//! Word frequency analysis and the word admission rule.

use std::collections::HashMap;
use sw_core::{Candidate, CodecConfig, Token};

/// Word counts in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&i) => self.order[i].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.order.len());
                self.order.push((word.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> usize {
        self.index.get(word).map(|&i| self.order[i].1).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order.iter().map(|(w, n)| (w.as_str(), *n))
    }
}

fn is_alphanumeric_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}

/// Count word tokens made only of letters and digits.
pub fn analyze(tokens: &[Token<'_>]) -> WordFrequencies {
    let mut freq = WordFrequencies::new();
    for token in tokens.iter().filter(|t| t.is_word()) {
        if is_alphanumeric_word(token.value) {
            freq.record(token.value);
        }
    }
    freq
}

/// Whether a word seen `frequency` times is worth a code.
pub fn qualifies(
    word: &str,
    frequency: usize,
    min_length: usize,
    min_frequency: usize,
    min_frequency_for_short_words: usize,
) -> bool {
    let len = word.chars().count();
    if len < 2 {
        return false;
    }
    if len == 2 {
        return frequency >= min_frequency_for_short_words;
    }
    len >= min_length && frequency >= min_frequency
}

/// Qualifying words as uncoded candidates, in first-occurrence order.
pub fn qualified_words(freq: &WordFrequencies, config: &CodecConfig) -> Vec<Candidate> {
    freq.iter()
        .filter(|(word, n)| {
            qualifies(
                word,
                *n,
                config.min_word_length,
                config.min_frequency,
                config.min_frequency_for_short_words,
            )
        })
        .map(|(word, n)| Candidate::new(word, n))
        .collect()
}
