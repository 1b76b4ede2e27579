//! Collision-free code allocation for one source text.

use crate::alphabet::ALPHABET;
use std::collections::HashSet;
use sw_core::Candidate;

/// Issues codes that never occur in the source text.
///
/// Single-symbol codes come first; after those run out, two-symbol codes
/// whose symbols and pair are both absent from the text.
#[derive(Debug, Clone)]
pub struct CodeAllocator {
    text_chars: HashSet<char>,
    text_pairs: HashSet<(char, char)>,
    tier1_cursor: usize,
    pair_cursor: usize,
}

impl CodeAllocator {
    pub fn new(text: &str) -> Self {
        let text_chars: HashSet<char> = text.chars().collect();
        let chars: Vec<char> = text.chars().collect();
        let text_pairs = chars.windows(2).map(|w| (w[0], w[1])).collect();
        Self { text_chars, text_pairs, tier1_cursor: 0, pair_cursor: 0 }
    }

    /// Next safe code, or `None` once both tiers are exhausted.
    pub fn next_code(&mut self) -> Option<String> {
        let tier1 = &ALPHABET.tier1;
        while self.tier1_cursor < tier1.len() {
            let c = tier1[self.tier1_cursor];
            self.tier1_cursor += 1;
            if !self.text_chars.contains(&c) {
                return Some(c.to_string());
            }
        }

        let symbols = &ALPHABET.pair_symbols;
        let n = symbols.len();
        while self.pair_cursor < ALPHABET.tier2_capacity() {
            let (first, second) = (symbols[self.pair_cursor / n], symbols[self.pair_cursor % n]);
            self.pair_cursor += 1;
            if !self.text_chars.contains(&first)
                && !self.text_chars.contains(&second)
                && !self.text_pairs.contains(&(first, second))
            {
                return Some([first, second].iter().collect());
            }
        }
        None
    }

    /// Assign the next safe code to `candidate`.
    pub fn allocate(&mut self, candidate: &mut Candidate) -> Option<String> {
        let code = self.next_code().filter(|code| self.is_safe(code));
        candidate.code = code.clone();
        code
    }

    /// Whether `code` can be inserted anywhere without meeting real text.
    pub fn is_safe(&self, code: &str) -> bool {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), None, None) => !self.text_chars.contains(&c),
            (Some(a), Some(b), None) => {
                !self.text_chars.contains(&a)
                    && !self.text_chars.contains(&b)
                    && !self.text_pairs.contains(&(a, b))
            }
            _ => false,
        }
    }
}
