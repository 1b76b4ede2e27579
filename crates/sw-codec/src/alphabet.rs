//! Reserved code alphabet (CJK Extension A) and special markers.

use std::sync::LazyLock;

/// Precedes a run-length group of tier-1 codes.
pub const GROUP_MARKER: char = '\u{25CF}';
/// Leading marker of a case-folded output.
pub const CASE_FOLD_MARKER: char = '\u{2193}';
/// Longest run a single group record can hold (one decimal digit).
pub const MAX_GROUP_RUN: usize = 9;

const TIER1_START: u32 = 0x3400;
const TIER1_LEN: u32 = 140;
const PAIR_START: u32 = TIER1_START + TIER1_LEN;
const PAIR_LEN: u32 = 64;

pub struct Alphabet {
    /// Single-symbol codes, in issue order.
    pub tier1: Vec<char>,
    /// Symbols used only as halves of two-symbol codes.
    pub pair_symbols: Vec<char>,
}

impl Alphabet {
    fn build() -> Self {
        let range = |start: u32, len: u32| -> Vec<char> {
            (start..start + len).filter_map(char::from_u32).collect()
        };
        Self {
            tier1: range(TIER1_START, TIER1_LEN),
            pair_symbols: range(PAIR_START, PAIR_LEN),
        }
    }

    pub fn tier2_capacity(&self) -> usize {
        self.pair_symbols.len() * self.pair_symbols.len()
    }
}

pub static ALPHABET: LazyLock<Alphabet> = LazyLock::new(Alphabet::build);

pub fn is_tier1_symbol(c: char) -> bool {
    (TIER1_START..PAIR_START).contains(&(c as u32))
}

pub fn is_pair_symbol(c: char) -> bool {
    (PAIR_START..PAIR_START + PAIR_LEN).contains(&(c as u32))
}

pub fn is_reserved(c: char) -> bool {
    is_tier1_symbol(c) || is_pair_symbol(c)
}
