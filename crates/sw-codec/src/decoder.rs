//! Single-pass decoder: inverts grouping and substitution.

use crate::alphabet::{CASE_FOLD_MARKER, GROUP_MARKER};
use crate::dictionary::CodeTable;
use sw_core::DictionaryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    GroupHeader,
    GroupBody(usize),
}

/// Size of the group record starting at `chars[0]` (the marker), if it is a well-formed one.
///
/// A marker only opens a group when a count digit follows and the next
/// `count` chars are all single-symbol codes; otherwise it is literal text.
fn group_len(chars: &[char], table: &CodeTable<'_>) -> Option<usize> {
    let n = chars.get(1)?.to_digit(10).filter(|&n| n >= 1)? as usize;
    let body = chars.get(2..2 + n)?;
    body.iter().all(|&c| table.is_single(c)).then_some(n)
}

/// Decode `encoded` with `dictionary`. Lookup misses pass through unchanged.
pub fn decode(encoded: &str, dictionary: &[DictionaryEntry]) -> String {
    let body = encoded.strip_prefix(CASE_FOLD_MARKER).unwrap_or(encoded);
    if dictionary.is_empty() {
        return body.to_string();
    }
    let table = CodeTable::new(dictionary);
    let chars: Vec<char> = body.chars().collect();

    let mut out = String::with_capacity(body.len() * 2);
    let mut state = State::Normal;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Normal => {
                if c == GROUP_MARKER && group_len(&chars[i..], &table).is_some() {
                    state = State::GroupHeader;
                    i += 1;
                } else if let Some(word) = table.single(c) {
                    out.push_str(word);
                    i += 1;
                } else if let Some(word) = chars.get(i + 1).and_then(|&next| table.double(c, next)) {
                    out.push_str(word);
                    i += 2;
                } else {
                    out.push(c);
                    i += 1;
                }
            }
            State::GroupHeader => {
                let n = c.to_digit(10).unwrap_or(0) as usize;
                state = if n == 0 { State::Normal } else { State::GroupBody(n) };
                i += 1;
            }
            State::GroupBody(remaining) => {
                match table.single(c) {
                    Some(word) => out.push_str(word),
                    None => out.push(c),
                }
                i += 1;
                state = if remaining > 1 { State::GroupBody(remaining - 1) } else { State::Normal };
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Vec<DictionaryEntry> {
        vec![
            DictionaryEntry::new("alpha", "\u{3400}", 2),
            DictionaryEntry::new("beta", "\u{3401}", 2),
        ]
    }

    #[test]
    fn literal_marker_without_digit() {
        let text = format!("{GROUP_MARKER}x \u{3400}");
        assert_eq!(decode(&text, &dict()), format!("{GROUP_MARKER}x alpha"));
    }

    #[test]
    fn literal_marker_when_body_is_not_codes() {
        let text = format!("{GROUP_MARKER}2ab");
        assert_eq!(decode(&text, &dict()), text);
    }

    #[test]
    fn truncated_group_is_literal() {
        let text = format!("{GROUP_MARKER}3\u{3400}\u{3401}");
        assert_eq!(decode(&text, &dict()), format!("{GROUP_MARKER}3alphabeta"));
    }

    #[test]
    fn strips_one_case_marker() {
        let text = format!("{CASE_FOLD_MARKER}{CASE_FOLD_MARKER}\u{3400}");
        assert_eq!(decode(&text, &dict()), format!("{CASE_FOLD_MARKER}alpha"));
    }

    #[test]
    fn unknown_code_passes_through() {
        assert_eq!(decode("\u{3405} \u{3400}", &dict()), "\u{3405} alpha");
    }
}
