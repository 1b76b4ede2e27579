//! Dictionary text form, merge/prune helpers and the decode-side code table.
//!
//! Text form: one `code=word` record per line. Lines are trimmed, lines
//! without `=` are skipped and the first `=` separates code from word.
//! Words are escaped so phrases survive trimming and line splitting:
//! `\\`, `\n`, `\r`, `\t`, and `\s` for a space at either edge.

use crate::alphabet::is_reserved;
use std::collections::{HashMap, HashSet};
use sw_core::DictionaryEntry;

pub const SEPARATOR: char = '=';

fn escape_word(word: &str) -> String {
    let last = word.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(word.len());
    for (i, c) in word.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' if i == 0 || i == last => out.push_str("\\s"),
            c if c.is_whitespace() && (i == 0 || i == last) => {
                out.push_str(&format!("\\u{{{:x}}}", c as u32))
            }
            c => out.push(c),
        }
    }
    out
}

fn unescape_word(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some('u') if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|&h| h != '}').collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u{");
                        out.push_str(&hex);
                        out.push('}');
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Render one record without the trailing newline.
pub fn format_entry(entry: &DictionaryEntry) -> String {
    format!("{}{}{}", entry.code, SEPARATOR, escape_word(&entry.word))
}

/// Newline-delimited `code=word` records.
pub fn to_text(entries: &[DictionaryEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format_entry(entry));
        out.push('\n');
    }
    out
}

/// Parse the text form. Malformed lines are skipped; frequencies are not stored and come back as 0.
pub fn parse(text: &str) -> Vec<DictionaryEntry> {
    let mut entries = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        let Some((code, word)) = line.split_once(SEPARATOR) else {
            if !line.is_empty() {
                tracing::debug!(line = lineno + 1, "skipping dictionary line without separator");
            }
            continue;
        };
        let code = code.trim();
        if code.is_empty() {
            tracing::debug!(line = lineno + 1, "skipping dictionary line with empty code");
            continue;
        }
        entries.push(DictionaryEntry::new(unescape_word(word.trim()), code, 0));
    }
    entries
}

/// Union keyed by word; `primary` wins and codes stay unique.
pub fn merge(primary: &[DictionaryEntry], secondary: &[DictionaryEntry]) -> Vec<DictionaryEntry> {
    let mut words: HashSet<&str> = HashSet::new();
    let mut codes: HashSet<&str> = HashSet::new();
    let mut merged = Vec::with_capacity(primary.len() + secondary.len());
    for entry in primary.iter().chain(secondary) {
        if words.contains(entry.word.as_str()) || codes.contains(entry.code.as_str()) {
            continue;
        }
        words.insert(entry.word.as_str());
        codes.insert(entry.code.as_str());
        merged.push(entry.clone());
    }
    merged
}

/// Keep only entries whose code occurs in `encoded`.
pub fn prune(entries: Vec<DictionaryEntry>, encoded: &str) -> Vec<DictionaryEntry> {
    entries.into_iter().filter(|e| encoded.contains(e.code.as_str())).collect()
}

/// Code → word lookup split by code width.
#[derive(Debug, Default)]
pub struct CodeTable<'a> {
    single: HashMap<char, &'a str>,
    double: HashMap<(char, char), &'a str>,
}

impl<'a> CodeTable<'a> {
    pub fn new(entries: &'a [DictionaryEntry]) -> Self {
        let mut table = Self::default();
        for entry in entries {
            if !entry.code.chars().all(is_reserved) {
                tracing::warn!(code = %entry.code, "dictionary code outside the reserved alphabet may clash with text");
            }
            let mut chars = entry.code.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(c), None, None) => {
                    table.single.entry(c).or_insert(entry.word.as_str());
                }
                (Some(a), Some(b), None) => {
                    table.double.entry((a, b)).or_insert(entry.word.as_str());
                }
                _ => tracing::warn!(code = %entry.code, "ignoring dictionary code of unsupported width"),
            }
        }
        table
    }

    pub fn single(&self, c: char) -> Option<&'a str> {
        self.single.get(&c).copied()
    }

    pub fn double(&self, a: char, b: char) -> Option<&'a str> {
        self.double.get(&(a, b)).copied()
    }

    pub fn is_single(&self, c: char) -> bool {
        self.single.contains_key(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.double.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_round_trip() {
        for word in [" leading", "trailing ", "a\nb", "tab\there", "back\\slash", "\u{3000}wide", "plain"] {
            assert_eq!(unescape_word(&escape_word(word)), word, "{word:?}");
        }
    }

    #[test]
    fn escaped_edges_survive_trim() {
        let escaped = escape_word(" the cat ");
        assert_eq!(escaped, "\\sthe cat\\s");
        assert_eq!(escaped.trim(), escaped);
    }

    #[test]
    fn unknown_escape_is_kept() {
        assert_eq!(unescape_word("a\\qb"), "a\\qb");
        assert_eq!(unescape_word("end\\"), "end\\");
    }
}
