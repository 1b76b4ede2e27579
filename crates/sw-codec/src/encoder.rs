//! Boundary-safe substitution followed by run-length grouping of adjacent codes.

use crate::alphabet::{GROUP_MARKER, MAX_GROUP_RUN};
use crate::dictionary::CodeTable;
use std::collections::HashSet;
use sw_core::DictionaryEntry;

/// Encode `text` with `dictionary`. Pure.
pub fn encode(text: &str, dictionary: &[DictionaryEntry]) -> String {
    if text.is_empty() || dictionary.is_empty() {
        return text.to_string();
    }
    let substituted = substitute(text, dictionary);
    group(&substituted, &CodeTable::new(dictionary))
}

/// Replace whole-word occurrences of every entry, longest word first.
pub fn substitute(text: &str, dictionary: &[DictionaryEntry]) -> String {
    let mut sorted: Vec<&DictionaryEntry> = dictionary.iter().filter(|e| !e.word.is_empty()).collect();
    sorted.sort_by(|a, b| b.word.chars().count().cmp(&a.word.chars().count()));

    let codes: HashSet<char> = dictionary.iter().flat_map(|e| e.code.chars()).collect();
    let mut current = text.to_string();
    for entry in sorted {
        current = replace_bounded(&current, &entry.word, &entry.code, &codes);
    }
    current
}

/// Word characters for boundary purposes. Inserted codes are boundaries;
/// reserved symbols that came from the source are ordinary letters.
fn is_word_char(c: char, codes: &HashSet<char>) -> bool {
    c.is_alphanumeric() && !codes.contains(&c)
}

/// The two chars preceding a match: `pending` is unflushed source text after `out`.
fn preceding_pair(out: &str, pending: &str) -> (Option<char>, Option<char>) {
    let mut rev = pending.chars().rev().chain(out.chars().rev());
    let last = rev.next();
    (rev.next(), last)
}

/// One left-to-right pass replacing `word` with `code` where the match sits on word boundaries.
///
/// Only edges where `word` itself has a word character are guarded, so
/// phrases that start or end in punctuation still match next to a word.
fn replace_bounded(text: &str, word: &str, code: &str, codes: &HashSet<char>) -> String {
    let is_word = |c: char| is_word_char(c, codes);
    let guard_start = word.chars().next().is_some_and(is_word);
    let guard_end = word.chars().next_back().is_some_and(is_word);

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;
    while let Some(found) = text[search..].find(word) {
        let start = search + found;
        let end = start + word.len();

        let (prev, before) = preceding_pair(&out, &text[copied..start]);
        let after = text[end..].chars().next();
        let start_ok = !guard_start || !before.is_some_and(is_word);
        let end_ok = !guard_end || !after.is_some_and(is_word);
        // A literal marker and digit right before a code would read back as a group header.
        let mimics_group = prev == Some(GROUP_MARKER) && before.is_some_and(|c| c.is_ascii_digit());

        if start_ok && end_ok && !mimics_group {
            out.push_str(&text[copied..start]);
            out.push_str(code);
            copied = end;
            search = end;
        } else {
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            search = start + step;
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// Collapse runs of two or more single-symbol codes into group records.
pub fn group(text: &str, table: &CodeTable<'_>) -> String {
    if table.is_empty() {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if !table.is_single(chars[i]) {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let run_start = i;
        while i < chars.len() && table.is_single(chars[i]) {
            i += 1;
        }
        for chunk in chars[run_start..i].chunks(MAX_GROUP_RUN) {
            if chunk.len() >= 2 {
                out.push(GROUP_MARKER);
                out.push(char::from(b'0' + chunk.len() as u8));
            }
            out.extend(chunk);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(chars: &str) -> HashSet<char> {
        chars.chars().collect()
    }

    #[test]
    fn replaces_whole_words_only() {
        assert_eq!(replace_bounded("cat concat cat.", "cat", "X", &codes("X")), "X concat X.");
    }

    #[test]
    fn rejected_match_does_not_hide_later_match() {
        assert_eq!(replace_bounded("aaa aa", "aa", "X", &codes("X")), "aaa X");
    }

    #[test]
    fn punctuation_edges_are_not_guarded() {
        assert_eq!(replace_bounded("foo, bar", "foo, ", "X", &codes("X")), "Xbar");
    }

    #[test]
    fn never_codes_right_after_marker_and_digit() {
        let text = format!("{GROUP_MARKER}2, bar");
        assert_eq!(replace_bounded(&text, ", bar", "X", &codes("X")), text);
        assert_eq!(replace_bounded("x2, bar", ", bar", "X", &codes("X")), "x2X");
    }

    #[test]
    fn inserted_code_counts_as_boundary() {
        let set = codes("\u{3400}\u{3401}");
        assert_eq!(replace_bounded("\u{3400}bar", "bar", "\u{3401}", &set), "\u{3400}\u{3401}");
    }

    #[test]
    fn reserved_symbol_from_source_is_a_letter() {
        let set = codes("\u{3401}");
        assert_eq!(replace_bounded("\u{3400}data data", "data", "\u{3401}", &set), "\u{3400}data \u{3401}");
    }
}
