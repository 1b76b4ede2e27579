//! Single-string export: dictionary records, a `___` line, then the compressed text.

use crate::dictionary;
use sw_core::{CompressionResult, DictionaryEntry};

pub const BUNDLE_SEPARATOR: &str = "___";

pub fn to_bundle(result: &CompressionResult) -> String {
    let mut out = dictionary::to_text(&result.dictionary);
    out.push_str(BUNDLE_SEPARATOR);
    out.push('\n');
    out.push_str(&result.compressed_text);
    out
}

/// Split a bundle at the first separator line.
///
/// Without a separator line the whole input is taken as compressed text
/// with an empty dictionary.
pub fn parse_bundle(bundle: &str) -> (Vec<DictionaryEntry>, String) {
    let mut offset = 0;
    for line in bundle.split_inclusive('\n') {
        let next = offset + line.len();
        if line.trim_end_matches(['\n', '\r']) == BUNDLE_SEPARATOR {
            let entries = dictionary::parse(&bundle[..offset]);
            return (entries, bundle[next..].to_string());
        }
        offset = next;
    }
    (Vec::new(), bundle.to_string())
}
