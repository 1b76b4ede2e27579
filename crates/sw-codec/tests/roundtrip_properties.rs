use proptest::prelude::*;
use std::collections::HashSet;
use sw_codec::{compress, decompress, CodecConfig, CASE_FOLD_MARKER, GROUP_MARKER};

/// Word-ish text built from a small vocabulary so words and phrases repeat,
/// mixed with markers, digits and reserved code symbols.
fn wordish_text() -> impl Strategy<Value = String> {
    let piece = prop::sample::select(vec![
        "alpha", "beta", "Gamma", "программа", "go", " ", ", ", ".\n", "3",
        "\u{25CF}", "\u{2193}", "\u{3400}", "\u{348C}",
    ]);
    prop::collection::vec(piece, 0..80).prop_map(|parts| parts.concat())
}

fn configs() -> impl Strategy<Value = CodecConfig> {
    (any::<bool>(), 2usize..5, 1usize..4, 1usize..8).prop_map(|(aggressive, len, freq, short)| CodecConfig {
        min_word_length: len,
        min_frequency: freq,
        min_frequency_for_short_words: short,
        aggressive,
        ..CodecConfig::default()
    })
}

proptest! {
    /// Property 1: arbitrary text survives a round trip unchanged.
    #[test]
    fn prop_roundtrip_arbitrary(text in "\\PC*") {
        let result = compress(&text, &CodecConfig::default()).unwrap();
        prop_assert_eq!(decompress(&result.compressed_text, &result.dictionary), text);
    }

    /// Property 2: repetitive text survives under any valid thresholds.
    #[test]
    fn prop_roundtrip_wordish(text in wordish_text(), config in configs()) {
        let result = compress(&text, &config).unwrap();
        prop_assert_eq!(decompress(&result.compressed_text, &result.dictionary), text);
    }

    /// Property 3: codes are distinct and never occur in the source.
    #[test]
    fn prop_codes_collision_free(text in wordish_text()) {
        let result = compress(&text, &CodecConfig::default()).unwrap();
        let codes: HashSet<&str> = result.dictionary.iter().map(|e| e.code.as_str()).collect();
        prop_assert_eq!(codes.len(), result.dictionary.len());
        for a in &codes {
            for b in &codes {
                let same_tier = a.chars().count() == b.chars().count();
                prop_assert!(a == b || !same_tier || !b.contains(a));
            }
        }
        for entry in &result.dictionary {
            prop_assert!(entry.code.chars().all(|c| !text.contains(c)));
            prop_assert!(result.compressed_text.contains(entry.code.as_str()));
        }
    }

    /// Property 4: case folding decodes to the lowercased text.
    #[test]
    fn prop_case_fold_roundtrip(text in wordish_text()) {
        let config = CodecConfig::default().with_case_normalize(true);
        let result = compress(&text, &config).unwrap();
        let expected = if result.case_folded { text.to_lowercase() } else { text.clone() };
        prop_assert_eq!(decompress(&result.compressed_text, &result.dictionary), expected);
    }

    /// Property 5: the reported sizes add up.
    #[test]
    fn prop_stats_consistent(text in wordish_text()) {
        let result = compress(&text, &CodecConfig::default()).unwrap();
        let stats = result.stats;
        prop_assert_eq!(stats.original_length, text.chars().count());
        prop_assert_eq!(stats.text_length, result.compressed_text.chars().count());
        prop_assert_eq!(stats.compressed_length, stats.text_length + stats.dictionary_cost);
    }
}

#[test]
fn markers_alone_roundtrip() {
    for text in [
        format!("{GROUP_MARKER}"),
        format!("{GROUP_MARKER}9"),
        format!("{CASE_FOLD_MARKER}"),
        format!("{CASE_FOLD_MARKER}{CASE_FOLD_MARKER}{GROUP_MARKER}1"),
    ] {
        let result = compress(&text, &CodecConfig::default()).unwrap();
        assert_eq!(decompress(&result.compressed_text, &result.dictionary), text);
    }
}
