//! Compression pipeline: tokenize, analyze, rank, allocate, encode.

use crate::alphabet::CASE_FOLD_MARKER;
use crate::allocator::CodeAllocator;
use crate::{decoder, dictionary, encoder, frequency, phrase, ranker, tokenizer};
use sw_core::{
    looks_like_source_code, Candidate, CodecConfig, CompressionResult, CompressionStats, DictionaryEntry,
    Profile, Result,
};

/// A validated codec. Holds no per-run state, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self { config: profile.config() }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress `text`. Data-dependent shortfalls (no codes left, nothing worth coding)
    /// degrade to a less compressed result, never an error.
    pub fn compress(&self, text: &str) -> CompressionResult {
        if text.is_empty() {
            return CompressionResult::empty();
        }
        let config = self.config.effective();
        let case_folded = config.case_normalize && !looks_like_source_code(text);
        let folded;
        let source: &str = if case_folded {
            folded = text.to_lowercase();
            &folded
        } else {
            text
        };

        let tokens = tokenizer::tokenize(source);
        let words = frequency::qualified_words(&frequency::analyze(&tokens), &config);
        let phrases = phrase::detect(
            &tokens,
            config.max_phrase_tokens,
            config.min_frequency,
            config.min_phrase_rendered_length,
        );
        tracing::debug!(tokens = tokens.len(), words = words.len(), phrases = phrases.len(), "candidates collected");

        let candidates = ranker::rank(words, phrases);
        let entries = assign_codes(source, candidates);
        let encoded = encoder::encode(source, &entries);
        let entries = dictionary::prune(entries, &encoded);

        let mut compressed_text = String::with_capacity(encoded.len() + CASE_FOLD_MARKER.len_utf8());
        if case_folded || source.starts_with(CASE_FOLD_MARKER) {
            compressed_text.push(CASE_FOLD_MARKER);
        }
        compressed_text.push_str(&encoded);

        let stats = statistics(text, &compressed_text, &entries);
        tracing::debug!(
            original = stats.original_length,
            compressed = stats.compressed_length,
            entries = stats.dictionary_entries,
            "compression finished"
        );
        CompressionResult { compressed_text, dictionary: entries, stats, case_folded }
    }

    pub fn decompress(&self, compressed: &str, dictionary: &[DictionaryEntry]) -> String {
        decoder::decode(compressed, dictionary)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::with_profile(Profile::Balanced)
    }
}

/// Give each ranked candidate the next safe code; drop the ones left without.
fn assign_codes(source: &str, candidates: Vec<Candidate>) -> Vec<DictionaryEntry> {
    let mut allocator = CodeAllocator::new(source);
    let mut entries = Vec::with_capacity(candidates.len());
    let mut dropped = 0usize;
    for mut candidate in candidates {
        allocator.allocate(&mut candidate);
        match DictionaryEntry::try_from(candidate) {
            Ok(entry) => entries.push(entry),
            Err(_) => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "code alphabet exhausted, candidates dropped");
    }
    entries
}

fn statistics(original: &str, compressed: &str, entries: &[DictionaryEntry]) -> CompressionStats {
    let text_length = compressed.chars().count();
    let dictionary_cost = dictionary::to_text(entries).chars().count();
    CompressionStats {
        original_length: original.chars().count(),
        compressed_length: text_length + dictionary_cost,
        dictionary_entries: entries.len(),
        text_length,
        dictionary_cost,
    }
}

/// Compress once with `config`. Fails only on invalid configuration.
pub fn compress(text: &str, config: &CodecConfig) -> Result<CompressionResult> {
    Ok(Codec::new(config.clone())?.compress(text))
}

pub fn decompress(compressed: &str, dictionary: &[DictionaryEntry]) -> String {
    decoder::decode(compressed, dictionary)
}
