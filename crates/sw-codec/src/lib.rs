//! SaberW codec: reversible dictionary compression for text.
//!
//! Stages:
//! 1. Tokenizer: word and separator runs
//! 2. Frequency analysis and phrase detection: candidate words and phrases
//! 3. Ranking and code allocation: best candidates get the shortest collision-free codes
//! 4. Encoder: boundary-safe substitution, then run-length grouping of adjacent codes
//! 5. Decoder: single pass that inverts both

pub mod allocator;
pub mod alphabet;
pub mod bundle;
pub mod decoder;
pub mod dictionary;
pub mod encoder;
pub mod frequency;
pub mod phrase;
pub mod pipeline;
pub mod ranker;
pub mod tokenizer;

pub use allocator::CodeAllocator;
pub use alphabet::{CASE_FOLD_MARKER, GROUP_MARKER};
pub use bundle::{parse_bundle, to_bundle};
pub use pipeline::{compress, decompress, Codec};
pub use sw_core::{
    CodecConfig, CompressionResult, CompressionStats, DictionaryEntry, Profile, Result, SwError,
};
