//! SaberW core types: data model, configuration and errors shared by the codec.

pub mod config;
pub mod error;
pub mod types;

pub use config::{looks_like_source_code, CodecConfig, Profile};
pub use error::{Result, SwError};
pub use types::{Candidate, CompressionResult, CompressionStats, DictionaryEntry, Token, TokenKind};
