//! Codec configuration and named heuristic profiles.

use crate::error::{Result, SwError};
use serde::{Deserialize, Serialize};

/// Upper bound on phrase window size; keeps cost at text length × K.
pub const MAX_PHRASE_TOKENS_LIMIT: usize = 32;

const SOURCE_CODE_INDICATORS: &[&str] = &[
    "public ", "private ", "class ", "void ", "return ",
    "import ", "package ", "System.out", "for (", "if (",
    "while (", "try {", "catch (", "def ", "func ", "fn ",
    "<?php", "<html", "<script", "#include", "using ",
];

/// Thresholds for one compression run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecConfig {
    pub min_word_length: usize,
    pub min_frequency: usize,
    /// Two-char words pay a relatively larger code overhead, so they need more hits.
    pub min_frequency_for_short_words: usize,
    pub max_phrase_tokens: usize,
    pub min_phrase_rendered_length: usize,
    /// Lossy: folds the text to lowercase and marks the output. Case is not restored.
    pub case_normalize: bool,
    pub aggressive: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            min_word_length: 3,
            min_frequency: 2,
            min_frequency_for_short_words: 6,
            max_phrase_tokens: 5,
            min_phrase_rendered_length: 7,
            case_normalize: false,
            aggressive: false,
        }
    }
}

impl CodecConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_case_normalize(mut self, enabled: bool) -> Self {
        self.case_normalize = enabled;
        self
    }

    pub fn with_aggressive(mut self, enabled: bool) -> Self {
        self.aggressive = enabled;
        self
    }

    /// Reject thresholds that indicate caller error.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length < 2 {
            return Err(SwError::invalid_config(
                "minWordLength",
                format!("must be at least 2, got {}", self.min_word_length),
            ));
        }
        if self.min_frequency == 0 {
            return Err(SwError::invalid_config("minFrequency", "must be at least 1"));
        }
        if self.min_frequency_for_short_words == 0 {
            return Err(SwError::invalid_config(
                "minFrequencyForShortWords",
                "must be at least 1",
            ));
        }
        if self.max_phrase_tokens > MAX_PHRASE_TOKENS_LIMIT {
            return Err(SwError::invalid_config(
                "maxPhraseTokens",
                format!(
                    "must not exceed {MAX_PHRASE_TOKENS_LIMIT}, got {}",
                    self.max_phrase_tokens
                ),
            ));
        }
        if self.min_phrase_rendered_length == 0 {
            return Err(SwError::invalid_config(
                "minPhraseRenderedLength",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Thresholds actually applied by the pipeline.
    ///
    /// Aggressive mode admits one-char-shorter words, halves the bar for
    /// two-char words (never below `min_frequency`) and accepts phrases two
    /// chars shorter.
    pub fn effective(&self) -> Self {
        if !self.aggressive {
            return self.clone();
        }
        Self {
            min_word_length: self.min_word_length.saturating_sub(1).max(2),
            min_frequency_for_short_words: (self.min_frequency_for_short_words / 2)
                .max(self.min_frequency),
            min_phrase_rendered_length: self.min_phrase_rendered_length.saturating_sub(2).max(2),
            ..self.clone()
        }
    }
}

/// Named heuristic presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Default thresholds.
    Balanced,
    /// Short conversational text: cheaper two-char words.
    Chat,
    /// Identifiers repeat a lot and case matters.
    SourceCode,
    /// Only long, frequent words and long phrases.
    LongWordsOnly,
}

impl Profile {
    pub fn config(&self) -> CodecConfig {
        match self {
            Self::Balanced => CodecConfig::default(),
            Self::Chat => CodecConfig {
                min_frequency_for_short_words: 4,
                aggressive: true,
                ..CodecConfig::default()
            },
            Self::SourceCode => CodecConfig {
                min_word_length: 2,
                min_frequency: 2,
                min_frequency_for_short_words: 4,
                max_phrase_tokens: 10,
                min_phrase_rendered_length: 5,
                case_normalize: false,
                aggressive: true,
            },
            Self::LongWordsOnly => CodecConfig {
                min_word_length: 8,
                min_frequency: 2,
                min_frequency_for_short_words: 999,
                max_phrase_tokens: 5,
                min_phrase_rendered_length: 15,
                case_normalize: false,
                aggressive: false,
            },
        }
    }

    /// Pick a profile from the shape of the text.
    pub fn suggest(text: &str) -> Self {
        if text.chars().count() < 100 {
            Self::Chat
        } else if looks_like_source_code(text) {
            Self::SourceCode
        } else {
            Self::Balanced
        }
    }
}

/// Cheap keyword heuristic; texts under 10 bytes are never treated as code.
pub fn looks_like_source_code(text: &str) -> bool {
    if text.len() < 10 {
        return false;
    }
    SOURCE_CODE_INDICATORS.iter().any(|ind| text.contains(ind))
}
