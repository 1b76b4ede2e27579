use serde::{Deserialize, Serialize};

/// Token class: a run of word characters or a run of everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Separator,
}

/// A slice of the source text. Consecutive tokens partition the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub value: &'a str,
    pub kind: TokenKind,
    /// Char offset of the token in the source.
    pub offset: usize,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// A word or phrase under consideration for coding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub frequency: usize,
    pub code: Option<String>,
}

impl Candidate {
    pub fn new(text: impl Into<String>, frequency: usize) -> Self {
        Self { text: text.into(), frequency, code: None }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One accepted `word -> code` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub code: String,
    pub frequency: usize,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<String>, code: impl Into<String>, frequency: usize) -> Self {
        Self { word: word.into(), code: code.into(), frequency }
    }
}

impl TryFrom<Candidate> for DictionaryEntry {
    type Error = Candidate;

    /// Fails with the candidate itself when it never received a code.
    fn try_from(c: Candidate) -> std::result::Result<Self, Self::Error> {
        match c.code {
            Some(code) => Ok(Self { word: c.text, code, frequency: c.frequency }),
            None => Err(c),
        }
    }
}

/// Size accounting for one run, in chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionStats {
    pub original_length: usize,
    /// Encoded text plus the persisted dictionary.
    pub compressed_length: usize,
    pub dictionary_entries: usize,
    pub text_length: usize,
    pub dictionary_cost: usize,
}

impl CompressionStats {
    pub fn ratio(&self) -> f64 {
        if self.original_length == 0 { return 0.0; }
        self.compressed_length as f64 / self.original_length as f64
    }

    pub fn reduction_pct(&self) -> f64 {
        if self.original_length == 0 { return 0.0; }
        (1.0 - self.ratio()) * 100.0
    }
}

impl std::fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Original: {} chars, Compressed: {} chars, Dictionary: {} entries, Ratio: {:.2}",
            self.original_length,
            self.compressed_length,
            self.dictionary_entries,
            self.ratio()
        )
    }
}

/// Output of one compression run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub compressed_text: String,
    pub dictionary: Vec<DictionaryEntry>,
    pub stats: CompressionStats,
    /// The text was lowercased before encoding; decoding will not restore case.
    pub case_folded: bool,
}

impl CompressionResult {
    pub fn empty() -> Self {
        Self::default()
    }
}
