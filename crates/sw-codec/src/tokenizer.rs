//! Splits text into alternating runs of word characters and separators.

use regex::Regex;
use std::sync::LazyLock;
use sw_core::{Token, TokenKind};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Alphabetic}\p{N}_]+|[^\p{Alphabetic}\p{N}_]+").unwrap()
});

fn is_token_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize `text`. Concatenating the token values gives back `text`.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    for m in TOKEN_RE.find_iter(text) {
        let value = m.as_str();
        let kind = match value.chars().next() {
            Some(c) if is_token_word_char(c) => TokenKind::Word,
            _ => TokenKind::Separator,
        };
        tokens.push(Token { value, kind, offset });
        offset += value.chars().count();
    }
    tokens
}
