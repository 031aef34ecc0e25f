//! Tokenizer — lowercases free text and splits it into word tokens.
//!
//! Separators are whitespace plus `, ; . ( ) / \ -`. Tokens shorter than
//! `MIN_TOKEN_CHARS` are noise ("a", "to", "js" from "Node.js") and are dropped.

use std::collections::HashSet;

/// Minimum token length in chars.
pub const MIN_TOKEN_CHARS: usize = 3;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '.' | '(' | ')' | '/' | '\\' | '-')
}

/// Splits `text` into normalized tokens, preserving order and duplicates.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Distinct tokens of `text`, for membership checks.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
