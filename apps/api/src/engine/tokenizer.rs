//! Tokenizer: lower-cases text and splits it on whitespace runs.

use std::collections::HashSet;

/// Lower-cased, whitespace-delimited tokens longer than one character.
/// Order and duplicates are kept.
///
/// Length is counted in `char`s, not UTF-16 code units. A lone astral character
/// such as "🙂" is one `char` and is dropped, where a UTF-16 length check would
/// count two units and keep it.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Token collection that keeps the ordered sequence and a membership set side by side.
#[derive(Debug, Clone, Default)]
pub struct TokenBag {
    tokens: Vec<String>,
    set: HashSet<String>,
}

impl TokenBag {
    pub fn from_text(text: &str) -> Self {
        let tokens = tokenize(text);
        let set = tokens.iter().cloned().collect();
        Self { tokens, set }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn contains(&self, token: &str) -> bool {
        self.set.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
