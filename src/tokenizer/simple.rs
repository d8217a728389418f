use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenizer::{Doc, Token, Tokenizer};

// Words keep inner connectors (`12:30`, `e-mail`, `don't`); any other
// non-space character stands alone.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:[-'.:/]\w+)*|[^\w\s]").expect("Invalid token regex")
});

/// Rule-based tokenizer linking each token to the next as its right neighbor.
///
/// The chain stands in for a dependency parse: pair candidates become
/// adjacent bigrams. Plug in a real parser through `Tokenizer` for
/// syntactic neighbors.
#[derive(Clone, Debug, Default)]
pub struct SimpleTokenizer {
    stopwords: Option<HashSet<String>>,
}

impl SimpleTokenizer {
    /// Tokenizer using the built-in English stopword list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stopword list.
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = Some(
            stopwords
                .into_iter()
                .map(|word| word.into().to_lowercase())
                .collect(),
        );
        self
    }

    fn split(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut char_offset = 0usize;
        let mut byte_cursor = 0usize;
        for found in TOKEN_PATTERN.find_iter(text) {
            char_offset += text[byte_cursor..found.start()].chars().count();
            let mut token = Token::new(found.as_str(), char_offset);
            if let Some(stopwords) = &self.stopwords {
                token.is_stop = stopwords.contains(&token.text.to_lowercase());
            }
            tokens.push(token);
            char_offset += found.as_str().chars().count();
            byte_cursor = found.end();
        }
        let last = tokens.len().saturating_sub(1);
        for (idx, token) in tokens.iter_mut().enumerate() {
            if idx < last {
                token.rights.push(idx + 1);
            }
        }
        tokens
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Doc {
        let tokens = self.split(text);
        // Every link points at the following token, so construction cannot fail.
        Doc::new(text, tokens).unwrap_or_default()
    }
}
