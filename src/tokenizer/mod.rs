//! Tokenized-document interfaces consumed by candidate extraction.
//!
//! Ownership model:
//! - `Doc` owns its tokens; neighbor links are indices into the same `Doc`.
//! - `Tokenizer` turns lower-cased text into a `Doc`. Any parser that can
//!   report token text, shape, offset, flags, and left/right neighbors fits.
//! - `SimpleTokenizer` is the built-in rule-based implementation.

use crate::errors::LfError;

/// Word-shape signatures.
pub mod shape;
/// Built-in rule-based tokenizer.
pub mod simple;
/// English stopword list.
pub mod stopwords;

pub use shape::shape;
pub use simple::SimpleTokenizer;
pub use stopwords::is_stopword;

/// One token of a tokenized text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token text as it appears in the source.
    pub text: String,
    /// Character-class signature (`order` -> `xxxx`, `12345` -> `dddd`).
    pub shape: String,
    /// Character offset of the token start within the text.
    pub offset: usize,
    pub is_punct: bool,
    pub is_bracket: bool,
    pub is_stop: bool,
    /// Indices of syntactic neighbors to the left, in text order.
    pub lefts: Vec<usize>,
    /// Indices of syntactic neighbors to the right, in text order.
    pub rights: Vec<usize>,
}

impl Token {
    /// Build a token with shape and flags derived from its text and no neighbors.
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        Self {
            shape: shape(&text),
            is_punct: is_punctuation(&text),
            is_bracket: is_bracket(&text),
            is_stop: is_stopword(&text),
            text,
            offset,
            lefts: Vec::new(),
            rights: Vec::new(),
        }
    }

    /// Set the left neighbor indices.
    pub fn with_lefts(mut self, lefts: Vec<usize>) -> Self {
        self.lefts = lefts;
        self
    }

    /// Set the right neighbor indices.
    pub fn with_rights(mut self, rights: Vec<usize>) -> Self {
        self.rights = rights;
        self
    }

    /// Override the stopword flag.
    pub fn with_stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A tokenized text with neighbor links resolved by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Doc {
    text: String,
    tokens: Vec<Token>,
}

impl Doc {
    /// Build a document, rejecting neighbor links that point outside it or at the token itself.
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Result<Self, LfError> {
        let len = tokens.len();
        for (idx, token) in tokens.iter().enumerate() {
            for &neighbor in token.lefts.iter().chain(token.rights.iter()) {
                if neighbor >= len {
                    return Err(LfError::InvalidDocument {
                        details: format!(
                            "token {idx} ('{}') links to index {neighbor} but the document has {len} tokens",
                            token.text
                        ),
                    });
                }
                if neighbor == idx {
                    return Err(LfError::InvalidDocument {
                        details: format!("token {idx} ('{}') links to itself", token.text),
                    });
                }
            }
        }
        Ok(Self {
            text: text.into(),
            tokens,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(idx)
    }

    /// Whether the token at `idx` ends exactly at the end of the text.
    ///
    /// Trailing whitespace after the final token means no token ends the text.
    pub fn ends_text(&self, idx: usize) -> bool {
        self.tokens
            .get(idx)
            .is_some_and(|token| token.offset + token.char_len() == self.text.chars().count())
    }

    /// Left neighbors of the token at `idx` as `(index, token)` pairs.
    pub fn lefts(&self, idx: usize) -> impl Iterator<Item = (usize, &Token)> + '_ {
        let indices = self.tokens.get(idx).map_or(&[][..], |token| token.lefts.as_slice());
        self.resolve(indices)
    }

    /// Right neighbors of the token at `idx` as `(index, token)` pairs.
    pub fn rights(&self, idx: usize) -> impl Iterator<Item = (usize, &Token)> + '_ {
        let indices = self.tokens.get(idx).map_or(&[][..], |token| token.rights.as_slice());
        self.resolve(indices)
    }

    fn resolve<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = (usize, &'a Token)> + 'a {
        indices
            .iter()
            .filter_map(move |&neighbor| self.tokens.get(neighbor).map(|token| (neighbor, token)))
    }
}

/// Produces a tokenized `Doc` for a text.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text`. Callers pass text already lower-cased.
    fn tokenize(&self, text: &str) -> Doc;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Doc {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Doc {
        (**self).tokenize(text)
    }
}

/// True when every character of `text` is punctuation.
pub fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punctuation_char)
}

fn is_punctuation_char(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '…' | '–' | '—' | '‘' | '’' | '“' | '”' | '«' | '»' | '¿' | '¡' | '·'
        )
}

/// True for single opening or closing brackets.
pub fn is_bracket(text: &str) -> bool {
    matches!(text, "(" | ")" | "[" | "]" | "{" | "}" | "<" | ">")
}
