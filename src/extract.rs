//! Candidate extraction: propose anchored regex candidates from tokenized text.
//!
//! Per text (lower-cased first):
//! 1. tokenize into a `Doc`;
//! 2. drop irrelevant tokens (punctuation, brackets, single characters, and
//!    stopwords when filtering is enabled);
//! 3. emit `left.*?right` for every relevant token paired with each relevant
//!    left/right neighbor;
//! 4. emit the token alone when it formed no pair.
//!
//! A `^` prefix marks a leftmost token at offset 0, a `$` suffix a rightmost
//! token that is the last token of the text; otherwise that side gets a
//! literal space. Candidates across the corpus are ranked by frequency.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::config::ExtractorConfig;
use crate::constants::extraction::{DIGIT_CLASS, END_ANCHOR, PAIR_SEPARATOR, START_ANCHOR};
use crate::data::{Advisory, Candidate, CandidateSet};
use crate::errors::LfError;
use crate::tokenizer::{Doc, Token, Tokenizer};
use crate::types::Pattern;

/// Proposes regex candidates from a corpus using a pluggable tokenizer.
pub struct CandidateExtractor<T: Tokenizer> {
    tokenizer: T,
    config: ExtractorConfig,
}

impl<T: Tokenizer> CandidateExtractor<T> {
    /// Create an extractor after validating `config`.
    pub fn new(tokenizer: T, config: ExtractorConfig) -> Result<Self, LfError> {
        config.validate()?;
        Ok(Self { tokenizer, config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Rank the `max_candidates` most frequent candidates across `corpus`.
    ///
    /// Small corpora still run; they add an `Advisory::FewRecords`.
    pub fn extract<S: AsRef<str>>(&self, corpus: &[S]) -> CandidateSet {
        let mut advisories = Vec::new();
        if corpus.len() < self.config.min_records {
            let advisory = Advisory::FewRecords {
                records: corpus.len(),
                recommended: self.config.min_records,
            };
            warn!("[autolf:extract] {}", advisory.message());
            advisories.push(advisory);
        }

        let mut counts: IndexMap<Pattern, usize> = IndexMap::new();
        for (idx, text) in corpus.iter().enumerate() {
            for pattern in self.candidates_for_text(text.as_ref()) {
                *counts.entry(pattern).or_insert(0) += 1;
            }
            if (idx + 1) % 10_000 == 0 {
                debug!(
                    "[autolf:extract] tokenized {}/{} texts ({} distinct candidates)",
                    idx + 1,
                    corpus.len(),
                    counts.len()
                );
            }
        }

        let distinct = counts.len();
        let mut ranked: Vec<Candidate> = counts
            .into_iter()
            .map(|(pattern, frequency)| Candidate { pattern, frequency })
            .collect();
        // Stable sort keeps first-seen order among equal frequencies.
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked.truncate(self.config.max_candidates);

        info!(
            "[autolf:extract] texts={} distinct_candidates={} kept={}",
            corpus.len(),
            distinct,
            ranked.len()
        );
        CandidateSet {
            candidates: ranked,
            advisories,
        }
    }

    /// Every candidate emitted for a single text, in emission order, with repeats.
    pub fn candidates_for_text(&self, text: &str) -> Vec<Pattern> {
        let doc = self.tokenizer.tokenize(&text.to_lowercase());
        candidates_for_doc(&doc, self.config.filter_stopwords)
    }
}

/// One-shot extraction with a borrowed tokenizer.
pub fn extract_candidates<S: AsRef<str>>(
    corpus: &[S],
    tokenizer: &dyn Tokenizer,
    config: &ExtractorConfig,
) -> Result<CandidateSet, LfError> {
    let extractor = CandidateExtractor::new(tokenizer, config.clone())?;
    Ok(extractor.extract(corpus))
}

/// Every candidate emitted for an already tokenized document.
pub fn candidates_for_doc(doc: &Doc, filter_stopwords: bool) -> Vec<Pattern> {
    let mut out = Vec::new();
    for (idx, token) in doc.tokens().iter().enumerate() {
        if !is_relevant(token, filter_stopwords) {
            continue;
        }
        let mut paired = false;
        let neighbors = doc.lefts(idx).chain(doc.rights(idx));
        for (neighbor_idx, neighbor) in neighbors {
            if !is_relevant(neighbor, filter_stopwords) {
                continue;
            }
            out.push(pair_candidate(doc, (idx, token), (neighbor_idx, neighbor)));
            paired = true;
        }
        if !paired {
            out.push(anchored(doc, (idx, token), (idx, token), normalize_token(token)));
        }
    }
    out
}

/// Whether a token may contribute to a candidate.
pub fn is_relevant(token: &Token, filter_stopwords: bool) -> bool {
    let excluded = token.is_punct
        || token.is_bracket
        || token.char_len() <= 1
        || (filter_stopwords && token.is_stop);
    !excluded
}

/// Token text, or its shape with digits as `[0-9]` for digit tokens without letters.
pub fn normalize_token(token: &Token) -> String {
    if token.shape.contains('d') && !token.shape.contains('x') {
        token.shape.replace('d', DIGIT_CLASS)
    } else {
        token.text.clone()
    }
}

fn pair_candidate(doc: &Doc, a: (usize, &Token), b: (usize, &Token)) -> Pattern {
    let (left, right) = if (b.1.offset, b.0) < (a.1.offset, a.0) {
        (b, a)
    } else {
        (a, b)
    };
    let body = format!(
        "{}{PAIR_SEPARATOR}{}",
        normalize_token(left.1),
        normalize_token(right.1)
    );
    anchored(doc, left, right, body)
}

fn anchored(doc: &Doc, left: (usize, &Token), right: (usize, &Token), body: String) -> Pattern {
    let prefix = if left.1.offset == 0 { START_ANCHOR } else { " " };
    let suffix = if doc.ends_text(right.0) { END_ANCHOR } else { " " };
    format!("{prefix}{body}{suffix}")
}
