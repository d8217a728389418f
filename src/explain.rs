//! Natural-language explanations for candidate patterns.

use crate::constants::extraction::{DIGIT_CLASS, END_ANCHOR, PAIR_SEPARATOR, START_ANCHOR};
use crate::utils::normalize_inline_whitespace;

/// Terms of a pattern with anchors stripped, split on the pair separator.
pub fn pattern_terms(pattern: &str) -> Vec<String> {
    let body = pattern.strip_prefix(START_ANCHOR).unwrap_or(pattern);
    let body = body.strip_suffix(END_ANCHOR).unwrap_or(body);
    body.split(PAIR_SEPARATOR)
        .map(normalize_inline_whitespace)
        .collect()
}

/// Describe what `pattern` requires of `attribute`.
///
/// `^order.*?[0-9][0-9]$` on `text` reads: attribute 'text' starts with term
/// 'order' (in-)directly followed by term '[0-9][0-9]' and then ends, where
/// [0-9] is an arbitrary number.
pub fn explain(pattern: &str, attribute: &str) -> String {
    let terms = pattern_terms(pattern);
    let starts = pattern.starts_with(START_ANCHOR);
    let ends = pattern.len() > START_ANCHOR.len() && pattern.ends_with(END_ANCHOR);

    let (first, rest) = match terms.split_first() {
        Some((first, rest)) => (first.as_str(), rest),
        None => ("", &[][..]),
    };
    let mut description = if starts {
        format!("attribute '{attribute}' starts with term '{first}'")
    } else {
        format!("attribute '{attribute}' somewhere contains term '{first}'")
    };
    for term in rest {
        description.push_str(&format!(" (in-)directly followed by term '{term}'"));
    }
    if ends {
        description.push_str(" and then ends");
    }
    if pattern.contains(DIGIT_CLASS) {
        description.push_str(&format!(", where {DIGIT_CLASS} is an arbitrary number"));
    }
    description.push('.');
    description
}
