use autolf::extract::{candidates_for_doc, is_relevant, normalize_token};
use autolf::{
    CandidateExtractor, Doc, ExtractorConfig, MatchMode, Record, ScorerConfig, SimpleTokenizer,
    Token, Tokenizer, score_and_compile,
};
use regex::RegexBuilder;

const TEXTS: &[&str] = &[
    "Order number 12345 was cancelled.",
    "the order (express) shipped today",
    "Refund: please refund my order #42",
    "a b c order x",
    "Where is my parcel?",
    "invoice 2024-05-01 overdue",
    "track parcel 77",
];

fn extractor(filter_stopwords: bool) -> CandidateExtractor<SimpleTokenizer> {
    CandidateExtractor::new(
        SimpleTokenizer::new(),
        ExtractorConfig::default()
            .with_filter_stopwords(filter_stopwords)
            .with_min_records(1),
    )
    .unwrap()
}

fn terms(candidate: &str) -> Vec<String> {
    candidate
        .trim_start_matches('^')
        .trim_end_matches('$')
        .split(".*?")
        .map(|term| term.trim().to_string())
        .collect()
}

#[test]
fn anchors_follow_token_positions() {
    let tokenizer = SimpleTokenizer::new();
    for filter in [true, false] {
        for text in TEXTS {
            let doc = tokenizer.tokenize(&text.to_lowercase());
            let first = doc.get(0).unwrap();
            let last_idx = doc.len() - 1;
            let last = doc.get(last_idx).unwrap();
            for candidate in extractor(filter).candidates_for_text(text) {
                assert!(candidate.starts_with('^') || candidate.starts_with(' '));
                assert!(candidate.ends_with('$') || candidate.ends_with(' '));
                let candidate_terms = terms(&candidate);
                if candidate.starts_with('^') {
                    assert!(is_relevant(first, filter), "{text}: {candidate}");
                    assert_eq!(candidate_terms[0], normalize_token(first));
                }
                if candidate.ends_with('$') {
                    assert!(is_relevant(last, filter), "{text}: {candidate}");
                    assert_eq!(candidate_terms.last().unwrap(), &normalize_token(last));
                }
            }
        }
    }
}

#[test]
fn end_anchor_requires_token_to_end_the_text() {
    for text in ["cancel order \n", "cancel order  ", "cancel order"] {
        let candidates = extractor(true).candidates_for_text(text);
        assert!(!candidates.is_empty(), "{text:?}");
        let ends_with_token = !text.ends_with(char::is_whitespace);
        assert_eq!(
            candidates.iter().any(|candidate| candidate.ends_with('$')),
            ends_with_token,
            "{text:?}: {candidates:?}"
        );
        for candidate in &candidates {
            let matcher = RegexBuilder::new(candidate)
                .case_insensitive(true)
                .build()
                .unwrap();
            assert!(matcher.is_match(&text.to_lowercase()), "{text:?}: {candidate}");
        }
    }
    let records = vec![Record::new("cancel order \n", "cancel")];
    let candidates = extractor(true).candidates_for_text("cancel order \n");
    let functions = score_and_compile(
        &records,
        &candidates,
        &ScorerConfig::default().with_parallel(false),
    )
    .unwrap();
    assert_eq!(functions.len(), candidates.len());
}

#[test]
fn irrelevant_tokens_never_appear_as_terms() {
    for filter in [true, false] {
        let extractor = extractor(filter);
        for text in TEXTS {
            let doc = SimpleTokenizer::new().tokenize(&text.to_lowercase());
            let irrelevant: Vec<&str> = doc
                .tokens()
                .iter()
                .filter(|token| !is_relevant(token, filter))
                .map(|token| token.text.as_str())
                .collect();
            for candidate in extractor.candidates_for_text(text) {
                for term in terms(&candidate) {
                    assert!(!term.is_empty());
                    assert!(
                        !irrelevant.contains(&term.as_str()),
                        "{text}: '{term}' in {candidate}"
                    );
                }
            }
        }
    }
    let with_stopwords = extractor(false).candidates_for_text("the order");
    assert!(with_stopwords.iter().any(|c| terms(c).contains(&"the".to_string())));
}

#[test]
fn extraction_is_stable_across_runs() {
    let corpus: Vec<String> = (0..60)
        .map(|idx| TEXTS[idx % TEXTS.len()].to_string())
        .collect();
    let first = extractor(true).extract(&corpus);
    let second = extractor(true).extract(&corpus);
    assert_eq!(first.candidates, second.candidates);
    for pair in first.candidates.windows(2) {
        assert!(pair[0].frequency >= pair[1].frequency);
    }
}

#[test]
fn scores_are_bounded_and_reproducible() {
    let records: Vec<Record> = (0..40)
        .map(|idx| {
            let label = if idx % 3 == 0 { "status" } else { "refund" };
            Record::new(TEXTS[idx % TEXTS.len()], label)
        })
        .collect();
    let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    let candidates = extractor(true).extract(&texts).patterns();
    let functions = score_and_compile(
        &records,
        &candidates,
        &ScorerConfig::default().with_min_precision(0.0),
    )
    .unwrap();
    assert!(!functions.is_empty());
    for function in &functions {
        assert!((0.0..=1.0).contains(&function.precision));
        assert!((0.0..=1.0).contains(&function.coverage));
        assert_eq!(function.hits, function.label_counts.values().sum::<usize>());

        let matcher = function.function.matcher().unwrap();
        let rescanned = records
            .iter()
            .filter(|record| matcher.is_match(&record.text.to_lowercase()))
            .count();
        assert_eq!(rescanned, function.hits, "{}", function.pattern);

        let local_hits = records
            .iter()
            .filter(|record| function.function.apply(&record.text).unwrap().is_some())
            .count();
        assert_eq!(local_hits, function.hits);
    }
}

#[test]
fn zero_match_candidates_are_absent() {
    let records = vec![
        Record::new("order shipped", "a"),
        Record::new("order lost", "b"),
    ];
    let candidates = vec!["teleport".to_string(), "order".to_string(), "^lost".to_string()];
    let functions = score_and_compile(
        &records,
        &candidates,
        &ScorerConfig::default().with_min_precision(0.0),
    )
    .unwrap();
    let patterns: Vec<&str> = functions.iter().map(|f| f.pattern.as_str()).collect();
    assert_eq!(patterns, vec!["order"]);
}

#[test]
fn unmatched_parenthesis_falls_back_to_literal() {
    let records = vec![
        Record::new("refund (partial) issued", "refund"),
        Record::new("refund issued", "refund"),
        Record::new("where is it", "status"),
    ];
    assert!(RegexBuilder::new("refund (").build().is_err());
    let functions = score_and_compile(
        &records,
        &["refund (".to_string()],
        &ScorerConfig::default(),
    )
    .unwrap();
    assert_eq!(functions.len(), 1);
    let function = &functions[0];
    assert_eq!(function.function.mode, MatchMode::Literal);
    assert_eq!(function.hits, 1);
    assert_eq!(function.predicted_label, "refund");
    assert!(
        function
            .generated_source
            .contains("re.search(re.escape('refund ('), record['text'].lower())")
    );
}

struct HeadTokenizer;

// Attaches every token to the final token, like a parse headed by the last word.
impl Tokenizer for HeadTokenizer {
    fn tokenize(&self, text: &str) -> Doc {
        let mut offset = 0;
        let mut tokens = Vec::new();
        for word in text.split(' ') {
            tokens.push(Token::new(word, offset));
            offset += word.chars().count() + 1;
        }
        let head = tokens.len() - 1;
        tokens[head].lefts = (0..head).collect();
        Doc::new(text, tokens).unwrap()
    }
}

#[test]
fn pluggable_tokenizers_drive_pairing() {
    let extractor =
        CandidateExtractor::new(HeadTokenizer, ExtractorConfig::default().with_min_records(1))
            .unwrap();
    assert_eq!(
        extractor.candidates_for_text("express refund for parcel"),
        vec![
            "^express ".to_string(),
            " refund ".to_string(),
            "^express.*?parcel$".to_string(),
            " refund.*?parcel$".to_string(),
        ]
    );
    let doc = HeadTokenizer.tokenize("late parcel");
    assert_eq!(candidates_for_doc(&doc, true), vec!["^late ", "^late.*?parcel$"]);
}
