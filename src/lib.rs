#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Run configuration types.
pub mod config;
/// Centralized constants used across extraction, scoring, and emitters.
pub mod constants;
/// Record, candidate, and labeling-function types.
pub mod data;
/// Rendering labeling functions as source text.
pub mod emit;
/// Natural-language pattern explanations.
pub mod explain;
/// Candidate extraction from tokenized text.
pub mod extract;
/// Coverage, precision, and priority helpers.
pub mod heuristics;
/// Label distribution metrics.
pub mod metrics;
/// Extract-then-score runs.
pub mod pipeline;
/// Run reports and registration payloads.
pub mod report;
/// Candidate scoring and compilation.
pub mod score;
/// Record sources and exported-row mapping.
pub mod source;
/// Tokenizer interfaces and the built-in tokenizer.
pub mod tokenizer;
/// Shared type aliases.
pub mod types;
/// Text helpers.
pub mod utils;

mod errors;

pub use config::{
    CoverageFn, ExtractorConfig, MinCoverage, ScorerConfig, SynthesisConfig, TargetLanguage,
};
pub use data::{
    Advisory, Candidate, CandidateSet, LabelingFunction, MatchMode, Record, ScoredFunction,
};
pub use emit::{PythonEmitter, RustEmitter, SourceEmitter};
pub use errors::LfError;
pub use extract::{CandidateExtractor, extract_candidates};
pub use metrics::{LabelDistribution, label_distribution};
pub use pipeline::{AutoLabeler, synthesize};
pub use report::{RegistrationPayload, SynthesisReport};
pub use score::{FunctionScorer, score_and_compile};
pub use source::{InMemorySource, RecordSource, RowMapping, RowSource};
pub use tokenizer::{Doc, SimpleTokenizer, Token, Tokenizer};
pub use types::{AttributeName, FunctionName, Label, LogMessage, Pattern};
