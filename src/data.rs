use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::LfError;

pub use crate::types::{AttributeName, FunctionName, Label, LogMessage, Pattern};

/// One labeled (or unlabeled) text value supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Raw attribute text.
    pub text: String,
    /// Manual or noisy label; `None` for unlabeled records.
    #[serde(default)]
    pub label: Option<Label>,
}

impl Record {
    /// Build a labeled record.
    pub fn new(text: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            text: text.into(),
            label: Some(label.into()),
        }
    }

    /// Build an unlabeled record.
    pub fn unlabeled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
        }
    }
}

/// A proposed pattern and how often extraction emitted it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub pattern: Pattern,
    pub frequency: usize,
}

/// Ranked extraction output plus any advisories raised on the way.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CandidateSet {
    /// Candidates by descending frequency, ties in first-seen order.
    pub candidates: Vec<Candidate>,
    pub advisories: Vec<Advisory>,
}

impl CandidateSet {
    /// Candidate patterns in rank order.
    pub fn patterns(&self) -> Vec<Pattern> {
        self.candidates
            .iter()
            .map(|candidate| candidate.pattern.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Non-fatal condition surfaced to the caller alongside a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    /// The corpus is too small for the estimates to be trusted.
    FewRecords { records: usize, recommended: usize },
    /// Records without a label were left out of the label tally.
    /// They still count toward coverage.
    UnlabeledRecordsSkipped { count: usize },
    /// No candidate cleared the precision and coverage thresholds.
    NoQualifyingFunctions { candidates: usize },
}

impl Advisory {
    /// Human-readable form of the advisory.
    pub fn message(&self) -> LogMessage {
        match self {
            Advisory::FewRecords {
                records,
                recommended,
            } => format!(
                "only {records} records to analyze (fewer than {recommended}); it's best to continue labeling further records before analysis"
            ),
            Advisory::UnlabeledRecordsSkipped { count } => {
                format!("{count} unlabeled records were skipped during scoring; they still count toward coverage")
            }
            Advisory::NoQualifyingFunctions { candidates } => format!(
                "none of the {candidates} candidates reached the precision and coverage thresholds"
            ),
        }
    }
}

/// How a labeling function searches the attribute text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// The pattern is searched as a regular expression.
    Regex,
    /// The pattern did not compile and is searched as an escaped literal.
    Literal,
}

impl MatchMode {
    /// Build the case-insensitive matcher for `pattern` under this mode.
    pub fn compile(self, pattern: &str) -> Result<Regex, LfError> {
        let source = match self {
            MatchMode::Regex => pattern.to_string(),
            MatchMode::Literal => regex::escape(pattern),
        };
        RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|err| LfError::Pattern {
                pattern: pattern.to_string(),
                details: err.to_string(),
            })
    }

    pub fn is_literal(self) -> bool {
        matches!(self, MatchMode::Literal)
    }
}

/// Structured description of a generated labeling function.
///
/// Emitters render this into source text for a target language; `apply`
/// runs it locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelingFunction {
    /// Unique name within one scoring run (`regex_1`, `regex_2`, ...).
    pub name: FunctionName,
    /// Record attribute the function reads.
    pub attribute: AttributeName,
    /// Pattern searched in the lower-cased attribute value.
    pub pattern: Pattern,
    /// Label returned on a match.
    pub prediction: Label,
    /// Regex or escaped-literal matching.
    pub mode: MatchMode,
    /// Natural-language explanation used as the function's doc text.
    pub description: String,
}

impl LabelingFunction {
    /// Compile the matcher this function searches with.
    pub fn matcher(&self) -> Result<Regex, LfError> {
        self.mode.compile(&self.pattern)
    }

    /// Return the predicted label when `text` matches, `None` otherwise.
    pub fn apply(&self, text: &str) -> Result<Option<&Label>, LfError> {
        let matcher = self.matcher()?;
        Ok(matcher
            .is_match(&text.to_lowercase())
            .then_some(&self.prediction))
    }
}

/// A candidate that cleared the thresholds, with its scores and rendered source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredFunction {
    pub pattern: Pattern,
    /// Label with the highest match count; first-seen label wins ties.
    pub predicted_label: Label,
    /// `hits / n`, rounded to two decimals.
    pub coverage: f64,
    /// `label_counts[predicted_label] / hits`, rounded to two decimals.
    pub precision: f64,
    /// `coverage^2 * precision`.
    pub priority: f64,
    /// Number of scored records the pattern matched.
    pub hits: usize,
    /// Matched records per label, in first-seen record order.
    pub label_counts: IndexMap<Label, usize>,
    pub function: LabelingFunction,
    pub generated_source: String,
    pub explanation: String,
}

impl ScoredFunction {
    pub fn name(&self) -> &str {
        &self.function.name
    }

    pub fn is_literal(&self) -> bool {
        self.function.mode.is_literal()
    }
}
