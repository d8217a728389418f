//! Run summaries: ranked table, JSON export, and registration payloads.

use serde::{Deserialize, Serialize};

use crate::data::{Advisory, CandidateSet, ScoredFunction};
use crate::emit::SourceEmitter;
use crate::errors::LfError;
use crate::heuristics::format_count_with_commas;
use crate::metrics::LabelDistribution;
use crate::types::FunctionName;
use crate::utils::{fit_column, preview};

const LABEL_WIDTH: usize = 16;
const PATTERN_WIDTH: usize = 40;

/// Everything one extract-then-score run produced.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// Records supplied to the run, labeled or not.
    pub records: usize,
    pub candidates: CandidateSet,
    /// Qualifying functions by descending priority.
    pub functions: Vec<ScoredFunction>,
    pub advisories: Vec<Advisory>,
    pub label_distribution: Option<LabelDistribution>,
}

impl SynthesisReport {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Pretty-printed JSON of the whole report.
    pub fn to_json(&self) -> Result<String, LfError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fixed-width table of the ranked functions, preceded by a short header.
    pub fn render(&self) -> String {
        let mut out = format!(
            "records: {}  candidates: {}  functions: {}\n",
            format_count_with_commas(self.records),
            format_count_with_commas(self.candidates.len()),
            format_count_with_commas(self.functions.len())
        );
        for advisory in &self.advisories {
            out.push_str(&format!("warning: {}\n", advisory.message()));
        }
        out.push_str(&render_table(&self.functions));
        out
    }

    /// Payloads for registering every function, rendered by `emitter`.
    pub fn registration_payloads(&self, emitter: &dyn SourceEmitter) -> Vec<RegistrationPayload> {
        self.functions
            .iter()
            .map(|function| registration_payload(function, emitter))
            .collect()
    }
}

/// Body posted when registering a labeling function with the platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub function_name: FunctionName,
    pub description: String,
    pub source_code: String,
    pub programming_language_name: String,
    pub programming_language_version: String,
}

/// Render `function` with `emitter` and wrap it for registration.
pub fn registration_payload(
    function: &ScoredFunction,
    emitter: &dyn SourceEmitter,
) -> RegistrationPayload {
    RegistrationPayload {
        function_name: function.function.name.clone(),
        description: function.explanation.clone(),
        source_code: emitter.render(&function.function),
        programming_language_name: emitter.language().to_string(),
        programming_language_version: emitter.language_version().to_string(),
    }
}

/// Fixed-width table: name, label, estimated coverage and precision, priority, pattern.
pub fn render_table(functions: &[ScoredFunction]) -> String {
    let mut out = format!(
        "{:<10} {} {:>8} {:>9} {:>8}  {}\n",
        "name",
        fit_column("label", LABEL_WIDTH),
        "coverage",
        "precision",
        "priority",
        "pattern"
    );
    for function in functions {
        out.push_str(&format!(
            "{:<10} {} {:>8.2} {:>9.2} {:>8.4}  {}\n",
            function.function.name,
            fit_column(&function.predicted_label, LABEL_WIDTH),
            function.coverage,
            function.precision,
            function.priority,
            preview(&format!("{:?}", function.pattern), PATTERN_WIDTH)
        ));
    }
    out
}
