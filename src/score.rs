//! Candidate scoring and compilation into labeling functions.
//!
//! Each candidate is searched case-insensitively in every labeled record.
//! Matches are tallied per label; the most frequent label becomes the
//! prediction. A candidate qualifies when its rounded precision and coverage
//! clear the configured thresholds. Candidates that fail to compile as a regex
//! are searched as escaped literals instead, and candidates matching nothing
//! are dropped without error.

use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use regex::Regex;
use tracing::{debug, info};

use crate::config::ScorerConfig;
use crate::data::{Label, LabelingFunction, MatchMode, Record, ScoredFunction};
use crate::emit::{SourceEmitter, emitter_for, function_name};
use crate::errors::LfError;
use crate::explain::explain;
use crate::heuristics::{priority, round_score, share};
use crate::types::Pattern;

/// Label counts gathered for one candidate over the scored records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateTally {
    pub pattern: Pattern,
    pub mode: MatchMode,
    /// Matched records per label, in first-seen record order.
    pub label_counts: IndexMap<Label, usize>,
    /// Total matched records.
    pub hits: usize,
}

impl CandidateTally {
    /// Label with the highest count; the earliest-seen label wins ties.
    pub fn predicted_label(&self) -> Option<(&Label, usize)> {
        let mut best: Option<(&Label, usize)> = None;
        for (label, &count) in &self.label_counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }
        best
    }
}

/// Scores candidates against labeled records and compiles the qualifying ones.
pub struct FunctionScorer {
    config: ScorerConfig,
    emitter: Arc<dyn SourceEmitter>,
}

impl FunctionScorer {
    /// Create a scorer after validating `config`; source is rendered for `config.language`.
    pub fn new(config: ScorerConfig) -> Result<Self, LfError> {
        config.validate()?;
        let emitter = emitter_for(config.language);
        Ok(Self { config, emitter })
    }

    /// Render generated source with a custom emitter.
    pub fn with_emitter(mut self, emitter: Arc<dyn SourceEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn emitter(&self) -> &dyn SourceEmitter {
        self.emitter.as_ref()
    }

    /// Score every candidate and return the qualifying functions by descending priority.
    ///
    /// Unlabeled records are never tallied but still count toward `n`, the
    /// coverage denominator and the adaptive threshold. Function
    /// names are numbered in candidate order among qualifying candidates, and
    /// equal priorities keep that order.
    pub fn score_and_compile(&self, records: &[Record], candidates: &[Pattern]) -> Vec<ScoredFunction> {
        let texts: Vec<(String, &Label)> = records
            .iter()
            .filter_map(|record| {
                record
                    .label
                    .as_ref()
                    .map(|label| (record.text.to_lowercase(), label))
            })
            .collect();
        if texts.is_empty() {
            info!("[autolf:score] no labeled records; nothing to score");
            return Vec::new();
        }
        let n = records.len();
        let min_coverage = self.config.min_coverage.threshold(n);

        let tallies: Vec<Option<CandidateTally>> = if self.config.parallel {
            candidates
                .par_iter()
                .map(|pattern| tally_candidate(pattern, &texts))
                .collect()
        } else {
            candidates
                .iter()
                .map(|pattern| tally_candidate(pattern, &texts))
                .collect()
        };

        let mut functions = Vec::new();
        for tally in tallies.into_iter().flatten() {
            let Some((label, count)) = tally.predicted_label() else {
                continue;
            };
            let precision = round_score(share(count, tally.hits));
            let coverage = round_score(share(tally.hits, n));
            if precision < self.config.min_precision || coverage < min_coverage {
                continue;
            }
            let label = label.clone();
            let scored = self.compile(tally, label, coverage, precision, functions.len() + 1);
            functions.push(scored);
        }
        functions.sort_by(|a, b| b.priority.total_cmp(&a.priority));

        info!(
            "[autolf:score] records={} candidates={} qualifying={} min_precision={} min_coverage={:.4}",
            n,
            candidates.len(),
            functions.len(),
            self.config.min_precision,
            min_coverage
        );
        functions
    }

    fn compile(
        &self,
        tally: CandidateTally,
        label: Label,
        coverage: f64,
        precision: f64,
        index: usize,
    ) -> ScoredFunction {
        let explanation = explain(&tally.pattern, &self.config.attribute);
        let function = LabelingFunction {
            name: function_name(index),
            attribute: self.config.attribute.clone(),
            pattern: tally.pattern.clone(),
            prediction: label.clone(),
            mode: tally.mode,
            description: explanation.clone(),
        };
        let generated_source = self.emitter.render(&function);
        ScoredFunction {
            pattern: tally.pattern,
            predicted_label: label,
            coverage,
            precision,
            priority: priority(coverage, precision),
            hits: tally.hits,
            label_counts: tally.label_counts,
            function,
            generated_source,
            explanation,
        }
    }
}

/// One-shot scoring with a fresh `FunctionScorer`.
pub fn score_and_compile(
    records: &[Record],
    candidates: &[Pattern],
    config: &ScorerConfig,
) -> Result<Vec<ScoredFunction>, LfError> {
    let scorer = FunctionScorer::new(config.clone())?;
    Ok(scorer.score_and_compile(records, candidates))
}

/// Compile `pattern` as a regex, falling back to an escaped literal.
///
/// Returns `None` only when neither form can be built.
pub fn compile_candidate(pattern: &str) -> Option<(Regex, MatchMode)> {
    match MatchMode::Regex.compile(pattern) {
        Ok(regex) => Some((regex, MatchMode::Regex)),
        Err(err) => {
            debug!("[autolf:score] searching candidate as literal: {err}");
            MatchMode::Literal
                .compile(pattern)
                .ok()
                .map(|regex| (regex, MatchMode::Literal))
        }
    }
}

/// Tally label matches of `pattern` over lower-cased `(text, label)` pairs.
///
/// `None` when the pattern matched nothing.
pub fn tally_candidate(pattern: &str, texts: &[(String, &Label)]) -> Option<CandidateTally> {
    let (matcher, mode) = compile_candidate(pattern)?;
    let mut label_counts: IndexMap<Label, usize> = IndexMap::new();
    let mut hits = 0usize;
    for (text, label) in texts {
        if matcher.is_match(text) {
            *label_counts.entry((*label).clone()).or_insert(0) += 1;
            hits += 1;
        }
    }
    if hits == 0 {
        return None;
    }
    Some(CandidateTally {
        pattern: pattern.to_string(),
        mode,
        label_counts,
        hits,
    })
}
