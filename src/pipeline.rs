//! Extract-then-score runs over a full record set.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::SynthesisConfig;
use crate::data::{Advisory, Record};
use crate::emit::SourceEmitter;
use crate::errors::LfError;
use crate::extract::CandidateExtractor;
use crate::metrics::label_distribution;
use crate::report::{RegistrationPayload, SynthesisReport};
use crate::score::FunctionScorer;
use crate::source::RecordSource;
use crate::tokenizer::Tokenizer;

/// Proposes candidates from record texts and compiles the ones that score well.
pub struct AutoLabeler<T: Tokenizer> {
    extractor: CandidateExtractor<T>,
    scorer: FunctionScorer,
}

impl<T: Tokenizer> AutoLabeler<T> {
    /// Validate `config` and build both stages.
    pub fn new(tokenizer: T, config: SynthesisConfig) -> Result<Self, LfError> {
        Ok(Self {
            extractor: CandidateExtractor::new(tokenizer, config.extractor)?,
            scorer: FunctionScorer::new(config.scorer)?,
        })
    }

    /// Render generated source with a custom emitter.
    pub fn with_emitter(mut self, emitter: Arc<dyn SourceEmitter>) -> Self {
        self.scorer = self.scorer.with_emitter(emitter);
        self
    }

    pub fn extractor(&self) -> &CandidateExtractor<T> {
        &self.extractor
    }

    pub fn scorer(&self) -> &FunctionScorer {
        &self.scorer
    }

    /// Extract candidates from every record's text, then score them against the labeled ones.
    pub fn run(&self, records: &[Record]) -> SynthesisReport {
        let texts: Vec<&str> = records.iter().map(|record| record.text.as_str()).collect();
        let candidates = self.extractor.extract(&texts);
        let functions = self
            .scorer
            .score_and_compile(records, &candidates.patterns());

        let mut advisories = candidates.advisories.clone();
        let unlabeled = records.iter().filter(|record| record.label.is_none()).count();
        if unlabeled > 0 {
            let advisory = Advisory::UnlabeledRecordsSkipped { count: unlabeled };
            warn!("[autolf:pipeline] {}", advisory.message());
            advisories.push(advisory);
        }
        if functions.is_empty() && !candidates.is_empty() {
            advisories.push(Advisory::NoQualifyingFunctions {
                candidates: candidates.len(),
            });
        }

        info!(
            "[autolf:pipeline] records={} candidates={} functions={}",
            records.len(),
            candidates.len(),
            functions.len()
        );
        SynthesisReport {
            records: records.len(),
            label_distribution: label_distribution(records),
            candidates,
            functions,
            advisories,
        }
    }

    /// Load all records from `source` and run on them.
    pub fn run_source(&self, source: &dyn RecordSource) -> Result<SynthesisReport, LfError> {
        let records = source.records()?;
        info!(
            "[autolf:pipeline] source '{}' supplied {} records",
            source.id(),
            records.len()
        );
        Ok(self.run(&records))
    }

    /// Registration payloads for a report, rendered with this run's emitter.
    pub fn registration_payloads(&self, report: &SynthesisReport) -> Vec<RegistrationPayload> {
        report.registration_payloads(self.scorer.emitter())
    }
}

/// One-shot run with a borrowed tokenizer.
pub fn synthesize(
    records: &[Record],
    tokenizer: &dyn Tokenizer,
    config: &SynthesisConfig,
) -> Result<SynthesisReport, LfError> {
    let labeler = AutoLabeler::new(tokenizer, config.clone())?;
    Ok(labeler.run(records))
}
