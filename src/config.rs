use std::fmt;
use std::sync::Arc;

use crate::constants::emit::DEFAULT_ATTRIBUTE;
use crate::constants::extraction::{DEFAULT_MAX_CANDIDATES, MIN_RECORDS_FOR_CONFIDENCE};
use crate::constants::heuristics::{DEFAULT_MIN_PRECISION, MIN_COVERAGE_SCALE};
use crate::errors::LfError;
use crate::heuristics::min_coverage_inverse_sqrt;
use crate::types::AttributeName;

/// Custom minimum-coverage threshold as a function of the scored record count.
pub type CoverageFn = Arc<dyn Fn(usize) -> f64 + Send + Sync + 'static>;

/// Controls how candidates are proposed from a corpus.
#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    /// Number of most frequent candidates returned.
    pub max_candidates: usize,
    /// Whether stopword tokens are excluded from candidates.
    pub filter_stopwords: bool,
    /// Corpora smaller than this produce a low-confidence advisory.
    pub min_records: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            filter_stopwords: true,
            min_records: MIN_RECORDS_FOR_CONFIDENCE,
        }
    }
}

impl ExtractorConfig {
    /// Override the number of candidates kept.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Enable or disable stopword filtering.
    pub fn with_filter_stopwords(mut self, filter_stopwords: bool) -> Self {
        self.filter_stopwords = filter_stopwords;
        self
    }

    /// Override the corpus size below which an advisory is raised.
    pub fn with_min_records(mut self, min_records: usize) -> Self {
        self.min_records = min_records;
        self
    }

    /// Reject configurations that cannot produce candidates.
    pub fn validate(&self) -> Result<(), LfError> {
        if self.max_candidates == 0 {
            return Err(LfError::Configuration(
                "max_candidates must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Minimum coverage a candidate must reach, given the scored record count `n`.
#[derive(Clone)]
pub enum MinCoverage {
    /// `scale / sqrt(n)`; shrinks as the corpus grows.
    InverseSqrt { scale: f64 },
    /// The same threshold for every corpus size.
    Fixed(f64),
    /// Caller-provided threshold function.
    Custom(CoverageFn),
}

impl MinCoverage {
    /// Threshold for a corpus of `n` scored records.
    pub fn threshold(&self, n: usize) -> f64 {
        match self {
            MinCoverage::InverseSqrt { scale } => min_coverage_inverse_sqrt(*scale, n),
            MinCoverage::Fixed(value) => *value,
            MinCoverage::Custom(f) => f(n),
        }
    }
}

impl Default for MinCoverage {
    fn default() -> Self {
        MinCoverage::InverseSqrt {
            scale: MIN_COVERAGE_SCALE,
        }
    }
}

impl fmt::Debug for MinCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinCoverage::InverseSqrt { scale } => {
                f.debug_struct("InverseSqrt").field("scale", scale).finish()
            }
            MinCoverage::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            MinCoverage::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Language generated labeling-function source is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetLanguage {
    /// Python function taking a record mapping.
    #[default]
    Python,
    /// Rust function taking the attribute text.
    Rust,
}

/// Controls how candidates are scored and compiled.
#[derive(Clone, Debug)]
pub struct ScorerConfig {
    /// Minimum share of matches that must agree with the predicted label.
    pub min_precision: f64,
    /// Minimum coverage threshold.
    pub min_coverage: MinCoverage,
    /// Attribute name generated functions read from a record.
    pub attribute: AttributeName,
    /// Language generated source is rendered in.
    pub language: TargetLanguage,
    /// Score candidates on the rayon pool. Output is identical either way.
    pub parallel: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            min_precision: DEFAULT_MIN_PRECISION,
            min_coverage: MinCoverage::default(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            language: TargetLanguage::default(),
            parallel: true,
        }
    }
}

impl ScorerConfig {
    /// Override the minimum precision.
    pub fn with_min_precision(mut self, min_precision: f64) -> Self {
        self.min_precision = min_precision;
        self
    }

    /// Override the minimum coverage threshold.
    pub fn with_min_coverage(mut self, min_coverage: MinCoverage) -> Self {
        self.min_coverage = min_coverage;
        self
    }

    /// Override the attribute generated functions read.
    pub fn with_attribute(mut self, attribute: impl Into<AttributeName>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Override the target language of generated source.
    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    /// Enable or disable parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject thresholds outside their meaningful range.
    pub fn validate(&self) -> Result<(), LfError> {
        if !self.min_precision.is_finite() || !(0.0..=1.0).contains(&self.min_precision) {
            return Err(LfError::Configuration(format!(
                "min_precision must be within [0, 1], got {}",
                self.min_precision
            )));
        }
        match &self.min_coverage {
            MinCoverage::InverseSqrt { scale } if !scale.is_finite() || *scale < 0.0 => {
                return Err(LfError::Configuration(format!(
                    "min coverage scale must be finite and non-negative, got {scale}"
                )));
            }
            MinCoverage::Fixed(value) if !value.is_finite() || *value < 0.0 => {
                return Err(LfError::Configuration(format!(
                    "fixed min coverage must be finite and non-negative, got {value}"
                )));
            }
            _ => {}
        }
        if self.attribute.trim().is_empty() {
            return Err(LfError::Configuration("attribute must not be empty".into()));
        }
        Ok(())
    }
}

/// Top-level configuration for a full extract-then-score run.
#[derive(Clone, Debug, Default)]
pub struct SynthesisConfig {
    /// Candidate extraction settings.
    pub extractor: ExtractorConfig,
    /// Scoring and compilation settings.
    pub scorer: ScorerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_min_coverage_follows_inverse_sqrt() {
        let threshold = MinCoverage::default().threshold(100);
        assert!((threshold - 0.03).abs() < 1e-12);
    }

    #[test]
    fn custom_min_coverage_is_invoked_with_record_count() {
        let coverage = MinCoverage::Custom(Arc::new(|n| n as f64 / 1000.0));
        assert!((coverage.threshold(250) - 0.25).abs() < 1e-12);
        assert_eq!(format!("{coverage:?}"), "Custom(..)");
    }

    #[test]
    fn scorer_validation_rejects_out_of_range_precision() {
        assert!(ScorerConfig::default().validate().is_ok());
        let err = ScorerConfig::default()
            .with_min_precision(1.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LfError::Configuration(_)));
        assert!(
            ScorerConfig::default()
                .with_min_precision(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn scorer_validation_rejects_negative_coverage() {
        let config = ScorerConfig::default().with_min_coverage(MinCoverage::Fixed(-0.1));
        assert!(config.validate().is_err());
        let config = ScorerConfig::default().with_attribute("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn extractor_validation_rejects_zero_candidates() {
        assert!(ExtractorConfig::default().validate().is_ok());
        assert!(
            ExtractorConfig::default()
                .with_max_candidates(0)
                .validate()
                .is_err()
        );
    }
}
