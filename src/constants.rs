/// Constants used by coverage/precision heuristics.
pub mod heuristics {
    /// Numerator of the adaptive minimum coverage `scale / sqrt(n)`.
    pub const MIN_COVERAGE_SCALE: f64 = 0.3;
    /// Default minimum precision a candidate needs to qualify.
    pub const DEFAULT_MIN_PRECISION: f64 = 0.7;
    /// Decimal places kept when rounding coverage and precision.
    pub const SCORE_DECIMALS: i32 = 2;
}

/// Constants used by candidate extraction.
pub mod extraction {
    /// Default number of most frequent candidates kept.
    pub const DEFAULT_MAX_CANDIDATES: usize = 100;
    /// Corpora smaller than this produce a low-confidence advisory.
    pub const MIN_RECORDS_FOR_CONFIDENCE: usize = 100;
    /// Separator placed between the two tokens of a pair candidate.
    pub const PAIR_SEPARATOR: &str = ".*?";
    /// Anchor marking a token at text start.
    pub const START_ANCHOR: &str = "^";
    /// Anchor marking a token at text end.
    pub const END_ANCHOR: &str = "$";
    /// Digit-class marker substituted for digits in a token shape.
    pub const DIGIT_CLASS: &str = "[0-9]";
}

/// Constants used by source emitters.
pub mod emit {
    /// Prefix of generated function names (`regex_1`, `regex_2`, ...).
    pub const FUNCTION_PREFIX: &str = "regex_";
    /// Default attribute read by generated functions.
    pub const DEFAULT_ATTRIBUTE: &str = "text";
    /// Indentation used in rendered Python source.
    pub const PYTHON_INDENT: &str = "    ";
}
