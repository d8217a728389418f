pub use crate::constants::heuristics::{MIN_COVERAGE_SCALE, SCORE_DECIMALS};

/// `scale / sqrt(n)`. An empty corpus has no attainable coverage.
pub fn min_coverage_inverse_sqrt(scale: f64, n: usize) -> f64 {
    if n == 0 {
        return f64::INFINITY;
    }
    scale / (n as f64).sqrt()
}

/// Round to `decimals` places, exact halves to the even neighbor.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Round a score to the shared reporting precision.
pub fn round_score(value: f64) -> f64 {
    round_to(value, SCORE_DECIMALS)
}

/// Ranking key: coverage weighs quadratically, precision linearly.
pub fn priority(coverage: f64, precision: f64) -> f64 {
    coverage * coverage * precision
}

/// Share of `part` in `total`; zero when `total` is zero.
pub fn share(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64
}

/// `1234567` -> `1,234,567`.
pub fn format_count_with_commas(value: usize) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}
