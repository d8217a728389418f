use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::Record;
use crate::heuristics::share;
use crate::types::Label;

/// Aggregate balance metrics over the labels of a record set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelDistribution {
    /// Labeled records.
    pub total: usize,
    /// Records without a label.
    pub unlabeled: usize,
    pub labels: usize,
    pub min: usize,
    pub max: usize,
    pub max_share: f64,
    pub min_share: f64,
    /// `max / min`; how much the dominant label outweighs the rarest.
    pub ratio: f64,
    pub per_label: Vec<LabelShare>,
}

/// Per-label share of the labeled records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelShare {
    pub label: Label,
    pub count: usize,
    pub share: f64,
}

/// Compute label balance over `records`. `None` when no record is labeled.
pub fn label_distribution(records: &[Record]) -> Option<LabelDistribution> {
    let mut counts: IndexMap<&Label, usize> = IndexMap::new();
    let mut unlabeled = 0usize;
    for record in records {
        match &record.label {
            Some(label) => *counts.entry(label).or_insert(0) += 1,
            None => unlabeled += 1,
        }
    }
    let min = *counts.values().min()?;
    let max = *counts.values().max()?;
    let total: usize = counts.values().sum();
    let ratio = if min == 0 {
        f64::INFINITY
    } else {
        max as f64 / min as f64
    };
    let mut per_label: Vec<LabelShare> = counts
        .iter()
        .map(|(label, count)| LabelShare {
            label: (*label).clone(),
            count: *count,
            share: share(*count, total),
        })
        .collect();
    per_label.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    Some(LabelDistribution {
        total,
        unlabeled,
        labels: counts.len(),
        min,
        max,
        max_share: share(max, total),
        min_share: share(min, total),
        ratio,
        per_label,
    })
}
