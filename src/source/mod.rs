//! Record sources feeding extraction and scoring.
//!
//! Ownership model:
//! - `RecordSource` hands out the full in-memory record set for one run.
//! - `InMemorySource` wraps records the caller already holds.
//! - `RowSource` maps exported rows (JSON objects keyed by attribute name)
//!   through a `RowMapping` into records.

use std::sync::Arc;

use crate::data::Record;
use crate::errors::LfError;

/// Exported-row mapping helpers.
pub mod rows;

pub use rows::{RowMapping, RowSource, records_from_json_lines, records_from_rows};

/// Caller-facing source of the records one synthesis run works on.
pub trait RecordSource: Send + Sync {
    /// Stable source identifier used in logs.
    fn id(&self) -> &str;
    /// All records, in a stable order.
    fn records(&self) -> Result<Vec<Record>, LfError>;
}

/// Source over records already held in memory.
pub struct InMemorySource {
    id: String,
    records: Arc<Vec<Record>>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            id: id.into(),
            records: Arc::new(records),
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn records(&self) -> Result<Vec<Record>, LfError> {
        Ok(self.records.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_source_returns_records_in_order() {
        let source = InMemorySource::new(
            "mem",
            vec![Record::new("first", "a"), Record::unlabeled("second")],
        );
        assert_eq!(source.id(), "mem");
        let records = source.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "first");
        assert_eq!(records[1].label, None);
    }
}
