use std::io::BufRead;

use serde_json::Value;
use tracing::debug;

use crate::constants::emit::DEFAULT_ATTRIBUTE;
use crate::data::Record;
use crate::errors::LfError;
use crate::source::RecordSource;
use crate::types::{AttributeName, Label};

/// Which row attributes hold the text and the label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMapping {
    /// Attribute holding the text; must be a string.
    pub text_attribute: AttributeName,
    /// Attribute holding the label. Missing or null values leave the record unlabeled.
    pub label_attribute: Option<AttributeName>,
}

impl RowMapping {
    pub fn new(text_attribute: impl Into<AttributeName>) -> Self {
        Self {
            text_attribute: text_attribute.into(),
            label_attribute: None,
        }
    }

    /// Read labels from `label_attribute`.
    pub fn with_label(mut self, label_attribute: impl Into<AttributeName>) -> Self {
        self.label_attribute = Some(label_attribute.into());
        self
    }

    /// Convert one exported row into a record.
    pub fn row_to_record(&self, row: &Value, row_index: usize) -> Result<Record, LfError> {
        let object = row.as_object().ok_or_else(|| LfError::InvalidAttribute {
            row: row_index,
            attribute: self.text_attribute.clone(),
            details: "row is not a JSON object".into(),
        })?;
        let text = match object.get(&self.text_attribute) {
            None => {
                return Err(LfError::MissingAttribute {
                    row: row_index,
                    attribute: self.text_attribute.clone(),
                });
            }
            Some(Value::String(text)) => text.clone(),
            Some(other) => {
                return Err(LfError::InvalidAttribute {
                    row: row_index,
                    attribute: self.text_attribute.clone(),
                    details: format!("expected a string, found {}", value_kind(other)),
                });
            }
        };
        let label = match &self.label_attribute {
            Some(attribute) => label_value(object.get(attribute), row_index, attribute)?,
            None => None,
        };
        Ok(Record { text, label })
    }
}

impl Default for RowMapping {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTE)
    }
}

fn label_value(
    value: Option<&Value>,
    row: usize,
    attribute: &str,
) -> Result<Option<Label>, LfError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(label)) if label.is_empty() => Ok(None),
        Some(Value::String(label)) => Ok(Some(label.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(other) => Err(LfError::InvalidAttribute {
            row,
            attribute: attribute.to_string(),
            details: format!("labels must be scalar, found {}", value_kind(other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Map exported rows to records.
pub fn records_from_rows(rows: &[Value], mapping: &RowMapping) -> Result<Vec<Record>, LfError> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| mapping.row_to_record(row, idx))
        .collect()
}

/// Read one JSON row per non-blank line and map it to a record.
pub fn records_from_json_lines<R: BufRead>(
    reader: R,
    mapping: &RowMapping,
) -> Result<Vec<Record>, LfError> {
    let mut records = Vec::new();
    let mut row_index = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row: Value = serde_json::from_str(&line)?;
        records.push(mapping.row_to_record(&row, row_index)?);
        row_index += 1;
    }
    debug!("[autolf:source] read {} rows from json lines", records.len());
    Ok(records)
}

/// Source over exported rows held in memory.
pub struct RowSource {
    id: String,
    rows: Vec<Value>,
    mapping: RowMapping,
}

impl RowSource {
    pub fn new(id: impl Into<String>, rows: Vec<Value>, mapping: RowMapping) -> Self {
        Self {
            id: id.into(),
            rows,
            mapping,
        }
    }

    /// Parse a JSON array of rows.
    pub fn from_json_str(
        id: impl Into<String>,
        json: &str,
        mapping: RowMapping,
    ) -> Result<Self, LfError> {
        let rows: Vec<Value> = serde_json::from_str(json)?;
        Ok(Self::new(id, rows, mapping))
    }
}

impl RecordSource for RowSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn records(&self) -> Result<Vec<Record>, LfError> {
        records_from_rows(&self.rows, &self.mapping)
    }
}
