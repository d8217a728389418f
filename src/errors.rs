use std::io;

use thiserror::Error;

use crate::types::{AttributeName, Pattern};

/// Error type for configuration, record mapping, and document failures.
#[derive(Debug, Error)]
pub enum LfError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("tokenized document is inconsistent: {details}")]
    InvalidDocument { details: String },
    #[error("row {row} is missing attribute '{attribute}'")]
    MissingAttribute { row: usize, attribute: AttributeName },
    #[error("row {row} has an unusable value for attribute '{attribute}': {details}")]
    InvalidAttribute {
        row: usize,
        attribute: AttributeName,
        details: String,
    },
    #[error("pattern '{pattern}' cannot be compiled: {details}")]
    Pattern { pattern: Pattern, details: String },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
