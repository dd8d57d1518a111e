use thiserror::Error;

use super::table::FieldType;

/// Recoverable input conditions reported by the engines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Field not found: `{field}`")]
    FieldNotFound { field: String },

    #[error("Degenerate dataset: {reason}")]
    DegenerateDataset { reason: &'static str },

    #[error("Type mismatch on `{field}`: expected {expected} but got {actual}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: FieldType,
    },

    #[error("Duplicate row key: `{key}`")]
    DuplicateRowKey { key: String },
}

impl EngineError {
    pub(crate) fn field_not_found(field: &str) -> Self {
        Self::FieldNotFound {
            field: field.to_string(),
        }
    }

    pub(crate) fn degenerate(reason: &'static str) -> Self {
        Self::DegenerateDataset { reason }
    }
}
