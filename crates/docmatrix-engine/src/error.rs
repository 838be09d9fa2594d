use thiserror::Error;

use crate::formats::Format;

/// Input that should have been well-formed JSON or YAML but was not.
#[derive(Debug, Error)]
pub enum InvalidInput {
    #[error("Invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("Invalid YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    #[error("Conversion from {from} to {to} not supported")]
    UnsupportedConversion { from: String, to: String },

    #[error("Failed to write {format}: {message}")]
    Emit { format: Format, message: String },
}

impl ConvertError {
    pub(crate) fn unsupported(from: impl ToString, to: impl ToString) -> Self {
        ConvertError::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
