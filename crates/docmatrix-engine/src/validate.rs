//! Pre-flight well-formedness checks. These never fail: the outcome is data.

use serde::{Deserialize, Serialize, de::IgnoredAny};

use crate::formats::yaml;

pub const VALID_JSON: &str = "Valid JSON";
pub const VALID_YAML: &str = "Valid YAML";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    /// A confirmation when valid, otherwise the parser's diagnostic.
    pub message: String,
}

impl Validation {
    fn passed(message: &str) -> Self {
        Self {
            valid: true,
            message: message.to_string(),
        }
    }

    fn failed(err: impl ToString) -> Self {
        Self {
            valid: false,
            message: err.to_string(),
        }
    }
}

/// Strict JSON check: trailing commas, comments and single quotes are rejected.
pub fn validate_json(json: &str) -> Validation {
    match serde_json::from_str::<IgnoredAny>(json) {
        Ok(_) => Validation::passed(VALID_JSON),
        Err(e) => Validation::failed(e),
    }
}

pub fn validate_yaml(yaml: &str) -> Validation {
    match yaml::check(yaml) {
        Ok(()) => Validation::passed(VALID_YAML),
        Err(e) => Validation::failed(e),
    }
}
