//! The YAML codec seam. Everything YAML goes through [`dump`] and [`load`].
//!
//! `serde_yaml` emits block style with two-space indentation, does not wrap
//! long scalars and never emits anchors or aliases, so no emitter options are
//! needed.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ConvertError, InvalidInput};
use crate::formats::{Format, json::pretty_print_json};

/// Serializes any value as a YAML document.
pub fn dump<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(value)
}

/// Loads a YAML document as a JSON-compatible value.
pub fn load(yaml: &str) -> Result<Value, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

/// Checks that `yaml` is well-formed, accepting anything the YAML data model
/// allows (tags, non-string keys) even where JSON could not represent it.
pub fn check(yaml: &str) -> Result<(), serde_yaml::Error> {
    serde_yaml::from_str::<serde_yaml::Value>(yaml).map(drop)
}

/// Converts JSON text to YAML text.
pub fn to_yaml(json: &str) -> Result<String, ConvertError> {
    let value: Value = serde_json::from_str(json).map_err(InvalidInput::Json)?;
    value_to_yaml(&value)
}

/// Converts an in-memory value to YAML text.
pub fn value_to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, ConvertError> {
    dump(value).map_err(|e| ConvertError::Emit {
        format: Format::Yaml,
        message: e.to_string(),
    })
}

/// Converts YAML text to pretty-printed JSON text.
pub fn from_yaml(yaml: &str) -> Result<String, ConvertError> {
    let value = load(yaml).map_err(InvalidInput::Yaml)?;
    Ok(pretty_print_json(&value))
}
