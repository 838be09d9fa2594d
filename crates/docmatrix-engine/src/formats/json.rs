use serde_json::Value;

use crate::error::{ConvertError, InvalidInput};
use crate::formats::Format;
use crate::models::Document;

/// Strictly parses JSON text; trailing commas, comments and the like are errors.
pub fn parse_json(json: &str) -> Result<Value, ConvertError> {
    Ok(serde_json::from_str(json).map_err(InvalidInput::Json)?)
}

/// Pretty-prints with two-space indentation.
pub fn pretty_print_json(value: &Value) -> String {
    format!("{value:#}")
}

/// Renders a parsed document as pretty JSON text.
pub fn document_to_json_string(doc: &Document) -> Result<String, ConvertError> {
    serde_json::to_string_pretty(doc).map_err(|e| ConvertError::Emit {
        format: Format::JsonString,
        message: e.to_string(),
    })
}
