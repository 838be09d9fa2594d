//! The conversion dispatcher: routes content between Markdown, JSON and YAML.
//!
//! | from                  | to                          |
//! |-----------------------|-----------------------------|
//! | `markdown`            | `json`, `yaml`, `json-string` |
//! | `json`, `json-string` | `yaml`, `json`              |
//! | `yaml`                | `json`, `json-string`       |
//!
//! Identical endpoints short-circuit and hand the content back untouched.

use log::debug;
use serde_json::Value;

use crate::detect::detect_content_type;
use crate::error::{ConvertError, InvalidInput};
use crate::formats::{
    Format, document_to_json_string, json::parse_json, pretty_print_json, to_yaml, value_to_yaml,
    yaml,
};
use crate::models::Document;
use crate::parsing::{ParseOptions, parse_document, parse_document_with};

/// The output of a conversion. Which variant comes back depends on the target:
/// `json` yields a structured value, every other target yields text.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    Text(String),
    Document(Document),
    Value(Value),
}

impl Converted {
    /// Renders the result as text; structured results become pretty JSON.
    pub fn render(&self) -> Result<String, ConvertError> {
        match self {
            Converted::Text(text) => Ok(text.clone()),
            Converted::Document(doc) => document_to_json_string(doc),
            Converted::Value(value) => Ok(pretty_print_json(value)),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Converted::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Converts `content` between formats named by string.
///
/// A missing or empty `from` is auto-detected. Names outside the route table,
/// including unknown names, fail with [`ConvertError::UnsupportedConversion`]
/// unless `from` and `to` are identical.
pub fn convert(content: &str, from: Option<&str>, to: &str) -> Result<Converted, ConvertError> {
    let detected;
    let from = match from.filter(|f| !f.is_empty()) {
        Some(from) => from,
        None => {
            detected = detect_content_type(content);
            debug!("detected source format: {detected}");
            detected.as_str()
        }
    };

    if from == to {
        return Ok(Converted::Text(content.to_string()));
    }

    match (from.parse::<Format>(), to.parse::<Format>()) {
        (Ok(from), Ok(to)) => route(content, from, to, &ParseOptions::default()),
        _ => Err(ConvertError::unsupported(from, to)),
    }
}

/// Typed variant of [`convert`] with explicit Markdown parse options.
pub fn convert_with(
    content: &str,
    from: Option<Format>,
    to: Format,
    options: &ParseOptions,
) -> Result<Converted, ConvertError> {
    let from = from.unwrap_or_else(|| {
        let detected = detect_content_type(content);
        debug!("detected source format: {detected}");
        detected.into()
    });

    if from == to {
        return Ok(Converted::Text(content.to_string()));
    }

    route(content, from, to, options)
}

fn route(
    content: &str,
    from: Format,
    to: Format,
    options: &ParseOptions,
) -> Result<Converted, ConvertError> {
    debug!("converting {from} -> {to}");
    match (from, to) {
        (Format::Markdown, Format::Json) => {
            Ok(Converted::Document(parse_document_with(content, options)))
        }
        (Format::Markdown, Format::Yaml) => {
            value_to_yaml(&parse_document_with(content, options)).map(Converted::Text)
        }
        (Format::Markdown, Format::JsonString) => {
            document_to_json_string(&parse_document_with(content, options)).map(Converted::Text)
        }
        (Format::Json | Format::JsonString, Format::Yaml) => to_yaml(content).map(Converted::Text),
        (Format::Json | Format::JsonString, Format::Json) => {
            parse_json(content).map(Converted::Value)
        }
        (Format::Yaml, Format::Json) => Ok(Converted::Value(
            yaml::load(content).map_err(InvalidInput::Yaml)?,
        )),
        (Format::Yaml, Format::JsonString) => yaml::from_yaml(content).map(Converted::Text),
        (from, to) => Err(ConvertError::unsupported(from, to)),
    }
}

/// Parses Markdown and renders the document as pretty JSON text.
pub fn markdown_to_json_string(markdown: &str) -> Result<String, ConvertError> {
    document_to_json_string(&parse_document(markdown))
}

/// Parses Markdown and renders the document as YAML text.
pub fn markdown_to_yaml(markdown: &str) -> Result<String, ConvertError> {
    value_to_yaml(&parse_document(markdown))
}
