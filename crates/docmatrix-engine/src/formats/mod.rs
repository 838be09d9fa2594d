//! Text formats the engine reads and writes, and the codecs behind them.

pub mod json;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detect::ContentType;

pub use json::{document_to_json_string, parse_json, pretty_print_json};
pub use yaml::{from_yaml, to_yaml, value_to_yaml};

/// A conversion endpoint.
///
/// `Json` means an in-memory value (a [`Document`](crate::Document) or a
/// parsed JSON value); `JsonString` means serialized, pretty-printed JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Markdown,
    Json,
    JsonString,
    Yaml,
    Text,
}

impl Format {
    pub const ALL: [Format; 5] = [
        Format::Markdown,
        Format::Json,
        Format::JsonString,
        Format::Yaml,
        Format::Text,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Markdown => "markdown",
            Format::Json => "json",
            Format::JsonString => "json-string",
            Format::Yaml => "yaml",
            Format::Text => "text",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

impl From<ContentType> for Format {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Json => Format::Json,
            ContentType::Yaml => Format::Yaml,
            ContentType::Markdown => Format::Markdown,
            ContentType::Text => Format::Text,
        }
    }
}
