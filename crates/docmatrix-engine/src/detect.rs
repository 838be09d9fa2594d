//! Content sniffing: decides whether a piece of text is JSON, YAML, Markdown
//! or plain text.

use std::fmt;
use std::sync::OnceLock;

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize, de::IgnoredAny};

use crate::formats::yaml;
use crate::parsing::blocks::kinds::{Heading, ListMarker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Json,
    Yaml,
    Markdown,
    Text,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "json",
            ContentType::Yaml => "yaml",
            ContentType::Markdown => "markdown",
            ContentType::Text => "text",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `content`. Checks run in order and the first success wins:
/// JSON, YAML, Markdown, then plain text. Empty input is plain text.
///
/// Trial parses that fail fall through to the next check; nothing here
/// returns an error.
pub fn detect_content_type(content: &str) -> ContentType {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return ContentType::Text;
    }

    if looks_like_json(trimmed) {
        return ContentType::Json;
    }

    if !trimmed.starts_with(['{', '['])
        && has_key_value_line(trimmed)
        && yaml::check(trimmed)
            .inspect_err(|e| trace!("yaml trial parse failed: {e}"))
            .is_ok()
    {
        return ContentType::Yaml;
    }

    if trimmed
        .lines()
        .any(|line| Heading::parse(line).is_some() || ListMarker::parse(line).is_some())
    {
        return ContentType::Markdown;
    }

    ContentType::Text
}

fn looks_like_json(trimmed: &str) -> bool {
    let delimited = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if !delimited || !brackets_balanced(trimmed) {
        return false;
    }
    serde_json::from_str::<IgnoredAny>(trimmed)
        .inspect_err(|e| trace!("json trial parse failed: {e}"))
        .is_ok()
}

/// Checks that `{}`/`[]` nest and close properly outside string literals.
///
/// A cheap pre-filter before a full JSON parse; backslash escapes inside
/// strings are honoured.
fn brackets_balanced(text: &str) -> bool {
    let mut expected = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => expected.push('}'),
            '[' => expected.push(']'),
            '}' | ']' => {
                if expected.pop() != Some(c) {
                    return false;
                }
            }
            _ => {}
        }
    }

    !in_string && expected.is_empty()
}

/// Whether any line has the shape `key: value`. The value may start on a
/// following line, as with block sequences and nested mappings.
fn has_key_value_line(text: &str) -> bool {
    static KEY_VALUE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = KEY_VALUE_REGEX
        .get_or_init(|| Regex::new(r"(?m)^[\w-]+:\s*\S").expect("Invalid key/value regex"));
    re.is_match(text)
}
