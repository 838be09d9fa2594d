pub mod blocks;
pub mod normalize;

use serde::{Deserialize, Serialize};

use crate::models::Document;
use blocks::{BlockBuilder, MarkdownLineClassifier};

pub use normalize::normalize_markdown;

/// What to do with a code fence that is still open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedFence {
    /// Emit the lines collected so far as a code block.
    #[default]
    Flush,
    /// Discard them.
    Drop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub unterminated_fence: UnterminatedFence,
    /// Run [`normalize_markdown`] over the input before parsing. The
    /// document's `raw` field still holds the input as given.
    pub normalize: bool,
}

/// Parses Markdown into a [`Document`] with default options.
///
/// `None` is treated as the empty string.
pub fn parse_document<'a>(markdown: impl Into<Option<&'a str>>) -> Document {
    parse_document_with(markdown, &ParseOptions::default())
}

pub fn parse_document_with<'a>(
    markdown: impl Into<Option<&'a str>>,
    options: &ParseOptions,
) -> Document {
    let raw = markdown.into().unwrap_or_default();
    let normalized;
    let source = if options.normalize {
        normalized = normalize_markdown(raw);
        normalized.as_str()
    } else {
        raw
    };

    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::with_options(options);

    for line in source.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    Document::new(builder.finish(), raw)
}

#[cfg(test)]
mod tests;
