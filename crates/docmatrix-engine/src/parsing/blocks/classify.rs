use crate::models::ListType;

use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, ThematicBreak};

/// What a single line looks like, judged without any surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace only.
    Blank,
    /// Starts with a backtick fence; carries the info string after the marker.
    Fence { info: &'a str },
    Heading { level: u8, text: &'a str },
    ListItem { list_type: ListType, text: &'a str },
    ThematicBreak,
    BlockQuote { text: &'a str },
    /// Anything else; carries the trimmed line.
    Text { text: &'a str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing. Whether a line is really code (inside an
/// open fence) is decided later by the builder, which falls back to `raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

impl LineClass<'_> {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, trying each block kind in priority order: blank,
    /// fence, heading, list item, rule, quote, then plain text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.strip_suffix('\r').unwrap_or(line);
        LineClass {
            raw,
            kind: Self::kind_of(raw),
        }
    }

    fn kind_of(raw: &str) -> LineKind<'_> {
        if raw.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some(info) = CodeFence::sig(raw) {
            return LineKind::Fence { info };
        }
        if let Some((level, text)) = Heading::parse(raw) {
            return LineKind::Heading { level, text };
        }
        if let Some((list_type, text)) = ListMarker::parse(raw) {
            return LineKind::ListItem { list_type, text };
        }
        if ThematicBreak::matches(raw) {
            return LineKind::ThematicBreak;
        }
        if let Some(text) = BlockQuote::strip_prefix(raw) {
            return LineKind::BlockQuote { text };
        }
        LineKind::Text { text: raw.trim() }
    }
}
