use std::sync::OnceLock;

use regex::Regex;

use crate::models::ListType;

/// List item markers: `-`, `*`, `+` for unordered lists, `<digits>.` for
/// ordered ones. Leading indentation is accepted and discarded; nesting is
/// not tracked.
pub struct ListMarker;

impl ListMarker {
    /// Parses a list item line into its list type and item text.
    pub fn parse(line: &str) -> Option<(ListType, &str)> {
        static UNORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();

        let unordered = UNORDERED_REGEX
            .get_or_init(|| Regex::new(r"^\s*[-*+]\s+(.+)$").expect("Invalid list regex"));
        if let Some(caps) = unordered.captures(line) {
            return Some((ListType::Unordered, caps.get(1)?.as_str()));
        }

        let ordered = ORDERED_REGEX
            .get_or_init(|| Regex::new(r"^\s*[0-9]+\.\s+(.+)$").expect("Invalid list regex"));
        let caps = ordered.captures(line)?;
        Some((ListType::Ordered, caps.get(1)?.as_str()))
    }
}
