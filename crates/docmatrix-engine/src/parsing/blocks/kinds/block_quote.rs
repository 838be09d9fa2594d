use std::sync::OnceLock;

use regex::Regex;

/// Single-line blockquotes. Each `> text` line is its own block; consecutive
/// quote lines are not merged and nested `>>` quotes are not recognised.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the quoted text of a `> text` line.
    ///
    /// The prefix must be followed by whitespace and then at least one more
    /// character.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        if !line.starts_with(Self::PREFIX) {
            return None;
        }

        static QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re =
            QUOTE_REGEX.get_or_init(|| Regex::new(r"^>\s+(.+)$").expect("Invalid quote regex"));

        Some(re.captures(line)?.get(1)?.as_str())
    }
}
