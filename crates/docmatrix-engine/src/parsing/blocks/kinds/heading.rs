use std::sync::OnceLock;

use regex::Regex;

/// ATX heading syntax (`#` through `######`) and anchor slugs.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// Requires 1-6 `#`, at least one whitespace character, then text. The
    /// text is everything after the separating whitespace, untrimmed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        if !line.starts_with(Self::MARKER) {
            return None;
        }

        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"));

        let caps = re.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2)?.as_str();
        Some((level, text))
    }

    /// Derives an anchor id: lowercase, then every run of characters outside
    /// `[A-Za-z0-9_]` becomes a single `-`.
    ///
    /// Distinct headings can produce the same slug; callers needing unique
    /// anchors must disambiguate themselves.
    pub fn slug(text: &str) -> String {
        static NON_WORD_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = NON_WORD_REGEX
            .get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid slug regex"));

        re.replace_all(&text.to_lowercase(), "-").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("### Deep", Some((3, "Deep")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("#\tTabbed", Some((1, "Tabbed")))]
    #[case("#   spaced out ", Some((1, "spaced out ")))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("# ", None)]
    #[case(" # Indented", None)]
    fn parses_heading_lines(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }

    #[rstest]
    #[case("Heading 1", "heading-1")]
    #[case("Hello World! & Special @#$ Characters", "hello-world-special-characters")]
    #[case("snake_case stays", "snake_case-stays")]
    #[case("Trailing punctuation!", "trailing-punctuation-")]
    #[case("...leading", "-leading")]
    fn slugs(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(Heading::slug(text), expected);
    }

    #[test]
    fn slug_collisions_are_kept() {
        assert_eq!(Heading::slug("Intro!"), Heading::slug("intro?"));
    }
}
