//! Clean-up pass for Markdown recovered from PDF text extraction, where
//! headings end up glued to body text, bullets arrive as typographic glyphs
//! and spacing is erratic.

use std::sync::OnceLock;

use regex::Regex;

/// Glyphs that extraction tools emit in place of `-` bullets.
const BULLET_GLYPHS: [char; 9] = ['•', '·', '○', '●', '▪', '▫', '◦', '‣', '⁃'];

/// Tidies extracted Markdown so the block parser sees well-formed lines.
///
/// - runs of three or more newlines become a single blank line
/// - a heading marker glued to preceding text is moved onto its own line
/// - bullet glyphs become `- ` markers, `1)` markers become `1.`
/// - runs of spaces collapse, trailing whitespace is removed
/// - the result is trimmed
pub fn normalize_markdown(markdown: &str) -> String {
    static BLANK_RUN_REGEX: OnceLock<Regex> = OnceLock::new();
    static GLUED_HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    static SPACE_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

    let blank_runs =
        BLANK_RUN_REGEX.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));
    let glued_heading = GLUED_HEADING_REGEX
        .get_or_init(|| Regex::new(r"([^\n#])(#{1,6} )").expect("Invalid heading regex"));
    let space_runs =
        SPACE_RUN_REGEX.get_or_init(|| Regex::new(r" {2,}").expect("Invalid space regex"));

    let text = blank_runs.replace_all(markdown, "\n\n");
    let text = glued_heading.replace_all(&text, "${1}\n\n${2}");
    let text = text
        .split('\n')
        .map(normalize_list_marker)
        .collect::<Vec<_>>()
        .join("\n");
    let text = space_runs.replace_all(&text, " ");

    text.split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn normalize_list_marker(line: &str) -> String {
    static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
    let numbered =
        NUMBERED_REGEX.get_or_init(|| Regex::new(r"^([0-9]+)[.)]").expect("Invalid number regex"));

    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix(BULLET_GLYPHS) {
        return format!("- {}", rest.trim());
    }
    if numbered.is_match(trimmed) {
        return numbered.replace(trimmed, "${1}.").into_owned();
    }
    line.to_string()
}
