/// Triple-backtick fenced code blocks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const DEFAULT_LANGUAGE: &'static str = "text";

    /// Returns the info string if `line` is a fence line.
    ///
    /// The marker must start the line; indented fences are not fences.
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS)
    }

    /// The language named by a fence's info string.
    pub fn language(info: &str) -> String {
        let info = info.trim();
        if info.is_empty() {
            Self::DEFAULT_LANGUAGE.to_string()
        } else {
            info.to_string()
        }
    }
}
