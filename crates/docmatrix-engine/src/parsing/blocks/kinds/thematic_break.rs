/// Horizontal rules: three or more of the same `-`, `*` or `_`, optionally
/// surrounded by whitespace.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && t.chars().count() >= Self::MIN_LEN
            && t.chars().all(|c| c == first)
    }
}
