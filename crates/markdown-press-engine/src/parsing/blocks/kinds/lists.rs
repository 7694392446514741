/// `- item` lines.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::MARKER)
    }

    pub fn item_text(line: &str) -> &str {
        let line = line.trim();
        line.strip_prefix(Self::MARKER).unwrap_or(line).trim()
    }
}

/// `1. item` lines, numbered from one without gaps.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Whether line `i` starts with `{i + 1}. ` for every line.
    pub fn is_sequential<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines.into_iter().enumerate().all(|(i, line)| {
            line.trim()
                .strip_prefix(&(i + 1).to_string())
                .is_some_and(|rest| rest.starts_with(Self::SEPARATOR))
        })
    }

    /// Text after the first `. `; `None` when the line has no separator.
    pub fn item_text(line: &str) -> Option<&str> {
        let at = line.find(Self::SEPARATOR)?;
        Some(line[at + Self::SEPARATOR.len()..].trim())
    }
}
