/// Blockquote marker owner.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::PREFIX)
    }

    /// Removes one leading `>` and the whitespace around the content.
    pub fn strip(line: &str) -> &str {
        let line = line.trim();
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }
}
