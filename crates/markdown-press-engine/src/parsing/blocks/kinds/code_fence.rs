pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// A block is fenced when its first line opens and its last line closes
    /// with the fence. A lone fence line satisfies both.
    pub fn encloses(first: &str, last: &str) -> bool {
        first.trim().starts_with(Self::FENCE) && last.trim().ends_with(Self::FENCE)
    }

    /// Strips the opening fence plus one newline after it, and the closing
    /// fence. Whatever sits between is returned untouched.
    pub fn strip(block: &str) -> &str {
        let body = block.strip_prefix(Self::FENCE).unwrap_or(block);
        let body = body.strip_prefix('\n').unwrap_or(body);
        body.strip_suffix(Self::FENCE).unwrap_or(body)
    }
}
