/// The structural category of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other predicate matches.
    Paragraph,
    /// `#` to `######` followed by a space on the first line.
    Heading,
    /// Wrapped in triple-backtick fences.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}

/// A blank-line separated fragment of a document, trimmed of surrounding
/// whitespace. Borrows from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    text: &'a str,
}

impl<'a> Block<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text: text.trim() }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.text.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
