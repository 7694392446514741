use crate::nodes::SpanKind;

/// Symmetric style delimiters, in the order the tokenizer applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Application order: bold, then italic, then code.
    pub const ALL: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    pub fn kind(self) -> SpanKind {
        match self {
            Delimiter::Bold => SpanKind::Bold,
            Delimiter::Italic => SpanKind::Italic,
            Delimiter::Code => SpanKind::Code,
        }
    }

    /// Bold and italic content may not contain another style's marker.
    /// Code content is literal, so code never refuses a split.
    pub fn guards_nesting(self) -> bool {
        !matches!(self, Delimiter::Code)
    }

    /// Whether `segment` contains the marker of any other delimiter.
    pub fn foreign_marker_in(self, segment: &str) -> bool {
        Self::ALL
            .into_iter()
            .filter(|d| *d != self)
            .any(|d| segment.contains(d.marker()))
    }
}
