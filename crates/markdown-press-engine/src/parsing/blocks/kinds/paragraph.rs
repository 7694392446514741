/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the fallback when no other
/// predicate matches. Their lines are joined into one run of inline text.
pub struct Paragraph;

impl Paragraph {
    pub fn join<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines.into_iter().collect::<Vec<_>>().join(" ").trim().to_string()
    }
}
