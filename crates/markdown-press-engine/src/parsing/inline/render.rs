use crate::{
    error::ConvertError,
    nodes::{Attributes, InlineSpan, Leaf, OutputNode, SpanKind, TagNames},
};

/// Renders a span as a leaf using the default tag vocabulary.
pub fn render_span(span: &InlineSpan) -> Result<OutputNode, ConvertError> {
    render_span_with(span, TagNames::builtin())
}

/// Renders a span as a leaf.
///
/// Links become `a` with `href`, images become an empty `img` with `src`
/// then `alt`. Either fails with [`ConvertError::MissingUrl`] when the span
/// has no usable url.
pub fn render_span_with(span: &InlineSpan, tags: &TagNames) -> Result<OutputNode, ConvertError> {
    let leaf = match span.kind {
        SpanKind::Plain => Leaf::text(&span.text),
        SpanKind::Bold => Leaf::tagged(&tags.strong, &span.text),
        SpanKind::Italic => Leaf::tagged(&tags.emphasis, &span.text),
        SpanKind::Code => Leaf::tagged(&tags.code, &span.text),
        SpanKind::Link => {
            let attrs: Attributes = [("href", span.url()?)].into_iter().collect();
            Leaf::with_attributes(&tags.link, &span.text, attrs)
        }
        SpanKind::Image => {
            let attrs: Attributes = [("src", span.url()?), ("alt", span.text.as_str())]
                .into_iter()
                .collect();
            Leaf::with_attributes(&tags.image, "", attrs)
        }
    };
    Ok(OutputNode::Leaf(leaf))
}
