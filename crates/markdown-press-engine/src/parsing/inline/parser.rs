use log::debug;

use crate::nodes::{InlineSpan, SpanKind};

use super::{
    cursor::Cursor,
    kinds::{Delimiter, Image, Link},
};

/// Splits running text into typed inline spans.
///
/// # Pass order
/// 1. Images (`![alt](url)`)
/// 2. Links (`[label](url)`), never re-reading an extracted image
/// 3. Style delimiters: bold, italic, then code
///
/// Each pass only rewrites `Plain` spans. Anything unbalanced or incomplete
/// stays plain text; this function never fails.
///
/// Text that mixes `**` and `_` with the two touching (`_**` or `**_`) is
/// returned whole as one plain span.
pub fn tokenize(text: &str) -> Vec<InlineSpan> {
    if is_ambiguous_emphasis(text) {
        debug!("ambiguous bold/italic nesting, keeping text literal: {text:?}");
        return vec![InlineSpan::plain(text)];
    }

    let spans = split_links(split_images(vec![InlineSpan::plain(text)]));
    Delimiter::ALL.into_iter().fold(spans, split_delimiter)
}

fn is_ambiguous_emphasis(text: &str) -> bool {
    let bold = Delimiter::Bold.marker();
    let italic = Delimiter::Italic.marker();
    if !(text.contains(bold) && text.contains(italic)) {
        return false;
    }

    let touching = [format!("{italic}{bold}"), format!("{bold}{italic}")];
    let reversed: String = text.chars().rev().collect();
    [text, reversed.as_str()]
        .iter()
        .any(|t| touching.iter().any(|p| t.contains(p.as_str())))
}

/// Extracts `![alt](url)` occurrences from plain spans as image spans.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_bracketed(spans, SpanKind::Image, try_parse_image)
}

/// Extracts `[label](url)` occurrences from plain spans as link spans.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_bracketed(spans, SpanKind::Link, try_parse_link)
}

/// Every `(alt, url)` pair of the images in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    scan_bracketed(text, try_parse_image)
        .into_iter()
        .map(|m| (m.label.to_string(), m.url.to_string()))
        .collect()
}

/// Every `(label, url)` pair of the links in `text`, skipping images.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    scan_bracketed(text, try_parse_link)
        .into_iter()
        .map(|m| (m.label.to_string(), m.url.to_string()))
        .collect()
}

/// Splits plain spans on a symmetric style delimiter.
///
/// A span is left untouched when the delimiter is unbalanced, when it does
/// not occur at all, or (bold and italic only) when a styled segment holds
/// another style's marker. Otherwise even segments become plain spans
/// (dropped when empty) and odd segments become spans of the delimiter's kind.
pub fn split_delimiter(spans: Vec<InlineSpan>, delimiter: Delimiter) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        if span.text.is_empty() {
            continue;
        }

        let split = styled_segments(&span.text, delimiter).map(|segments| {
            segments
                .into_iter()
                .enumerate()
                .filter_map(|(i, segment)| {
                    if i % 2 == 1 {
                        Some(InlineSpan::styled(delimiter.kind(), segment))
                    } else if !segment.is_empty() {
                        Some(InlineSpan::plain(segment))
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
        });

        match split {
            Some(split) => out.extend(split),
            None => out.push(span),
        }
    }

    out
}

fn styled_segments(text: &str, delimiter: Delimiter) -> Option<Vec<&str>> {
    let segments: Vec<&str> = text.split(delimiter.marker()).collect();
    // An even segment count means an odd number of markers.
    if segments.len() < 3 || segments.len() % 2 == 0 {
        return None;
    }
    if delimiter.guards_nesting()
        && segments
            .iter()
            .skip(1)
            .step_by(2)
            .any(|s| delimiter.foreign_marker_in(s))
    {
        return None;
    }
    Some(segments)
}

struct BracketMatch<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

type BracketParser<'a> = fn(&mut Cursor<'a>) -> Option<(&'a str, &'a str)>;

fn split_bracketed(
    spans: Vec<InlineSpan>,
    kind: SpanKind,
    parse: for<'c> fn(&mut Cursor<'c>) -> Option<(&'c str, &'c str)>,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut last = 0;
        for m in scan_bracketed(text, parse) {
            if m.start > last {
                out.push(InlineSpan::plain(&text[last..m.start]));
            }
            out.push(InlineSpan::linked(kind, m.label, m.url));
            last = m.end;
        }
        if last < text.len() {
            out.push(InlineSpan::plain(&text[last..]));
        }
    }

    out
}

fn scan_bracketed<'a>(text: &'a str, parse: BracketParser<'a>) -> Vec<BracketMatch<'a>> {
    let mut cur = Cursor::new(text);
    let mut found = vec![];

    while !cur.eof() {
        let start = cur.pos();
        match parse(&mut cur) {
            Some((label, url)) => found.push(BracketMatch {
                start,
                end: cur.pos(),
                label,
                url,
            }),
            None => {
                cur.bump();
            }
        }
    }

    found
}

/// Attempts `![alt](url)` at the cursor. On failure the cursor is restored.
fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Image::BANG) {
        return None;
    }
    let saved = cur.clone();
    cur.bump(); // !
    let parsed = try_parse_bracketed(cur);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

/// Attempts `[label](url)` at the cursor unless a bang sits right before it.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.prev() == Some(Image::BANG) {
        return None;
    }
    try_parse_bracketed(cur)
}

fn try_parse_bracketed<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.pos();
    while let Some(b) = cur.peek() {
        if b == Link::LABEL_CLOSE {
            break;
        }
        cur.bump();
    }
    let label_end = cur.pos();

    if label_end == label_start || !cur.starts_with(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::URL_OPEN.len());

    let url_start = cur.pos();
    while let Some(c) = cur.peek_char() {
        if Link::ends_url(c) {
            break;
        }
        cur.bump_char();
    }
    let url_end = cur.pos();

    if url_end == url_start || cur.peek() != Some(Link::URL_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some((
        cur.slice(label_start, label_end),
        cur.slice(url_start, url_end),
    ))
}
