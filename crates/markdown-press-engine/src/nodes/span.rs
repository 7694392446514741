use std::fmt;

use serde::Serialize;

use crate::error::ConvertError;

/// The formatting role of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    /// Links and images point somewhere; every other kind is bare text.
    pub fn requires_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// A contiguous run of text carrying one formatting role.
///
/// `text` is the visible label for links and images and the literal content
/// otherwise. `url` is only meaningful for [`SpanKind::Link`] and
/// [`SpanKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub kind: SpanKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl InlineSpan {
    /// Builds a span, enforcing that only links and images carry a url and
    /// that they always carry a non-empty one.
    pub fn new(
        kind: SpanKind,
        text: impl Into<String>,
        url: Option<&str>,
    ) -> Result<Self, ConvertError> {
        match (kind.requires_url(), url) {
            (true, Some(url)) if !url.is_empty() => Ok(Self {
                kind,
                text: text.into(),
                url: Some(url.to_string()),
            }),
            (true, _) => Err(ConvertError::MissingUrl { kind }),
            (false, Some(_)) => Err(ConvertError::Structure(format!(
                "{kind} span cannot carry a url"
            ))),
            (false, None) => Ok(Self::styled(kind, text)),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, text)
    }

    pub(crate) fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub(crate) fn linked(kind: SpanKind, text: &str, url: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            url: Some(url.to_string()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Returns the url of a link or image span.
    ///
    /// Fails with [`ConvertError::MissingUrl`] when it is absent or empty.
    pub fn url(&self) -> Result<&str, ConvertError> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ConvertError::MissingUrl { kind: self.kind }),
        }
    }
}
