use std::sync::OnceLock;

use regex::Regex;

pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn opener() -> &'static Regex {
        static OPENER: OnceLock<Regex> = OnceLock::new();
        OPENER.get_or_init(|| Regex::new(r"^(#{1,6}) ").expect("Invalid heading regex"))
    }

    /// Heading level of a line opening with 1-6 markers and a space.
    pub fn level(line: &str) -> Option<u8> {
        let markers = Self::opener().captures(line)?.get(1)?;
        u8::try_from(markers.len()).ok()
    }

    /// Splits a heading into its level and the text after the marker run and
    /// its single space.
    pub fn split(text: &str) -> Option<(u8, &str)> {
        let level = Self::level(text)?;
        Some((level, &text[usize::from(level) + 1..]))
    }
}
