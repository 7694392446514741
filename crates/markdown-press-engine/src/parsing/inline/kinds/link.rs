/// `[label](url)` syntax.
///
/// The label runs to the first `]`. The url may not contain whitespace or
/// parentheses. Neither part may be empty.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: &'static [u8; 2] = b"](";
    pub const URL_CLOSE: u8 = b')';

    /// Whether `c` terminates a url.
    pub fn ends_url(c: char) -> bool {
        c == '(' || c == ')' || c.is_whitespace()
    }
}
