/// A byte cursor over a single span of inline text.
///
/// Positions are byte offsets into `s`. Callers only stop on ASCII
/// delimiters, so slicing at a recorded position stays on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks at the current char; `None` at EOF or off a char boundary.
    pub fn peek_char(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// The byte immediately before the cursor.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances past the current char.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Slice of the source between two recorded positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.prev(), Some(b'h'));
    }

    #[test]
    fn prev_at_start_is_none() {
        assert_eq!(Cursor::new("![x]").prev(), None);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("](url)");
        assert!(cur.starts_with(b"]("));
        assert!(!cur.starts_with(b"[["));
    }

    #[test]
    fn starts_with_past_end() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.peek_char(), None);
    }

    #[test]
    fn bump_char_steps_over_multibyte() {
        let mut cur = Cursor::new("é)");
        assert_eq!(cur.bump_char(), Some('é'));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.peek(), Some(b')'));
    }

    #[test]
    fn peek_char_off_boundary_is_none() {
        let mut cur = Cursor::new("é");
        cur.bump();
        assert_eq!(cur.peek_char(), None);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump_char(), None);
    }
}
