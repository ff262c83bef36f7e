/// A cursor for character-by-character inline scanning.
///
/// Delimiters are all ASCII, so they are matched bytewise; text is consumed
/// a whole `char` at a time so multi-byte characters are never split.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Peeks `n` bytes ahead without advancing.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    ///
    /// Only call this when the current byte is ASCII.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by one whole character, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let ch = self.s.get(self.i..)?.chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }

    /// Returns the text between byte positions `start` and `end`.
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
        assert_eq!(cur.peek_at(1), Some(b'l'));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_char_handles_multibyte() {
        let mut cur = Cursor::new("é*");
        assert_eq!(cur.bump_char(), Some('é'));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.peek(), Some(b'*'));
        assert_eq!(cur.bump_char(), Some('*'));
        assert!(cur.eof());
        assert_eq!(cur.bump_char(), None);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None); // idempotent
    }

    #[test]
    fn slice_between_positions() {
        let cur = Cursor::new("`code`");
        assert_eq!(cur.slice(1, 5), "code");
    }
}
