//! Byte cursor over a source string.
//!
//! The cursor advances through the source byte-by-byte. `current`, `peek`
//! and friends return `0` past the end, so scanning loops terminate on the
//! zero byte without explicit bounds checks at every call site. Interior
//! null bytes do not occur in `&str` input worth distinguishing here: a
//! `0` read is only ambiguous when `pos` is still inside the source, and
//! callers that care check `is_eof`.
//!
//! Positions are byte offsets. `advance` moves one byte and is only correct
//! when the current byte is ASCII; `advance_char` moves one whole UTF-8
//! code point and is the safe default for content that may be Arabic.

use memchr::memchr;

/// Bounds-checked byte cursor with sentinel-style EOF reads.
#[derive(Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has consumed the whole source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte at the cursor, or `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one past the cursor, or `0`.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two past the cursor, or `0`.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Byte at `offset` bytes past the cursor, or `0`.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> u8 {
        self.byte_at(self.pos + offset)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Advance one byte. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source.len() {
            self.pos += 1;
        }
    }

    /// Advance `n` bytes, clamped to the source length.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Decode the character at the cursor, or `None` at EOF.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Advance one whole UTF-8 code point. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.current_char() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance while the current byte satisfies `pred`. ASCII-only loops.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance while the current character satisfies `pred`.
    #[inline]
    pub fn eat_chars_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance to the next `\n`, leaving the cursor *on* it, or to EOF.
    ///
    /// Used for line comments, whose text excludes the newline.
    pub fn skip_to_line_end(&mut self) {
        match memchr(b'\n', &self.source.as_bytes()[self.pos..]) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.source.len(),
        }
    }

    /// The source text between `start` and the cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_return_zero_at_eof() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.current(), b'a');
        assert_eq!(cursor.peek(), b'b');
        assert_eq!(cursor.peek2(), 0);
        assert_eq!(cursor.peek_at(17), 0);
    }

    #[test]
    fn advance_stops_at_eof() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        assert!(cursor.is_eof());
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn advance_char_moves_whole_code_points() {
        let mut cursor = Cursor::new("دع");
        assert_eq!(cursor.current_char(), Some('د'));
        cursor.advance_char();
        assert_eq!(cursor.current_char(), Some('ع'));
        assert_eq!(cursor.pos(), 'د'.len_utf8());
    }

    #[test]
    fn eat_while_is_maximal() {
        let mut cursor = Cursor::new("aaab");
        cursor.eat_while(|b| b == b'a');
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), b'b');
    }

    #[test]
    fn eat_chars_while_handles_unicode() {
        let mut cursor = Cursor::new("مرحبا x");
        cursor.eat_chars_while(|c| !c.is_whitespace());
        assert_eq!(cursor.slice_from(0), "مرحبا");
    }

    #[test]
    fn skip_to_line_end_stops_on_newline() {
        let mut cursor = Cursor::new("// hi\nnext");
        cursor.skip_to_line_end();
        assert_eq!(cursor.current(), b'\n');
        assert_eq!(cursor.slice_from(0), "// hi");
    }

    #[test]
    fn skip_to_line_end_runs_to_eof() {
        let mut cursor = Cursor::new("// tail");
        cursor.skip_to_line_end();
        assert!(cursor.is_eof());
    }
}
