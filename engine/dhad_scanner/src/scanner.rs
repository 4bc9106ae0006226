//! Hand-written single-pass scanner.
//!
//! `scan` is total: it never fails, and any byte it cannot classify becomes
//! a one-character `Unknown` token, so every input character lands in
//! exactly one token and concatenating all token text reproduces the source
//! byte-for-byte.
//!
//! # Design
//!
//! The main dispatch matches on the current byte. Each arm calls a focused
//! method that advances the cursor and returns one finished [`Token`].
//! Multi-byte Arabic text and directional controls fall through to the
//! catch-all arm, which decodes a full character.
//!
//! # String interpolation
//!
//! Plain single-line strings are decomposed fragment-by-fragment: a
//! `StringLiteral` fragment up to the interpolation opener, an
//! `InterpolationDelimiter` for the opener, the embedded expression as
//! ordinary tokens, a delimiter for the matching `)`, then the next
//! fragment. Nesting is tracked with an explicit stack of paren-depth
//! counters (`interp_parens`) rather than recursion, so pathological
//! nesting cannot grow the call stack. The opener is `\(` in primary-form
//! text and `/(` in localized-form text (the rendered flip of the same
//! opener); the scanner accepts both so every mode scans with the same
//! code.
//!
//! Raw strings (any hash count) and triple-quoted multi-line strings are
//! opaque spans up to their exact closing delimiter. Interpolation inside
//! them is intentionally not decomposed.

use dhad_token::{Span, Token, TokenKind};

use crate::cursor::Cursor;

/// Operator characters. A maximal run of these is one `Operator` token,
/// except that `\` always stands alone and `/` never begins `//` or `/*`.
#[inline]
fn is_operator_byte(b: u8) -> bool {
    matches!(
        b,
        b'=' | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'!'
            | b'<'
            | b'>'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b'.'
            | b'\\'
    )
}

/// Identifier-start characters: underscore, `$`, or any XID-start letter
/// (which includes the Arabic block).
#[inline]
fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || unicode_ident::is_xid_start(c)
}

/// Identifier-continue characters: XID-continue covers letters, digits,
/// underscore, and the connector marks.
#[inline]
fn is_ident_continue(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_continue(c)
}

/// One-token-at-a-time scanner.
///
/// `next_token` returns `None` once the source is exhausted; the
/// [`Iterator`] impl does the same.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// One paren-depth counter per open interpolation, innermost last.
    /// A `)` seen while the top counter is zero closes the interpolation.
    interp_parens: Vec<u32>,
    /// The next token is an interpolation opener sitting at the cursor.
    open_pending: bool,
    /// The previous token closed an interpolation; the suspended string
    /// fragment resumes at the cursor.
    resume_fragment: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            interp_parens: Vec::new(),
            open_pending: false,
            resume_fragment: false,
        }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.open_pending {
            return Some(self.interpolation_open());
        }
        if self.resume_fragment {
            self.resume_fragment = false;
            if self.at_interpolation_opener() {
                return Some(self.interpolation_open());
            }
            let start = self.cursor.pos();
            if !self.cursor.is_eof() && self.cursor.current() != b'\n' {
                return Some(self.string_fragment(start, true));
            }
            // The string ended at the line or source end; scan normally.
        }
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.pos();
        let token = match self.cursor.current() {
            b'"' => self.string(start),
            b'#' => self.hash(start),
            b'/' => self.slash(start),
            b' ' | b'\t' | b'\r' | b'\n' => self.whitespace(start),
            b'0'..=b'9' => self.number(start),
            b'(' => self.left_paren(start),
            b')' => self.right_paren(start),
            b'[' | b']' | b'{' | b'}' | b',' | b';' | b':' | b'@' | b'`' => {
                self.punctuation(start)
            }
            b'\\' => self.lone_backslash(start),
            b if is_operator_byte(b) => self.operator_run(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            _ => self.other(start),
        };
        Some(token)
    }

    /// Finish a token of `kind` spanning `start` to the cursor.
    fn token(&self, kind: TokenKind, start: usize) -> Token {
        // Sources beyond u32::MAX bytes degrade to dummy spans; the text,
        // which is what losslessness is defined over, stays exact.
        let span = Span::try_from_range(start..self.cursor.pos()).unwrap_or(Span::DUMMY);
        Token::new(kind, self.cursor.slice_from(start), span)
    }

    // === Strings ===

    fn string(&mut self, start: usize) -> Token {
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            return self.multiline_string(start);
        }
        self.string_fragment(start, false)
    }

    /// Scan one fragment of a plain single-line string.
    ///
    /// A fragment ends at the closing quote, at an interpolation opener
    /// (left unconsumed; `open_pending` marks it for the next call), at a
    /// newline (excluded), or at EOF. Escape pairs never end a fragment.
    fn string_fragment(&mut self, start: usize, resumed: bool) -> Token {
        if !resumed {
            self.cursor.advance(); // opening quote
        }
        loop {
            match self.cursor.current() {
                0 if self.cursor.is_eof() => break,
                b'\n' => break,
                b'"' => {
                    self.cursor.advance(); // closing quote
                    break;
                }
                b'\\' => {
                    if self.cursor.peek() == b'(' {
                        self.open_pending = true;
                        break;
                    }
                    self.cursor.advance(); // the backslash
                    self.cursor.advance_char(); // the escaped character
                }
                b'/' if self.cursor.peek() == b'(' => {
                    self.open_pending = true;
                    break;
                }
                _ => self.cursor.advance_char(),
            }
        }
        self.token(TokenKind::StringLiteral, start)
    }

    /// Triple-quoted string: opaque up to the closing `"""`, or EOF.
    fn multiline_string(&mut self, start: usize) -> Token {
        self.cursor.advance_n(3);
        loop {
            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.current() == b'"'
                && self.cursor.peek() == b'"'
                && self.cursor.peek2() == b'"'
            {
                self.cursor.advance_n(3);
                break;
            }
            self.cursor.advance_char();
        }
        self.token(TokenKind::StringLiteral, start)
    }

    /// `#`: a raw-string prefix when hashes lead straight to a quote,
    /// otherwise a single punctuation character.
    fn hash(&mut self, start: usize) -> Token {
        let mut hashes = 0;
        while self.cursor.peek_at(hashes) == b'#' {
            hashes += 1;
        }
        if self.cursor.peek_at(hashes) == b'"' {
            return self.raw_string(start, hashes);
        }
        self.cursor.advance();
        self.token(TokenKind::Punctuation, start)
    }

    /// Raw string with `hashes` leading hashes: opaque up to the closing
    /// quote(s) followed by the same number of hashes, or EOF.
    fn raw_string(&mut self, start: usize, hashes: usize) -> Token {
        self.cursor.advance_n(hashes);
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            // Raw multi-line: #"""..."""#
            self.cursor.advance_n(3);
            loop {
                if self.cursor.is_eof() {
                    break;
                }
                if self.cursor.current() == b'"'
                    && self.cursor.peek() == b'"'
                    && self.cursor.peek2() == b'"'
                    && self.hashes_follow(3, hashes)
                {
                    self.cursor.advance_n(3 + hashes);
                    break;
                }
                self.cursor.advance_char();
            }
        } else {
            // Raw single-line: #"..."#
            self.cursor.advance(); // opening quote
            loop {
                if self.cursor.is_eof() {
                    break;
                }
                if self.cursor.current() == b'"' && self.hashes_follow(1, hashes) {
                    self.cursor.advance_n(1 + hashes);
                    break;
                }
                self.cursor.advance_char();
            }
        }
        self.token(TokenKind::StringLiteral, start)
    }

    /// Are the `count` bytes starting `offset` past the cursor all `#`?
    fn hashes_follow(&self, offset: usize, count: usize) -> bool {
        (0..count).all(|i| self.cursor.peek_at(offset + i) == b'#')
    }

    // === Interpolation ===

    fn at_interpolation_opener(&self) -> bool {
        matches!(self.cursor.current(), b'\\' | b'/') && self.cursor.peek() == b'('
    }

    /// Emit the two-byte opener and push a fresh depth counter.
    fn interpolation_open(&mut self) -> Token {
        let start = self.cursor.pos();
        self.cursor.advance_n(2);
        self.open_pending = false;
        self.interp_parens.push(0);
        self.token(TokenKind::InterpolationDelimiter, start)
    }

    fn left_paren(&mut self, start: usize) -> Token {
        self.cursor.advance();
        if let Some(depth) = self.interp_parens.last_mut() {
            *depth += 1;
        }
        self.token(TokenKind::Punctuation, start)
    }

    fn right_paren(&mut self, start: usize) -> Token {
        if let Some(depth) = self.interp_parens.last_mut() {
            if *depth == 0 {
                // This `)` closes the interpolation; the string resumes.
                self.interp_parens.pop();
                self.resume_fragment = true;
                self.cursor.advance();
                return self.token(TokenKind::InterpolationDelimiter, start);
            }
            *depth -= 1;
        }
        self.cursor.advance();
        self.token(TokenKind::Punctuation, start)
    }

    // === Comments ===

    fn slash(&mut self, start: usize) -> Token {
        match self.cursor.peek() {
            b'/' => self.line_comment(start),
            b'*' => self.block_comment(start),
            _ => self.operator_run(start),
        }
    }

    fn line_comment(&mut self, start: usize) -> Token {
        self.cursor.advance_n(2);
        self.cursor.skip_to_line_end(); // newline excluded
        self.token(TokenKind::Comment, start)
    }

    /// `/* ... */` with nesting: `/* /* */ */` is one token.
    fn block_comment(&mut self, start: usize) -> Token {
        self.cursor.advance_n(2);
        let mut depth = 1u32;
        loop {
            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.current() == b'/' && self.cursor.peek() == b'*' {
                self.cursor.advance_n(2);
                depth += 1;
            } else if self.cursor.current() == b'*' && self.cursor.peek() == b'/' {
                self.cursor.advance_n(2);
                depth -= 1;
                if depth == 0 {
                    break;
                }
            } else {
                self.cursor.advance_char();
            }
        }
        self.token(TokenKind::Comment, start)
    }

    // === Whitespace ===

    fn whitespace(&mut self, start: usize) -> Token {
        self.cursor.eat_chars_while(char::is_whitespace);
        self.token(TokenKind::Whitespace, start)
    }

    // === Numbers ===

    fn number(&mut self, start: usize) -> Token {
        let first = self.cursor.current();
        self.cursor.advance();

        // A base prefix only engages when a digit of that base (or `_`)
        // follows. Without the peek, `0x` alone would swallow the `x`.
        if first == b'0' {
            match self.cursor.current() {
                b'x' | b'X' if self.cursor.peek().is_ascii_hexdigit() || self.cursor.peek() == b'_' => {
                    return self.hex_number(start);
                }
                b'b' | b'B' if matches!(self.cursor.peek(), b'0' | b'1' | b'_') => {
                    return self.bin_number(start);
                }
                b'o' | b'O' if matches!(self.cursor.peek(), b'0'..=b'7' | b'_') => {
                    return self.oct_number(start);
                }
                _ => {}
            }
        }

        self.eat_decimal_digits();

        // Decimal point only when followed by a digit — `1..5` is a range.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_decimal_digits();
        }
        if self.decimal_exponent_follows() {
            self.cursor.advance(); // e
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
        }
        self.token(TokenKind::NumberLiteral, start)
    }

    fn hex_number(&mut self, start: usize) -> Token {
        self.cursor.advance(); // x
        self.eat_hex_digits();
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_hexdigit() {
            self.cursor.advance();
            self.eat_hex_digits();
        }
        if self.hex_exponent_follows() {
            self.cursor.advance(); // p
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            self.eat_decimal_digits();
        }
        self.token(TokenKind::NumberLiteral, start)
    }

    fn bin_number(&mut self, start: usize) -> Token {
        self.cursor.advance(); // b
        self.cursor.eat_while(|b| matches!(b, b'0' | b'1' | b'_'));
        self.token(TokenKind::NumberLiteral, start)
    }

    fn oct_number(&mut self, start: usize) -> Token {
        self.cursor.advance(); // o
        self.cursor.eat_while(|b| matches!(b, b'0'..=b'7' | b'_'));
        self.token(TokenKind::NumberLiteral, start)
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    fn eat_hex_digits(&mut self) {
        self.cursor
            .eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
    }

    /// `e`/`E` starts an exponent only when digits (optionally signed)
    /// follow; otherwise it belongs to the next identifier.
    fn decimal_exponent_follows(&self) -> bool {
        matches!(self.cursor.current(), b'e' | b'E') && {
            let next = self.cursor.peek();
            next.is_ascii_digit()
                || (matches!(next, b'+' | b'-') && self.cursor.peek2().is_ascii_digit())
        }
    }

    fn hex_exponent_follows(&self) -> bool {
        matches!(self.cursor.current(), b'p' | b'P') && {
            let next = self.cursor.peek();
            next.is_ascii_digit()
                || (matches!(next, b'+' | b'-') && self.cursor.peek2().is_ascii_digit())
        }
    }

    // === Operators & punctuation ===

    /// A lone backslash is always its own token — it is the rendered form
    /// of the division sign in localized text and must never merge into a
    /// longer run.
    fn lone_backslash(&mut self, start: usize) -> Token {
        self.cursor.advance();
        self.token(TokenKind::Operator, start)
    }

    fn operator_run(&mut self, start: usize) -> Token {
        loop {
            let b = self.cursor.current();
            if b == b'\\' || !is_operator_byte(b) {
                break;
            }
            if b == b'/' && matches!(self.cursor.peek(), b'/' | b'*') {
                break; // reserved for comments
            }
            self.cursor.advance();
        }
        self.token(TokenKind::Operator, start)
    }

    fn punctuation(&mut self, start: usize) -> Token {
        self.cursor.advance();
        self.token(TokenKind::Punctuation, start)
    }

    // === Identifiers & the rest ===

    fn identifier(&mut self, start: usize) -> Token {
        self.cursor.advance_char();
        self.cursor.eat_chars_while(is_ident_continue);
        let kind = if dhad_keywords::is_keyword(self.cursor.slice_from(start)) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.token(kind, start)
    }

    /// Non-ASCII dispatch: decode one character and classify it.
    fn other(&mut self, start: usize) -> Token {
        match self.cursor.current_char() {
            Some(c) if c.is_whitespace() => self.whitespace(start),
            Some(c) if is_ident_start(c) => self.identifier(start),
            _ => {
                // One unclassifiable character becomes one Unknown token.
                // This is how directional controls in localized text scan.
                self.cursor.advance_char();
                self.token(TokenKind::Unknown, start)
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenize a whole source string.
///
/// Total: never fails, and the concatenated token text reproduces `source`
/// exactly. For streaming access construct a [`Scanner`] directly.
pub fn scan(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

#[cfg(test)]
mod tests;
