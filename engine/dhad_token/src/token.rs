//! Lexical token model.
//!
//! A [`Token`] is a classified, contiguous span of source text. The scanner
//! guarantees that concatenating the `text` of every token it produces, in
//! order, reproduces the source byte-for-byte; [`joined_text`] is the
//! canonical way to perform that concatenation.
//!
//! Equality and hashing are defined on `(kind, text)` only. The span is
//! metadata: two scans of the same word at different offsets produce equal
//! tokens. Consumers that care about position compare spans explicitly.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::span::Span;

/// The closed set of lexical kinds.
///
/// Every consumer matches exhaustively, so adding a kind is a compile-time
/// checked change everywhere it matters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A reserved word from either vocabulary (English or Arabic).
    Keyword,
    /// A name that is not a reserved word.
    Identifier,
    /// A string literal, or one fragment of an interpolated string
    /// (delimiters included in the text).
    StringLiteral,
    /// A `//` line comment (newline excluded) or a nested `/* */` block.
    Comment,
    /// A maximal run of whitespace characters.
    Whitespace,
    /// A single character from the punctuation set.
    Punctuation,
    /// A maximal run of operator characters.
    Operator,
    /// A numeric literal in any of the supported forms.
    NumberLiteral,
    /// The opener (`\(`) or closer (`)`) of a string interpolation.
    InterpolationDelimiter,
    /// A single character the scanner could not classify.
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Operator => "operator",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::InterpolationDelimiter => "interpolation delimiter",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A classified span of source text.
#[derive(Clone, Debug, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Byte range of `text` in the original source. Metadata, not identity.
    pub span: Span,
}

impl Token {
    /// Create a token over an explicit span.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Create a token with a dummy span, for synthesized or translated text.
    pub fn detached(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, Span::DUMMY)
    }

    /// Replace the text, keeping kind and span.
    ///
    /// Used by the translator: a substituted token keeps pointing at the
    /// source span it came from.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Token {
            kind: self.kind,
            text: text.into(),
            span: self.span,
        }
    }
}

// Identity is (kind, text); span is metadata.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}

/// Concatenate the text of every token, in order.
///
/// For a freshly scanned sequence this reproduces the source exactly.
pub fn joined_text(tokens: &[Token]) -> String {
    let capacity = tokens.iter().map(|t| t.text.len()).sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        out.push_str(&token.text);
    }
    out
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
    fn equality_ignores_span() {
        let a = Token::new(TokenKind::Identifier, "x", Span::new(0, 1));
        let b = Token::new(TokenKind::Identifier, "x", Span::new(10, 11));
        assert_eq!(a, b);
    }

    #[test]
    fn equality_respects_kind_and_text() {
        let ident = Token::detached(TokenKind::Identifier, "let");
        let keyword = Token::detached(TokenKind::Keyword, "let");
        assert_ne!(ident, keyword);
        assert_ne!(keyword, Token::detached(TokenKind::Keyword, "var"));
    }

    #[test]
    fn hash_matches_equality() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |t: &Token| {
            let mut h = DefaultHasher::new();
            t.hash(&mut h);
            h.finish()
        };
        let a = Token::new(TokenKind::Operator, "+", Span::new(0, 1));
        let b = Token::new(TokenKind::Operator, "+", Span::new(5, 6));
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn with_text_keeps_span() {
        let original = Token::new(TokenKind::Keyword, "let", Span::new(4, 7));
        let translated = original.with_text("ثابت");
        assert_eq!(translated.span, Span::new(4, 7));
        assert_eq!(translated.kind, TokenKind::Keyword);
        assert_eq!(translated.text, "ثابت");
    }

    #[test]
    fn joined_text_concatenates_in_order() {
        let tokens = vec![
            Token::detached(TokenKind::Keyword, "let"),
            Token::detached(TokenKind::Whitespace, " "),
            Token::detached(TokenKind::Identifier, "x"),
        ];
        assert_eq!(joined_text(&tokens), "let x");
    }
}
