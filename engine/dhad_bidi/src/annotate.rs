//! Token rendering for each output form.
//!
//! Localized output wraps every word-like token in a directional isolate
//! so mixed Arabic/Latin code lays out stably in any editor, and renders
//! the two characters whose glyphs mirror badly in RTL runs — `/` and `\`
//! — swapped, so a division sign reads as division and an interpolation
//! opener stays visually attached to its parenthesis.
//!
//! Primary and hybrid output undo both: every directional control is
//! stripped, and the slash swap is reversed per token kind. The reversal
//! is kind-sensitive on purpose. An `Operator` token's backslash can only
//! be a rendered division sign, so it restores to `/`; an
//! `InterpolationDelimiter`'s forward slash can only be a rendered
//! opener, so it restores to `\`. A blanket swap would corrupt whichever
//! of the two the token did not contain.
//!
//! Opaque payloads — string fragments, comments, whitespace, numbers —
//! are never character-mapped; a `/` inside a string is user data.

use dhad_token::{Token, TokenKind};

use crate::controls::{strip_controls, FSI, LRI, LRM, PDI, RLI};
use crate::rtl::contains_arabic;

/// Swap `/` and `\`, leaving everything else alone.
fn flip_slashes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '/' => '\\',
            '\\' => '/',
            other => other,
        })
        .collect()
}

/// Wrap `text` in `isolate` … PDI.
fn isolate(isolate: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    out.push(isolate);
    out.push_str(text);
    out.push(PDI);
    out
}

/// Render one token for localized (Arabic-form) output.
pub fn localized_text(token: &Token) -> String {
    match token.kind {
        TokenKind::Keyword | TokenKind::Identifier => {
            let wrapper = if contains_arabic(&token.text) { RLI } else { LRI };
            isolate(wrapper, &token.text)
        }
        // First-strong: the string's own content decides its direction.
        TokenKind::StringLiteral => isolate(FSI, &token.text),
        TokenKind::Operator | TokenKind::InterpolationDelimiter => {
            isolate(LRI, &flip_slashes(&token.text))
        }
        TokenKind::Punctuation => {
            let mut out = token.text.clone();
            // An opening bracket next to RTL text renders mirrored and
            // detached; the mark pins it to the left-to-right run.
            if matches!(token.text.as_str(), "(" | "[" | "{") {
                out.push(LRM);
            }
            out
        }
        TokenKind::Whitespace
        | TokenKind::Comment
        | TokenKind::NumberLiteral
        | TokenKind::Unknown => token.text.clone(),
    }
}

/// Render one token for primary or hybrid (compile-ready) output.
pub fn plain_text(token: &Token) -> String {
    let stripped = strip_controls(&token.text);
    match token.kind {
        TokenKind::Operator => stripped.replace('\\', "/"),
        TokenKind::InterpolationDelimiter => stripped.replace('/', "\\"),
        TokenKind::Keyword
        | TokenKind::Identifier
        | TokenKind::StringLiteral
        | TokenKind::Punctuation
        | TokenKind::Whitespace
        | TokenKind::Comment
        | TokenKind::NumberLiteral
        | TokenKind::Unknown => stripped,
    }
}

#[cfg(test)]
mod tests {
    use dhad_token::Token;

    use super::*;
    use pretty_assertions::assert_eq;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token::detached(kind, text)
    }

    #[test]
    fn arabic_words_get_rtl_isolates() {
        assert_eq!(
            localized_text(&token(TokenKind::Keyword, "ثابت")),
            format!("{RLI}ثابت{PDI}")
        );
        assert_eq!(
            localized_text(&token(TokenKind::Identifier, "legacyName")),
            format!("{LRI}legacyName{PDI}")
        );
    }

    #[test]
    fn strings_get_first_strong_isolates() {
        assert_eq!(
            localized_text(&token(TokenKind::StringLiteral, "\"hi\"")),
            format!("{FSI}\"hi\"{PDI}")
        );
    }

    #[test]
    fn division_renders_as_backslash() {
        assert_eq!(
            localized_text(&token(TokenKind::Operator, "/")),
            format!("{LRI}\\{PDI}")
        );
        assert_eq!(
            localized_text(&token(TokenKind::Operator, "/=")),
            format!("{LRI}\\={PDI}")
        );
    }

    #[test]
    fn interpolation_opener_renders_flipped() {
        assert_eq!(
            localized_text(&token(TokenKind::InterpolationDelimiter, "\\(")),
            format!("{LRI}/({PDI}")
        );
    }

    #[test]
    fn opening_brackets_get_a_mark() {
        assert_eq!(
            localized_text(&token(TokenKind::Punctuation, "(")),
            format!("({LRM}")
        );
        assert_eq!(localized_text(&token(TokenKind::Punctuation, ")")), ")");
    }

    #[test]
    fn string_content_is_never_flipped() {
        assert_eq!(
            localized_text(&token(TokenKind::StringLiteral, "\"a / b\"")),
            format!("{FSI}\"a / b\"{PDI}")
        );
        assert_eq!(
            localized_text(&token(TokenKind::Comment, "// half: a/b")),
            "// half: a/b"
        );
    }

    #[test]
    fn plain_output_strips_controls() {
        assert_eq!(
            plain_text(&token(TokenKind::Keyword, "\u{2067}ثابت\u{2069}")),
            "ثابت"
        );
        assert_eq!(plain_text(&token(TokenKind::Unknown, "\u{200E}")), "");
    }

    #[test]
    fn plain_output_restores_slashes_by_kind() {
        assert_eq!(plain_text(&token(TokenKind::Operator, "\\")), "/");
        assert_eq!(plain_text(&token(TokenKind::Operator, "\\=")), "/=");
        assert_eq!(
            plain_text(&token(TokenKind::InterpolationDelimiter, "/(")),
            "\\("
        );
        // Already-plain tokens pass through the same rules unchanged.
        assert_eq!(plain_text(&token(TokenKind::Operator, "/")), "/");
        assert_eq!(
            plain_text(&token(TokenKind::InterpolationDelimiter, "\\(")),
            "\\("
        );
    }

    #[test]
    fn plain_output_keeps_opaque_payloads() {
        assert_eq!(
            plain_text(&token(TokenKind::StringLiteral, "\"a \\ b / c\"")),
            "\"a \\ b / c\""
        );
        assert_eq!(
            plain_text(&token(TokenKind::Comment, "/* a/b */")),
            "/* a/b */"
        );
    }
}
