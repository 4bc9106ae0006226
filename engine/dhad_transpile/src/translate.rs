//! Token-stream translation.
//!
//! A length-preserving pass: each token maps to exactly one token of the
//! same kind, with only the text of keywords (and, under full scope,
//! identifiers) swapped through the lexicon. A word no tier knows passes
//! through unchanged — partially-translated code is a normal working
//! state, not an error.

use dhad_lexicon::Lexicon;
use dhad_token::{Direction, Scope, Token, TokenKind};

/// Translate one token's text, if its kind is in scope.
fn translate_token(token: &Token, lexicon: &Lexicon, direction: Direction, scope: Scope) -> Token {
    let eligible = match token.kind {
        TokenKind::Keyword => true,
        TokenKind::Identifier => scope == Scope::Full,
        _ => false,
    };
    if !eligible {
        return token.clone();
    }
    match lexicon.translate(&token.text, direction) {
        Some(translated) => token.with_text(translated),
        None => token.clone(),
    }
}

/// Translate a whole stream. Output length always equals input length.
pub fn translate_tokens(
    tokens: &[Token],
    lexicon: &Lexicon,
    direction: Direction,
    scope: Scope,
) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| translate_token(token, lexicon, direction, scope))
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use dhad_lexicon::BiMap;
    use dhad_scanner::scan;

    use super::*;
    use pretty_assertions::assert_eq;

    fn lexicon() -> Lexicon {
        let library = BiMap::try_from_pairs([("print".to_owned(), "اطبع".to_owned())]).unwrap();
        let project = BiMap::try_from_pairs([("counter".to_owned(), "عداد".to_owned())]).unwrap();
        Lexicon::for_developer(library, project).unwrap()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|token| token.text.as_str()).collect()
    }

    #[test]
    fn full_scope_translates_keywords_and_identifiers() {
        let tokens = scan("let counter = 1");
        let out = translate_tokens(&tokens, &lexicon(), Direction::ToLocalized, Scope::Full);
        assert_eq!(texts(&out), vec!["ثابت", " ", "عداد", " ", "=", " ", "1"]);
    }

    #[test]
    fn keywords_only_scope_leaves_identifiers_alone() {
        let tokens = scan("ثابت عداد = 1");
        let out = translate_tokens(&tokens, &lexicon(), Direction::ToPrimary, Scope::KeywordsOnly);
        assert_eq!(texts(&out), vec!["let", " ", "عداد", " ", "=", " ", "1"]);
    }

    #[test]
    fn unknown_identifiers_pass_through() {
        let tokens = scan("let unmapped = counter");
        let out = translate_tokens(&tokens, &lexicon(), Direction::ToLocalized, Scope::Full);
        assert_eq!(
            texts(&out),
            vec!["ثابت", " ", "unmapped", " ", "=", " ", "عداد"]
        );
    }

    #[test]
    fn opaque_kinds_are_untouched() {
        // `print` inside a string or comment is content, not a symbol.
        let tokens = scan("\"print\" // print");
        let out = translate_tokens(&tokens, &lexicon(), Direction::ToLocalized, Scope::Full);
        assert_eq!(texts(&out), vec!["\"print\"", " ", "// print"]);
    }

    #[test]
    fn kinds_and_spans_survive_translation() {
        let tokens = scan("let x = 1");
        let out = translate_tokens(&tokens, &lexicon(), Direction::ToLocalized, Scope::Full);
        assert_eq!(out.len(), tokens.len());
        for (before, after) in tokens.iter().zip(&out) {
            assert_eq!(before.kind, after.kind);
            assert_eq!(before.span, after.span);
        }
    }
}
