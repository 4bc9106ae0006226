#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use dhad_token::{joined_text, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::scan;

/// Kinds and texts, for compact structural assertions.
fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
    scan(source)
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

fn assert_lossless(source: &str) {
    assert_eq!(joined_text(&scan(source)), source, "source: {source:?}");
}

#[test]
fn empty_source_scans_to_nothing() {
    assert!(scan("").is_empty());
}

#[test]
fn keywords_versus_identifiers() {
    assert_eq!(
        kinds_and_texts("let x = y"),
        vec![
            (TokenKind::Keyword, "let".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Operator, "=".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "y".to_owned()),
        ]
    );
}

#[test]
fn arabic_keywords_classify_as_keywords() {
    let tokens = kinds_and_texts("ثابت س = ١");
    assert_eq!(tokens[0], (TokenKind::Keyword, "ثابت".to_owned()));
    assert_eq!(tokens[2], (TokenKind::Identifier, "س".to_owned()));
    assert_lossless("ثابت س = ص");
}

#[test]
fn dollar_and_underscore_start_identifiers() {
    assert_eq!(
        kinds_and_texts("$0 _tmp"),
        vec![
            (TokenKind::Identifier, "$0".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "_tmp".to_owned()),
        ]
    );
}

#[test]
fn line_comment_excludes_the_newline() {
    assert_eq!(
        kinds_and_texts("// note\nx"),
        vec![
            (TokenKind::Comment, "// note".to_owned()),
            (TokenKind::Whitespace, "\n".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
        ]
    );
}

#[test]
fn block_comments_nest() {
    assert_eq!(
        kinds_and_texts("/* a /* b */ c */x"),
        vec![
            (TokenKind::Comment, "/* a /* b */ c */".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
        ]
    );
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    assert_eq!(
        kinds_and_texts("/* open"),
        vec![(TokenKind::Comment, "/* open".to_owned())]
    );
}

#[test]
fn operator_runs_are_maximal() {
    assert_eq!(
        kinds_and_texts("a +== b"),
        vec![
            (TokenKind::Identifier, "a".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Operator, "+==".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "b".to_owned()),
        ]
    );
}

#[test]
fn division_assign_is_one_operator() {
    let tokens = kinds_and_texts("a /= b");
    assert_eq!(tokens[2], (TokenKind::Operator, "/=".to_owned()));
}

#[test]
fn slash_before_comment_splits_the_run() {
    assert_eq!(
        kinds_and_texts("+// c"),
        vec![
            (TokenKind::Operator, "+".to_owned()),
            (TokenKind::Comment, "// c".to_owned()),
        ]
    );
}

#[test]
fn backslash_is_always_its_own_operator() {
    // `\` is the rendered division sign in localized text; merging it into
    // a run would change its meaning under slash restoration.
    assert_eq!(
        kinds_and_texts("a \\ b \\= c"),
        vec![
            (TokenKind::Identifier, "a".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Operator, "\\".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "b".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Operator, "\\".to_owned()),
            (TokenKind::Operator, "=".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "c".to_owned()),
        ]
    );
}

#[test]
fn punctuation_is_single_character() {
    assert_eq!(
        kinds_and_texts("f(x[0], y)"),
        vec![
            (TokenKind::Identifier, "f".to_owned()),
            (TokenKind::Punctuation, "(".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
            (TokenKind::Punctuation, "[".to_owned()),
            (TokenKind::NumberLiteral, "0".to_owned()),
            (TokenKind::Punctuation, "]".to_owned()),
            (TokenKind::Punctuation, ",".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "y".to_owned()),
            (TokenKind::Punctuation, ")".to_owned()),
        ]
    );
}

// === Numbers ===

#[test]
fn number_literal_forms() {
    for source in [
        "123", "1_000", "3.14", "1e9", "2.5e-3", "6E+10", "0xFF", "0xAB_CD", "0x1.8p3",
        "0x1p-2", "0b1010", "0b10_10", "0o777",
    ] {
        assert_eq!(
            kinds_and_texts(source),
            vec![(TokenKind::NumberLiteral, source.to_owned())],
            "literal: {source}"
        );
    }
}

#[test]
fn range_dots_stay_out_of_numbers() {
    assert_eq!(
        kinds_and_texts("1...5"),
        vec![
            (TokenKind::NumberLiteral, "1".to_owned()),
            (TokenKind::Operator, "...".to_owned()),
            (TokenKind::NumberLiteral, "5".to_owned()),
        ]
    );
}

#[test]
fn bare_base_prefix_does_not_swallow_the_letter() {
    assert_eq!(
        kinds_and_texts("0x"),
        vec![
            (TokenKind::NumberLiteral, "0".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
        ]
    );
}

#[test]
fn trailing_e_belongs_to_the_next_identifier() {
    assert_eq!(
        kinds_and_texts("1e"),
        vec![
            (TokenKind::NumberLiteral, "1".to_owned()),
            (TokenKind::Identifier, "e".to_owned()),
        ]
    );
}

// === Strings ===

#[test]
fn plain_string_is_one_literal() {
    assert_eq!(
        kinds_and_texts(r#""hello""#),
        vec![(TokenKind::StringLiteral, r#""hello""#.to_owned())]
    );
}

#[test]
fn empty_string_literal() {
    assert_eq!(
        kinds_and_texts(r#""""#),
        vec![(TokenKind::StringLiteral, r#""""#.to_owned())]
    );
}

#[test]
fn escaped_quote_does_not_close_the_string() {
    assert_eq!(
        kinds_and_texts(r#""a\"b""#),
        vec![(TokenKind::StringLiteral, r#""a\"b""#.to_owned())]
    );
}

#[test]
fn unterminated_string_stops_at_the_newline() {
    assert_eq!(
        kinds_and_texts("\"open\nx"),
        vec![
            (TokenKind::StringLiteral, "\"open".to_owned()),
            (TokenKind::Whitespace, "\n".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
        ]
    );
}

#[test]
fn interpolation_decomposes_into_fragments_and_delimiters() {
    assert_eq!(
        kinds_and_texts(r#""a \(b + c) d""#),
        vec![
            (TokenKind::StringLiteral, "\"a ".to_owned()),
            (TokenKind::InterpolationDelimiter, "\\(".to_owned()),
            (TokenKind::Identifier, "b".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Operator, "+".to_owned()),
            (TokenKind::Whitespace, " ".to_owned()),
            (TokenKind::Identifier, "c".to_owned()),
            (TokenKind::InterpolationDelimiter, ")".to_owned()),
            (TokenKind::StringLiteral, " d\"".to_owned()),
        ]
    );
}

#[test]
fn flipped_opener_is_recognized() {
    // Localized text renders the opener as `/(`; both spellings scan the
    // same way so every mode round-trips through the one scanner.
    assert_eq!(
        kinds_and_texts(r#""a /(b)""#),
        vec![
            (TokenKind::StringLiteral, "\"a ".to_owned()),
            (TokenKind::InterpolationDelimiter, "/(".to_owned()),
            (TokenKind::Identifier, "b".to_owned()),
            (TokenKind::InterpolationDelimiter, ")".to_owned()),
            (TokenKind::StringLiteral, "\"".to_owned()),
        ]
    );
}

#[test]
fn interpolation_with_call_tracks_paren_depth() {
    let source = r#""v: \(f(x, g(y)))""#;
    let tokens = scan(source);
    assert_eq!(joined_text(&tokens), source);
    let delimiters: Vec<&str> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::InterpolationDelimiter)
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(delimiters, vec!["\\(", ")"]);
}

#[test]
fn nested_interpolation_uses_one_counter_per_level() {
    let source = r#""x \(f("y \(z)"))""#;
    let tokens = scan(source);
    assert_eq!(joined_text(&tokens), source);
    let delimiters = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::InterpolationDelimiter)
        .count();
    assert_eq!(delimiters, 4); // two openers, two closers
}

#[test]
fn adjacent_interpolations_share_an_empty_fragment_boundary() {
    let source = r#""\(a)\(b)""#;
    let tokens = scan(source);
    assert_eq!(joined_text(&tokens), source);
    // No empty StringLiteral is emitted between the two interpolations.
    assert!(tokens.iter().all(|token| !token.text.is_empty()));
}

#[test]
fn unterminated_interpolation_is_still_lossless() {
    assert_lossless(r#""a \(b"#);
    assert_lossless(r#""a \("#);
}

#[test]
fn multiline_string_is_opaque() {
    let source = "\"\"\"\nline \\(notSplit)\n\"\"\"";
    assert_eq!(
        kinds_and_texts(source),
        vec![(TokenKind::StringLiteral, source.to_owned())]
    );
}

#[test]
fn raw_string_is_opaque() {
    assert_eq!(
        kinds_and_texts(r##"#"a \(x) / b"#"##),
        vec![(TokenKind::StringLiteral, r##"#"a \(x) / b"#"##.to_owned())]
    );
}

#[test]
fn raw_string_respects_hash_count() {
    // A `"#` inside a `##"..."##` literal does not close it.
    let source = r###"##"has "# inside"##"###;
    assert_eq!(
        kinds_and_texts(source),
        vec![(TokenKind::StringLiteral, source.to_owned())]
    );
}

#[test]
fn lone_hash_is_punctuation() {
    assert_eq!(
        kinds_and_texts("#available"),
        vec![
            (TokenKind::Punctuation, "#".to_owned()),
            (TokenKind::Identifier, "available".to_owned()),
        ]
    );
}

// === Unknown & controls ===

#[test]
fn directional_controls_scan_as_unknown() {
    let tokens = kinds_and_texts("\u{2066}let\u{2069}");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Unknown, "\u{2066}".to_owned()),
            (TokenKind::Keyword, "let".to_owned()),
            (TokenKind::Unknown, "\u{2069}".to_owned()),
        ]
    );
}

#[test]
fn arabic_punctuation_is_unknown() {
    assert_eq!(
        kinds_and_texts("؟"),
        vec![(TokenKind::Unknown, "؟".to_owned())]
    );
}

// === Losslessness ===

#[test]
fn losslessness_over_mixed_sources() {
    for source in [
        "func greet(name: String) -> String {\n    return \"hi \\(name)\"\n}\n",
        "دالة رحب(الاسم: نص) {\n    // تعليق\n}\n",
        "let a = 10 / 2 // half",
        "\"unterminated",
        "/* unterminated",
        "\u{200F}متغير\u{200E} س = \"a / b\"",
        "@objc class C {}\n",
        "`let` = 1",
    ] {
        assert_lossless(source);
    }
}

proptest! {
    #[test]
    fn scanning_any_input_is_lossless(source in ".*") {
        prop_assert_eq!(joined_text(&scan(&source)), source);
    }

    #[test]
    fn scanning_source_shaped_input_is_lossless(
        source in r#"(let|var|func|ثابت|دالة|[a-z]{1,4}|[0-9]{1,3}|"[a-z ]{0,5}"|\\\(|//[a-z ]{0,5}|[ \n(){}=+./\\-]){0,20}"#
    ) {
        prop_assert_eq!(joined_text(&scan(&source)), source);
    }

    #[test]
    fn every_token_is_nonempty(source in ".*") {
        for token in scan(&source) {
            prop_assert!(!token.text.is_empty());
        }
    }
}
