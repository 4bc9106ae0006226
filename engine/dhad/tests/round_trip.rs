//! End-to-end transposition tests over the public API, with the lexicon
//! built from the on-disk formats the way a real invocation would.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use dhad::{
    joined_text, parse_alias_dump, parse_project_dict, scan, strip_controls, transpile, Lexicon,
    Mode,
};
use pretty_assertions::assert_eq;

const ALIAS_DUMP: &str = "\
import Swift

typealias نص = String
typealias عدد = Int
// mapping: اطبع = print
";

const PROJECT_DICT: &str = "\
# demo project glossary
tier: project
identifiers:
  counter: عداد_المرات
  greet: رحب
  name: الاسم
";

fn developer_lexicon() -> Lexicon {
    let library = parse_alias_dump(ALIAS_DUMP).unwrap();
    let project = parse_project_dict(PROJECT_DICT).unwrap();
    Lexicon::for_developer(library, project).unwrap()
}

const PRIMARY_SOURCE: &str = "\
// greeting demo
func greet(name: String) -> String {
    let counter = 10 / 2
    return \"hi \\(name), visit \\(counter)\"
}
";

#[test]
fn primary_to_localized_and_back_is_exact() {
    let lexicon = developer_lexicon();
    let localized = transpile(PRIMARY_SOURCE, &lexicon, Mode::Primary, Mode::Localized);
    let back = transpile(&localized, &lexicon, Mode::Localized, Mode::Primary);
    assert_eq!(back, PRIMARY_SOURCE);
}

#[test]
fn localized_output_reads_fully_arabic() {
    let lexicon = developer_lexicon();
    let localized = transpile(PRIMARY_SOURCE, &lexicon, Mode::Primary, Mode::Localized);
    let visible = strip_controls(&localized);
    assert!(visible.contains("دالة رحب(الاسم: نص)"), "{visible}");
    assert!(visible.contains("ثابت عداد_المرات = 10 \\ 2"), "{visible}");
    // The comment is untouched content.
    assert!(visible.contains("// greeting demo"), "{visible}");
}

#[test]
fn localized_through_hybrid_and_back_keeps_identifiers() {
    let lexicon = developer_lexicon();
    let localized = transpile(PRIMARY_SOURCE, &lexicon, Mode::Primary, Mode::Localized);
    let hybrid = transpile(&localized, &lexicon, Mode::Localized, Mode::Hybrid);

    // Hybrid is compile-shaped: English keywords, no controls, real slashes.
    assert_eq!(hybrid, strip_controls(&hybrid));
    assert!(hybrid.contains("func رحب(الاسم: نص)"), "{hybrid}");
    assert!(hybrid.contains("10 / 2"), "{hybrid}");
    assert!(hybrid.contains("\\(الاسم)"), "{hybrid}");

    let localized_again = transpile(&hybrid, &lexicon, Mode::Hybrid, Mode::Localized);
    let back = transpile(&localized_again, &lexicon, Mode::Localized, Mode::Primary);
    assert_eq!(back, PRIMARY_SOURCE);
}

#[test]
fn hybrid_to_primary_resolves_project_identifiers() {
    let lexicon = developer_lexicon();
    let primary = transpile(
        "func رحب(الاسم: String) {}",
        &lexicon,
        Mode::Hybrid,
        Mode::Primary,
    );
    assert_eq!(primary, "func greet(name: String) {}");
}

#[test]
fn keywords_only_lexicon_still_round_trips() {
    let lexicon = Lexicon::keywords_only();
    let source = "if ok { return } else { throw err }";
    let localized = transpile(source, &lexicon, Mode::Primary, Mode::Localized);
    assert!(strip_controls(&localized).starts_with("إذا ok"));
    let back = transpile(&localized, &lexicon, Mode::Localized, Mode::Primary);
    assert_eq!(back, source);
}

#[test]
fn opaque_payloads_survive_every_leg() {
    let lexicon = developer_lexicon();
    let source = "\
let path = \"a / b\"
let raw = #\"keep \\(this) intact\"#
let doc = \"\"\"
multi / line \\(payload)
\"\"\"
/* block / comment */
";
    let localized = transpile(source, &lexicon, Mode::Primary, Mode::Localized);
    let back = transpile(&localized, &lexicon, Mode::Localized, Mode::Primary);
    assert_eq!(back, source);

    // None of the payload slashes were mirrored in the localized form.
    let visible = strip_controls(&localized);
    assert!(visible.contains("\"a / b\""), "{visible}");
    assert!(visible.contains("#\"keep \\(this) intact\"#"), "{visible}");
    assert!(visible.contains("/* block / comment */"), "{visible}");
}

#[test]
fn scanning_localized_output_is_lossless() {
    let lexicon = developer_lexicon();
    let localized = transpile(PRIMARY_SOURCE, &lexicon, Mode::Primary, Mode::Localized);
    assert_eq!(joined_text(&scan(&localized)), localized);
}

#[test]
fn keyword_vocabulary_is_part_of_the_public_surface() {
    assert!(dhad::is_keyword("func"));
    assert!(dhad::is_keyword("دالة"));
    assert_eq!(dhad::arabic_for("let"), Some("ثابت"));
    assert_eq!(dhad::english_for("دالة"), Some("func"));
    assert_eq!(dhad::keyword_tier().len(), dhad::KEYWORD_PAIRS.len());
}

#[test]
fn colliding_project_dictionary_is_rejected_up_front() {
    let library = parse_alias_dump(ALIAS_DUMP).unwrap();
    let project = parse_project_dict("identifiers:\n  steady: ثابت\n").unwrap();
    let err = Lexicon::for_developer(library, project).unwrap_err();
    assert_eq!(err.word, "ثابت");
}
