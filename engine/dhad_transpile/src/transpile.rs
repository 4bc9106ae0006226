//! Mode-to-mode transposition.
//!
//! The three source forms:
//!
//! - **Primary** — English keywords and identifiers, no directional
//!   controls. What the toolchain compiles.
//! - **Localized** — Arabic keywords and identifiers, isolate-wrapped
//!   tokens, mirrored slashes. What an Arabic-speaking developer edits.
//! - **Hybrid** — English keywords over Arabic identifiers, no controls.
//!   Compile-ready without a project dictionary.
//!
//! Each ordered mode pair fixes a translation direction and scope; the
//! table lives in [`resolve_modes`]. A same-mode request is the identity
//! and returns the source unchanged.

use dhad_lexicon::Lexicon;
use dhad_token::{joined_text, Direction, Mode, Scope, Token};
use tracing::debug;

use crate::translate::translate_tokens;

/// The direction and scope a mode pair implies, or `None` for identity.
///
/// `Primary → Hybrid` still runs a pass: its `ToPrimary` lookups are
/// vacuous over already-English text, but emission strips any stray
/// directional controls, which is the observable effect of that pair.
pub fn resolve_modes(from: Mode, to: Mode) -> Option<(Direction, Scope)> {
    use Mode::{Hybrid, Localized, Primary};
    match (from, to) {
        (Primary, Localized) => Some((Direction::ToLocalized, Scope::Full)),
        (Localized, Primary) => Some((Direction::ToPrimary, Scope::Full)),
        (Localized, Hybrid) => Some((Direction::ToPrimary, Scope::KeywordsOnly)),
        (Hybrid, Localized) => Some((Direction::ToLocalized, Scope::KeywordsOnly)),
        (Hybrid, Primary) | (Primary, Hybrid) => Some((Direction::ToPrimary, Scope::Full)),
        (Primary, Primary) | (Localized, Localized) | (Hybrid, Hybrid) => None,
    }
}

/// Emit a translated stream in the form `to` requires.
fn emit(tokens: &[Token], to: Mode) -> String {
    let mut out = String::new();
    for token in tokens {
        let rendered = match to {
            Mode::Localized => dhad_bidi::localized_text(token),
            Mode::Primary | Mode::Hybrid => dhad_bidi::plain_text(token),
        };
        out.push_str(&rendered);
    }
    out
}

/// Transpose `source` from one mode to another.
///
/// Total over any input: unscannable characters, unknown identifiers, and
/// unterminated constructs all pass through. The round-trip contract —
/// transposing there and back reproduces the original, modulo directional
/// controls — holds token-by-token because scanning, translation, and
/// emission each preserve the stream's shape.
pub fn transpile(source: &str, lexicon: &Lexicon, from: Mode, to: Mode) -> String {
    let Some((direction, scope)) = resolve_modes(from, to) else {
        debug!(%from, %to, "same-mode transposition is the identity");
        return source.to_owned();
    };
    let tokens = dhad_scanner::scan(source);
    debug!(%from, %to, %direction, %scope, tokens = tokens.len(), "transposing");
    debug_assert_eq!(joined_text(&tokens), source);
    let translated = translate_tokens(&tokens, lexicon, direction, scope);
    emit(&translated, to)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use dhad_bidi::strip_controls;
    use dhad_lexicon::BiMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn lexicon() -> Lexicon {
        let library = BiMap::try_from_pairs([("print".to_owned(), "اطبع".to_owned())]).unwrap();
        let project = BiMap::try_from_pairs([("counter".to_owned(), "عداد".to_owned())]).unwrap();
        Lexicon::for_developer(library, project).unwrap()
    }

    #[test]
    fn mode_table_is_exhaustive_and_identity_on_the_diagonal() {
        for from in [Mode::Primary, Mode::Localized, Mode::Hybrid] {
            for to in [Mode::Primary, Mode::Localized, Mode::Hybrid] {
                assert_eq!(resolve_modes(from, to).is_none(), from == to);
            }
        }
    }

    #[test]
    fn same_mode_returns_the_source_verbatim() {
        let source = "let x = 1 // note";
        assert_eq!(
            transpile(source, &lexicon(), Mode::Primary, Mode::Primary),
            source
        );
    }

    #[test]
    fn primary_to_localized_translates_and_annotates() {
        let out = transpile("let counter = 1", &lexicon(), Mode::Primary, Mode::Localized);
        assert_eq!(strip_controls(&out), "ثابت عداد = 1");
        assert!(out.contains('\u{2067}')); // RLI around Arabic words
    }

    #[test]
    fn localized_to_primary_round_trips() {
        let source = "let counter = total / 2 // half";
        let localized = transpile(source, &lexicon(), Mode::Primary, Mode::Localized);
        let back = transpile(&localized, &lexicon(), Mode::Localized, Mode::Primary);
        assert_eq!(back, source);
    }

    #[test]
    fn localized_to_hybrid_keeps_arabic_identifiers() {
        let localized = transpile("let counter = 1", &lexicon(), Mode::Primary, Mode::Localized);
        let hybrid = transpile(&localized, &lexicon(), Mode::Localized, Mode::Hybrid);
        assert_eq!(hybrid, "let عداد = 1");
    }

    #[test]
    fn hybrid_round_trips_through_localized() {
        let hybrid = "let عداد = 1";
        let localized = transpile(hybrid, &lexicon(), Mode::Hybrid, Mode::Localized);
        let back = transpile(&localized, &lexicon(), Mode::Localized, Mode::Hybrid);
        assert_eq!(back, hybrid);
    }

    #[test]
    fn hybrid_to_primary_translates_identifiers() {
        assert_eq!(
            transpile("let عداد = 1", &lexicon(), Mode::Hybrid, Mode::Primary),
            "let counter = 1"
        );
    }

    #[test]
    fn primary_to_hybrid_strips_stray_controls() {
        assert_eq!(
            transpile("let\u{200F} x = 1", &lexicon(), Mode::Primary, Mode::Hybrid),
            "let x = 1"
        );
    }

    #[test]
    fn division_survives_the_localized_round_trip() {
        let source = "let half = total / 2";
        let localized = transpile(source, &lexicon(), Mode::Primary, Mode::Localized);
        assert!(strip_controls(&localized).contains('\\'), "{localized:?}");
        let back = transpile(&localized, &lexicon(), Mode::Localized, Mode::Primary);
        assert_eq!(back, source);
    }

    #[test]
    fn interpolation_survives_the_localized_round_trip() {
        let source = "print(\"total: \\(counter)\")";
        let localized = transpile(source, &lexicon(), Mode::Primary, Mode::Localized);
        assert!(strip_controls(&localized).contains("/("), "{localized:?}");
        let back = transpile(&localized, &lexicon(), Mode::Localized, Mode::Primary);
        assert_eq!(back, source);
    }

    #[test]
    fn opaque_payloads_survive_untouched() {
        let source = "let u = \"a / b\" // path: a/b\n";
        let localized = transpile(source, &lexicon(), Mode::Primary, Mode::Localized);
        let back = transpile(&localized, &lexicon(), Mode::Localized, Mode::Primary);
        assert_eq!(back, source);
    }
}
