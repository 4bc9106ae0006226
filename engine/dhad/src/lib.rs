//! dhad — bidirectional, lossless transposition of Swift-style source
//! between its primary English form, an Arabic localized form with Unicode
//! bidi annotation, and a compile-ready hybrid form.
//!
//! The engine is a pipeline of small crates, re-exported here:
//!
//! - [`scan`] tokenizes any input losslessly ([`dhad_scanner`]).
//! - [`Lexicon`] resolves symbols through tiered two-way dictionaries
//!   ([`dhad_lexicon`]).
//! - [`dhad_bidi`] renders tokens with or without directional controls.
//! - [`transpile`] ties it together mode-to-mode ([`dhad_transpile`]).
//!
//! # Example
//!
//! ```
//! use dhad::{transpile, Lexicon, Mode};
//!
//! let lexicon = Lexicon::keywords_only();
//! let localized = transpile("let x = 1", &lexicon, Mode::Primary, Mode::Localized);
//! let back = transpile(&localized, &lexicon, Mode::Localized, Mode::Primary);
//! assert_eq!(back, "let x = 1");
//! ```

pub use dhad_bidi::{contains_arabic, localized_text, plain_text, strip_controls};
pub use dhad_keywords::{arabic_for, english_for, is_keyword, KEYWORD_PAIRS};
pub use dhad_lexicon::{
    keyword_tier, parse_alias_dump, parse_project_dict, BiMap, BiMapError, CollisionError,
    DictError, Lexicon, MergeError, Tier,
};
pub use dhad_scanner::{scan, Scanner};
pub use dhad_token::{
    joined_text, Direction, Mode, Scope, Span, SpanError, Token, TokenKind,
};
pub use dhad_transpile::{resolve_modes, translate_tokens, transpile};
