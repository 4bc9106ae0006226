//! Source transposition between the engine's three modes.
//!
//! [`transpile`] is the whole pipeline: scan, translate through a
//! [`dhad_lexicon::Lexicon`], and emit in the target mode's rendering.
//! [`translate_tokens`] exposes the middle stage for tooling that wants
//! the token stream.

mod translate;
mod transpile;

pub use translate::translate_tokens;
pub use transpile::{resolve_modes, transpile};
