//! Lossless tokenizer for the dhad engine.
//!
//! [`scan`] turns any string into a token stream whose concatenated text
//! reproduces the input exactly. It never rejects input: malformed source
//! still scans, with unclassifiable characters as `Unknown` tokens, so the
//! engine can transpose files that do not yet compile.

mod cursor;
mod scanner;

pub use cursor::Cursor;
pub use scanner::{scan, Scanner};
