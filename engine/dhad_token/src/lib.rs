//! dhad token model — shared types for the transposition engine.
//!
//! This crate contains the data every other engine crate agrees on:
//! - [`Span`] for byte-offset source locations
//! - [`Token`] / [`TokenKind`] for scanner output
//! - [`Mode`], [`Direction`], [`Scope`] for pipeline selection
//!
//! Token sequences are produced fresh per scan and are immutable afterward;
//! nothing in this crate holds external resources.

mod modes;
mod span;
mod token;

pub use modes::{Direction, Mode, Scope};
pub use span::{Span, SpanError};
pub use token::{joined_text, Token, TokenKind};
