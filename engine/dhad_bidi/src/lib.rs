//! Bidi layer of the dhad engine.
//!
//! Localized output must read correctly in editors that apply the Unicode
//! bidirectional algorithm to mixed Arabic/Latin source. This crate owns
//! that concern end to end: [`localized_text`] wraps tokens in directional
//! isolates and flips the two mirror-hostile characters, [`plain_text`]
//! strips every control and restores the flips for compile-ready output.

mod annotate;
mod controls;
mod rtl;

pub use annotate::{localized_text, plain_text};
pub use controls::{is_directional_control, strip_controls, FSI, LRI, LRM, PDI, RLI, RLM};
pub use rtl::contains_arabic;
