//! Unicode directional control characters.
//!
//! The engine emits only the isolate set (TR9 rule set introduced in
//! Unicode 6.3) plus the two marks. The legacy embedding/override set is
//! recognized for stripping — files touched by other editors may carry
//! them — but never produced.

/// Left-to-right isolate.
pub const LRI: char = '\u{2066}';
/// Right-to-left isolate.
pub const RLI: char = '\u{2067}';
/// First-strong isolate.
pub const FSI: char = '\u{2068}';
/// Pop directional isolate, closing any of the three above.
pub const PDI: char = '\u{2069}';
/// Left-to-right mark.
pub const LRM: char = '\u{200E}';
/// Right-to-left mark.
pub const RLM: char = '\u{200F}';

/// Is `c` any directional control the engine strips?
///
/// Covers the isolates, the marks, and the legacy embedding/override set
/// `U+202A..=U+202E` (LRE, RLE, PDF, LRO, RLO).
#[inline]
pub fn is_directional_control(c: char) -> bool {
    matches!(c, LRI | RLI | FSI | PDI | LRM | RLM | '\u{202A}'..='\u{202E}')
}

/// Remove every directional control from `text`.
pub fn strip_controls(text: &str) -> String {
    text.chars().filter(|&c| !is_directional_control(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_isolates_marks_and_legacy_controls() {
        let text = "\u{2067}ثابت\u{2069}\u{200E} x \u{202B}y\u{202C}";
        assert_eq!(strip_controls(text), "ثابت x y");
    }

    #[test]
    fn leaves_clean_text_untouched() {
        assert_eq!(strip_controls("let x = 1"), "let x = 1");
    }
}
