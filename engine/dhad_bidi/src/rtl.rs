//! Right-to-left script detection.

/// Does `text` contain any Arabic-script character?
///
/// Checks the base block plus both presentation-forms blocks, which cover
/// everything the keyword table and real-world identifiers use. A word
/// with even one Arabic character is laid out right-to-left.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c,
            '\u{0600}'..='\u{06FF}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}'
        )
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn detects_arabic_words() {
        assert!(super::contains_arabic("ثابت"));
        assert!(super::contains_arabic("mixedعداد"));
        assert!(!super::contains_arabic("counter"));
        assert!(!super::contains_arabic("12 + 3"));
    }
}
