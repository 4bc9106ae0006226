//! The closed keyword vocabulary, both columns.
//!
//! One `(english, arabic)` entry per reserved word of the Swift-style
//! grammar. The table is compiled in and changes only when the grammar
//! changes; it is the highest-priority tier of every lexicon and the
//! classification set the scanner uses to tell keywords from identifiers.
//!
//! The table is globally bijective: no word appears twice in either column
//! (tested below). Forward lookup is a binary search on the sorted English
//! column; the reverse index and the union membership set are built once,
//! lazily, and never mutated — no mutable global is ever exposed.

use std::sync::LazyLock;

use rustc_hash::{FxHashMap, FxHashSet};

/// `(english, arabic)` keyword pairs.
///
/// Sorted by the English column for binary search.
pub const KEYWORD_PAIRS: &[(&str, &str)] = &[
    ("Self", "الذات"),
    ("as", "كما"),
    ("associatedtype", "نوع_مرتبط"),
    ("async", "لامتزامن"),
    ("await", "انتظر"),
    ("break", "اقطع"),
    ("case", "حالة"),
    ("catch", "التقط"),
    ("class", "صنف"),
    ("continue", "واصل"),
    ("default", "افتراضي"),
    ("defer", "أجل"),
    ("deinit", "هادم"),
    ("do", "افعل"),
    ("else", "وإلا"),
    ("enum", "تعداد"),
    ("extension", "امتداد"),
    ("fallthrough", "اسقط"),
    ("false", "خطأ"),
    ("fileprivate", "خاص_بالملف"),
    ("final", "نهائي"),
    ("for", "لكل"),
    ("func", "دالة"),
    ("guard", "احرس"),
    ("if", "إذا"),
    ("import", "استورد"),
    ("in", "في"),
    ("init", "مهيئ"),
    ("inout", "دخل_خرج"),
    ("internal", "داخلي"),
    ("is", "هل"),
    ("let", "ثابت"),
    ("nil", "عدم"),
    ("open", "مفتوح"),
    ("operator", "عامل"),
    ("override", "تخطى"),
    ("private", "خاص"),
    ("protocol", "ميثاق"),
    ("public", "عام"),
    ("repeat", "كرر"),
    ("rethrows", "يرمي_مجددا"),
    ("return", "أرجع"),
    ("self", "ذاتي"),
    ("static", "ساكن"),
    ("struct", "بنية"),
    ("subscript", "فهرسة"),
    ("super", "الأصل"),
    ("switch", "بدل"),
    ("throw", "ارم"),
    ("throws", "يرمي"),
    ("true", "صحيح"),
    ("try", "حاول"),
    ("typealias", "اسم_مستعار"),
    ("var", "متغير"),
    ("weak", "ضعيف"),
    ("where", "حيث"),
    ("while", "طالما"),
];

/// Reverse index: arabic → english. Built once from the table.
static ENGLISH_FOR: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    KEYWORD_PAIRS
        .iter()
        .map(|&(english, arabic)| (arabic, english))
        .collect()
});

/// Union of both columns, for scanner classification.
static KEYWORD_UNION: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    KEYWORD_PAIRS
        .iter()
        .flat_map(|&(english, arabic)| [english, arabic])
        .collect()
});

/// Look up the Arabic counterpart of an English keyword.
///
/// Returns `None` if the word is not a reserved word — identifiers are
/// resolved through the lexicon's lower tiers, never here.
///
/// Uses binary search on the sorted table for O(log n) lookup.
pub fn arabic_for(english: &str) -> Option<&'static str> {
    KEYWORD_PAIRS
        .binary_search_by_key(&english, |&(word, _)| word)
        .ok()
        .map(|idx| KEYWORD_PAIRS[idx].1)
}

/// Look up the English counterpart of an Arabic keyword.
pub fn english_for(arabic: &str) -> Option<&'static str> {
    ENGLISH_FOR.get(arabic).copied()
}

/// Is this word a reserved word in *either* vocabulary?
///
/// The scanner classifies an identifier-shaped word as a keyword exactly
/// when this returns `true`.
pub fn is_keyword(word: &str) -> bool {
    KEYWORD_UNION.contains(word)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for window in KEYWORD_PAIRS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "table not sorted: {:?} >= {:?}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn english_column_has_no_duplicates() {
        let mut seen = FxHashSet::default();
        for &(english, _) in KEYWORD_PAIRS {
            assert!(seen.insert(english), "duplicate english keyword {english}");
        }
    }

    #[test]
    fn arabic_column_has_no_duplicates() {
        let mut seen = FxHashSet::default();
        for &(_, arabic) in KEYWORD_PAIRS {
            assert!(seen.insert(arabic), "duplicate arabic keyword {arabic}");
        }
    }

    #[test]
    fn columns_do_not_overlap() {
        // A word that is English in one pair and Arabic in another would make
        // direction-sensitive lookup ambiguous.
        for &(english, _) in KEYWORD_PAIRS {
            assert!(
                english_for(english).is_none(),
                "{english} appears in both columns"
            );
        }
    }

    #[test]
    fn forward_lookup() {
        assert_eq!(arabic_for("let"), Some("ثابت"));
        assert_eq!(arabic_for("func"), Some("دالة"));
        assert_eq!(arabic_for("Self"), Some("الذات"));
        assert_eq!(arabic_for("x"), None);
    }

    #[test]
    fn reverse_lookup_is_consistent() {
        for &(english, arabic) in KEYWORD_PAIRS {
            assert_eq!(english_for(arabic), Some(english));
            assert_eq!(arabic_for(english), Some(arabic));
        }
    }

    #[test]
    fn union_membership() {
        assert!(is_keyword("while"));
        assert!(is_keyword("طالما"));
        assert!(!is_keyword("counter"));
        // case-sensitive: `self` and `Self` are distinct entries
        assert!(is_keyword("self"));
        assert!(is_keyword("Self"));
        assert!(!is_keyword("SELF"));
    }
}
