//! Library-tier extraction from an alias dump.
//!
//! The standard-library tier is not hand-written: it is harvested from a
//! generated Swift-style source file that aliases each localized API name
//! to its primary counterpart, one per line:
//!
//! ```text
//! typealias نص = String
//! // mapping: اطبع = print
//! ```
//!
//! `typealias` lines carry type names. Function and property names cannot
//! be aliased the same way, so the generator emits them as `// mapping:`
//! comment lines with identical shape. Generic aliases (any line containing
//! `<`) are skipped: their parameter lists are not single symbols and the
//! base name always appears in a separate non-generic line of the dump.

use crate::bimap::{BiMap, BiMapError};

/// Extract the english → arabic library tier from an alias dump.
///
/// Lines that match neither form are ignored — the dump is a real source
/// file and may contain headers, imports, and blank lines.
pub fn parse_alias_dump(text: &str) -> Result<BiMap<String, String>, BiMapError> {
    let mut map = BiMap::new();
    for raw in text.lines() {
        let trimmed = raw.trim();
        let body = if let Some(rest) = trimmed.strip_prefix("typealias ") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("// mapping:") {
            rest
        } else {
            continue;
        };
        if body.contains('<') {
            continue;
        }
        let Some((arabic, english)) = body.split_once('=') else {
            continue;
        };
        let arabic = arabic.trim();
        let english = english.trim();
        if arabic.is_empty() || english.is_empty() {
            continue;
        }
        map.insert(english.to_owned(), arabic.to_owned())?;
    }
    Ok(map)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_typealias_lines() {
        let map = parse_alias_dump("typealias نص = String\ntypealias عدد = Int\n").unwrap();
        assert_eq!(map.to_value("String").unwrap(), "نص");
        assert_eq!(map.to_key("عدد").unwrap(), "Int");
    }

    #[test]
    fn extracts_mapping_comments() {
        let map = parse_alias_dump("// mapping: اطبع = print\n").unwrap();
        assert_eq!(map.to_value("print").unwrap(), "اطبع");
    }

    #[test]
    fn skips_generic_aliases() {
        let text = "typealias مصفوفة<عنصر> = Array<عنصر>\ntypealias مصفوفة = Array\n";
        let map = parse_alias_dump(text).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.to_value("Array").unwrap(), "مصفوفة");
    }

    #[test]
    fn ignores_unrelated_source_lines() {
        let text = "import Foundation\n\n// header comment\nlet x = 1\n";
        assert!(parse_alias_dump(text).unwrap().is_empty());
    }

    #[test]
    fn conflicting_aliases_are_an_error() {
        let err = parse_alias_dump("typealias نص = String\ntypealias نص = Text\n").unwrap_err();
        assert!(matches!(err, BiMapError::DuplicateValue { .. }));
    }
}
