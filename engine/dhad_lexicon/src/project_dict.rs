//! Project dictionary parser.
//!
//! The on-disk format is a small indentation-based document:
//!
//! ```text
//! # team glossary, reviewed 2024-03
//! tier: project
//! identifiers:
//!   counter: عداد
//!   total: المجموع
//! ```
//!
//! Parsing is forgiving about layout — blank lines and `#` comments may
//! appear anywhere, the `tier:` header is optional, and the `identifiers:`
//! section ends at the first non-indented line — but strict about content:
//! a malformed entry or a duplicate is an error, not a skip. A dictionary
//! that silently lost an entry would produce code that translates one way
//! and not back.

use thiserror::Error;

use crate::bimap::{BiMap, BiMapError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictError {
    /// A line inside `identifiers:` that is not `name: ترجمة`.
    #[error("line {line}: malformed entry {text:?}")]
    MalformedEntry { line: usize, text: String },
    /// A `tier:` header naming something other than `project`.
    #[error("line {line}: unsupported tier {tier:?}")]
    UnsupportedTier { line: usize, tier: String },
    /// No `identifiers:` section at all.
    #[error("missing identifiers section")]
    MissingIdentifiers,
    /// A name or translation appearing twice.
    #[error(transparent)]
    Duplicate(#[from] BiMapError),
}

/// Parse a project dictionary into an english → arabic map.
pub fn parse_project_dict(text: &str) -> Result<BiMap<String, String>, DictError> {
    let mut map = BiMap::new();
    let mut in_identifiers = false;
    let mut seen_identifiers = false;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indented = raw.starts_with(' ') || raw.starts_with('\t');
        if !indented {
            in_identifiers = false;
            if trimmed == "identifiers:" {
                in_identifiers = true;
                seen_identifiers = true;
            } else if let Some(tier) = trimmed.strip_prefix("tier:") {
                let tier = tier.trim();
                if tier != "project" {
                    return Err(DictError::UnsupportedTier {
                        line,
                        tier: tier.to_owned(),
                    });
                }
            } else {
                // Unknown top-level keys are tolerated for forward
                // compatibility; unknown sections just never match.
            }
            continue;
        }

        if !in_identifiers {
            continue;
        }
        let Some((name, translation)) = trimmed.split_once(':') else {
            return Err(DictError::MalformedEntry {
                line,
                text: trimmed.to_owned(),
            });
        };
        let name = name.trim();
        let translation = translation.trim();
        if name.is_empty() || translation.is_empty() {
            return Err(DictError::MalformedEntry {
                line,
                text: trimmed.to_owned(),
            });
        }
        map.insert(name.to_owned(), translation.to_owned())?;
    }

    if !seen_identifiers {
        return Err(DictError::MissingIdentifiers);
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
    fn parses_a_full_document() {
        let text = "\
# glossary
tier: project
identifiers:
  counter: عداد
  total: المجموع
";
        let map = parse_project_dict(text).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.to_value("counter").unwrap(), "عداد");
    }

    #[test]
    fn tier_header_is_optional() {
        let map = parse_project_dict("identifiers:\n  x: س\n").unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn comments_and_blanks_may_appear_inside_the_section() {
        let text = "identifiers:\n  a: أ\n\n  # middle\n  b: ب\n";
        let map = parse_project_dict(text).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn section_ends_at_an_unindented_line() {
        let text = "identifiers:\n  a: أ\nnotes:\n  b: ب\n";
        let map = parse_project_dict(text).unwrap();
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn malformed_entry_reports_its_line() {
        let err = parse_project_dict("identifiers:\n  broken\n").unwrap_err();
        assert_eq!(
            err,
            DictError::MalformedEntry {
                line: 2,
                text: "broken".to_owned()
            }
        );
    }

    #[test]
    fn unsupported_tier_is_rejected() {
        let err = parse_project_dict("tier: global\nidentifiers:\n").unwrap_err();
        assert!(matches!(err, DictError::UnsupportedTier { line: 1, .. }));
    }

    #[test]
    fn missing_section_is_an_error() {
        assert_eq!(
            parse_project_dict("tier: project\n").unwrap_err(),
            DictError::MissingIdentifiers
        );
    }

    #[test]
    fn duplicate_name_is_an_error() {
        let err = parse_project_dict("identifiers:\n  a: أ\n  a: ب\n").unwrap_err();
        assert!(matches!(err, DictError::Duplicate(_)));
    }
}
