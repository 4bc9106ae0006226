//! Tiered translation dictionary.
//!
//! Three tiers resolve a symbol, highest priority first:
//!
//! 1. **Keywords** — the compiled-in reserved-word table.
//! 2. **Library** — API names harvested from a standard-library alias dump.
//! 3. **Project** — per-project identifier dictionaries.
//!
//! All tiers are oriented the same way, primary (English) form as key and
//! localized (Arabic) form as value, so one `Direction` selects the lookup
//! side uniformly. Cross-tier collisions are rejected eagerly at
//! construction: a lexicon that exists can never shadow a keyword with a
//! library name or a library name with a project identifier, and lookups
//! stay infallible.

use std::fmt;
use std::sync::LazyLock;

use dhad_token::Direction;
use thiserror::Error;

use crate::bimap::BiMap;

/// The tier a word belongs to, for priority and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Keywords,
    Library,
    Project,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Keywords => "keywords",
            Tier::Library => "library",
            Tier::Project => "project",
        })
    }
}

/// A word in a lower tier that is already claimed by a higher one.
///
/// Carries the whole lower-tier entry, not just the offending word: the
/// person fixing a dictionary needs to find the line, and either column
/// may be the one that collided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{word} in the {lower} tier (entry {english} = {arabic}) collides with the {upper} tier"
)]
pub struct CollisionError {
    /// The colliding word itself, from whichever column it sat in.
    pub word: String,
    /// English column of the lower-tier entry the word came from.
    pub english: String,
    /// Arabic column of that entry.
    pub arabic: String,
    pub lower: Tier,
    pub upper: Tier,
}

/// The keyword tier as a [`BiMap`], built once from the compiled table.
static KEYWORD_TIER: LazyLock<BiMap<String, String>> = LazyLock::new(|| {
    BiMap::from_pairs(
        dhad_keywords::KEYWORD_PAIRS
            .iter()
            .map(|&(english, arabic)| (english.to_owned(), arabic.to_owned())),
    )
});

/// A validated three-tier dictionary. See the module docs for priority.
#[derive(Debug, Clone)]
pub struct Lexicon {
    library: BiMap<String, String>,
    project: BiMap<String, String>,
}

impl Lexicon {
    /// Lexicon for producing compile-ready output: keywords and library
    /// names translate, project identifiers are left to pass through.
    pub fn for_compilation(library: BiMap<String, String>) -> Result<Self, CollisionError> {
        check_against_keywords(&library, Tier::Library)?;
        Ok(Lexicon {
            library,
            project: BiMap::new(),
        })
    }

    /// Full lexicon for developer-facing output, project tier included.
    pub fn for_developer(
        library: BiMap<String, String>,
        project: BiMap<String, String>,
    ) -> Result<Self, CollisionError> {
        check_against_keywords(&library, Tier::Library)?;
        check_against_keywords(&project, Tier::Project)?;
        for (english, arabic) in project.iter() {
            for word in [english, arabic] {
                if is_claimed(&library, word) {
                    return Err(CollisionError {
                        word: word.clone(),
                        english: english.clone(),
                        arabic: arabic.clone(),
                        lower: Tier::Project,
                        upper: Tier::Library,
                    });
                }
            }
        }
        Ok(Lexicon {
            library,
            project,
        })
    }

    /// Keywords only. Never fails: the keyword table is self-consistent.
    pub fn keywords_only() -> Self {
        Lexicon {
            library: BiMap::new(),
            project: BiMap::new(),
        }
    }

    /// Translate one symbol, or `None` when no tier knows it.
    ///
    /// Tier priority is fixed: keywords, then library, then project. The
    /// caller passes unknown symbols through unchanged, which is what keeps
    /// transposition total over partially-translated code.
    pub fn translate(&self, word: &str, direction: Direction) -> Option<&str> {
        match direction {
            Direction::ToLocalized => dhad_keywords::arabic_for(word).or_else(|| {
                lookup_forward(&self.library, word).or_else(|| lookup_forward(&self.project, word))
            }),
            Direction::ToPrimary => dhad_keywords::english_for(word).or_else(|| {
                lookup_backward(&self.library, word)
                    .or_else(|| lookup_backward(&self.project, word))
            }),
        }
    }

    /// Which tier resolves this word, if any. Checks both columns.
    pub fn tier_of(&self, word: &str) -> Option<Tier> {
        if dhad_keywords::is_keyword(word) {
            Some(Tier::Keywords)
        } else if is_claimed(&self.library, word) {
            Some(Tier::Library)
        } else if is_claimed(&self.project, word) {
            Some(Tier::Project)
        } else {
            None
        }
    }
}

fn lookup_forward<'a>(tier: &'a BiMap<String, String>, word: &str) -> Option<&'a str> {
    tier.to_value(word).map(String::as_str)
}

fn lookup_backward<'a>(tier: &'a BiMap<String, String>, word: &str) -> Option<&'a str> {
    tier.to_key(word).map(String::as_str)
}

fn is_claimed(tier: &BiMap<String, String>, word: &str) -> bool {
    tier.contains_key(word) || tier.contains_value(word)
}

fn check_against_keywords(
    tier: &BiMap<String, String>,
    lower: Tier,
) -> Result<(), CollisionError> {
    for (english, arabic) in tier.iter() {
        for word in [english, arabic] {
            if dhad_keywords::is_keyword(word) {
                return Err(CollisionError {
                    word: word.clone(),
                    english: english.clone(),
                    arabic: arabic.clone(),
                    lower,
                    upper: Tier::Keywords,
                });
            }
        }
    }
    Ok(())
}

/// The keyword tier, exposed for diagnostics and tooling.
pub fn keyword_tier() -> &'static BiMap<String, String> {
    &KEYWORD_TIER
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

    fn tier(pairs: &[(&str, &str)]) -> BiMap<String, String> {
        BiMap::try_from_pairs(
            pairs
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned())),
        )
        .unwrap()
    }

    #[test]
    fn keyword_tier_matches_the_table() {
        assert_eq!(keyword_tier().len(), dhad_keywords::KEYWORD_PAIRS.len());
    }

    #[test]
    fn translation_follows_tier_priority() {
        let lexicon = Lexicon::for_developer(
            tier(&[("print", "اطبع")]),
            tier(&[("counter", "عداد")]),
        )
        .unwrap();
        assert_eq!(lexicon.translate("let", Direction::ToLocalized), Some("ثابت"));
        assert_eq!(lexicon.translate("print", Direction::ToLocalized), Some("اطبع"));
        assert_eq!(lexicon.translate("counter", Direction::ToLocalized), Some("عداد"));
        assert_eq!(lexicon.translate("عداد", Direction::ToPrimary), Some("counter"));
        assert_eq!(lexicon.translate("unknown", Direction::ToLocalized), None);
    }

    #[test]
    fn compilation_lexicon_skips_the_project_tier() {
        let lexicon = Lexicon::for_compilation(tier(&[("print", "اطبع")])).unwrap();
        assert_eq!(lexicon.translate("اطبع", Direction::ToPrimary), Some("print"));
        assert_eq!(lexicon.translate("عداد", Direction::ToPrimary), None);
    }

    #[test]
    fn library_may_not_claim_a_keyword() {
        let err = Lexicon::for_compilation(tier(&[("let", "اطبع")])).unwrap_err();
        assert_eq!(err.word, "let");
        assert_eq!(err.lower, Tier::Library);
        assert_eq!(err.upper, Tier::Keywords);
    }

    #[test]
    fn project_may_not_claim_an_arabic_keyword() {
        let err =
            Lexicon::for_developer(tier(&[]), tier(&[("steady", "ثابت")])).unwrap_err();
        assert_eq!(err.word, "ثابت");
        assert_eq!(err.upper, Tier::Keywords);
        // The error identifies the whole offending entry, so a dictionary
        // author can find the line even when only one column collided.
        assert_eq!(err.english, "steady");
        assert_eq!(err.arabic, "ثابت");
        let rendered = err.to_string();
        assert!(rendered.contains("steady = ثابت"), "{rendered}");
    }

    #[test]
    fn project_may_not_claim_a_library_word() {
        let err = Lexicon::for_developer(
            tier(&[("print", "اطبع")]),
            tier(&[("print", "عداد")]),
        )
        .unwrap_err();
        assert_eq!(err.word, "print");
        assert_eq!(err.lower, Tier::Project);
        assert_eq!(err.upper, Tier::Library);
        assert_eq!((err.english.as_str(), err.arabic.as_str()), ("print", "عداد"));
    }

    #[test]
    fn tier_of_reports_the_resolving_tier() {
        let lexicon = Lexicon::for_developer(
            tier(&[("print", "اطبع")]),
            tier(&[("counter", "عداد")]),
        )
        .unwrap();
        assert_eq!(lexicon.tier_of("func"), Some(Tier::Keywords));
        assert_eq!(lexicon.tier_of("اطبع"), Some(Tier::Library));
        assert_eq!(lexicon.tier_of("counter"), Some(Tier::Project));
        assert_eq!(lexicon.tier_of("nothing"), None);
    }
}
