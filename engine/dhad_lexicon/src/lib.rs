//! Symbol dictionaries for the dhad engine.
//!
//! A [`Lexicon`] resolves one identifier-shaped word to its counterpart in
//! the other vocabulary through three prioritized tiers: compiled-in
//! keywords, a harvested standard-library tier, and an optional per-project
//! tier. [`BiMap`] is the underlying strict two-way map; [`parse_alias_dump`]
//! and [`parse_project_dict`] build the lower tiers from their on-disk
//! formats.

mod bimap;
mod lexicon;
mod library;
mod project_dict;

pub use bimap::{BiMap, BiMapError, MergeError};
pub use lexicon::{keyword_tier, CollisionError, Lexicon, Tier};
pub use library::parse_alias_dump;
pub use project_dict::{parse_project_dict, DictError};
