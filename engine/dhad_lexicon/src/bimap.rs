//! Strict bidirectional map.
//!
//! Two hash maps kept in lockstep: one keyed by the primary (English) form,
//! one by the localized (Arabic) form. Every insertion is checked on both
//! sides, so once a `BiMap` exists, `to_value` and `to_key` are exact
//! inverses over its entries. Translation that loses this property would
//! silently corrupt round trips, which is why duplicates are hard errors
//! rather than last-write-wins.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Why an insertion or merge was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BiMapError {
    /// The key is already present with a different value.
    #[error("duplicate key {key}: maps to both {existing} and {incoming}")]
    DuplicateKey {
        key: String,
        existing: String,
        incoming: String,
    },
    /// The value is already present under a different key.
    #[error("duplicate value {value}: reached from both {existing} and {incoming}")]
    DuplicateValue {
        value: String,
        existing: String,
        incoming: String,
    },
}

/// A conflict found while merging two maps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("merge of {left} and {right} failed: {source}")]
pub struct MergeError {
    /// Label of the receiving map.
    pub left: String,
    /// Label of the incoming map.
    pub right: String,
    #[source]
    pub source: BiMapError,
}

/// Bidirectional map with strict duplicate rejection on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiMap<K: Eq + Hash, V: Eq + Hash> {
    forward: FxHashMap<K, V>,
    backward: FxHashMap<V, K>,
}

impl<K, V> BiMap<K, V>
where
    K: Eq + Hash + Clone + fmt::Display,
    V: Eq + Hash + Clone + fmt::Display,
{
    /// An empty map.
    pub fn new() -> Self {
        BiMap {
            forward: FxHashMap::default(),
            backward: FxHashMap::default(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Insert a pair, rejecting any key or value already present.
    ///
    /// An exact duplicate of an existing pair is also rejected: the input
    /// formats this map is built from never legitimately repeat an entry,
    /// and a repeat usually means a hand-edited dictionary went wrong.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), BiMapError> {
        if let Some(existing) = self.forward.get(&key) {
            return Err(BiMapError::DuplicateKey {
                key: key.to_string(),
                existing: existing.to_string(),
                incoming: value.to_string(),
            });
        }
        if let Some(existing) = self.backward.get(&value) {
            return Err(BiMapError::DuplicateValue {
                value: value.to_string(),
                existing: existing.to_string(),
                incoming: key.to_string(),
            });
        }
        self.forward.insert(key.clone(), value.clone());
        self.backward.insert(value, key);
        Ok(())
    }

    /// Build from pairs, failing on the first duplicate.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, BiMapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = BiMap::new();
        for (key, value) in pairs {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Build from pairs known to be duplicate-free.
    ///
    /// # Panics
    ///
    /// Panics on a duplicate. Reserved for compiled-in tables whose
    /// bijectivity is enforced by their own tests.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        match Self::try_from_pairs(pairs) {
            Ok(map) => map,
            Err(err) => panic!("compiled-in table is not bijective: {err}"),
        }
    }

    /// Forward lookup: key → value.
    ///
    /// Borrowed-key form, like `HashMap::get`: a `BiMap<String, String>`
    /// resolves a `&str` without allocating. Lookups sit on the per-token
    /// path of every translation pass.
    pub fn to_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.forward.get(key)
    }

    /// Backward lookup: value → key.
    pub fn to_key<Q>(&self, value: &Q) -> Option<&K>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.backward.get(value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.forward.contains_key(key)
    }

    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.backward.contains_key(value)
    }

    /// Iterate entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }

    /// Combine two maps into a new one, leaving both inputs untouched.
    ///
    /// The labels name the maps in the error so a conflict between, say, a
    /// library dump and a project dictionary reads as such.
    pub fn merge(&self, other: &Self, left: &str, right: &str) -> Result<Self, MergeError> {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged
                .insert(key.clone(), value.clone())
                .map_err(|source| MergeError {
                    left: left.to_owned(),
                    right: right.to_owned(),
                    source,
                })?;
        }
        Ok(merged)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_owned(), v.to_owned())
    }

    #[test]
    fn lookups_are_inverses() {
        let map = BiMap::try_from_pairs([pair("counter", "عداد"), pair("total", "المجموع")])
            .unwrap();
        assert_eq!(map.to_value("counter").unwrap(), "عداد");
        assert_eq!(map.to_key("عداد").unwrap(), "counter");
        assert_eq!(map.to_value("missing"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn lookups_take_borrowed_keys() {
        // `&str` against a `BiMap<String, String>`, no owned key needed.
        let map = BiMap::try_from_pairs([pair("counter", "عداد")]).unwrap();
        assert_eq!(map.to_value("counter").map(String::as_str), Some("عداد"));
        assert_eq!(map.to_key("عداد").map(String::as_str), Some("counter"));
        assert!(map.contains_key("counter"));
        assert!(map.contains_value("عداد"));
        assert!(!map.contains_key("عداد"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let err = BiMap::try_from_pairs([pair("x", "س"), pair("x", "ص")]).unwrap_err();
        assert_eq!(
            err,
            BiMapError::DuplicateKey {
                key: "x".to_owned(),
                existing: "س".to_owned(),
                incoming: "ص".to_owned(),
            }
        );
    }

    #[test]
    fn duplicate_value_is_rejected() {
        let err = BiMap::try_from_pairs([pair("x", "س"), pair("y", "س")]).unwrap_err();
        assert!(matches!(err, BiMapError::DuplicateValue { .. }));
    }

    #[test]
    fn exact_repeat_is_rejected() {
        let err = BiMap::try_from_pairs([pair("x", "س"), pair("x", "س")]).unwrap_err();
        assert!(matches!(err, BiMapError::DuplicateKey { .. }));
    }

    #[test]
    fn merge_is_non_mutating() {
        let left = BiMap::try_from_pairs([pair("a", "أ")]).unwrap();
        let right = BiMap::try_from_pairs([pair("b", "ب")]).unwrap();
        let merged = left.merge(&right, "library", "project").unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn merge_conflict_names_both_sides() {
        let left = BiMap::try_from_pairs([pair("a", "أ")]).unwrap();
        let right = BiMap::try_from_pairs([pair("a", "ب")]).unwrap();
        let err = left.merge(&right, "library", "project").unwrap_err();
        assert_eq!(err.left, "library");
        assert_eq!(err.right, "project");
        let rendered = err.to_string();
        assert!(rendered.contains("library"), "{rendered}");
        assert!(rendered.contains("duplicate key a"), "{rendered}");
    }

    // Distinct alphabets per column guarantee conflict-free pair lists
    // without filtering; the sets guarantee uniqueness within a column.
    fn conflict_free_pairs() -> impl Strategy<Value = Vec<(String, String)>> {
        (
            proptest::collection::hash_set("[a-z]{1,8}", 0..16),
            proptest::collection::hash_set("[ء-ي]{1,8}", 0..16),
        )
            .prop_map(|(keys, values)| keys.into_iter().zip(values).collect())
    }

    proptest! {
        #[test]
        fn lookups_invert_over_any_conflict_free_pairs(pairs in conflict_free_pairs()) {
            let map = BiMap::try_from_pairs(pairs.clone()).unwrap();
            prop_assert_eq!(map.len(), pairs.len());
            for (key, value) in &pairs {
                prop_assert_eq!(map.to_value(key.as_str()), Some(value));
                prop_assert_eq!(map.to_key(value.as_str()), Some(key));
            }
        }

        #[test]
        fn merge_of_disjoint_halves_never_mutates(pairs in conflict_free_pairs()) {
            let mid = pairs.len() / 2;
            let left = BiMap::try_from_pairs(pairs[..mid].iter().cloned()).unwrap();
            let right = BiMap::try_from_pairs(pairs[mid..].iter().cloned()).unwrap();
            let (left_before, right_before) = (left.clone(), right.clone());

            let merged = left.merge(&right, "left", "right").unwrap();
            prop_assert_eq!(merged.len(), pairs.len());
            for (key, value) in &pairs {
                prop_assert_eq!(merged.to_value(key.as_str()), Some(value));
            }
            prop_assert_eq!(&left, &left_before);
            prop_assert_eq!(&right, &right_before);
        }

        #[test]
        fn repeating_any_pair_is_rejected(pairs in conflict_free_pairs()) {
            prop_assume!(!pairs.is_empty());
            let mut with_repeat = pairs.clone();
            with_repeat.push(pairs[0].clone());
            prop_assert!(BiMap::try_from_pairs(with_repeat).is_err());
        }
    }
}
