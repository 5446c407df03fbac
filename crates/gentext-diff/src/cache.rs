//! Memoization of the last computed diff.
//!
//! A diff depends on exactly three inputs: reference text, candidate text
//! and mode. The cache keeps the last key and its result, and recomputes
//! whenever any component of the key changes.

use gentext_types::{DiffMode, TextDiff};
use tracing::debug;

use crate::text_diff::get_text_diff;

/// The inputs a diff is computed from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DiffKey {
    pub reference: Option<String>,
    pub candidate: Option<String>,
    pub mode: DiffMode,
}

impl DiffKey {
    fn matches(&self, reference: Option<&str>, candidate: Option<&str>, mode: DiffMode) -> bool {
        self.mode == mode
            && self.reference.as_deref() == reference
            && self.candidate.as_deref() == candidate
    }
}

#[derive(Clone, Debug)]
struct Entry {
    key: DiffKey,
    value: Option<TextDiff>,
}

/// Single-entry memo of the most recent diff.
#[derive(Clone, Debug, Default)]
pub struct DiffCache {
    last: Option<Entry>,
    hits: u64,
    misses: u64,
}

impl DiffCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the diff for the given inputs, computing it only if the key
    /// differs from the cached one.
    ///
    /// An absent reference or candidate, or [`DiffMode::None`], yields
    /// `None`; that outcome is cached like any other.
    pub fn get_or_compute(
        &mut self,
        reference: Option<&str>,
        candidate: Option<&str>,
        mode: DiffMode,
    ) -> Option<&TextDiff> {
        let hit = self
            .last
            .as_ref()
            .is_some_and(|entry| entry.key.matches(reference, candidate, mode));

        if hit {
            self.hits += 1;
            debug!(%mode, "diff cache hit");
        } else {
            self.misses += 1;
            debug!(%mode, "diff cache miss");
            let value = match (reference, candidate) {
                (Some(reference), Some(candidate)) => get_text_diff(reference, candidate, mode),
                _ => None,
            };
            self.last = Some(Entry {
                key: DiffKey {
                    reference: reference.map(str::to_owned),
                    candidate: candidate.map(str::to_owned),
                    mode,
                },
                value,
            });
        }

        self.last.as_ref().and_then(|entry| entry.value.as_ref())
    }

    /// The key of the cached entry, if any.
    pub fn key(&self) -> Option<&DiffKey> {
        self.last.as_ref().map(|entry| &entry.key)
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that computed a fresh diff.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_is_a_hit() {
        let mut cache = DiffCache::new();
        let first = cache
            .get_or_compute(Some("the cat"), Some("the dog"), DiffMode::Word)
            .cloned();
        let second = cache
            .get_or_compute(Some("the cat"), Some("the dog"), DiffMode::Word)
            .cloned();
        assert_eq!(first, second);
        assert!(first.is_some());
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn any_key_change_recomputes() {
        let mut cache = DiffCache::new();
        cache.get_or_compute(Some("a b"), Some("a c"), DiffMode::Word);
        cache.get_or_compute(Some("a b"), Some("a c"), DiffMode::Character);
        cache.get_or_compute(Some("a x"), Some("a c"), DiffMode::Character);
        cache.get_or_compute(Some("a x"), Some("a y"), DiffMode::Character);
        assert_eq!(cache.misses(), 4);
        assert_eq!(cache.hits(), 0);
        assert_eq!(
            cache.key(),
            Some(&DiffKey {
                reference: Some("a x".into()),
                candidate: Some("a y".into()),
                mode: DiffMode::Character,
            })
        );
    }

    #[test]
    fn recomputed_value_follows_the_new_key() {
        let mut cache = DiffCache::new();
        cache.get_or_compute(Some("abc"), Some("abc"), DiffMode::Character);
        let diff = cache
            .get_or_compute(Some("abc"), Some("xyz"), DiffMode::Character)
            .unwrap();
        assert_eq!(diff.equal_flags, vec![false]);
    }

    #[test]
    fn absent_results_are_cached() {
        let mut cache = DiffCache::new();
        assert!(cache.get_or_compute(None, Some("x"), DiffMode::Word).is_none());
        assert!(cache.get_or_compute(None, Some("x"), DiffMode::Word).is_none());
        assert!(cache.get_or_compute(Some("x"), Some("x"), DiffMode::None).is_none());
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn empty_cache_has_no_key() {
        let mut cache = DiffCache::new();
        assert!(cache.key().is_none());
        cache.get_or_compute(Some("a"), Some("b"), DiffMode::Word);
        assert_eq!(cache.key().map(|k| k.mode), Some(DiffMode::Word));
    }
}
