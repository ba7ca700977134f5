//! Memoization table for path lookups

use std::collections::HashMap;

/// A computed lookup result
///
/// Together with absence from the table this forms the three states a key can
/// be in: not computed yet, computed with no match, computed with a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cached<T> {
    /// Computed, nothing matched
    NoMatch,
    /// Computed, with a result
    Found(T),
}

impl<T> Cached<T> {
    /// Convert back to the optional result it was built from
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::NoMatch => None,
            Self::Found(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Cached<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NoMatch, Self::Found)
    }
}

/// Unbounded lookup cache keyed by normalized absolute path
///
/// Entries are never evicted; a fresh resolver starts with a fresh cache.
#[derive(Debug)]
pub struct LookupCache<T> {
    entries: HashMap<String, Cached<T>>,
}

impl<T: Clone> LookupCache<T> {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up `key`; `None` means it has not been computed
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Cached<T>> {
        self.entries.get(key)
    }

    /// Record the outcome for `key`, replacing any previous entry
    pub fn insert(&mut self, key: String, value: Option<T>) {
        self.entries.insert(key, Cached::from(value));
    }

    /// Number of computed keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been computed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for LookupCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
