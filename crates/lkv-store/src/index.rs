//! The sorted key index behind range scans.
//!
//! [`KeyIndex`] keeps every live key in a `BTreeSet<String>`, so iteration
//! order is byte-lexicographic and independent of insertion order. It holds
//! no values; the world state resolves keys to entries.

use std::collections::BTreeSet;
use std::ops::Bound;

/// Sorted set of live keys.
#[derive(Clone, Debug, Default)]
pub struct KeyIndex {
    keys: BTreeSet<String>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.keys.contains(key) {
            return false;
        }
        self.keys.insert(key.to_string())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Drop a key. Returns `true` if it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys in `[start, end)`, ascending.
    pub fn range(&self, start: &str, end: &str) -> Vec<String> {
        self.page(Bound::Included(start), end, usize::MAX)
    }

    /// Up to `limit` keys strictly greater than `after` and below `end`.
    pub fn range_after(&self, after: &str, end: &str, limit: usize) -> Vec<String> {
        self.page(Bound::Excluded(after), end, limit)
    }

    /// Up to `limit` keys at or above `start` and below `end`.
    pub fn range_from(&self, start: &str, end: &str, limit: usize) -> Vec<String> {
        self.page(Bound::Included(start), end, limit)
    }

    /// Every key, ascending.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    fn page(&self, lower: Bound<&str>, end: &str, limit: usize) -> Vec<String> {
        // BTreeSet::range panics on an inverted interval.
        let lower_key = match lower {
            Bound::Included(k) | Bound::Excluded(k) => k,
            Bound::Unbounded => "",
        };
        if lower_key >= end {
            return Vec::new();
        }

        self.keys
            .range::<str, _>((lower, Bound::Excluded(end)))
            .take(limit)
            .cloned()
            .collect()
    }
}
