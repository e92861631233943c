//! Ascending rankings
//!
//! Entries are kept sorted by key, lowest first. Equal keys keep their
//! arrival order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A ranked value with its score key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedEntry<T> {
    pub key: f64,
    pub value: T,
}

impl<T> RankedEntry<T> {
    #[inline]
    pub fn new(key: f64, value: T) -> Self {
        Self { key, value }
    }
}

/// A sequence of entries sorted ascending by key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ranking<T> {
    entries: Vec<RankedEntry<T>>,
}

impl<T> Default for Ranking<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Ranking<T> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert after every entry whose key is <= `key`
    pub fn insert(&mut self, key: f64, value: T) {
        let pos = self
            .entries
            .partition_point(|e| e.key.total_cmp(&key) != Ordering::Greater);
        self.entries.insert(pos, RankedEntry::new(key, value));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&RankedEntry<T>> {
        self.entries.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&RankedEntry<T>> {
        self.entries.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&RankedEntry<T>> {
        self.entries.last()
    }

    pub fn remove_last(&mut self) -> Option<RankedEntry<T>> {
        self.entries.pop()
    }

    /// Drop entries from the tail until at most `count` remain
    pub fn truncate(&mut self, count: usize) {
        self.entries.truncate(count);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry<T>> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.value)
    }

    pub fn as_slice(&self) -> &[RankedEntry<T>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankedEntry<T>> {
        self.entries
    }

    pub fn into_values(self) -> Vec<T> {
        self.entries.into_iter().map(|e| e.value).collect()
    }

    /// Map every value, keeping keys and order
    pub fn map_values<U, F: FnMut(T) -> U>(self, mut f: F) -> Ranking<U> {
        Ranking {
            entries: self
                .entries
                .into_iter()
                .map(|e| RankedEntry::new(e.key, f(e.value)))
                .collect(),
        }
    }
}

impl<T> FromIterator<(f64, T)> for Ranking<T> {
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Self {
        let mut entries: Vec<RankedEntry<T>> = iter
            .into_iter()
            .map(|(key, value)| RankedEntry::new(key, value))
            .collect();
        // sort_by is stable, arrival order survives among equal keys
        entries.sort_by(|a, b| a.key.total_cmp(&b.key));
        Self { entries }
    }
}

impl<T> IntoIterator for Ranking<T> {
    type Item = RankedEntry<T>;
    type IntoIter = std::vec::IntoIter<RankedEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ranking<T> {
    type Item = &'a RankedEntry<T>;
    type IntoIter = std::slice::Iter<'a, RankedEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
