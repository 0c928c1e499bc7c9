//! Sorted, immutable associative container.
//!
//! `Lookup` stores its entries as a vector of pairs ordered by key. Lookups
//! are a binary search, and because the entries are contiguous and sorted the
//! raw slice can be handed to callers that need range queries over keys
//! (for example prefix narrowing in a longest-match scanner).
//!
//! A `Lookup` is built once and never mutated afterwards, so shared
//! references can be read from any number of threads without locking.

use std::borrow::Borrow;
use std::fmt;
use std::slice;

use crate::error::{LookupError, LookupResult};

/// An immutable map backed by a key-sorted vector of pairs.
///
/// # Example
///
/// ```
/// use lsc_util::Lookup;
///
/// let table = Lookup::new(vec![("b", 2), ("a", 1), ("c", 3)]).unwrap();
/// assert_eq!(table.get("a"), Some(&1));
/// assert_eq!(table.get("d"), None);
/// assert_eq!(table.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Lookup<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Ord + fmt::Debug, V> Lookup<K, V> {
    /// Builds a lookup from unsorted entries.
    ///
    /// Entries are sorted by key. Keys must be unique; the first duplicate
    /// found is reported as [`LookupError::DuplicateKey`].
    pub fn new(mut entries: Vec<(K, V)>) -> LookupResult<Self> {
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(LookupError::DuplicateKey {
                key: format!("{:?}", pair[0].0),
            });
        }

        Ok(Self { entries })
    }
}

impl<K: Ord, V> Lookup<K, V> {
    /// Returns the entry stored under `key`, if any.
    pub fn find<Q>(&self, key: &Q) -> Option<&(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .binary_search_by(|(k, _)| k.borrow().cmp(key))
            .ok()
            .map(|index| &self.entries[index])
    }

    /// Returns the value stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|(_, value)| value)
    }

    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
}

impl<K, V> Lookup<K, V> {
    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lookup holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in ascending key order.
    #[inline]
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> slice::Iter<'_, (K, V)> {
        self.entries.iter()
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<'a, K, V> IntoIterator for &'a Lookup<K, V> {
    type Item = &'a (K, V);
    type IntoIter = slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Lookup<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}
