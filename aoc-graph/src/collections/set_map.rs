//! Key to set-of-values mapping, used as an adjacency list.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use super::set::Set;

/// Maps each key to a [`Set`] of values.
///
/// Keys whose set becomes empty through [`SetMap::rem`] are dropped, so
/// `get` never hands out an empty set.
#[derive(Clone)]
pub struct SetMap<K, V> {
    entries: IndexMap<K, Set<V>>,
}

impl<K, V> SetMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Adds `value` to the set under `key`, returning `true` if it was new.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.entries.entry(key).or_default().add(value)
    }

    /// Removes `value` from the set under `key`, returning `true` if it was present.
    pub fn rem(&mut self, key: &K, value: &V) -> bool {
        let Some(values) = self.entries.get_mut(key) else {
            return false;
        };
        let removed = values.rem(value);
        if values.is_empty() {
            self.entries.swap_remove(key);
        }
        removed
    }

    pub fn get(&self, key: &K) -> Option<&Set<V>> {
        self.entries.get(key)
    }

    pub fn has(&self, key: &K, value: &V) -> bool {
        self.entries.get(key).is_some_and(|values| values.has(value))
    }

    /// Drops `key` and returns the values it held.
    pub fn remove_key(&mut self, key: &K) -> Option<Set<V>> {
        self.entries.swap_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Set<V>)> {
        self.entries.iter()
    }

    /// Number of keys with at least one value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> SetMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash + Clone,
{
    /// Copy of the values under `key`; empty when the key is absent.
    pub fn values(&self, key: &K) -> Set<V> {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

impl<K, V> Default for SetMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for SetMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> Eq for SetMap<K, V>
where
    K: Eq + Hash,
    V: Eq + Hash,
{
}

impl<K, V> fmt::Debug for SetMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
