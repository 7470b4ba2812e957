//! Hash-backed set with deterministic iteration.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;

/// A hash set over comparable keys.
///
/// Iteration follows insertion order until elements are removed; removal swaps
/// the last element into the freed slot. Two sets are equal when they hold the
/// same elements, regardless of order.
#[derive(Clone)]
pub struct Set<T> {
    items: IndexSet<T>,
}

impl<T> Set<T>
where
    T: Eq + Hash,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: IndexSet::with_capacity(capacity),
        }
    }

    /// Inserts `item`, returning `true` if it was not already present.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Removes `item`, returning `true` if it was present.
    pub fn rem(&mut self, item: &T) -> bool {
        self.items.swap_remove(item)
    }

    pub fn has(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Removes and returns an arbitrary element (the most recently placed one).
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.items.iter()
    }

    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.items.is_subset(&other.items)
    }
}

impl<T> Set<T>
where
    T: Eq + Hash + Clone,
{
    /// Elements present in either set.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        self.items.union(&other.items).cloned().collect()
    }

    /// Elements present in both sets.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        self.items.intersection(&other.items).cloned().collect()
    }

    /// Elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.items.difference(&other.items).cloned().collect()
    }
}

impl<T> Default for Set<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Set<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Eq for Set<T> where T: Eq + Hash {}

impl<T> FromIterator<T> for Set<T>
where
    T: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Set<T>
where
    T: Eq + Hash,
{
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> Extend<T> for Set<T>
where
    T: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> fmt::Debug for Set<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T> fmt::Display for Set<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}
