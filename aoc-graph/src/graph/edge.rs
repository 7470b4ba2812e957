//! Node bound and weighted edge value.

use std::fmt;
use std::hash::Hash;

/// Weight given to edges added without an explicit one.
pub const DEFAULT_WEIGHT: i64 = 1;

/// Anything usable as a graph node: nodes are their own keys.
pub trait Node: Clone + Eq + Hash + fmt::Debug {}

impl<T> Node for T where T: Clone + Eq + Hash + fmt::Debug {}

/// A weighted edge between two nodes.
///
/// Orientation only matters for directed graphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<T> {
    pub from: T,
    pub to: T,
    pub weight: i64,
}

impl<T> Edge<T> {
    pub fn new(from: T, to: T, weight: i64) -> Self {
        Self { from, to, weight }
    }

    /// The same edge pointing the other way.
    pub fn rev(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl<T> fmt::Display for Edge<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
