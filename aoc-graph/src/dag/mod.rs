//! Precedence graphs
//!
//! A [`Dag`] is a directed [`Graph`] whose edges mean "must come before".
//! Acyclicity is a convention rather than an enforced rule: a full rule set
//! may well be cyclic while every subset a caller actually orders is not,
//! which is what [`Dag::sort_dumb`] and [`Dag::is_sorted_dumb`] are for.
//!
//! # Example
//!
//! ```rust
//! use aoc_graph::Dag;
//!
//! let rules = Dag::from_edges([(47, 53), (97, 47), (97, 53)]);
//!
//! assert!(rules.is_sorted_dumb(&[97, 47, 53]));
//! assert!(!rules.is_sorted_dumb(&[47, 97]));
//! assert_eq!(rules.sort_dumb(&[53, 47, 97]).unwrap(), vec![97, 47, 53]);
//! ```

use std::ops::Deref;

use crate::collections::Set;
use crate::error::GraphError;
use crate::graph::{Graph, Node};

/// A directed graph used as a precedence relation.
///
/// Every read-only [`Graph`] query is available through `Deref`; mutation goes
/// through the methods here so the graph always stays directed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dag<T>
where
    T: Node,
{
    graph: Graph<T>,
}

impl<T> Dag<T>
where
    T: Node,
{
    pub fn new() -> Self {
        Self {
            graph: Graph::directed(),
        }
    }

    /// Builds a DAG with one `before -> after` edge per pair.
    pub fn from_edges<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        Self {
            graph: Graph::from_edges(true, pairs),
        }
    }

    pub fn add(&mut self, node: T) {
        self.graph.add(node);
    }

    /// Records that `before` must precede `after`.
    pub fn add_edge(&mut self, before: T, after: T) {
        self.graph.add_edge(before, after);
    }

    pub fn add_weighted_edge(&mut self, before: T, after: T, weight: i64) {
        self.graph.add_weighted_edge(before, after, weight);
    }

    pub fn remove(&mut self, node: &T) -> bool {
        self.graph.remove(node)
    }

    pub fn remove_edge(&mut self, before: &T, after: &T) -> Option<i64> {
        self.graph.remove_edge(before, after)
    }

    pub fn as_graph(&self) -> &Graph<T> {
        &self.graph
    }

    pub fn into_graph(self) -> Graph<T> {
        self.graph
    }

    /// Whether no later item is required to precede an earlier one.
    ///
    /// Looks only at edges between the given items, without sorting the
    /// whole graph. Items that are not nodes impose no constraint.
    pub fn is_sorted_dumb(&self, items: &[T]) -> bool {
        items.iter().enumerate().all(|(i, earlier)| {
            items[i + 1..]
                .iter()
                .all(|later| !self.graph.has_edge(later, earlier))
        })
    }

    /// Copy restricted to the nodes in `subset` and the edges among them.
    pub fn prune(&self, subset: &[T]) -> Dag<T> {
        let keep: Set<&T> = subset.iter().filter(|node| self.graph.has(node)).collect();

        let mut pruned = Dag::new();
        for node in &keep {
            pruned.add((*node).clone());
        }
        for edge in self.graph.edge_list() {
            if keep.has(&&edge.from) && keep.has(&&edge.to) {
                pruned.add_weighted_edge(edge.from, edge.to, edge.weight);
            }
        }
        pruned
    }

    /// `items` in an order consistent with the edges among them.
    ///
    /// Only edges between the given items are considered, so the rest of the
    /// graph may contain cycles. Items that are not nodes are placed freely.
    pub fn sort_dumb(&self, items: &[T]) -> Result<Vec<T>, GraphError> {
        let mut pruned = self.prune(items);
        for item in items {
            if !pruned.has(item) {
                pruned.add(item.clone());
            }
        }
        pruned.topo()
    }
}

impl<T> Default for Dag<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Dag<T>
where
    T: Node,
{
    type Target = Graph<T>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<T> AsRef<Graph<T>> for Dag<T>
where
    T: Node,
{
    fn as_ref(&self) -> &Graph<T> {
        &self.graph
    }
}

impl<T> From<Dag<T>> for Graph<T>
where
    T: Node,
{
    fn from(dag: Dag<T>) -> Self {
        dag.graph
    }
}
