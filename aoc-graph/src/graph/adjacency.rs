//! Graph storage, mutation and neighbourhood queries.

use std::cell::OnceCell;

use indexmap::IndexMap;
use tracing::trace;

use super::edge::{DEFAULT_WEIGHT, Edge, Node};
use crate::collections::{Set, SetMap};

/// A directed or undirected graph over comparable node labels.
///
/// Edges live in two adjacency maps (outgoing and incoming) plus a weight
/// table keyed by each edge's canonical orientation. For undirected graphs
/// both adjacency maps hold the mirror of every edge, while the weight table
/// holds it exactly once, in the orientation it was first added with.
///
/// Topological order, sources and sinks are memoized on first use and
/// dropped by every mutation.
///
/// # Example
///
/// ```rust
/// use aoc_graph::{Graph, Set};
///
/// let mut graph = Graph::from_edges(true, [(1, 2), (2, 3)]);
/// graph.add(4);
///
/// assert_eq!(graph.sources(), Set::from([1, 4]));
/// assert_eq!(graph.topo().unwrap().len(), 4);
/// assert!(graph.has_path(&1, &3));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T>
where
    T: Node,
{
    pub(super) directed: bool,
    pub(super) nodes: Set<T>,
    pub(super) out_adj: SetMap<T, T>,
    pub(super) in_adj: SetMap<T, T>,
    pub(super) weights: IndexMap<(T, T), i64>,
    pub(super) topo: OnceCell<Vec<T>>,
    sources: OnceCell<Set<T>>,
    sinks: OnceCell<Set<T>>,
}

impl<T> Graph<T>
where
    T: Node,
{
    /// Creates an empty graph. Directedness is fixed for the graph's lifetime.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Set::new(),
            out_adj: SetMap::new(),
            in_adj: SetMap::new(),
            weights: IndexMap::new(),
            topo: OnceCell::new(),
            sources: OnceCell::new(),
            sinks: OnceCell::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates a graph holding every pair as an edge of [`DEFAULT_WEIGHT`].
    pub fn from_edges<I>(directed: bool, pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut graph = Self::new(directed);
        for (from, to) in pairs {
            graph.add_edge(from, to);
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges; an undirected pair counts once.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    pub fn has(&self, node: &T) -> bool {
        self.nodes.has(node)
    }

    /// Inserts an isolated node. No-op if it is already present.
    pub fn add(&mut self, node: T) {
        self.nodes.add(node);
        self.invalidate();
    }

    /// Adds an edge of [`DEFAULT_WEIGHT`], inserting missing endpoints.
    pub fn add_edge(&mut self, from: T, to: T) {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT);
    }

    /// Adds an edge, inserting missing endpoints.
    ///
    /// Adding an edge that already exists (in either orientation, for
    /// undirected graphs) only replaces its weight.
    pub fn add_weighted_edge(&mut self, from: T, to: T, weight: i64) {
        self.nodes.add(from.clone());
        self.nodes.add(to.clone());

        let key = self
            .stored_key(&from, &to)
            .unwrap_or_else(|| (from.clone(), to.clone()));
        self.weights.insert(key, weight);

        self.out_adj.add(from.clone(), to.clone());
        self.in_adj.add(to.clone(), from.clone());
        if !self.directed {
            self.out_adj.add(to.clone(), from.clone());
            self.in_adj.add(from, to);
        }
        self.invalidate();
    }

    /// Removes the edge between `left` and `right`, returning its weight.
    ///
    /// Undirected graphs accept either orientation.
    pub fn remove_edge(&mut self, left: &T, right: &T) -> Option<i64> {
        let key = self.stored_key(left, right)?;
        let weight = self.weights.shift_remove(&key)?;

        self.out_adj.rem(left, right);
        self.in_adj.rem(right, left);
        if !self.directed {
            self.out_adj.rem(right, left);
            self.in_adj.rem(left, right);
        }
        self.invalidate();
        Some(weight)
    }

    /// Removes a node and every edge touching it.
    pub fn remove(&mut self, node: &T) -> bool {
        if !self.nodes.has(node) {
            return false;
        }

        for to in self.out_n(node) {
            self.remove_edge(node, &to);
        }
        for from in self.in_n(node) {
            self.remove_edge(&from, node);
        }
        self.out_adj.remove_key(node);
        self.in_adj.remove_key(node);
        self.nodes.rem(node);
        self.invalidate();
        true
    }

    /// Drops every node and edge. Directedness is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.out_adj.clear();
        self.in_adj.clear();
        self.weights.clear();
        self.invalidate();
    }

    /// Copy of the node set.
    pub fn nodes(&self) -> Set<T> {
        self.nodes.clone()
    }

    /// Every edge as a `(from, to)` pair.
    ///
    /// An undirected edge appears once, in the orientation it was first added with.
    pub fn edges(&self) -> Set<(T, T)> {
        self.weights.keys().cloned().collect()
    }

    /// Every edge with its weight, in insertion order.
    pub fn edge_list(&self) -> Vec<Edge<T>> {
        self.weights
            .iter()
            .map(|((from, to), weight)| Edge::new(from.clone(), to.clone(), *weight))
            .collect()
    }

    pub fn has_edge(&self, from: &T, to: &T) -> bool {
        self.stored_key(from, to).is_some()
    }

    pub fn weight(&self, from: &T, to: &T) -> Option<i64> {
        let key = self.stored_key(from, to)?;
        self.weights.get(&key).copied()
    }

    /// The edge between `from` and `to`, reported in the requested orientation.
    pub fn edge(&self, from: &T, to: &T) -> Option<Edge<T>> {
        self.weight(from, to)
            .map(|weight| Edge::new(from.clone(), to.clone(), weight))
    }

    /// Direct successors. For undirected graphs, every neighbour.
    pub fn out_n(&self, node: &T) -> Set<T> {
        self.out_adj.values(node)
    }

    /// Direct predecessors. For undirected graphs, every neighbour.
    pub fn in_n(&self, node: &T) -> Set<T> {
        self.in_adj.values(node)
    }

    /// Successors and predecessors, excluding the node itself.
    pub fn nbors(&self, node: &T) -> Set<T> {
        let mut nbors = self.out_n(node).union(&self.in_n(node));
        nbors.rem(node);
        nbors
    }

    /// Nodes without incoming edges. Always empty for undirected graphs.
    pub fn sources(&self) -> Set<T> {
        if !self.directed {
            return Set::new();
        }
        self.sources
            .get_or_init(|| self.terminals(&self.in_adj))
            .clone()
    }

    /// Nodes without outgoing edges. Always empty for undirected graphs.
    pub fn sinks(&self) -> Set<T> {
        if !self.directed {
            return Set::new();
        }
        self.sinks
            .get_or_init(|| self.terminals(&self.out_adj))
            .clone()
    }

    fn terminals(&self, adjacency: &SetMap<T, T>) -> Set<T> {
        self.nodes
            .iter()
            .filter(|node| adjacency.get(node).is_none())
            .cloned()
            .collect()
    }

    /// The key under which the edge is stored, if any.
    fn stored_key(&self, from: &T, to: &T) -> Option<(T, T)> {
        let key = (from.clone(), to.clone());
        if self.weights.contains_key(&key) {
            return Some(key);
        }
        if self.directed {
            return None;
        }
        let reversed = (key.1, key.0);
        self.weights.contains_key(&reversed).then_some(reversed)
    }

    fn invalidate(&mut self) {
        let topo = self.topo.take().is_some();
        let sources = self.sources.take().is_some();
        let sinks = self.sinks.take().is_some();
        if topo || sources || sinks {
            trace!(topo, sources, sinks, "dropped memoized graph state");
        }
    }
}

impl<T> Default for Graph<T>
where
    T: Node,
{
    /// An empty directed graph.
    fn default() -> Self {
        Self::directed()
    }
}

impl<T> PartialEq for Graph<T>
where
    T: Node,
{
    /// Same directedness, nodes, and weighted edges. Undirected edges compare
    /// up to orientation.
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed || self.nodes != other.nodes {
            return false;
        }
        if self.weights.len() != other.weights.len() {
            return false;
        }
        self.weights
            .iter()
            .all(|((from, to), weight)| other.weight(from, to) == Some(*weight))
    }
}

impl<T> Eq for Graph<T> where T: Node {}
