//! Topological sort and ordering checks for directed graphs.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use super::adjacency::Graph;
use super::edge::Node;
use crate::collections::Set;
use crate::error::{GraphError, GraphKind};

impl<T> Graph<T>
where
    T: Node,
{
    /// All nodes in an order where every edge points forward.
    ///
    /// Uses Kahn's algorithm and memoizes the result until the next mutation.
    /// A failed sort leaves nothing memoized.
    pub fn topo(&self) -> Result<Vec<T>, GraphError> {
        if !self.directed {
            return Err(GraphError::Unsupported {
                operation: "topological sort",
                kind: GraphKind::from_directed(self.directed),
            });
        }
        if let Some(sorted) = self.topo.get() {
            return Ok(sorted.clone());
        }

        let sorted = self.kahn()?;
        debug!(nodes = sorted.len(), "computed topological order");
        Ok(self.topo.get_or_init(|| sorted).clone())
    }

    fn kahn(&self) -> Result<Vec<T>, GraphError> {
        let mut in_degree: HashMap<&T, usize> = self
            .nodes
            .iter()
            .map(|node| (node, self.in_adj.get(node).map_or(0, Set::len)))
            .collect();

        let mut frontier: VecDeque<&T> = self
            .nodes
            .iter()
            .filter(|node| in_degree.get(*node) == Some(&0))
            .collect();

        let mut sorted = Vec::with_capacity(self.nodes.len());
        while let Some(node) = frontier.pop_front() {
            sorted.push(node.clone());
            for next in self.out_adj.get(node).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(next) {
                    *degree -= 1;
                    if *degree == 0 {
                        frontier.push_back(next);
                    }
                }
            }
        }

        if sorted.len() < self.nodes.len() {
            warn!(
                sorted = sorted.len(),
                nodes = self.nodes.len(),
                "edges remain after draining every source"
            );
            return Err(GraphError::NotADag);
        }
        Ok(sorted)
    }

    /// Whether `items` already follow topological order.
    ///
    /// `items` must appear, in the given order, as a (not necessarily
    /// contiguous) subsequence of [`Graph::topo`].
    pub fn is_sorted(&self, items: &[T]) -> Result<bool, GraphError> {
        let sorted = self.topo()?;
        let mut pending = items.iter().peekable();
        for node in &sorted {
            if pending.peek() == Some(&node) {
                pending.next();
            }
        }
        Ok(pending.peek().is_none())
    }

    /// `items` reordered to match their relative topological order.
    ///
    /// Repeated items are reported once.
    pub fn sort(&self, items: &[T]) -> Result<Vec<T>, GraphError> {
        let sorted = self.topo()?;

        let wanted: Set<&T> = items.iter().collect();
        let missing = wanted.iter().filter(|item| !self.has(item)).count();
        if missing > 0 {
            return Err(GraphError::MissingNodes { count: missing });
        }

        Ok(sorted
            .into_iter()
            .filter(|node| wanted.has(&node))
            .collect())
    }
}
