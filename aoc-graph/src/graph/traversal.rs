//! Reachability, cycle detection, path enumeration and components.
//!
//! Every search keeps its own stack instead of recursing.

use std::collections::HashMap;

use tracing::error;

use super::adjacency::Graph;
use super::edge::{Edge, Node};
use crate::collections::Set;
use crate::error::{GraphError, GraphKind};

impl<T> Graph<T>
where
    T: Node,
{
    /// Whether the graph contains a cycle.
    ///
    /// Directed graphs look for an edge back onto the current search stack.
    /// Undirected graphs look for a second route to an already visited node;
    /// the edge leading back to a node's own parent does not count, self-loops do.
    pub fn has_cycle(&self) -> bool {
        if self.directed {
            self.has_directed_cycle()
        } else {
            self.has_undirected_cycle()
        }
    }

    fn has_directed_cycle(&self) -> bool {
        let mut visited = Set::with_capacity(self.nodes.len());
        let mut on_stack = Set::new();

        for start in self.nodes.iter() {
            if !visited.add(start.clone()) {
                continue;
            }
            on_stack.add(start.clone());
            let mut stack = vec![(start.clone(), self.out_n(start).into_iter())];

            while let Some((node, successors)) = stack.last_mut() {
                match successors.next() {
                    Some(next) => {
                        if on_stack.has(&next) {
                            return true;
                        }
                        if visited.add(next.clone()) {
                            on_stack.add(next.clone());
                            let further = self.out_n(&next).into_iter();
                            stack.push((next, further));
                        }
                    }
                    None => {
                        on_stack.rem(node);
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let mut visited = Set::with_capacity(self.nodes.len());

        for start in self.nodes.iter() {
            if !visited.add(start.clone()) {
                continue;
            }
            let mut stack = vec![(start.clone(), None, self.out_n(start).into_iter())];

            while let Some((node, parent, nbors)) = stack.last_mut() {
                let Some(next) = nbors.next() else {
                    stack.pop();
                    continue;
                };
                if parent.as_ref() == Some(&next) {
                    continue;
                }
                if !visited.add(next.clone()) {
                    return true;
                }
                let parent = Some(node.clone());
                let further = self.out_n(&next).into_iter();
                stack.push((next, parent, further));
            }
        }
        false
    }

    /// Whether `to` can be reached from `from` along outgoing edges.
    ///
    /// Every present node reaches itself.
    pub fn has_path(&self, from: &T, to: &T) -> bool {
        if !self.has(from) {
            return false;
        }
        if from == to {
            return true;
        }

        let mut visited = Set::from([from.clone()]);
        let mut stack = vec![from.clone()];
        while let Some(node) = stack.pop() {
            for next in self.out_adj.get(&node).into_iter().flatten() {
                if next == to {
                    return true;
                }
                if visited.add(next.clone()) {
                    stack.push(next.clone());
                }
            }
        }
        false
    }

    /// Every simple path from `from` to `to` along outgoing edges.
    ///
    /// Paths come back in search order; callers should not rely on it.
    pub fn paths(&self, from: &T, to: &T) -> Vec<Vec<T>> {
        let mut paths = Vec::new();
        if !self.has(from) {
            return paths;
        }
        if from == to {
            paths.push(vec![from.clone()]);
            return paths;
        }

        let mut path = vec![from.clone()];
        let mut on_path = Set::from([from.clone()]);
        let mut stack = vec![self.out_n(from).into_iter()];

        while let Some(successors) = stack.last_mut() {
            match successors.next() {
                Some(next) if on_path.has(&next) => {}
                Some(next) if next == *to => {
                    let mut found = path.clone();
                    found.push(next);
                    paths.push(found);
                }
                Some(next) => {
                    stack.push(self.out_n(&next).into_iter());
                    on_path.add(next.clone());
                    path.push(next);
                }
                None => {
                    stack.pop();
                    if let Some(done) = path.pop() {
                        on_path.rem(&done);
                    }
                }
            }
        }
        paths
    }

    /// Splits an undirected graph into its connected components.
    ///
    /// Isolated nodes form components of their own. Each component is an
    /// independent graph carrying its edges and their weights.
    pub fn cnx_comp(&self) -> Result<Vec<Graph<T>>, GraphError> {
        if self.directed {
            error!("connected components are not implemented for directed graphs");
            return Err(GraphError::Unsupported {
                operation: "connected components",
                kind: GraphKind::from_directed(self.directed),
            });
        }

        let mut component_of: HashMap<&T, usize> = HashMap::with_capacity(self.nodes.len());
        let mut components = Vec::new();

        for start in self.nodes.iter() {
            if component_of.contains_key(start) {
                continue;
            }
            let id = components.len();
            let mut component = Graph::undirected();
            component_of.insert(start, id);
            component.add(start.clone());

            let mut stack = vec![start];
            while let Some(node) = stack.pop() {
                for next in self.out_adj.get(node).into_iter().flatten() {
                    if !component_of.contains_key(next) {
                        component_of.insert(next, id);
                        component.add(next.clone());
                        stack.push(next);
                    }
                }
            }
            components.push(component);
        }

        for ((from, to), weight) in &self.weights {
            let Some(&id) = component_of.get(from) else {
                panic!("edge endpoint {from:?} is not a node of the graph");
            };
            components[id].add_weighted_edge(from.clone(), to.clone(), *weight);
        }
        Ok(components)
    }

    /// Splices out an undirected node that has exactly two neighbours.
    ///
    /// The neighbours are joined by an edge weighing the sum of the two
    /// removed edges. If they were already joined, the lighter edge is kept.
    /// Returns the joining edge. A sum outside `i64` range is an error and
    /// leaves the graph untouched.
    pub fn contract(&mut self, node: &T) -> Result<Edge<T>, GraphError> {
        if self.directed {
            return Err(GraphError::Unsupported {
                operation: "contraction",
                kind: GraphKind::from_directed(self.directed),
            });
        }
        if !self.has(node) {
            return Err(GraphError::MissingNodes { count: 1 });
        }

        let ends: Vec<T> = self.nbors(node).into_iter().collect();
        let [a, c] = ends.as_slice() else {
            return Err(GraphError::NotContractible { degree: ends.len() });
        };

        let Some(first) = self.weight(a, node) else {
            panic!("{a:?} is listed as a neighbour of {node:?} but no edge joins them");
        };
        let Some(second) = self.weight(node, c) else {
            panic!("{c:?} is listed as a neighbour of {node:?} but no edge joins them");
        };

        let joined = first
            .checked_add(second)
            .ok_or(GraphError::WeightOverflow { first, second })?;
        let weight = match self.weight(a, c) {
            Some(existing) => existing.min(joined),
            None => joined,
        };
        self.remove(node);
        self.add_weighted_edge(a.clone(), c.clone(), weight);
        Ok(Edge::new(a.clone(), c.clone(), weight))
    }
}
