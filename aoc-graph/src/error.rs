//! Error types for graph operations

use std::fmt;

use thiserror::Error;

/// Whether a graph's edges carry orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Directed => write!(f, "directed"),
            GraphKind::Undirected => write!(f, "undirected"),
        }
    }
}

/// Error type for graph queries that can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The operation is only defined for the other kind of graph
    #[error("{operation} is not supported on {kind} graphs")]
    Unsupported {
        operation: &'static str,
        kind: GraphKind,
    },
    /// Topological sort found residual edges after draining every source
    #[error("graph has a cycle and cannot be topologically sorted")]
    NotADag,
    /// Some requested items are not nodes of the graph
    #[error("{count} item(s) are not nodes of this graph")]
    MissingNodes { count: usize },
    /// Contraction needs a node with exactly two neighbours
    #[error("cannot contract a node with {degree} neighbour(s)")]
    NotContractible { degree: usize },
    /// Joining two edges would take their summed weight out of `i64` range
    #[error("joined edge weight {first} + {second} overflows")]
    WeightOverflow { first: i64, second: i64 },
}
