//! Generic graph over comparable node labels
//!
//! A single [`Graph`] type covers both directed and undirected graphs; the
//! mode is picked at construction and never changes.
//!
//! # Query families
//!
//! - Structure: [`Graph::nodes`], [`Graph::edges`], [`Graph::out_n`], [`Graph::in_n`], [`Graph::nbors`]
//! - Directed only: [`Graph::sources`], [`Graph::sinks`], [`Graph::topo`], [`Graph::is_sorted`], [`Graph::sort`]
//! - Undirected only: [`Graph::cnx_comp`], [`Graph::contract`]
//! - Either: [`Graph::has_cycle`], [`Graph::has_path`], [`Graph::paths`]
//! - Diagnostics: [`Graph::dot`], [`Graph::mermaid`], `Display`
//!
//! Queries about absent nodes are total: they return empty sets or `false`.
//! Asking a directed-only question of an undirected graph (or the reverse)
//! returns [`GraphError::Unsupported`](crate::GraphError::Unsupported), except
//! for sources and sinks, which are simply empty on undirected graphs.
//!
//! # Example: trail counting
//!
//! ```rust
//! use aoc_graph::Graph;
//!
//! let trails = Graph::from_edges(true, [
//!     ("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "e"),
//! ]);
//!
//! assert_eq!(trails.paths(&"a", &"e").len(), 2);
//! assert!(!trails.has_cycle());
//! assert_eq!(trails.topo().unwrap().first(), Some(&"a"));
//! ```
//!
//! # Example: maze simplification
//!
//! ```rust
//! use aoc_graph::Graph;
//!
//! let mut maze = Graph::from_edges(false, [(0, 1), (1, 2), (2, 3)]);
//! maze.contract(&1).unwrap();
//! maze.contract(&2).unwrap();
//!
//! assert_eq!(maze.weight(&3, &0), Some(3));
//! assert_eq!(maze.node_count(), 2);
//! ```

mod adjacency;
mod edge;
mod render;
mod topo;
mod traversal;

pub use adjacency::Graph;
pub use edge::{DEFAULT_WEIGHT, Edge, Node};
