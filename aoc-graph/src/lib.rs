//! Graph utilities shared by Advent of Code 2024 solutions
//!
//! The puzzles that need a graph (page-ordering rules, hiking trails, maze
//! corridors) all build on the same pieces:
//!
//! - [`Graph`]: directed or undirected graph with weighted edges, cycle
//!   detection, reachability, path enumeration, connected components and
//!   topological sort
//! - [`Dag`]: precedence-graph view with cheap ordering checks over small
//!   subsequences
//! - [`Set`] / [`SetMap`]: the hash-backed containers the graph is built from

pub mod collections;
pub mod dag;
pub mod error;
pub mod graph;

pub use collections::{Set, SetMap};
pub use dag::Dag;
pub use error::{GraphError, GraphKind};
pub use graph::{DEFAULT_WEIGHT, Edge, Graph, Node};
