//! Set containers backing the graph adjacency structures.
//!
//! - [`Set`]: hash set with deterministic iteration and set algebra
//! - [`SetMap`]: key to [`Set`] mapping, one entry per node with neighbours

mod set;
mod set_map;

pub use set::Set;
pub use set_map::SetMap;
