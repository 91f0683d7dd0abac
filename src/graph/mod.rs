//! Adjacency-list graph and its traversals.
//!
//! - `adjacency`: the vertex/edge store, directed or undirected
//! - `traversal`: lazy BFS and DFS iterators over it
//! - `error`: the error returned when a traversal starts at an unknown vertex

pub mod adjacency;
pub mod error;
pub mod traversal;

pub use adjacency::{Graph, Neighbors};
pub use error::GraphError;
pub use traversal::{Bfs, Dfs};
