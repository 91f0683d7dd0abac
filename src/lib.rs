//! # `keel` - Arena-Backed In-Memory Data Structures
//!
//! Four independent, single-threaded containers with invariants that hold
//! under every mutation:
//!
//! - [`LinkedList`]: singly linked sequence with O(1) head and tail insertion
//!   and linear search/removal.
//! - [`BinarySearchTree`]: unbalanced ordered tree with search, min/max and
//!   sorted enumeration.
//! - [`MinHeap`]: binary min-heap with O(1) peek and O(log n) extraction.
//! - [`Graph`]: adjacency-list graph, directed or undirected, with BFS and
//!   DFS traversal.
//!
//! ## Architecture
//!
//! Linked structures never hold pointers to each other. Nodes live in a
//! per-structure arena (`Vec` of slots) and links are plain indices into it.
//! This keeps ownership strictly tree-shaped, makes drops iterative (no
//! recursive destructor chains on degenerate trees or long lists), and
//! removes any need for `unsafe`.
//!
//! Every traversal (BST insertion, in-order walk, DFS) is iterative with an
//! explicit stack, so an adversarial insertion order that degrades the tree
//! into a list cannot exhaust the call stack.
//!
//! ## Error model
//!
//! Ordinary absence is not an error: lookups return `bool`, queries on empty
//! containers return `None`. The one fallible operation is starting a graph
//! traversal at a vertex the graph has never seen, which returns
//! [`GraphError::VertexNotFound`].
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, mutations and traversals emit
//! `trace`-level events carrying structured fields (`len`, `removed`,
//! `visited`). Without it the instrumentation compiles away entirely.
//!
//! ## Example
//!
//! ```rust
//! use keel::{BinarySearchTree, Graph, LinkedList, MinHeap};
//!
//! let mut list = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! assert!(list.delete(&1));
//! assert_eq!(list.to_list(), vec![2]);
//!
//! let tree: BinarySearchTree<i32> = [5, 3, 7].into_iter().collect();
//! assert_eq!(tree.find_min(), Some(&3));
//!
//! let mut heap: MinHeap<i32> = [4, 1, 3].into_iter().collect();
//! assert_eq!(heap.extract_min(), Some(1));
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B");
//! assert_eq!(graph.bfs(&"A").unwrap(), vec!["A", "B"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![forbid(unsafe_code)]

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod collections;
pub mod graph;

pub use collections::{BinarySearchTree, LinkedList, MinHeap};
pub use graph::{Bfs, Dfs, Graph, GraphError};

// None of the containers share state, so they must stay `Send + Sync`
// whenever their element types are.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<LinkedList<u64>>();
    assert_send_sync::<BinarySearchTree<u64>>();
    assert_send_sync::<MinHeap<u64>>();
    assert_send_sync::<Graph<u64>>();
};
