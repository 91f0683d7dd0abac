//! A dynamic adjacency-list graph keyed by caller-supplied vertex ids.
//!
//! Vertex ids are interned into dense indices on first sight. Adjacency is a
//! `Vec<Vec<usize>>` indexed by those ids, so traversals work on contiguous
//! integer lists and only translate back to `V` when yielding.
//!
//! Neighbor lists keep insertion order, which makes BFS and DFS output
//! deterministic. Parallel edges are kept as separate entries.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) expected | One hash lookup |
//! | `add_edge` | \(O(1)\) expected | Interns both ends, appends to lists |
//! | `has_edge` | \(O(\text{out-degree})\) | Linear scan of the neighbor list |
//! | `bfs` / `dfs` | \(O(n + m)\) | Restricted to the reachable part |

use core::fmt;
use core::hash::Hash;
use core::iter::FusedIterator;
use std::collections::HashMap;

use super::error::GraphError;
use super::traversal::{Bfs, Dfs};

/// An adjacency-list graph, directed or undirected.
///
/// Directionality is fixed at construction. In an undirected graph every
/// edge `(u, v)` is recorded in both `u`'s and `v`'s neighbor lists.
#[derive(Clone)]
pub struct Graph<V> {
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    adjacency: Vec<Vec<usize>>,
    directed: bool,
    edge_count: usize,
}

/// Iterator over the neighbors of one vertex, in insertion order.
pub struct Neighbors<'a, V> {
    vertices: &'a [V],
    targets: core::slice::Iter<'a, usize>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let &target = self.targets.next()?;
        self.vertices.get(target)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}
impl<V> FusedIterator for Neighbors<'_, V> {}

impl<V> Graph<V> {
    /// Creates an empty undirected graph.
    pub fn new() -> Self {
        Self::with_direction(false)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    /// Creates an empty graph with the given directionality.
    pub fn with_direction(directed: bool) -> Self {
        Self {
            index: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            directed,
            edge_count: 0,
        }
    }

    /// Returns `true` if edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of `add_edge` calls recorded; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over the vertices in the order they were first added.
    pub fn vertices(&self) -> core::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    pub(crate) fn vertex(&self, idx: usize) -> Option<&V> {
        self.vertices.get(idx)
    }

    pub(crate) fn neighbor_indices(&self, idx: usize) -> &[usize] {
        self.adjacency.get(idx).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<V: Eq + Hash> Graph<V> {
    /// Returns `true` if `v` has been added, directly or through an edge.
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Returns the neighbors of `v` in insertion order, or `None` if `v` is unknown.
    pub fn neighbors(&self, v: &V) -> Option<Neighbors<'_, V>> {
        let idx = *self.index.get(v)?;
        Some(Neighbors {
            vertices: &self.vertices,
            targets: self.neighbor_indices(idx).iter(),
        })
    }

    /// Returns `true` if `v` appears in `u`'s neighbor list.
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        match (self.index.get(u), self.index.get(v)) {
            (Some(&u), Some(&v)) => self.neighbor_indices(u).contains(&v),
            _ => false,
        }
    }

    /// Returns a lazy breadth-first iterator starting at `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
    pub fn bfs_iter(&self, start: &V) -> Result<Bfs<'_, V>, GraphError> {
        let idx = self.index_of(start)?;
        Ok(Bfs::new(self, idx))
    }

    /// Returns a lazy depth-first iterator starting at `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
    pub fn dfs_iter(&self, start: &V) -> Result<Dfs<'_, V>, GraphError> {
        let idx = self.index_of(start)?;
        Ok(Dfs::new(self, idx))
    }

    fn index_of(&self, v: &V) -> Result<usize, GraphError> {
        self.index.get(v).copied().ok_or(GraphError::VertexNotFound)
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Adds `v` with no neighbors. Does nothing if `v` already exists.
    ///
    /// Returns `true` if the vertex was new.
    pub fn add_vertex(&mut self, v: V) -> bool {
        let before = self.vertices.len();
        self.intern(v);
        self.vertices.len() > before
    }

    /// Adds the edge `(u, v)`, creating either vertex if missing.
    ///
    /// In an undirected graph `u` is also appended to `v`'s neighbor list,
    /// except for a self-loop, which is recorded once.
    pub fn add_edge(&mut self, u: V, v: V) {
        let from = self.intern(u);
        let to = self.intern(v);

        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(to);
        }
        if !self.directed && from != to {
            if let Some(list) = self.adjacency.get_mut(to) {
                list.push(from);
            }
        }
        self.edge_count += 1;
        trace_event!(
            from,
            to,
            directed = self.directed,
            edges = self.edge_count,
            "graph.add_edge"
        );
    }

    /// Returns the vertices reachable from `start` in breadth-first order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
    pub fn bfs(&self, start: &V) -> Result<Vec<V>, GraphError> {
        let order: Vec<V> = self.bfs_iter(start)?.cloned().collect();
        trace_event!(visited = order.len(), "graph.bfs");
        Ok(order)
    }

    /// Returns the vertices reachable from `start` in depth-first preorder.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
    pub fn dfs(&self, start: &V) -> Result<Vec<V>, GraphError> {
        let order: Vec<V> = self.dfs_iter(start)?.cloned().collect();
        trace_event!(visited = order.len(), "graph.dfs");
        Ok(order)
    }

    fn intern(&mut self, v: V) -> usize {
        if let Some(&idx) = self.index.get(&v) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(v.clone(), idx);
        self.vertices.push(v);
        self.adjacency.push(Vec::new());
        trace_event!(vertex = idx, "graph.add_vertex");
        idx
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lists = self.adjacency.iter().map(|targets| {
            targets
                .iter()
                .filter_map(|&t| self.vertices.get(t))
                .collect::<Vec<_>>()
        });
        f.debug_map().entries(self.vertices.iter().zip(lists)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_and_edge() {
        let mut graph = Graph::new();
        assert!(graph.add_vertex("A"));
        assert!(!graph.add_vertex("A"));
        graph.add_edge("A", "B");

        assert!(graph.contains_vertex(&"A"));
        assert!(graph.contains_vertex(&"B"));
        assert!(graph.has_edge(&"A", &"B"));
        assert!(graph.has_edge(&"B", &"A"));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");

        assert!(graph.is_directed());
        assert!(graph.has_edge(&"A", &"B"));
        assert!(!graph.has_edge(&"B", &"A"));
        assert_eq!(graph.neighbors(&"B").map(Iterator::count), Some(0));
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge(1, 3);
        graph.add_edge(1, 2);
        graph.add_edge(1, 4);
        graph.add_edge(1, 2);

        let neighbors: Vec<_> = graph.neighbors(&1).into_iter().flatten().copied().collect();
        assert_eq!(neighbors, vec![3, 2, 4, 2]);
        assert_eq!(graph.neighbors(&1).map(|n| n.len()), Some(4));
        assert!(graph.neighbors(&99).is_none());
    }

    #[test]
    fn test_self_loop_recorded_once() {
        let mut graph = Graph::new();
        graph.add_edge('x', 'x');
        assert_eq!(graph.neighbors(&'x').map(Iterator::count), Some(1));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_vertices_in_insertion_order() {
        let mut graph = Graph::with_direction(false);
        graph.add_vertex("z");
        graph.add_edge("a", "m");
        assert_eq!(graph.vertices().copied().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(format!("{graph:?}"), r#"{"z": [], "a": ["m"], "m": ["a"]}"#);
    }

    #[test]
    fn test_unknown_start_is_rejected() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        assert_eq!(graph.bfs(&"Q"), Err(GraphError::VertexNotFound));
        assert_eq!(graph.dfs(&"Q"), Err(GraphError::VertexNotFound));
        assert!(graph.bfs_iter(&"Q").is_err());

        let empty: Graph<&str> = Graph::default();
        assert_eq!(empty.bfs(&"A"), Err(GraphError::VertexNotFound));
    }

    #[test]
    fn test_isolated_vertex_traverses_to_itself() {
        let mut graph = Graph::new();
        graph.add_vertex("solo");
        assert_eq!(graph.bfs(&"solo"), Ok(vec!["solo"]));
        assert_eq!(graph.dfs(&"solo"), Ok(vec!["solo"]));
    }
}
