//! Iterator-based graph traversals (BFS, DFS) for [`Graph`].
//!
//! Both iterators work on the graph's dense vertex indices with a
//! `Vec<bool>` visited table and only translate to `&V` when yielding. They
//! borrow the graph immutably, so the graph cannot change mid-traversal.

use std::collections::VecDeque;

use super::adjacency::Graph;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertices in order of increasing edge distance from the start.
/// A vertex is marked visited when it is enqueued, so it is queued at most
/// once even when several frontier vertices point at it.
pub struct Bfs<'a, V> {
    graph: &'a Graph<V>,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a, V> Bfs<'a, V> {
    pub(crate) fn new(graph: &'a Graph<V>, start: usize) -> Self {
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();

        if let Some(seen) = visited.get_mut(start) {
            *seen = true;
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, V> Iterator for Bfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for &v in self.graph.neighbor_indices(u) {
            if let Some(seen) = self.visited.get_mut(v) {
                if !*seen {
                    *seen = true;
                    self.queue.push_back(v);
                }
            }
        }

        self.graph.vertex(u)
    }
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertices in the same preorder as the recursive formulation: the
/// start, then the whole subtree under its first unvisited neighbor, then
/// the next. Neighbors are pushed in reverse so the first one is popped
/// first, and a vertex is marked visited when it is popped.
pub struct Dfs<'a, V> {
    graph: &'a Graph<V>,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a, V> Dfs<'a, V> {
    pub(crate) fn new(graph: &'a Graph<V>, start: usize) -> Self {
        let visited = vec![false; graph.vertex_count()];
        let stack = if start < visited.len() {
            vec![start]
        } else {
            Vec::new()
        };

        Self {
            graph,
            visited,
            stack,
        }
    }
}

impl<'a, V> Iterator for Dfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(u) = self.stack.pop() {
            match self.visited.get_mut(u) {
                Some(seen) if !*seen => *seen = true,
                _ => continue,
            }

            let visited = &self.visited;
            self.stack.extend(
                self.graph
                    .neighbor_indices(u)
                    .iter()
                    .rev()
                    .filter(|&&v| !visited.get(v).copied().unwrap_or(true)),
            );

            return self.graph.vertex(u);
        }
        None
    }
}
