//! Graph error type.

use core::fmt;

/// The error type for graph lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// A traversal was started at a vertex that was never added to the graph.
    VertexNotFound,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound => f.write_str("start vertex is not present in the graph"),
        }
    }
}

impl std::error::Error for GraphError {}
