//! Error types for the mazegraph library.

use thiserror::Error;

/// All errors that can occur in the mazegraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Growing a set's buffer could not allocate.
    #[error("Unable to allocate a buffer of {requested} elements")]
    AllocationFailure { requested: usize },

    /// The destination is not reachable from the source.
    #[error("No path from vertex {from} to vertex {to}")]
    NoPath { from: usize, to: usize },

    /// Vertex index outside `[0, size)`.
    #[error("Vertex index {index} out of range for graph of {size} vertices")]
    InvalidIndex { index: usize, size: usize },

    /// Dereferencing a cursor that sits at the end position.
    #[error("Attempt to access an empty cursor at position {position} (len {len})")]
    EmptyIteratorAccess { position: usize, len: usize },

    /// Malformed edge or element list given on the command line.
    #[error("Invalid edge list: {0}")]
    InvalidEdgeList(String),
}

/// Convenience result type for mazegraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
