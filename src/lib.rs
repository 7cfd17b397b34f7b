//! mazegraph: ordered-set adjacency graphs with BFS shortest paths.
//!
//! A maze is modelled as a directed graph whose vertices carry a small
//! integer identity. Each vertex owns a sorted set of out-neighbours, and
//! shortest paths by edge count are found with breadth-first search.

pub mod cli;
pub mod graph;
pub mod set;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{shortest_path, Graph, GraphBuilder, Path, VertexSet};
pub use set::{Cursor, CursorMut, Iter, OrderedSet};
pub use types::{GraphError, GraphResult, Vertex};
