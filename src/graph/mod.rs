//! Directed graph over ordered adjacency sets, with BFS path search.

pub mod adjacency_graph;
pub mod builder;
pub mod path;
pub mod traversal;

pub use adjacency_graph::{Graph, VertexSet};
pub use builder::GraphBuilder;
pub use path::Path;
pub use traversal::shortest_path;
