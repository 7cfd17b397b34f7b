//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Vertex};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Edges are validated when [`build`](Self::build) runs, so a bad index
/// surfaces once as [`crate::GraphError::InvalidIndex`].
pub struct GraphBuilder<V> {
    size: usize,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Start a graph of `size` vertices.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            edges: Vec::new(),
        }
    }

    /// Add a directed edge.
    pub fn edge(&mut self, from: V, to: V) -> &mut Self {
        self.edges.push((from, to));
        self
    }

    /// Add an edge in each direction, as for an open passage in a maze.
    pub fn passage(&mut self, a: V, b: V) -> &mut Self {
        self.edges.push((a.clone(), b.clone()));
        self.edges.push((b, a));
        self
    }

    /// Add edges between consecutive vertices: `v0 -> v1 -> ... -> vn`.
    pub fn chain(&mut self, vertices: &[V]) -> &mut Self {
        for pair in vertices.windows(2) {
            self.edges.push((pair[0].clone(), pair[1].clone()));
        }
        self
    }

    /// Add many directed edges.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final Graph.
    ///
    /// # Panics
    ///
    /// Panics if the builder was created with a size of zero.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::new(self.size);
        for (from, to) in self.edges {
            graph.add(&from, to)?;
        }
        Ok(graph)
    }
}
