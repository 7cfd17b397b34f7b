//! Core graph structure: one ordered out-neighbour set per vertex.

use crate::set::OrderedSet;
use crate::types::{GraphError, GraphResult, Vertex};

use super::traversal;
use super::Path;

/// Adjacency set of a single vertex.
pub type VertexSet<V> = OrderedSet<V>;

/// A directed graph with a fixed number of vertices.
///
/// `adjacency[i]` holds every vertex reachable from vertex `i` by one edge.
/// The vertex count is set at construction and never changes. Edges are only
/// ever added, apart from [`clear`](Self::clear) which drops all of them.
/// Cloning deep-copies every adjacency set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V> {
    adjacency: Vec<VertexSet<V>>,
}

impl<V: Vertex> Graph<V> {
    /// Create a graph of `size` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "graph must have at least one vertex");
        Self {
            adjacency: (0..size).map(|_| VertexSet::new()).collect(),
        }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(VertexSet::len).sum()
    }

    /// Out-degree of `vertex`.
    pub fn degree(&self, vertex: &V) -> GraphResult<usize> {
        Ok(self.neighbors(vertex)?.len())
    }

    /// Add the edge `from -> to`. Returns false if it already existed.
    ///
    /// Both endpoints must be vertices of this graph.
    pub fn add(&mut self, from: &V, to: V) -> GraphResult<bool> {
        let slot = self.check_index(from)?;
        self.check_index(&to)?;
        self.adjacency[slot].insert(to)
    }

    /// Add an edge from `from` to every member of `targets`.
    ///
    /// Every target is validated before any edge is inserted. Returns the
    /// number of edges that were new.
    pub fn add_all(&mut self, from: &V, targets: &VertexSet<V>) -> GraphResult<usize> {
        let slot = self.check_index(from)?;
        for to in targets {
            self.check_index(to)?;
        }

        let mut added = 0;
        for to in targets {
            if self.adjacency[slot].insert(to.clone())? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// True if the edge `from -> to` exists. O(log degree).
    pub fn is_edge(&self, from: &V, to: &V) -> GraphResult<bool> {
        self.check_index(to)?;
        Ok(self.neighbors(from)?.contains(to))
    }

    /// Copy of the out-neighbour set of `from`.
    pub fn find_edges(&self, from: &V) -> GraphResult<VertexSet<V>> {
        Ok(self.neighbors(from)?.clone())
    }

    /// Borrowed view of the out-neighbour set of `from`.
    ///
    /// The view borrows the graph, so it cannot outlive the next mutation.
    pub fn neighbors(&self, from: &V) -> GraphResult<&VertexSet<V>> {
        let slot = self.check_index(from)?;
        Ok(&self.adjacency[slot])
    }

    /// Remove every edge. The vertex count is unchanged.
    pub fn clear(&mut self) {
        log::debug!("clearing {} edges", self.edge_count());
        for set in &mut self.adjacency {
            set.clear();
        }
    }

    /// Shortest path by edge count from `start` to `end`, source first.
    ///
    /// Fails with [`GraphError::NoPath`] if `end` is unreachable.
    pub fn find_path(&self, start: &V, end: &V) -> GraphResult<Path<V>> {
        traversal::shortest_path(self, start, end)
    }

    /// Shortest path from the first vertex to the last one.
    ///
    /// Fails with [`GraphError::InvalidIndex`] if the vertex type cannot name
    /// the last vertex.
    pub fn find_default_path(&self) -> GraphResult<Path<V>> {
        let start = self.vertex_at(0)?;
        let end = self.vertex_at(self.size() - 1)?;
        self.find_path(&start, &end)
    }

    fn vertex_at(&self, index: usize) -> GraphResult<V> {
        V::from_index(index).ok_or(GraphError::InvalidIndex {
            index,
            size: self.size(),
        })
    }

    /// Adjacency slot of `vertex`, or [`GraphError::InvalidIndex`].
    pub(crate) fn check_index(&self, vertex: &V) -> GraphResult<usize> {
        let index = vertex.index();
        if index < self.adjacency.len() {
            Ok(index)
        } else {
            Err(GraphError::InvalidIndex {
                index,
                size: self.adjacency.len(),
            })
        }
    }
}
