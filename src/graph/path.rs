//! Result type of a shortest-path query.

use serde::Serialize;

/// Vertices of a path, stored from source to destination.
///
/// A path always holds at least one vertex: a path from a vertex to itself
/// is that vertex alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V> Path<V> {
    pub(crate) fn from_vertices(vertices: Vec<V>) -> Self {
        debug_assert!(!vertices.is_empty(), "a path has at least one vertex");
        Self { vertices }
    }

    /// Vertices from source to destination.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// First vertex of the path.
    pub fn source(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Last vertex of the path.
    pub fn destination(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: every path holds at least its source.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges walked, one less than the vertex count.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Consume the path, source first.
    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }

    /// Consume the path, destination first.
    pub fn destination_first(self) -> Vec<V> {
        let mut vertices = self.vertices;
        vertices.reverse();
        vertices
    }

    /// Iterate from source to destination.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }
}

impl<V: PartialEq> Path<V> {
    /// True if `vertex` lies on the path.
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
