//! The vertex contract the graph relies on.

/// A graph vertex: a totally ordered key with a small-integer identity.
///
/// `index` must lie in `[0, size)` for the graph the vertex is used with, and
/// two vertices with the same index must compare equal. The graph never looks
/// at anything beyond the index and the ordering.
pub trait Vertex: Ord + Clone {
    /// Position of this vertex in the graph's adjacency list.
    fn index(&self) -> usize;

    /// Build the vertex that owns `index`, or `None` if this vertex type
    /// cannot represent it.
    fn from_index(index: usize) -> Option<Self>;
}

macro_rules! impl_vertex_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Vertex for $ty {
                #[inline]
                fn index(&self) -> usize {
                    *self as usize
                }

                #[inline]
                fn from_index(index: usize) -> Option<Self> {
                    <$ty>::try_from(index).ok()
                }
            }
        )*
    };
}

impl_vertex_for_unsigned!(usize, u32, u16);
