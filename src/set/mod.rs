//! Sorted, duplicate-free set stored in one contiguous buffer.
//!
//! `OrderedSet` is the adjacency representation of [`crate::graph::Graph`].
//! Elements live in ascending order in slots `[0, len)`, membership is a
//! binary search, and the buffer grows by doubling starting from one slot.

pub mod algebra;
pub mod cursor;

pub use cursor::{Cursor, CursorMut, Iter};

use std::fmt;

use crate::types::{GraphError, GraphResult};

/// A sorted set backed by a growable array.
///
/// The set tracks its own logical capacity so growth follows the curve
/// 0, 1, 2, 4, 8, ... regardless of how the allocator rounds requests.
/// Elements are never mutated in place: they double as sort keys.
pub struct OrderedSet<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> OrderedSet<T> {
    /// Create an empty set without allocating.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of slots allocated for elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every element. The buffer is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The elements in ascending order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at `position`, or `None` past the end.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.data.get(position)
    }

    /// Smallest element.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Largest element.
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.data)
    }

    /// Cursor at the smallest element (equal to [`end`](Self::end) when empty).
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Cursor one past the largest element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.data.len())
    }
}

impl<T: Ord + Clone> OrderedSet<T> {
    /// Create an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> GraphResult<Self> {
        let mut set = Self::new();
        set.reserve_exact(capacity)?;
        Ok(set)
    }

    /// Build a set from arbitrary items, dropping duplicates.
    pub fn try_from_iter<I>(items: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        for item in items {
            set.insert(item)?;
        }
        Ok(set)
    }

    /// Insert `item` at its sorted position.
    ///
    /// Returns `Ok(false)` if an equal element was already present. Inserting
    /// into a full set doubles the capacity first.
    pub fn insert(&mut self, item: T) -> GraphResult<bool> {
        let position = match self.find_index(&item) {
            Ok(_) => return Ok(false),
            Err(position) => position,
        };

        if self.data.len() == self.capacity {
            self.grow()?;
        }

        self.data.insert(position, item);
        debug_assert!(self.is_sorted());
        Ok(true)
    }

    /// Remove the element equal to `item`. Returns false if it was absent.
    ///
    /// Removal is keyed by value. Elements are unique, so the value names
    /// exactly one slot.
    pub fn erase(&mut self, item: &T) -> bool {
        self.remove_value(item).is_some()
    }

    /// True if an element equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.find_index(item).is_ok()
    }

    /// Cursor at the element equal to `item`, or the end cursor if absent.
    pub fn find(&self, item: &T) -> Cursor<'_, T> {
        let position = self.find_index(item).unwrap_or(self.data.len());
        Cursor::new(self, position)
    }

    /// Exclusive cursor at the element equal to `item`, or at the end.
    pub fn find_mut(&mut self, item: &T) -> CursorMut<'_, T> {
        let position = self.find_index(item).unwrap_or(self.data.len());
        CursorMut::new(self, position)
    }

    /// True if every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// `Ok(position)` of a match, or `Err(position)` where `item` belongs.
    pub(crate) fn find_index(&self, item: &T) -> Result<usize, usize> {
        self.data.binary_search(item)
    }

    pub(crate) fn remove_value(&mut self, item: &T) -> Option<T> {
        let position = self.find_index(item).ok()?;
        Some(self.data.remove(position))
    }

    /// Append an item known to sort after every element present.
    ///
    /// Used by the merge operations, which produce output in order. An item
    /// equal to the current last element is dropped.
    pub(crate) fn push_back(&mut self, item: T) -> GraphResult<()> {
        if let Some(last) = self.data.last() {
            if *last == item {
                return Ok(());
            }
            debug_assert!(*last < item, "push_back out of order");
        }

        if self.data.len() == self.capacity {
            self.grow()?;
        }

        self.data.push(item);
        Ok(())
    }

    fn grow(&mut self) -> GraphResult<()> {
        self.reserve_exact(next_capacity(self.capacity)?)
    }

    fn reserve_exact(&mut self, capacity: usize) -> GraphResult<()> {
        if capacity <= self.capacity {
            return Ok(());
        }

        self.data
            .try_reserve_exact(capacity - self.data.len())
            .map_err(|_| GraphError::AllocationFailure {
                requested: capacity,
            })?;

        log::trace!("set capacity {} -> {}", self.capacity, capacity);
        self.capacity = capacity;
        Ok(())
    }

    fn is_sorted(&self) -> bool {
        self.data.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedSet<T> {
    /// Deep copy of the live elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

/// Capacity after one doubling step from `current`.
fn next_capacity(current: usize) -> GraphResult<usize> {
    if current == 0 {
        return Ok(1);
    }
    current
        .checked_mul(2)
        .ok_or(GraphError::AllocationFailure {
            requested: usize::MAX,
        })
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_capacity_doubles() {
        assert_eq!(next_capacity(0), Ok(1));
        assert_eq!(next_capacity(1), Ok(2));
        assert_eq!(next_capacity(6), Ok(12));
        assert_eq!(next_capacity(usize::MAX / 2), Ok(usize::MAX - 1));
    }

    #[test]
    fn test_next_capacity_overflow_is_allocation_failure() {
        assert_eq!(
            next_capacity(usize::MAX / 2 + 1),
            Err(GraphError::AllocationFailure {
                requested: usize::MAX
            })
        );
    }
}
