//! Borrowed iteration over an [`OrderedSet`].
//!
//! Every type here holds a borrow of its set. Insert, erase, clear and growth
//! all need `&mut OrderedSet`, so a cursor can never observe a set that
//! changed underneath it. `CursorMut` is the one exception that may mutate,
//! and it does so through its own exclusive borrow.

use std::fmt;
use std::iter::FusedIterator;

use crate::types::{GraphError, GraphResult};

use super::OrderedSet;

/// Ascending read-only iterator over a set.
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner.as_slice()).finish()
    }
}

/// Read-only bidirectional position within a set.
///
/// Positions run from `0` to `len`, where `len` is the end position. Moving
/// saturates at both ends.
pub struct Cursor<'a, T> {
    set: &'a OrderedSet<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(set: &'a OrderedSet<T>, position: usize) -> Self {
        Self { set, position }
    }

    /// Slot index the cursor points at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True at the end position.
    pub fn is_end(&self) -> bool {
        self.position >= self.set.len()
    }

    /// Element under the cursor, `None` at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.set.get(self.position)
    }

    /// Element under the cursor.
    ///
    /// Fails with [`GraphError::EmptyIteratorAccess`] at the end position.
    pub fn get(&self) -> GraphResult<&'a T> {
        self.current().ok_or(GraphError::EmptyIteratorAccess {
            position: self.position,
            len: self.set.len(),
        })
    }

    /// Advance one slot; stays put at the end.
    pub fn move_next(&mut self) {
        if self.position < self.set.len() {
            self.position += 1;
        }
    }

    /// Step back one slot; stays put at the start.
    pub fn move_prev(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Copy of this cursor advanced one slot.
    pub fn next_cursor(&self) -> Self {
        let mut cursor = *self;
        cursor.move_next();
        cursor
    }

    /// Copy of this cursor moved back one slot.
    pub fn prev_cursor(&self) -> Self {
        let mut cursor = *self;
        cursor.move_prev();
        cursor
    }

    /// Iterate from the cursor to the end of the set.
    pub fn remaining(&self) -> Iter<'a, T> {
        let start = self.position.min(self.set.len());
        Iter::new(&self.set.as_slice()[start..])
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    /// Cursors are equal when they sit at the same slot of the same set.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.set, other.set) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.set.len())
            .field("current", &self.current())
            .finish()
    }
}

/// Exclusive position within a set that can erase the element under it.
pub struct CursorMut<'a, T> {
    set: &'a mut OrderedSet<T>,
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(set: &'a mut OrderedSet<T>, position: usize) -> Self {
        Self { set, position }
    }

    /// Slot index the cursor points at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True at the end position.
    pub fn is_end(&self) -> bool {
        self.position >= self.set.len()
    }

    /// Element under the cursor, `None` at the end.
    pub fn current(&self) -> Option<&T> {
        self.set.get(self.position)
    }

    /// Element under the cursor, or [`GraphError::EmptyIteratorAccess`].
    pub fn get(&self) -> GraphResult<&T> {
        self.current().ok_or(GraphError::EmptyIteratorAccess {
            position: self.position,
            len: self.set.len(),
        })
    }

    /// Advance one slot; stays put at the end.
    pub fn move_next(&mut self) {
        if self.position < self.set.len() {
            self.position += 1;
        }
    }

    /// Step back one slot; stays put at the start.
    pub fn move_prev(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.set, self.position)
    }
}

impl<T: Ord + Clone> CursorMut<'_, T> {
    /// Erase the element under the cursor and return it.
    ///
    /// The element is located again by value before removal. Afterwards the
    /// cursor points at the element that followed it. Returns `None` at the
    /// end position.
    pub fn remove_current(&mut self) -> Option<T> {
        let item = self.current()?.clone();
        self.set.remove_value(&item)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.set.len())
            .field("current", &self.current())
            .finish()
    }
}
