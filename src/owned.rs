//! A list that owns its storage.
//!
//! [`OwnedList`] bundles one [`Arena`] with one [`List`] for the common case
//! of a single list that shares nodes with nobody, trading the ability to
//! move nodes between lists for an API without arena parameters.
//!
//! # When to use which
//!
//! Use `OwnedList` when:
//! - one list is all there is, and
//! - nodes never need to migrate to another list.
//!
//! Use [`List`] with an explicit shared [`Arena`] when:
//! - several lists pass nodes around (`remove_node` + `add_node_*`), or
//! - whole lists are spliced into each other (`move_from`/`append`/
//!   `prepend`), or
//! - one arena should back many small lists.
//!
//! # Example
//!
//! ```
//! use relink::OwnedList;
//!
//! let mut queue: OwnedList<u64> = OwnedList::new();
//! let node = queue.push_back(1);
//! queue.push_back(2);
//!
//! assert_eq!(queue.value(node), Some(&1));
//! assert_eq!(queue.pop_front(), Some(1));
//! assert_eq!(queue.pop_front(), Some(2));
//! assert_eq!(queue.pop_front(), None);
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::arena::Arena;
use crate::error::Error;
use crate::iter::{Iter, Nodes};
use crate::list::List;
use crate::node::NodeId;
use crate::reversed::Reversed;

/// A doubly-linked list bundled with its own node arena.
pub struct OwnedList<T> {
    arena: Arena<T>,
    list: List<T>,
}

impl<T> OwnedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            list: List::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            list: List::new(),
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Borrows the underlying list and arena, e.g. to drive a
    /// [`Cursor`](crate::Cursor).
    #[inline]
    pub fn parts(&self) -> (&List<T>, &Arena<T>) {
        (&self.list, &self.arena)
    }

    /// Mutable variant of [`parts`](OwnedList::parts).
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut List<T>, &mut Arena<T>) {
        (&mut self.list, &mut self.arena)
    }

    /// Appends `value`, returning the new node's handle. O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) -> NodeId {
        self.list.push_back(&mut self.arena, value)
    }

    /// Prepends `value`, returning the new node's handle. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) -> NodeId {
        self.list.push_front(&mut self.arena, value)
    }

    /// Removes and returns the first value, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front(&mut self.arena)
    }

    /// Removes and returns the last value, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back(&mut self.arena)
    }

    /// Returns the first value, or `None` if empty.
    #[inline]
    pub fn peek_front(&self) -> Option<&T> {
        self.list.peek_front(&self.arena)
    }

    /// Returns the last value, or `None` if empty.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.list.peek_back(&self.arena)
    }

    /// Inserts `value` at `index` in `[0, len]`, returning the new node.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] for `index > len`.
    #[inline]
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<NodeId, Error> {
        self.list.insert_at(&mut self.arena, index, value)
    }

    /// Inserts `value` directly before `successor`, returning the new node.
    ///
    /// # Errors
    ///
    /// [`Error::NotOwned`] / [`Error::StaleNode`] if `successor` is not a
    /// live node of this list.
    #[inline]
    pub fn insert_before(&mut self, successor: NodeId, value: T) -> Result<NodeId, Error> {
        self.list.insert_before(&mut self.arena, successor, value)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.list.get(&self.arena, index)
    }

    /// Removes the node at `index` and returns its value.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        self.list.remove_at(&mut self.arena, index)
    }

    /// Unlinks `node` in O(1); `false` if it is not in this list.
    ///
    /// The node stays allocated; re-add it with
    /// [`add_node_at`](OwnedList::add_node_at) or reclaim it with
    /// [`take_node`](OwnedList::take_node).
    #[inline]
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        self.list.remove_node(&mut self.arena, node)
    }

    /// Reclaims an unlinked node and returns its value.
    ///
    /// `None` if the handle is stale or the node is still linked.
    #[inline]
    pub fn take_node(&mut self, node: NodeId) -> Option<T> {
        self.arena.free(node)
    }

    /// Links a previously unlinked node at `index` in `[0, len]`.
    ///
    /// # Errors
    ///
    /// See [`List::add_node_at`].
    #[inline]
    pub fn add_node_at(&mut self, index: usize, node: NodeId) -> Result<(), Error> {
        self.list.add_node_at(&mut self.arena, index, node)
    }

    /// Returns `true` if `node` is contained in this list. O(1).
    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.list.contains_node(&self.arena, node)
    }

    /// Returns the node at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    #[inline]
    pub fn node_at(&self, index: usize) -> Result<NodeId, Error> {
        self.list.node_at(&self.arena, index)
    }

    /// Returns the position of `node`, or `None` if it is not in this list.
    #[inline]
    pub fn index_of_node(&self, node: NodeId) -> Option<usize> {
        self.list.index_of_node(&self.arena, node)
    }

    /// Returns the first node holding a value equal to `value`.
    #[inline]
    pub fn node_of(&self, value: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        self.list.node_of(&self.arena, value)
    }

    /// Returns a node's value, or `None` for a stale handle.
    #[inline]
    pub fn value(&self, node: NodeId) -> Option<&T> {
        self.arena.value(node)
    }

    /// Reverses the list in place; handles stay valid.
    #[inline]
    pub fn invert(&mut self) {
        self.list.invert(&mut self.arena)
    }

    /// Removes all nodes and reclaims their slots.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear(&mut self.arena)
    }

    /// Returns a double-ended iterator over the values, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter(&self.arena)
    }

    /// Returns a double-ended iterator over the node handles.
    #[inline]
    pub fn nodes(&self) -> Nodes<'_, T> {
        self.list.nodes(&self.arena)
    }

    /// Returns a read-only reversed view; pair it with the arena from
    /// [`parts`](OwnedList::parts) for indexed access.
    #[inline]
    pub fn reversed(&self) -> Reversed<'_, T> {
        self.list.reversed()
    }
}

impl<T> Default for OwnedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for OwnedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for OwnedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OwnedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OwnedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

/// Draining iterator returned by [`OwnedList::into_iter`].
pub struct IntoIter<T> {
    inner: OwnedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
