//! Read-only reversed view of a list.

use core::iter::Rev;

use crate::arena::Arena;
use crate::error::Error;
use crate::iter::Iter;
use crate::list::List;
use crate::node::NodeId;

/// A reverse-ordered, read-only view of a [`List`].
///
/// The view stores nothing of its own: every accessor re-derives its answer
/// from the backing list's current head, tail and length, resolving index
/// `i` as `len - 1 - i`. Obtain one with [`List::reversed`] whenever needed;
/// it is free to construct, so there is nothing to keep in sync.
///
/// The view has no mutating methods at all. To actually reverse a list in
/// place, use [`List::invert`].
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'a, T> {
    list: &'a List<T>,
}

impl<'a, T> Reversed<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self { list }
    }

    /// Returns the number of nodes in the backing list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the backing list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Maps a view index to the backing index, bounds-checked.
    fn backing_index(&self, index: usize) -> Result<usize, Error> {
        let len = self.list.len();
        if index >= len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(len - 1 - index)
    }

    /// Returns the value at `index` of the reversed order.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    pub fn get<'b>(&self, arena: &'b Arena<T>, index: usize) -> Result<&'b T, Error> {
        let index = self.backing_index(index)?;
        self.list.get(arena, index)
    }

    /// Returns the node at `index` of the reversed order.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `index < len`.
    pub fn node_at(&self, arena: &Arena<T>, index: usize) -> Result<NodeId, Error> {
        let index = self.backing_index(index)?;
        self.list.node_at(arena, index)
    }

    /// Returns the view's first node, i.e. the backing list's last.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the backing list is empty.
    #[inline]
    pub fn first_node(&self, arena: &Arena<T>) -> Result<NodeId, Error> {
        self.list.last_node(arena)
    }

    /// Returns the view's last node, i.e. the backing list's first.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the backing list is empty.
    #[inline]
    pub fn last_node(&self) -> Result<NodeId, Error> {
        self.list.first_node()
    }

    /// Returns the position of `node` in the reversed order, or `None` if it
    /// is not contained in the backing list.
    pub fn index_of_node(&self, arena: &Arena<T>, node: NodeId) -> Option<usize> {
        let index = self.list.index_of_node(arena, node)?;
        Some(self.list.len() - 1 - index)
    }

    /// Returns `true` if `node` is contained in the backing list.
    #[inline]
    pub fn contains_node(&self, arena: &Arena<T>, node: NodeId) -> bool {
        self.list.contains_node(arena, node)
    }

    /// Returns the view's first value, or `None` if empty.
    #[inline]
    pub fn peek_front<'b>(&self, arena: &'b Arena<T>) -> Option<&'b T> {
        self.list.peek_back(arena)
    }

    /// Returns the view's last value, or `None` if empty.
    #[inline]
    pub fn peek_back<'b>(&self, arena: &'b Arena<T>) -> Option<&'b T> {
        self.list.peek_front(arena)
    }

    /// Iterates the values in reversed order.
    #[inline]
    pub fn iter<'b>(&self, arena: &'b Arena<T>) -> Rev<Iter<'b, T>> {
        self.list.iter(arena).rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_the_backing_list() {
        let mut arena = Arena::new();
        let list = List::from_values(&mut arena, [1u64, 2, 3]);

        let view = list.reversed();
        assert_eq!(view.len(), 3);
        for index in 0..3 {
            assert_eq!(view.get(&arena, index), list.get(&arena, 2 - index));
            assert_eq!(view.node_at(&arena, index), list.node_at(&arena, 2 - index));
        }
        assert_eq!(
            view.get(&arena, 3),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn reflects_later_mutation() {
        let mut arena = Arena::new();
        let mut list = List::from_values(&mut arena, [1u64, 2, 3]);

        assert_eq!(list.reversed().get(&arena, 0), Ok(&3));

        list.push_back(&mut arena, 4);
        assert_eq!(list.reversed().get(&arena, 0), Ok(&4));
        assert_eq!(list.reversed().len(), 4);
    }

    #[test]
    fn end_nodes_swap_roles() {
        let mut arena = Arena::new();
        let list = List::from_values(&mut arena, [1u64, 2, 3]);

        let view = list.reversed();
        assert_eq!(view.first_node(&arena), list.last_node(&arena));
        assert_eq!(view.last_node(), list.first_node());
        assert_eq!(view.peek_front(&arena), Some(&3));
        assert_eq!(view.peek_back(&arena), Some(&1));
    }

    #[test]
    fn node_indices_are_mirrored() {
        let mut arena = Arena::new();
        let list = List::from_values(&mut arena, [1u64, 2, 3]);

        let node = list.node_at(&arena, 0).unwrap();
        let view = list.reversed();
        assert_eq!(view.index_of_node(&arena, node), Some(2));
        assert!(view.contains_node(&arena, node));

        let foreign = arena.alloc(9);
        assert_eq!(view.index_of_node(&arena, foreign), None);
    }

    #[test]
    fn iterates_backwards() {
        let mut arena = Arena::new();
        let list = List::from_values(&mut arena, [1u64, 2, 3]);

        let values: Vec<_> = list.reversed().iter(&arena).copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn empty_view() {
        let arena: Arena<u64> = Arena::new();
        let list: List<u64> = List::new();

        let view = list.reversed();
        assert!(view.is_empty());
        assert_eq!(view.last_node(), Err(Error::Empty));
        assert_eq!(view.first_node(&arena), Err(Error::Empty));
        assert_eq!(view.peek_front(&arena), None);
    }
}
