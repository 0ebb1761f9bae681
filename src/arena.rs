//! Slab-backed node storage shared by any number of lists.
//!
//! The arena owns every node outright: its value, its circular links and its
//! owner tag. Lists never store nodes themselves; they only coordinate
//! [`NodeId`] handles into one arena. That split is what makes whole-list
//! splicing an ownership transfer instead of a copy: the values stay where
//! they are, only the owner tags and a constant number of links change.
//!
//! # Node lifecycle
//!
//! [`alloc`](Arena::alloc) creates a *free* node: allocated, holding its
//! value, owned by no list. Linking it into a list makes it owned; unlinking
//! it (e.g. [`List::remove_node`](crate::List::remove_node)) makes it free
//! again without giving up the slot, so it can be re-added to any list.
//! [`free`](Arena::free) reclaims the slot of a free node and hands the value
//! back; it refuses nodes that are still owned, because reclaiming those
//! would tear a hole in a live chain.
//!
//! Reclaiming a slot bumps its generation, so every handle issued for the
//! old occupant goes stale and is rejected from then on.
//!
//! # Same arena instance
//!
//! A list must always be used with the arena its nodes live in. Handles are
//! only checked against slot generations, not against arena identity, so
//! passing a different arena of the same element type may resolve a handle to
//! an unrelated node. This is the caller's responsibility to enforce, the
//! same discipline the `slab` crate asks for with its keys.
//!
//! # Example
//!
//! ```
//! use relink::{Arena, List};
//!
//! let mut arena: Arena<u32> = Arena::new();
//! let mut list = List::new();
//!
//! let free = arena.alloc(7);
//! assert!(arena.is_free(free));
//!
//! list.add_node_last(&mut arena, free).unwrap();
//! assert!(!arena.is_free(free));
//!
//! list.remove_node(&mut arena, free);
//! assert_eq!(arena.free(free), Some(7));
//! assert!(!arena.contains(free)); // handle is stale now
//! ```

use slab::Slab;

use crate::node::{ListId, Node, NodeId};

/// Storage for list nodes, indexed by generation-checked [`NodeId`] handles.
///
/// Built on a [`Slab`] of node slots with a parallel generation table. Slots
/// are reused after reclamation; generations make sure a recycled slot never
/// answers to a handle of its previous occupant.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Slab<Node<T>>,
    generations: Vec<u32>,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Slab::new(),
            generations: Vec::new(),
        }
    }

    /// Creates an empty arena with room for `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of live nodes, free and owned alike.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the arena holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Allocates a free node holding `value` and returns its handle.
    ///
    /// The node belongs to no list until it is linked into one.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let index = self.slots.insert(Node::new(value));
        if index >= self.generations.len() {
            self.generations.resize(index + 1, 0);
        }
        NodeId::new(index as u32, self.generations[index])
    }

    /// Reclaims a free node's slot and returns its value.
    ///
    /// Returns `None` if the handle is stale or the node is still contained
    /// in a list. Remove the node from its list first; value-returning list
    /// removals (`pop_front`, `remove_at`, ...) reclaim the slot themselves.
    pub fn free(&mut self, id: NodeId) -> Option<T> {
        match self.try_node(id) {
            Some(node) if !node.owner.is_some() => {
                self.generations[id.index()] = self.generations[id.index()].wrapping_add(1);
                self.slots.try_remove(id.index()).map(|node| node.value)
            }
            _ => None,
        }
    }

    /// Returns the node's value, or `None` for a stale handle.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.try_node(id).map(|node| &node.value)
    }

    /// Returns `true` if the handle refers to a live node.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.try_node(id).is_some()
    }

    /// Returns `true` if the node is live and not contained in any list.
    #[inline]
    pub fn is_free(&self, id: NodeId) -> bool {
        matches!(self.try_node(id), Some(node) if !node.owner.is_some())
    }

    /// Returns the identity of the list containing the node.
    ///
    /// `None` for a stale handle or a free node.
    #[inline]
    pub fn owner(&self, id: NodeId) -> Option<ListId> {
        match self.try_node(id) {
            Some(node) if node.owner.is_some() => Some(node.owner),
            _ => None,
        }
    }

    /// Returns the node's successor in the chain it is linked into.
    ///
    /// The chain is circular: the tail's successor is the head. Returns
    /// `None` for a stale handle or a free node.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        match self.try_node(id) {
            Some(node) if node.next.is_some() => Some(node.next),
            _ => None,
        }
    }

    /// Returns the node's predecessor in the chain it is linked into.
    ///
    /// The chain is circular: the head's predecessor is the tail. Returns
    /// `None` for a stale handle or a free node.
    #[inline]
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        match self.try_node(id) {
            Some(node) if node.prev.is_some() => Some(node.prev),
            _ => None,
        }
    }

    /// Looks up a node, rejecting stale handles.
    #[inline]
    pub(crate) fn try_node(&self, id: NodeId) -> Option<&Node<T>> {
        if id.is_none() || id.index() >= self.generations.len() {
            return None;
        }
        if self.generations[id.index()] != id.generation() {
            return None;
        }
        self.slots.get(id.index())
    }

    /// Mutable lookup, rejecting stale handles.
    #[inline]
    pub(crate) fn try_node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        if id.is_none() || id.index() >= self.generations.len() {
            return None;
        }
        if self.generations[id.index()] != id.generation() {
            return None;
        }
        self.slots.get_mut(id.index())
    }

    /// Looks up a node that list invariants guarantee to be live.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.try_node(id).expect("invalid node handle")
    }

    /// Mutable variant of [`node`](Self::node).
    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.try_node_mut(id).expect("invalid node handle")
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}
