//! Doubly-linked lists that expose their nodes.
//!
//! This crate provides a sequence container whose link nodes are first-class
//! handles: code that holds a [`NodeId`] can remove that exact node, insert
//! before it, or splice around it in O(1), without the O(n) search a plain
//! list or vector forces. Graph algorithms that live off constant-time local
//! mutation (elimination orderings, adjacency maintenance, sliding windows
//! over tours) are the intended consumers.
//!
//! # Design
//!
//! Storage is separated from structure:
//!
//! ```text
//! Arena  - owns node values, links and owner tags; hands out stable,
//!          generation-checked NodeId handles
//! List   - coordinates handles into one arena: head, length, version
//! ```
//!
//! Benefits of the split:
//! - **Stable handles**: removing a node invalidates nothing else; a
//!   reclaimed slot's old handles go stale instead of aliasing the new
//!   occupant.
//! - **O(1) local edits**: any held handle supports remove/insert-before
//!   without searching.
//! - **Whole-list splicing as ownership transfer**: [`List::move_from`] /
//!   [`List::append`] / [`List::prepend`] retag the transplanted nodes and
//!   join two rings with a constant number of link updates; values never
//!   move and foreign handles stay valid.
//! - **One arena, many lists**: lists sharing an arena can pass nodes around
//!   freely; each node is owned by at most one list at a time, enforced
//!   before any link is touched.
//!
//! Internally each list's nodes form a circular chain (the tail's `next` is
//! the head); the public API presents a bounded linear sequence. The ring
//! shape removes end special-cases from splicing and gives
//! [`List::circular_cursor`] its tour-walking behavior.
//!
//! # Quick start
//!
//! ```
//! use relink::{Arena, List};
//!
//! let mut arena: Arena<u64> = Arena::new();
//! let mut list = List::new();
//!
//! // Insertion returns a stable handle for O(1) access later.
//! let node = list.push_back(&mut arena, 42);
//! list.push_back(&mut arena, 7);
//!
//! // O(1) removal from anywhere; the node can be re-added afterwards.
//! assert!(list.remove_node(&mut arena, node));
//! assert_eq!(list.iter(&arena).copied().collect::<Vec<_>>(), vec![7]);
//! ```
//!
//! # Moving nodes between lists
//!
//! ```
//! use relink::{Arena, List};
//!
//! let mut arena: Arena<&str> = Arena::new();
//! let mut active = List::new();
//! let mut parked = List::new();
//!
//! let job = active.push_back(&mut arena, "job-17");
//!
//! // Unlink from one list, relink into another; the handle stays valid.
//! active.remove_node(&mut arena, job);
//! parked.add_node_first(&mut arena, job).unwrap();
//!
//! assert!(active.is_empty());
//! assert!(parked.contains_node(&arena, job));
//! ```
//!
//! # Fail-fast cursors
//!
//! [`Cursor`]s are detached from the list: they snapshot its structural
//! version and re-validate it on every operation, reporting
//! [`Error::ConcurrentModification`] if the list changed through any other
//! path. The borrowing iterators ([`List::iter`], [`List::nodes`]) don't
//! need this; they hold a borrow, so the compiler excludes mutation while
//! they live.
//!
//! # Critical invariant: same arena instance
//!
//! A list must always be used with the arena its nodes live in. Handles are
//! checked against slot generations, not arena identity, so a handle applied
//! to the wrong arena of the same element type can resolve to an unrelated
//! node. This is the caller's responsibility, the same discipline slab-style
//! storage always asks for.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Arena`] | node storage, issues [`NodeId`] handles |
//! | [`List`] | sequence/deque/queue/stack surface + node-level operations |
//! | [`OwnedList`] | arena and list bundled, for the single-list case |
//! | [`Cursor`] | bidirectional fail-fast iterator with insert/set/remove |
//! | [`CircularCursor`] | fail-fast ring walker, one full lap |
//! | [`Reversed`] | read-only live reversed view |

#![warn(missing_docs)]

pub mod arena;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod owned;
pub mod reversed;

pub use arena::Arena;
pub use cursor::{CircularCursor, Cursor};
pub use error::Error;
pub use iter::{Iter, Nodes};
pub use list::List;
pub use node::{ListId, NodeId};
pub use owned::{IntoIter, OwnedList};
pub use reversed::Reversed;
