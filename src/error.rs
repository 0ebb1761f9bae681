//! Error types for list, arena and cursor operations.

use core::fmt;

/// Errors reported by list and cursor operations.
///
/// Every variant is a caller error: the operation rejects its input before
/// any structural change is made, so the list is left exactly as it was.
/// None of these are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The node is already contained in a list and cannot be linked again.
    AlreadyOwned {
        /// `true` if the owner is the very list the node was being added to.
        same_list: bool,
    },
    /// The referenced node is not contained in this list.
    NotOwned,
    /// The handle's slot has been reclaimed; the node no longer exists.
    StaleNode,
    /// The list is empty.
    Empty,
    /// Index outside the valid range.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// The list was structurally modified behind an active cursor's back.
    ConcurrentModification,
    /// `set` or `remove` called without a node returned since the last
    /// cursor move or insertion.
    InvalidCursorState,
    /// The cursor has no further node in the requested direction.
    Exhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyOwned { same_list: true } => {
                write!(f, "node already contained in this list")
            }
            Error::AlreadyOwned { same_list: false } => {
                write!(f, "node already contained in another list")
            }
            Error::NotOwned => write!(f, "node not contained in this list"),
            Error::StaleNode => write!(f, "stale node handle"),
            Error::Empty => write!(f, "list is empty"),
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            Error::ConcurrentModification => {
                write!(f, "list structurally modified during iteration")
            }
            Error::InvalidCursorState => {
                write!(f, "no node returned since the last cursor move")
            }
            Error::Exhausted => write!(f, "cursor exhausted"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::AlreadyOwned { same_list: true }.to_string(),
            "node already contained in this list"
        );
        assert_eq!(
            Error::AlreadyOwned { same_list: false }.to_string(),
            "node already contained in another list"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 3 }.to_string(),
            "index 4 out of bounds for length 3"
        );
    }
}
