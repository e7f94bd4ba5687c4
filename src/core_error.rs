//! CoreError: unified error type for orbit-core public APIs
//!
//! Only structural operations (arena mutation and validation) are fallible.
//! Algorithm preconditions are deliberately *not* represented here: a
//! violated precondition diverges or panics in debug builds, it does not
//! produce an `Err` (see the crate-level documentation).

use thiserror::Error;

/// Unified error type for orbit-core structural operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Attempted to construct a NodeId with a zero value (invalid).
    #[error("NodeId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidNodeId,
    /// The id does not refer to a node in this arena.
    #[error("node `{0}` is not present in the arena")]
    UnknownNode(u64),
    /// Attaching into a successor slot that already holds a child.
    #[error("{slot} successor slot of node `{parent}` is already occupied")]
    ChildSlotOccupied {
        /// Parent whose slot was targeted.
        parent: u64,
        /// `"left"` or `"right"`.
        slot: &'static str,
    },
    /// Attaching a node that already has a predecessor.
    #[error("node `{0}` already has a predecessor; a tree node has at most one parent")]
    AlreadyAttached(u64),
    /// Structure error: a node is referenced as a successor by two parents.
    #[error("structure error: node `{0}` is a successor of more than one parent")]
    DuplicateChild(u64),
    /// Structure error: a predecessor back-link disagrees with the successor link.
    #[error("structure error: predecessor link of `{child}` does not point back to `{parent}`")]
    MismatchedPredecessor {
        /// Parent holding the successor link.
        parent: u64,
        /// Child whose back-link is wrong.
        child: u64,
    },
    /// Structure error: successor links close a cycle; expected a tree.
    #[error("structure error: cycle detected through successor links (expected a tree)")]
    CycleDetected,
}
