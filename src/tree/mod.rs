//! Bifurcate-coordinate (binary tree) abstractions and traversal.
//!
//! A bifurcate coordinate is a node handle exposing only emptiness and
//! optional left/right successor queries; the bidirectional refinement adds
//! a predecessor link. That is enough to visit every node of a tree with a
//! three-state cursor and constant auxiliary state, with no call stack and
//! no per-node mark bits.

pub mod arena;
pub mod coordinate;
pub mod traversal;

pub use arena::{ArenaCoord, BinaryArena, InvalidateCache, NodeId, TreeMetrics};
pub use coordinate::{
    BidirectionalBifurcate, BifurcateCoordinate, Visit, is_left_successor, is_right_successor,
    traverse_nonempty,
};
pub use traversal::{height, reachable, traverse, traverse_step, weight};
