//! Coordinate capability traits and the visit cursor.

use num_traits::{One, PrimInt, Zero};
use serde::{Deserialize, Serialize};

/// Where the traversal stands relative to the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visit {
    /// Before the left subtree.
    Pre,
    /// After the left subtree, before the right.
    In,
    /// After the right subtree.
    Post,
}

/// The `BifurcateCoordinate` trait models a binary tree node handle without
/// assuming any storage layout. It provides:
///
/// - **Emptiness** (`is_empty`): an empty coordinate supports no other
///   operation.
/// - **Successor queries**: `has_left_successor`/`left_successor` and the
///   right-hand pair. A successor of a non-empty coordinate is never empty.
///
/// The structure reachable through successor links from any non-empty
/// coordinate must be a tree (finite and acyclic); that property is a
/// caller contract, checkable for the arena backend via
/// [`crate::DebugInvariants`].
pub trait BifurcateCoordinate: Clone + PartialEq + std::fmt::Debug + Sized {
    /// Integer type for node counts and heights.
    type Weight: PrimInt;

    /// True iff this coordinate designates no node.
    fn is_empty(&self) -> bool;

    /// True iff the node has a left successor.
    ///
    /// Precondition: `!self.is_empty()`.
    fn has_left_successor(&self) -> bool;

    /// The left successor coordinate.
    ///
    /// Precondition: `self.has_left_successor()`.
    fn left_successor(&self) -> Self;

    /// True iff the node has a right successor.
    ///
    /// Precondition: `!self.is_empty()`.
    fn has_right_successor(&self) -> bool;

    /// The right successor coordinate.
    ///
    /// Precondition: `self.has_right_successor()`.
    fn right_successor(&self) -> Self;

    /// Node count, by recursion over the successors. Call-stack depth is
    /// proportional to the tree height; prefer [`crate::tree::weight`] when
    /// the depth is unbounded and the coordinate is bidirectional.
    fn weight_recursive(&self) -> Self::Weight {
        if self.is_empty() {
            return Self::Weight::zero();
        }
        let mut l = Self::Weight::zero();
        let mut r = Self::Weight::zero();
        if self.has_left_successor() {
            l = self.left_successor().weight_recursive();
        }
        if self.has_right_successor() {
            r = self.right_successor().weight_recursive();
        }
        l + r + Self::Weight::one()
    }

    /// Height (node-count height: a single node has height 1), by
    /// recursion over the successors.
    fn height_recursive(&self) -> Self::Weight {
        if self.is_empty() {
            return Self::Weight::zero();
        }
        let mut l = Self::Weight::zero();
        let mut r = Self::Weight::zero();
        if self.has_left_successor() {
            l = self.left_successor().height_recursive();
        }
        if self.has_right_successor() {
            r = self.right_successor().height_recursive();
        }
        l.max(r) + Self::Weight::one()
    }
}

/// Refinement adding a predecessor (parent) link.
///
/// Regularity requires the links to agree: if `j == i.left_successor()`
/// then `j.predecessor() == i`, and symmetrically on the right.
pub trait BidirectionalBifurcate: BifurcateCoordinate {
    /// True iff the node has a predecessor (is not a root).
    ///
    /// Precondition: `!self.is_empty()`.
    fn has_predecessor(&self) -> bool;

    /// The predecessor coordinate.
    ///
    /// Precondition: `self.has_predecessor()`.
    fn predecessor(&self) -> Self;
}

/// True iff `j` is the left successor of its predecessor.
///
/// Precondition: `j.has_predecessor()`.
pub fn is_left_successor<C: BidirectionalBifurcate>(j: &C) -> bool {
    let i = j.predecessor();
    i.has_left_successor() && i.left_successor() == *j
}

/// True iff `j` is the right successor of its predecessor.
///
/// Precondition: `j.has_predecessor()`.
pub fn is_right_successor<C: BidirectionalBifurcate>(j: &C) -> bool {
    let i = j.predecessor();
    i.has_right_successor() && i.right_successor() == *j
}

/// Recursive traversal specification: calls `proc` with [`Visit::Pre`],
/// [`Visit::In`], and [`Visit::Post`] around the left and right subtrees of
/// every node. Call-stack depth proportional to the tree height.
///
/// Precondition: `!c.is_empty()`.
pub fn traverse_nonempty<C, Proc>(c: &C, mut proc: Proc) -> Proc
where
    C: BifurcateCoordinate,
    Proc: FnMut(Visit, &C),
{
    fn go<C: BifurcateCoordinate, Proc: FnMut(Visit, &C)>(c: &C, proc: &mut Proc) {
        proc(Visit::Pre, c);
        if c.has_left_successor() {
            go(&c.left_successor(), proc);
        }
        proc(Visit::In, c);
        if c.has_right_successor() {
            go(&c.right_successor(), proc);
        }
        proc(Visit::Post, c);
    }
    go(c, &mut proc);
    proc
}
