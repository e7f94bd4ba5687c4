//! `NodeId` and `BinaryArena`: an index-addressed binary tree backend
//!
//! The coordinate traits deliberately say nothing about storage. This
//! module provides the canonical backend: an arena of nodes addressed by a
//! strong, zero-cost [`NodeId`] handle, where each node stores optional
//! left/right/parent ids. Parent links are weak back-references (relation
//! plus lookup, never ownership), so the bidirectional structure involves
//! no ownership cycles while keeping O(1) predecessor lookup for the
//! traversal cursor.
//!
//! The arena lazily caches weight/height per tree root and invalidates the
//! cache on every structural mutation.

use std::fmt;
use std::num::NonZeroU64;

use itertools::Itertools;
use once_cell::sync::OnceCell;

use crate::core_error::CoreError;
use crate::debug_invariants::DebugInvariants;
use crate::tree::coordinate::{BidirectionalBifurcate, BifurcateCoordinate};
use crate::tree::traversal::{height, weight};

/// A strong handle for arena nodes.
///
/// Wraps a nonzero `u64` so 0 stays reserved as an invalid/sentinel value.
/// `repr(transparent)` gives it the same layout as a `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(NonZeroU64);

impl NodeId {
    /// Creates a new `NodeId` from a raw `u64` value.
    ///
    /// # Panics
    ///
    /// Panics if `raw == 0`; use [`NodeId::try_new`] for a fallible form.
    #[inline]
    pub fn new(raw: u64) -> Self {
        NodeId(NonZeroU64::new(raw).expect("NodeId must be non-zero"))
    }

    /// Fallible constructor; rejects 0.
    #[inline]
    pub fn try_new(raw: u64) -> Result<Self, CoreError> {
        NonZeroU64::new(raw).map(NodeId).ok_or(CoreError::InvalidNodeId)
    }

    /// Returns the inner `u64` value of this `NodeId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    #[inline]
    fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    #[inline]
    fn from_index(i: usize) -> Self {
        NodeId::new(i as u64 + 1)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.get()).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Anything that caches derived structure (tree metrics, footprints, …)
/// should implement this.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future queries recompute correctly.
    fn invalidate_cache(&mut self);
}

impl<T: InvalidateCache> InvalidateCache for Box<T> {
    fn invalidate_cache(&mut self) {
        (**self).invalidate_cache();
    }
}

/// Weight and height of one tree, as computed by a single full traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TreeMetrics {
    /// Number of nodes reachable from the root.
    pub weight: u64,
    /// Node-count height (a lone root has height 1).
    pub height: u64,
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

/// `BinaryArena<T>` stores one or more trees over payloads of type `T`:
///
/// - `nodes`: flat storage; `NodeId` is index + 1.
/// - `metrics`: lazily computed weight/height per root, invalidated on
///   every structural mutation.
#[derive(Clone, Debug)]
pub struct BinaryArena<T> {
    nodes: Vec<Node<T>>,
    metrics: OnceCell<Vec<(NodeId, TreeMetrics)>>,
}

impl<T> Default for BinaryArena<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            metrics: OnceCell::new(),
        }
    }
}

impl<T> BinaryArena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena (across all trees).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True iff the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> Result<&Node<T>, CoreError> {
        self.nodes.get(id.index()).ok_or(CoreError::UnknownNode(id.get()))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, CoreError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(CoreError::UnknownNode(id.get()))
    }

    /// Add a detached node; it is a root of its own one-node tree until
    /// attached under a parent.
    pub fn add_node(&mut self, value: T) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
            parent: None,
        });
        self.metrics.take();
        id
    }

    /// Attach `child` as the left successor of `parent`.
    ///
    /// Fails if either id is unknown, the slot is occupied, `child` already
    /// has a predecessor, or the arrow would close a successor cycle.
    pub fn attach_left(&mut self, parent: NodeId, child: NodeId) -> Result<(), CoreError> {
        self.attach(parent, child, "left")
    }

    /// Attach `child` as the right successor of `parent`.
    pub fn attach_right(&mut self, parent: NodeId, child: NodeId) -> Result<(), CoreError> {
        self.attach(parent, child, "right")
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, slot: &'static str) -> Result<(), CoreError> {
        let occupied = {
            let p = self.node(parent)?;
            if slot == "left" { p.left } else { p.right }
        };
        if occupied.is_some() {
            return Err(CoreError::ChildSlotOccupied {
                parent: parent.get(),
                slot,
            });
        }
        if self.node(child)?.parent.is_some() {
            return Err(CoreError::AlreadyAttached(child.get()));
        }
        // Reject arrows that would close a cycle: child must not be an
        // ancestor of parent.
        let mut cur = Some(parent);
        while let Some(p) = cur {
            if p == child {
                return Err(CoreError::CycleDetected);
            }
            cur = self.node(p)?.parent;
        }
        {
            let p = self.node_mut(parent)?;
            if slot == "left" {
                p.left = Some(child);
            } else {
                p.right = Some(child);
            }
        }
        self.node_mut(child)?.parent = Some(parent);
        self.metrics.take();
        Ok(())
    }

    /// Add a node and attach it as the left successor of `parent`.
    pub fn insert_left(&mut self, parent: NodeId, value: T) -> Result<NodeId, CoreError> {
        self.node(parent)?;
        let child = self.add_node(value);
        self.attach_left(parent, child)?;
        Ok(child)
    }

    /// Add a node and attach it as the right successor of `parent`.
    pub fn insert_right(&mut self, parent: NodeId, value: T) -> Result<NodeId, CoreError> {
        self.node(parent)?;
        let child = self.add_node(value);
        self.attach_right(parent, child)?;
        Ok(child)
    }

    /// Detach `child` from its predecessor, making it the root of its own
    /// subtree. A node without a predecessor is left untouched.
    pub fn detach(&mut self, child: NodeId) -> Result<(), CoreError> {
        let Some(parent) = self.node(child)?.parent else {
            return Ok(());
        };
        {
            let p = self.node_mut(parent)?;
            if p.left == Some(child) {
                p.left = None;
            } else if p.right == Some(child) {
                p.right = None;
            }
        }
        self.node_mut(child)?.parent = None;
        self.metrics.take();
        Ok(())
    }

    /// Borrow the payload of `id`.
    pub fn value(&self, id: NodeId) -> Result<&T, CoreError> {
        Ok(&self.node(id)?.value)
    }

    /// Mutably borrow the payload of `id`. Payloads do not affect the
    /// structure, so this does not invalidate cached metrics.
    pub fn value_mut(&mut self, id: NodeId) -> Result<&mut T, CoreError> {
        Ok(&mut self.node_mut(id)?.value)
    }

    /// Iterator over every node id in the arena.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::from_index)
    }

    /// Iterator over the roots (nodes without a predecessor).
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId::from_index(i))
    }

    /// Coordinate designating `id`.
    pub fn coord(&self, id: NodeId) -> Result<ArenaCoord<'_, T>, CoreError> {
        self.node(id)?;
        Ok(ArenaCoord {
            arena: self,
            node: Some(id),
        })
    }

    /// The empty coordinate for this arena.
    pub fn empty_coord(&self) -> ArenaCoord<'_, T> {
        ArenaCoord {
            arena: self,
            node: None,
        }
    }

    /// Weight/height per root, computed on first access by one full
    /// stackless traversal per tree and cached until the next mutation.
    ///
    /// Precondition: the arena validates (see
    /// [`DebugInvariants::validate_invariants`]); traversal of a malformed
    /// structure may not terminate.
    pub fn metrics_cache(&self) -> &[(NodeId, TreeMetrics)] {
        self.metrics.get_or_init(|| {
            self.roots()
                .map(|root| {
                    let c = ArenaCoord {
                        arena: self,
                        node: Some(root),
                    };
                    let m = TreeMetrics {
                        weight: weight(&c),
                        height: height(&c),
                    };
                    (root, m)
                })
                .collect()
        })
    }

    /// Cached metrics of the tree rooted at `root`, or `None` if `root` is
    /// not a root of the arena.
    pub fn metrics(&self, root: NodeId) -> Option<TreeMetrics> {
        self.metrics_cache()
            .iter()
            .find(|(id, _)| *id == root)
            .map(|(_, m)| *m)
    }
}

impl<T> InvalidateCache for BinaryArena<T> {
    fn invalidate_cache(&mut self) {
        self.metrics.take();
    }
}

impl<T> DebugInvariants for BinaryArena<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "BinaryArena");
    }

    /// Check link consistency: every successor id resolves, every successor
    /// back-links to its parent, no node is a successor of two parents, and
    /// predecessor chains are acyclic.
    fn validate_invariants(&self) -> Result<(), CoreError> {
        for (i, n) in self.nodes.iter().enumerate() {
            let id = NodeId::from_index(i);
            for child in n.left.iter().chain(n.right.iter()) {
                let c = self.node(*child)?;
                if c.parent != Some(id) {
                    log::warn!("node {child} does not back-link to its parent {id}");
                    return Err(CoreError::MismatchedPredecessor {
                        parent: id.get(),
                        child: child.get(),
                    });
                }
            }
            if let Some(parent) = n.parent {
                let p = self.node(parent)?;
                if p.left != Some(id) && p.right != Some(id) {
                    return Err(CoreError::MismatchedPredecessor {
                        parent: parent.get(),
                        child: id.get(),
                    });
                }
            }
        }
        if let Some(dup) = self
            .nodes
            .iter()
            .flat_map(|n| n.left.iter().chain(n.right.iter()).copied())
            .duplicates()
            .next()
        {
            return Err(CoreError::DuplicateChild(dup.get()));
        }
        // With back-links consistent, a cycle shows up as a predecessor
        // chain longer than the node count.
        for start in self.node_ids() {
            let mut steps = 0usize;
            let mut cur = self.node(start)?.parent;
            while let Some(p) = cur {
                steps += 1;
                if steps > self.nodes.len() {
                    return Err(CoreError::CycleDetected);
                }
                cur = self.node(p)?.parent;
            }
        }
        Ok(())
    }
}

/// Borrowed coordinate into a [`BinaryArena`]; the canonical
/// [`BifurcateCoordinate`] / [`BidirectionalBifurcate`] implementation.
pub struct ArenaCoord<'a, T> {
    arena: &'a BinaryArena<T>,
    node: Option<NodeId>,
}

impl<T> Clone for ArenaCoord<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for ArenaCoord<'_, T> {}

impl<T> PartialEq for ArenaCoord<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.node == other.node
    }
}

impl<T> fmt::Debug for ArenaCoord<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArenaCoord").field(&self.node).finish()
    }
}

impl<'a, T> ArenaCoord<'a, T> {
    /// The designated node, or `None` for the empty coordinate.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// The designated node's payload, or `None` for the empty coordinate.
    pub fn value(&self) -> Option<&'a T> {
        self.node.map(|id| &self.arena.nodes[id.index()].value)
    }

    fn backing(&self) -> &'a Node<T> {
        let id = self.node.expect("operation on empty coordinate");
        &self.arena.nodes[id.index()]
    }

    fn at(&self, node: Option<NodeId>) -> Self {
        ArenaCoord {
            arena: self.arena,
            node,
        }
    }
}

impl<T> BifurcateCoordinate for ArenaCoord<'_, T> {
    type Weight = u64;

    fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    fn has_left_successor(&self) -> bool {
        self.backing().left.is_some()
    }

    fn left_successor(&self) -> Self {
        let left = self.backing().left.expect("no left successor");
        self.at(Some(left))
    }

    fn has_right_successor(&self) -> bool {
        self.backing().right.is_some()
    }

    fn right_successor(&self) -> Self {
        let right = self.backing().right.expect("no right successor");
        self.at(Some(right))
    }
}

impl<T> BidirectionalBifurcate for ArenaCoord<'_, T> {
    fn has_predecessor(&self) -> bool {
        self.backing().parent.is_some()
    }

    fn predecessor(&self) -> Self {
        let parent = self.backing().parent.expect("no predecessor");
        self.at(Some(parent))
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that `NodeId` has the same size as `u64`.
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(NodeId, u64);

    #[test]
    fn alignment_matches_u64() {
        assert_eq_align!(NodeId, u64);
    }

    #[test]
    fn option_node_id_is_still_one_word() {
        // The nonzero niche keeps Option<NodeId> at 8 bytes.
        assert_eq!(std::mem::size_of::<Option<NodeId>>(), 8);
    }
}

#[cfg(test)]
mod node_id_tests {
    use super::*;

    #[test]
    fn new_zero_panics() {
        assert!(std::panic::catch_unwind(|| NodeId::new(0)).is_err());
    }

    #[test]
    fn try_new_zero_is_invalid() {
        assert_eq!(NodeId::try_new(0), Err(CoreError::InvalidNodeId));
        assert_eq!(NodeId::try_new(3).unwrap().get(), 3);
    }

    #[test]
    fn debug_and_display() {
        let id = NodeId::new(7);
        assert_eq!(format!("{id:?}"), "NodeId(7)");
        assert_eq!(format!("{id}"), "7");
    }

    #[test]
    fn json_roundtrip() {
        let id = NodeId::new(123);
        let s = serde_json::to_string(&id).unwrap();
        let back: NodeId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn bincode_roundtrip() {
        let id = NodeId::new(456);
        let bytes = bincode::serialize(&id).unwrap();
        let back: NodeId = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, id);
    }
}
