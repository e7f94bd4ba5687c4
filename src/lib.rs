#![cfg_attr(docsrs, feature(doc_cfg))]
//! # orbit-core
//!
//! orbit-core is a small library of generic algorithms over abstract
//! mathematical structures. Each algorithm is written against the weakest set
//! of operations its correctness proof needs, expressed as trait bounds, so
//! the same code runs over any caller type that satisfies the contract.
//!
//! ## Components
//! - [`algebra`]: exponentiation under an associative binary operation in
//!   `O(log n)` applications, derived into a strictly iterative accumulator
//!   loop with constant auxiliary space.
//! - [`orbit`]: analysis of functional graphs (`x, f(x), f(f(x)), ...`):
//!   cycle detection, handle/cycle lengths and connection points, all in
//!   `O(1)` auxiliary state without recording visited elements.
//! - [`tree`]: stackless traversal of binary trees through a three-state
//!   visit cursor over `left/right/predecessor` links, plus an arena-backed
//!   coordinate implementation.
//!
//! ## Preconditions
//!
//! The algorithms assume their stated preconditions instead of re-verifying
//! them at runtime: a transformation that never cycles nor terminates makes
//! orbit analysis diverge, and a non-associative operation passed to `power`
//! yields an unspecified (but still well-defined) fold. Cheap preconditions
//! are asserted in debug builds only; release builds keep the success path
//! free of checks. See [`debug_invariants::DebugInvariants`] for opt-in
//! structural validation of the arena types.
//!
//! ## Determinism
//!
//! Every algorithm is sequential, synchronous, and free of global state; the
//! same inputs always produce the same outputs and the same number of
//! operation applications.

pub mod algebra;
pub mod bounds;
pub mod core_error;
pub mod debug_invariants;
pub mod orbit;
pub mod tree;

pub use core_error::CoreError;
pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algebra::power::{power, power_accumulate, power_with_identity};
    pub use crate::bounds::{BinaryOp, Transformation, UnaryPredicate, ValueLike};
    pub use crate::core_error::CoreError;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::orbit::analysis::{
        circular, collision_point, connection_point, convergent_point, distance, intersect,
        orbit_structure, orbit_structure_nonterminating_orbit, terminating,
    };
    pub use crate::orbit::structure::{Distance, OrbitStructure};
    pub use crate::tree::arena::{ArenaCoord, BinaryArena, InvalidateCache, NodeId, TreeMetrics};
    pub use crate::tree::coordinate::{
        BidirectionalBifurcate, BifurcateCoordinate, Visit, is_left_successor,
        is_right_successor, traverse_nonempty,
    };
    pub use crate::tree::traversal::{height, reachable, traverse, traverse_step, weight};
}
