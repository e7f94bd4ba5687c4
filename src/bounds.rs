//! Common bound aliases used across the algorithm core.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses; the semantic requirements that the
//! compiler cannot express (associativity, totality) are documented per
//! trait and remain caller contracts.

/// Canonical bound set for regular values and orbit domains.
///
/// Rationale:
/// - `Clone` because the algorithms keep a constant number of copies of the
///   current position (slow/fast pointers, accumulator)
/// - `PartialEq` for collision and termination tests
/// - `Debug` for diagnostics and invariant checks
pub trait ValueLike: Clone + PartialEq + std::fmt::Debug {}
impl<T> ValueLike for T where T: Clone + PartialEq + std::fmt::Debug {}

/// Binary operation capability over `T`.
///
/// `power` additionally requires the operation to be associative:
/// `op(op(a, b), c) == op(a, op(b, c))` for all `a, b, c`. That property is
/// not statically provable and is never re-verified at runtime.
pub trait BinaryOp<T>: Fn(T, T) -> T {}
impl<T, F> BinaryOp<T> for F where F: Fn(T, T) -> T {}

/// Transformation capability: a total unary function from a domain to
/// itself, taken by reference so non-`Copy` domains pay one clone per step
/// at most.
pub trait Transformation<T>: Fn(&T) -> T {}
impl<T, F> Transformation<T> for F where F: Fn(&T) -> T {}

/// Boundary predicate capability for orbit analysis. `p(x)` must be true
/// exactly when `f(x)` is defined, on every point reachable from the
/// starting element.
pub trait UnaryPredicate<T>: Fn(&T) -> bool {}
impl<T, F> UnaryPredicate<T> for F where F: Fn(&T) -> bool {}
