//! Cycle detection and orbit measurement.
//!
//! The central algorithm is the slow/fast simultaneous iteration
//! ([`collision_point`]): a slow pointer advancing one step per round and a
//! fast pointer advancing two. If the orbit cycles the pointers meet inside
//! the cycle; if a boundary predicate fails first, the failing point is a
//! terminal point and the orbit never cycles. Everything else (connection
//! points, handle and cycle lengths, orbit intersection) is derived from
//! that primitive plus [`convergent_point`].
//!
//! Two flavors exist throughout: the guarded form takes a definition-space
//! predicate `p` where `p(x)` holds exactly when `f(x)` is defined, and the
//! `_nonterminating_orbit` form drops every predicate evaluation for
//! domains where `f` is total and the orbit provably cyclic.

use crate::bounds::{Transformation, UnaryPredicate, ValueLike};
use crate::orbit::structure::{Distance, OrbitStructure};

/// Number of applications of `f` needed to reach `y` from `x`.
///
/// # Preconditions
/// `y` is reachable from `x` under iteration of `f`; the call diverges
/// otherwise.
pub fn distance<T, F>(x: &T, y: &T, f: F) -> Distance
where
    T: ValueLike,
    F: Transformation<T>,
{
    let mut cur = x.clone();
    let mut n: Distance = 0;
    while cur != *y {
        cur = f(&cur);
        n += 1;
    }
    n
}

/// Slow/fast iteration from `x`, guarded by the definition-space predicate.
///
/// Returns either a point failing `p` (the orbit terminates and never
/// cycles) or the collision point of the two pointers (the orbit cycles and
/// the returned point lies on the cycle).
///
/// # Preconditions
/// `p(z)` is true exactly when `f(z)` is defined, for every `z` reachable
/// from `x`.
pub fn collision_point<T, F, P>(x: &T, f: F, p: P) -> T
where
    T: ValueLike,
    F: Transformation<T>,
    P: UnaryPredicate<T>,
{
    if !p(x) {
        return x.clone();
    }
    let mut slow = x.clone();
    let mut fast = f(x);
    while fast != slow {
        slow = f(&slow);
        if !p(&fast) {
            return fast;
        }
        fast = f(&fast);
        if !p(&fast) {
            return fast;
        }
        fast = f(&fast);
    }
    fast
}

/// [`collision_point`] for a transformation known to produce a cyclic orbit;
/// skips every predicate evaluation.
///
/// # Preconditions
/// The orbit of `x` under `f` is eventually periodic (always true when the
/// domain is finite and `f` total); the call diverges otherwise.
pub fn collision_point_nonterminating_orbit<T, F>(x: &T, f: F) -> T
where
    T: ValueLike,
    F: Transformation<T>,
{
    let mut slow = x.clone();
    let mut fast = f(x);
    while fast != slow {
        slow = f(&slow);
        fast = f(&fast);
        fast = f(&fast);
    }
    fast
}

/// True iff the orbit of `x` reaches a terminal point rather than a cycle.
pub fn terminating<T, F, P>(x: &T, f: F, p: P) -> bool
where
    T: ValueLike,
    F: Transformation<T>,
    P: UnaryPredicate<T>,
{
    !p(&collision_point(x, f, &p))
}

/// True iff the orbit of `x` is entirely a cycle containing `x`.
pub fn circular<T, F, P>(x: &T, f: F, p: P) -> bool
where
    T: ValueLike,
    F: Transformation<T>,
    P: UnaryPredicate<T>,
{
    let y = collision_point(x, &f, &p);
    p(&y) && *x == f(&y)
}

/// [`circular`] without predicate checks, for provably cyclic orbits.
pub fn circular_nonterminating_orbit<T, F>(x: &T, f: F) -> bool
where
    T: ValueLike,
    F: Transformation<T>,
{
    *x == f(&collision_point_nonterminating_orbit(x, &f))
}

/// Advance both starting points one step at a time until they meet.
///
/// # Preconditions
/// There is an `n >= 0` with `f^n(x0) == f^n(x1)`; the call diverges
/// otherwise.
pub fn convergent_point<T, F>(mut x0: T, mut x1: T, f: F) -> T
where
    T: ValueLike,
    F: Transformation<T>,
{
    while x0 != x1 {
        x0 = f(&x0);
        x1 = f(&x1);
    }
    x0
}

/// First point of the orbit of `x` that lies on its cycle.
///
/// Exploits the collision-point property: the start and the successor of
/// the collision point are equidistant (mod cycle length) from the
/// connection point, so converging them meets exactly there.
pub fn connection_point_nonterminating_orbit<T, F>(x: &T, f: F) -> T
where
    T: ValueLike,
    F: Transformation<T>,
{
    let collision = collision_point_nonterminating_orbit(x, &f);
    convergent_point(x.clone(), f(&collision), f)
}

/// Guarded [`connection_point_nonterminating_orbit`]: returns the terminal
/// point unchanged when the orbit terminates.
pub fn connection_point<T, F, P>(x: &T, f: F, p: P) -> T
where
    T: ValueLike,
    F: Transformation<T>,
    P: UnaryPredicate<T>,
{
    let y = collision_point(x, &f, &p);
    if !p(&y) {
        return y;
    }
    convergent_point(x.clone(), f(&y), f)
}

/// True iff the orbits of `x` and `y` share any cyclic elements.
///
/// Orbits that intersect share their entire eventual cycle, so it suffices
/// to walk one full cycle from `y`'s collision point looking for `x`'s.
/// Terminating orbits never intersect cyclically.
pub fn intersect<T, F, Px, Py>(x: &T, y: &T, f: F, px: Px, py: Py) -> bool
where
    T: ValueLike,
    F: Transformation<T>,
    Px: UnaryPredicate<T>,
    Py: UnaryPredicate<T>,
{
    let x_coll = collision_point(x, &f, &px);
    let y_coll = collision_point(y, &f, &py);
    if !px(&x_coll) || !py(&y_coll) {
        return false;
    }
    cycles_meet(&x_coll, &y_coll, f)
}

/// [`intersect`] for transformations with provably cyclic orbits.
pub fn intersect_nonterminating_orbit<T, F>(x: &T, y: &T, f: F) -> bool
where
    T: ValueLike,
    F: Transformation<T>,
{
    let x_coll = collision_point_nonterminating_orbit(x, &f);
    let y_coll = collision_point_nonterminating_orbit(y, &f);
    cycles_meet(&x_coll, &y_coll, f)
}

/// Walk one full cycle from `y_coll` checking for `x_coll`.
fn cycles_meet<T, F>(x_coll: &T, y_coll: &T, f: F) -> bool
where
    T: ValueLike,
    F: Transformation<T>,
{
    let mut y_check = y_coll.clone();
    loop {
        if y_check == *x_coll {
            return true;
        }
        y_check = f(&y_check);
        if y_check == *y_coll {
            return false;
        }
    }
}

/// Handle length, cycle length, and connection point of a provably cyclic
/// orbit.
pub fn orbit_structure_nonterminating_orbit<T, F>(x: &T, f: F) -> OrbitStructure<T>
where
    T: ValueLike,
    F: Transformation<T>,
{
    let y = connection_point_nonterminating_orbit(x, &f);
    let handle_length = distance(x, &y, &f);
    let cycle_length = distance(&f(&y), &y, &f) + 1;
    log::trace!("orbit structure: handle={handle_length} cycle={cycle_length}");
    OrbitStructure {
        handle_length,
        cycle_length,
        connection: y,
    }
}

/// Handle length, cycle length, and connection point of a bounded orbit.
///
/// For a terminating orbit the cycle length is `0` and `connection` is the
/// terminal point.
pub fn orbit_structure<T, F, P>(x: &T, f: F, p: P) -> OrbitStructure<T>
where
    T: ValueLike,
    F: Transformation<T>,
    P: UnaryPredicate<T>,
{
    let y = connection_point(x, &f, &p);
    let handle_length = distance(x, &y, &f);
    let cycle_length = if p(&y) { distance(&f(&y), &y, &f) + 1 } else { 0 };
    log::trace!("orbit structure: handle={handle_length} cycle={cycle_length}");
    OrbitStructure {
        handle_length,
        cycle_length,
        connection: y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 -> 1 -> 2 -> 3 -> 1: handle of length 1, cycle of length 3.
    fn rho(x: &u32) -> u32 {
        if *x == 3 { 1 } else { *x + 1 }
    }

    #[test]
    fn collision_point_lands_on_cycle() {
        let c = collision_point_nonterminating_orbit(&0u32, rho);
        assert!((1..=3).contains(&c));
    }

    #[test]
    fn connection_point_is_first_cyclic_element() {
        assert_eq!(connection_point_nonterminating_orbit(&0u32, rho), 1);
    }

    #[test]
    fn rho_orbit_structure() {
        let s = orbit_structure_nonterminating_orbit(&0u32, rho);
        assert_eq!(s.handle_length, 1);
        assert_eq!(s.cycle_length, 3);
        assert_eq!(s.connection, 1);
        assert!(!s.is_terminating());
        assert!(!s.is_circular());
    }

    #[test]
    fn pure_cycle_is_circular() {
        let f = |x: &u32| (*x + 1) % 5;
        assert!(circular_nonterminating_orbit(&0u32, f));
        let s = orbit_structure_nonterminating_orbit(&2u32, f);
        assert_eq!(s.handle_length, 0);
        assert_eq!(s.cycle_length, 5);
        assert_eq!(s.connection, 2);
        assert!(s.is_circular());
    }

    #[test]
    fn fixed_point_has_cycle_length_one() {
        let f = |_: &u32| 7u32;
        let s = orbit_structure_nonterminating_orbit(&7u32, f);
        assert_eq!((s.handle_length, s.cycle_length, s.connection), (0, 1, 7));
    }

    #[test]
    fn bounded_increment_terminates() {
        let f = |x: &u32| *x + 1;
        let p = |x: &u32| *x < 10;
        assert!(terminating(&0u32, f, p));
        assert!(!circular(&0u32, f, p));
        let s = orbit_structure(&0u32, f, p);
        assert_eq!(s.cycle_length, 0);
        assert_eq!(s.connection, 10);
        assert!(s.is_terminating());
    }

    #[test]
    fn guarded_matches_unguarded_on_cyclic_orbit() {
        let f = |x: &u32| (*x * 2) % 7;
        let p = |_: &u32| true;
        let guarded = orbit_structure(&1u32, f, p);
        let unguarded = orbit_structure_nonterminating_orbit(&1u32, f);
        assert_eq!(guarded, unguarded);
    }

    #[test]
    fn convergent_point_meets() {
        let f = |x: &u32| *x / 2;
        // 12 -> 6 -> 3 -> 1 -> 0; 10 -> 5 -> 2 -> 1 -> 0.
        assert_eq!(convergent_point(12u32, 10u32, f), 1);
    }

    #[test]
    fn distance_counts_steps() {
        let f = |x: &u32| *x + 1;
        assert_eq!(distance(&3u32, &3u32, f), 0);
        assert_eq!(distance(&0u32, &9u32, f), 9);
    }
}
