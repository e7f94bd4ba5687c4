//! Stackless traversal of bidirectional bifurcate coordinates.
//!
//! A traversal is driven entirely by [`traverse_step`], which mutates a
//! `(Visit, coordinate)` cursor and reports the change in height. The
//! cursor visits every node exactly three times (pre, in, post) and the
//! traversal is over when it returns to the starting root in state
//! [`Visit::Post`]. The parent links serve as the implicit stack, so the
//! auxiliary state is the cursor itself.

use crate::tree::coordinate::{BidirectionalBifurcate, Visit, is_left_successor};
use num_traits::{One, Zero};

/// Advance the cursor by one step; the return value is the change in
/// height (`+1` descending, `0` turning in place, `-1` ascending).
///
/// Precondition: `!c.is_empty()`, and not (`*v == Post` with `c` at the
/// traversal root) — the caller must stop on the terminal condition.
pub fn traverse_step<C: BidirectionalBifurcate>(v: &mut Visit, c: &mut C) -> i32 {
    match *v {
        Visit::Pre => {
            if c.has_left_successor() {
                *c = c.left_successor();
                1
            } else {
                *v = Visit::In;
                0
            }
        }
        Visit::In => {
            if c.has_right_successor() {
                *v = Visit::Pre;
                *c = c.right_successor();
                1
            } else {
                *v = Visit::Post;
                0
            }
        }
        Visit::Post => {
            if is_left_successor(c) {
                *v = Visit::In;
            }
            *c = c.predecessor();
            -1
        }
    }
}

/// Node count of the tree rooted at `c`, in one full traversal with
/// constant auxiliary state.
///
/// Precondition: the structure reachable from `c` is a tree.
pub fn weight<C: BidirectionalBifurcate>(c: &C) -> C::Weight {
    if c.is_empty() {
        return C::Weight::zero();
    }
    let root = c.clone();
    let mut cur = c.clone();
    let mut v = Visit::Pre;
    // Invariant: n is the count of Pre visits so far.
    let mut n = C::Weight::one();
    loop {
        traverse_step(&mut v, &mut cur);
        if v == Visit::Pre {
            n = n + C::Weight::one();
        }
        if cur == root && v == Visit::Post {
            return n;
        }
    }
}

/// Height (node-count height) of the tree rooted at `c`, in one full
/// traversal with constant auxiliary state.
///
/// Precondition: the structure reachable from `c` is a tree.
pub fn height<C: BidirectionalBifurcate>(c: &C) -> C::Weight {
    if c.is_empty() {
        return C::Weight::zero();
    }
    let root = c.clone();
    let mut cur = c.clone();
    let mut v = Visit::Pre;
    // Invariant: n is the running maximum, m the height of the cursor.
    let mut n = C::Weight::one();
    let mut m = C::Weight::one();
    loop {
        match traverse_step(&mut v, &mut cur) {
            1 => m = m + C::Weight::one(),
            -1 => m = m - C::Weight::one(),
            _ => {}
        }
        if m > n {
            n = m;
        }
        if cur == root && v == Visit::Post {
            return n;
        }
    }
}

/// Full traversal of the tree rooted at `c`, calling `proc` at every visit
/// including the initial `Pre` visit of the root. Returns the (possibly
/// stateful) procedure.
///
/// Precondition: the structure reachable from `c` is a tree.
pub fn traverse<C, Proc>(c: &C, mut proc: Proc) -> Proc
where
    C: BidirectionalBifurcate,
    Proc: FnMut(Visit, &C),
{
    if c.is_empty() {
        return proc;
    }
    let root = c.clone();
    let mut cur = c.clone();
    let mut v = Visit::Pre;
    proc(v, &cur);
    loop {
        traverse_step(&mut v, &mut cur);
        proc(v, &cur);
        if cur == root && v == Visit::Post {
            return proc;
        }
    }
}

/// True iff `y` is visited during a full traversal started at `x`.
///
/// Precondition: the structure reachable from `x` is a tree.
pub fn reachable<C: BidirectionalBifurcate>(x: &C, y: &C) -> bool {
    if x.is_empty() {
        return false;
    }
    let root = x.clone();
    let mut cur = x.clone();
    let mut v = Visit::Pre;
    loop {
        if cur == *y {
            return true;
        }
        traverse_step(&mut v, &mut cur);
        if cur == root && v == Visit::Post {
            return false;
        }
    }
}
