//! Exponentiation under an associative operation.
//!
//! `power(a, n, op)` combines `a` with itself `n` times in at most
//! `2*floor(log2(n)) + 2` applications of `op`. The loop shape is the
//! endpoint of refining the naive doubling recursion into a strictly
//! tail-recursive accumulator form: every recursive call's arguments become
//! the next iteration's loop state, so the whole family runs in constant
//! auxiliary space regardless of `n`.
//!
//! The linear `power_left_associated` / `power_right_associated` forms are
//! kept public as specifications: for an associative `op` all four entry
//! points agree, and the tests lean on that.

use num_traits::PrimInt;

use crate::bounds::BinaryOp;

#[inline]
fn is_odd<I: PrimInt>(n: I) -> bool {
    n & I::one() == I::one()
}

#[inline]
fn half_nonnegative<I: PrimInt>(n: I) -> I {
    n >> 1
}

/// `a` combined with itself `n` times, folded from the left:
/// `op(op(op(a, a), a), ...)`. Linear in `n`.
///
/// # Preconditions
/// `n > 0` (asserted in debug builds; nonsense otherwise).
pub fn power_left_associated<T, I, Op>(a: T, n: I, op: Op) -> T
where
    T: Clone,
    I: PrimInt,
    Op: BinaryOp<T>,
{
    debug_assert!(n > I::zero(), "power_left_associated requires n > 0");
    let mut r = a.clone();
    let mut k = I::one();
    while k < n {
        r = op(r, a.clone());
        k = k + I::one();
    }
    r
}

/// `a` combined with itself `n` times, folded from the right:
/// `op(a, op(a, op(a, ...)))`. Linear in `n`.
///
/// # Preconditions
/// `n > 0`.
pub fn power_right_associated<T, I, Op>(a: T, n: I, op: Op) -> T
where
    T: Clone,
    I: PrimInt,
    Op: BinaryOp<T>,
{
    debug_assert!(n > I::zero(), "power_right_associated requires n > 0");
    let mut r = a.clone();
    let mut k = I::one();
    while k < n {
        r = op(a.clone(), r);
        k = k + I::one();
    }
    r
}

/// Accumulator loop: returns `r` combined with `n` further copies of `a`,
/// squaring `a` and halving `n` each round.
///
/// Invariant entering each iteration: the final result equals the current
/// `r` combined with the current `a` taken `n` times.
///
/// # Preconditions
/// `n > 0`.
pub fn power_accumulate_positive<T, I, Op>(mut r: T, mut a: T, mut n: I, op: Op) -> T
where
    T: Clone,
    I: PrimInt,
    Op: BinaryOp<T>,
{
    debug_assert!(n > I::zero(), "power_accumulate_positive requires n > 0");
    loop {
        if is_odd(n) {
            r = op(r, a.clone());
            if n == I::one() {
                return r;
            }
        }
        a = op(a.clone(), a);
        n = half_nonnegative(n);
    }
}

/// Total variant of [`power_accumulate_positive`] on `n >= 0`: returns `r`
/// untouched when `n == 0`.
pub fn power_accumulate<T, I, Op>(r: T, a: T, n: I, op: Op) -> T
where
    T: Clone,
    I: PrimInt,
    Op: BinaryOp<T>,
{
    debug_assert!(n >= I::zero(), "power_accumulate requires n >= 0");
    if n == I::zero() {
        return r;
    }
    power_accumulate_positive(r, a, n, op)
}

/// `a` combined with itself `n` times under the associative operation `op`,
/// in `O(log n)` applications of `op`.
///
/// Low-order zero bits of `n` are peeled off first by squaring alone, so the
/// accumulator only ever sees an odd count; `n == 1` performs zero
/// applications.
///
/// # Preconditions
/// `n > 0`; use [`power_with_identity`] when `n` may be zero. `op` must be
/// associative for the result to equal the linear folds.
pub fn power<T, I, Op>(mut a: T, mut n: I, op: Op) -> T
where
    T: Clone,
    I: PrimInt,
    Op: BinaryOp<T>,
{
    debug_assert!(n > I::zero(), "power requires n > 0");
    while !is_odd(n) {
        a = op(a.clone(), a);
        n = half_nonnegative(n);
    }
    n = half_nonnegative(n);
    if n == I::zero() {
        return a;
    }
    let squared = op(a.clone(), a.clone());
    power_accumulate_positive(a, squared, n, op)
}

/// Total power on `n >= 0`: returns `identity` when `n == 0`.
///
/// `identity` must be the identity of `op` for the usual algebraic reading,
/// but the algorithm only ever returns it verbatim, so any default value is
/// acceptable to callers that treat `n == 0` as "no combination happened".
pub fn power_with_identity<T, I, Op>(a: T, n: I, op: Op, identity: T) -> T
where
    T: Clone,
    I: PrimInt,
    Op: BinaryOp<T>,
{
    debug_assert!(n >= I::zero(), "power_with_identity requires n >= 0");
    if n == I::zero() {
        return identity;
    }
    power(a, n, op)
}
