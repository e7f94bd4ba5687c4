use std::cell::Cell;

use orbit_core::algebra::power::{power, power_left_associated, power_with_identity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn power_matches_naive_fold(a in 1u64..1000, n in 1u64..=64) {
        let op = |x: u64, y: u64| x.wrapping_mul(y);
        prop_assert_eq!(power(a, n, op), power_left_associated(a, n, op));
    }

    #[test]
    fn op_count_within_logarithmic_bound(n in 1u64..=4096) {
        let calls = Cell::new(0u64);
        power(1u64, n, |x, y| {
            calls.set(calls.get() + 1);
            x.wrapping_add(y)
        });
        let bound = 2 * n.ilog2() as u64 + 2;
        prop_assert!(
            calls.get() <= bound,
            "power(_, {}, _) used {} ops, bound {}",
            n, calls.get(), bound
        );
    }

    #[test]
    fn zero_exponent_returns_identity(a in any::<u64>()) {
        prop_assert_eq!(power_with_identity(a, 0u64, |x, y| x.wrapping_mul(y), 1), 1);
        prop_assert_eq!(power_with_identity(a, 1u64, |x, y| x.wrapping_mul(y), 1), a);
    }

    #[test]
    fn non_commutative_operation_keeps_order(n in 1u32..=48) {
        // 2x2 matrix multiplication: associative but not commutative.
        type M = [[u64; 2]; 2];
        let mul = |a: M, b: M| -> M {
            let mut out = [[0u64; 2]; 2];
            for (i, row) in out.iter_mut().enumerate() {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = a[i][0]
                        .wrapping_mul(b[0][j])
                        .wrapping_add(a[i][1].wrapping_mul(b[1][j]));
                }
            }
            out
        };
        let fib = [[1u64, 1], [1, 0]];
        prop_assert_eq!(power(fib, n, mul), power_left_associated(fib, n, mul));
    }
}
