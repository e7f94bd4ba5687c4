use std::collections::HashMap;

use orbit_core::orbit::analysis::{
    circular_nonterminating_orbit, intersect, intersect_nonterminating_orbit, orbit_structure,
    orbit_structure_nonterminating_orbit, terminating,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Reference implementation with O(path) storage: follow the orbit
/// recording positions until the first repeat.
fn naive_structure(x: u32, f: impl Fn(&u32) -> u32) -> (u64, u64, u32) {
    let mut seen_at: HashMap<u32, u64> = HashMap::new();
    let mut cur = x;
    let mut step = 0u64;
    loop {
        if let Some(&first) = seen_at.get(&cur) {
            return (first, step - first, cur);
        }
        seen_at.insert(cur, step);
        cur = f(&cur);
        step += 1;
    }
}

#[test]
fn pure_cycles_have_empty_handles() {
    for k in [1u32, 5, 100] {
        let f = move |x: &u32| (*x + 1) % k;
        let s = orbit_structure_nonterminating_orbit(&0u32, f);
        assert_eq!(s.handle_length, 0, "k={k}");
        assert_eq!(s.cycle_length, u64::from(k), "k={k}");
        assert_eq!(s.connection, 0, "k={k}");
        assert!(circular_nonterminating_orbit(&0u32, f));
    }
}

#[test]
fn handle_then_cycle() {
    // 0 -> 1 -> 2 -> 3 -> 1.
    let f = |x: &u32| if *x == 3 { 1 } else { *x + 1 };
    let s = orbit_structure_nonterminating_orbit(&0u32, f);
    assert_eq!((s.handle_length, s.cycle_length, s.connection), (1, 3, 1));
    assert!(!circular_nonterminating_orbit(&0u32, f));
}

#[test]
fn bounded_orbit_terminates_with_zero_cycle() {
    let n = 25u32;
    let f = |x: &u32| *x + 1;
    let p = move |x: &u32| *x < n;
    assert!(terminating(&0u32, f, p));
    let s = orbit_structure(&0u32, f, p);
    assert_eq!(s.cycle_length, 0);
    assert_eq!(s.connection, n);
    assert_eq!(s.handle_length, u64::from(n));
    assert!(s.is_terminating());
}

#[test]
fn guarded_structure_matches_unguarded_when_cyclic() {
    let f = |x: &u32| (*x * 3 + 1) % 101;
    for start in [0u32, 7, 50] {
        let guarded = orbit_structure(&start, f, |_: &u32| true);
        let unguarded = orbit_structure_nonterminating_orbit(&start, f);
        assert_eq!(guarded, unguarded);
    }
}

#[test]
fn orbits_sharing_a_cycle_intersect() {
    // Doubling mod 7: 1 -> 2 -> 4 -> 1 and 3 -> 6 -> 5 -> 3.
    let f = |x: &u32| (*x * 2) % 7;
    assert!(intersect_nonterminating_orbit(&1u32, &2u32, f));
    assert!(intersect_nonterminating_orbit(&1u32, &4u32, f));
    assert!(!intersect_nonterminating_orbit(&1u32, &3u32, f));
    assert!(!intersect_nonterminating_orbit(&2u32, &5u32, f));
}

#[test]
fn terminating_orbits_do_not_intersect() {
    let f = |x: &u32| *x + 1;
    let px = |x: &u32| *x < 5;
    let py = |x: &u32| *x < 9;
    assert!(!intersect(&0u32, &6u32, f, px, py));
}

#[test]
fn guarded_intersect_sees_shared_cycles() {
    let f = |x: &u32| (*x * 2) % 7;
    let p = |_: &u32| true;
    assert!(intersect(&1u32, &4u32, f, p, p));
    assert!(!intersect(&1u32, &6u32, f, p, p));
}

#[test]
fn random_functional_graphs_match_naive_reference() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let n = 512u32;
    for _ in 0..20 {
        let table: Vec<u32> = (0..n).map(|_| rng.gen_range(0..n)).collect();
        let f = |x: &u32| table[*x as usize];
        let start = rng.gen_range(0..n);
        let (handle, cycle, connection) = naive_structure(start, f);
        let s = orbit_structure_nonterminating_orbit(&start, f);
        assert_eq!(s.handle_length, handle);
        assert_eq!(s.cycle_length, cycle);
        assert_eq!(s.connection, connection);
    }
}

#[test]
fn works_over_non_copy_domains() {
    // Rotate a string one byte; orbit is a pure cycle of its length.
    let f = |s: &String| {
        let mut b = s.clone().into_bytes();
        b.rotate_left(1);
        String::from_utf8(b).unwrap()
    };
    let s = orbit_structure_nonterminating_orbit(&"abcd".to_string(), f);
    assert_eq!(s.handle_length, 0);
    assert_eq!(s.cycle_length, 4);
    assert_eq!(s.connection, "abcd");
}
