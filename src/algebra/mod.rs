//! Algorithms over associative binary operations.
//!
//! The only structure this module assumes is a binary operation that is
//! associative on the values it is given; no identity, no inverses, no
//! commutativity. That is enough to compute `n`-fold combination in
//! `O(log n)` applications.

pub mod power;

pub use power::{
    power, power_accumulate, power_accumulate_positive, power_left_associated,
    power_right_associated, power_with_identity,
};
