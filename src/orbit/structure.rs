//! Result types for orbit analysis.

use serde::{Deserialize, Serialize};

/// Number of transformation applications separating two orbit points.
///
/// A fixed-width count rather than a per-transformation associated type:
/// `u64` covers every orbit addressable in memory, and closures carry no
/// associated types to hang a distance type on.
pub type Distance = u64;

/// Full description of an orbit's shape.
///
/// - Terminating orbit: `handle_length` is the number of steps to the
///   terminal point and `cycle_length == 0`; `connection` is the terminal
///   point itself.
/// - Cyclic orbit: `handle_length` steps reach `connection`, the first
///   point on the cycle, and `cycle_length` further steps return to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrbitStructure<T> {
    /// Length of the non-cyclic prefix.
    pub handle_length: Distance,
    /// Length of the cycle; `0` for a terminating orbit.
    pub cycle_length: Distance,
    /// Connection point (first cyclic element) or terminal point.
    pub connection: T,
}

impl<T> OrbitStructure<T> {
    /// True iff the orbit reached a terminal point instead of a cycle.
    pub fn is_terminating(&self) -> bool {
        self.cycle_length == 0
    }

    /// True iff the orbit is entirely a cycle (empty handle).
    pub fn is_circular(&self) -> bool {
        self.handle_length == 0 && self.cycle_length > 0
    }
}
