//! Orbit (functional-graph) analysis.
//!
//! Given a transformation `f` over a domain, the orbit of `x` is the
//! sequence `x, f(x), f(f(x)), ...`. Over a finite domain every orbit is
//! eventually periodic: a (possibly empty) *handle* followed by a *cycle*.
//! With a boundary predicate, an orbit may instead stop at a *terminal*
//! point where the predicate fails.
//!
//! Every operation here runs in `O(distance traveled)` time and `O(1)`
//! auxiliary state: cycles of arbitrary length are detected and measured
//! without recording visited elements.

pub mod analysis;
pub mod structure;

pub use analysis::{
    circular, circular_nonterminating_orbit, collision_point,
    collision_point_nonterminating_orbit, connection_point,
    connection_point_nonterminating_orbit, convergent_point, distance, intersect,
    intersect_nonterminating_orbit, orbit_structure, orbit_structure_nonterminating_orbit,
    terminating,
};
pub use structure::{Distance, OrbitStructure};
