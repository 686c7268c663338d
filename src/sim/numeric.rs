//! Tolerant Float Comparisons
//!
//! Termination and reward decisions near the track boundary go through these
//! helpers so that accumulated rounding error cannot flip them.

/// Absolute tolerance used by every comparison in the simulator
pub const EPSILON: f64 = 1e-10;

/// `a == b` up to [`EPSILON`]
pub fn is_equal_to(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// `a < b` and not within [`EPSILON`] of `b`
pub fn is_less_than(a: f64, b: f64) -> bool {
    a < b && !is_equal_to(a, b)
}
