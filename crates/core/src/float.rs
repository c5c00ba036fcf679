//! Float tolerance shared by the matcher and the comparator
//!
//! Both components must agree on when two floats are "the same", so the
//! tolerance lives here and nowhere else.

/// Absolute tolerance for float equality
///
/// Two floats whose difference is strictly below this value are equal for
/// matching and ordering purposes.
pub const FLOAT_EPSILON: f64 = 1e-6;

/// Epsilon-tolerant float equality: `|a - b| < FLOAT_EPSILON`
///
/// NaN is never approximately equal to anything, and two infinities of the
/// same sign are not approximately equal either (their difference is NaN).
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < FLOAT_EPSILON
}

/// Zero-as-absent policy
///
/// A float field holding exactly zero (either sign) is indistinguishable from
/// a field that was never set, so it never satisfies a magnitude comparison.
#[inline]
pub fn is_absent(value: f64) -> bool {
    value == 0.0
}
