//! Integer helpers used for rational normalization.
//!
//! These are free functions over `i64`; none of them hold state.

/// Floored modulo: `((a % b) + b) % b`.
///
/// The result carries the sign of `b` (or is zero), so for positive `b`
/// it always lies in `0..b`.
///
/// # Panics
///
/// Panics if `b` is zero.
#[must_use]
pub fn modulo(a: i64, b: i64) -> i64 {
    ((a % b) + b) % b
}

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Remainders are taken with [`modulo`], so every remainder has the sign
/// of its divisor. The result therefore follows the sign of `b`:
/// `gcd(4, 6) == 2`, `gcd(4, -6) == -2`, `gcd(-4, 6) == 2`.
/// `gcd(a, 0) == a` and `gcd(0, 0) == 0`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a;
    let mut b = b;
    while b != 0 {
        let t = b;
        b = modulo(a, b);
        a = t;
    }
    a
}

/// Least common multiple: `|a * b| / gcd(a, b)`.
///
/// Returns 0 when either input is 0. The sign follows [`gcd`], so a
/// negative `b` yields a negative multiple.
#[must_use]
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a * b).abs() / gcd(a, b)
}
