//! Branch-free modular reductions mod `q = 3329`

use super::params::{BARRETT_V, Q, QINV};

/// Montgomery reduction: returns `a * 2^-16 mod q` in `(-q, q)`
///
/// Valid for `|a| < 2^15 * q`.
#[inline(always)]
pub fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV);
    ((a - (t as i32) * (Q as i32)) >> 16) as i16
}

/// Barrett reduction: returns the centered representative of `a mod q`
/// in `[-(q-1)/2, (q-1)/2]`
#[inline(always)]
pub fn barrett_reduce(a: i16) -> i16 {
    let t = (BARRETT_V * a as i32 + (1 << 25)) >> 26;
    (a as i32 - t * Q as i32) as i16
}

/// Field multiplication followed by Montgomery reduction: `a * b * 2^-16`
#[inline(always)]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(a as i32 * b as i32)
}

/// Map a value in `(-q, q)` to `[0, q)` without branching
#[inline(always)]
pub fn to_canonical(a: i16) -> i16 {
    a + ((a >> 15) & Q)
}

/// Fully reduce any `i16` into `[0, q)`
#[inline(always)]
pub fn reduce_canonical(a: i16) -> i16 {
    to_canonical(barrett_reduce(a))
}

/// Subtract `q` once if `a >= q`; `a` must lie in `[0, 2q)`
#[inline(always)]
pub fn csubq(a: i16) -> i16 {
    to_canonical(a - Q)
}
