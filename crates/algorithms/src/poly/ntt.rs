//! Number Theoretic Transform over `Z_3329`
//!
//! Seven Cooley-Tukey layers take a polynomial to 128 degree-one residues;
//! seven Gentleman-Sande layers bring it back. Twiddles are the powers
//! `17^brv7(i)` stored in Montgomery form, so each butterfly is a single
//! `fqmul`.
//!
//! ## Domain bookkeeping
//! - `ntt` and `inv_ntt` are exact: no Montgomery factor survives either
//!   direction, because the final inverse scale is `R / 128` instead of `1 / 128`
//! - `basemul` leaves a factor `R^-1` on every product, which
//!   [`Polynomial::pointwise_mul`] cancels with one multiplication by `R^2`

use super::params::{INV_NTT_SCALE, MONT_SQ, N};
use super::polynomial::{Normal, Ntt, Polynomial};
use super::reduce::{barrett_reduce, fqmul, reduce_canonical, to_canonical};

/// Twiddle factors `17^brv7(i) * 2^16 mod q`, `i = 0..128`
pub const ZETAS: [i16; 128] = [
    2285, 2571, 2970, 1812, 1493, 1422, 287, 202, 3158, 622, 1577, 182, 962, 2127, 1855, 1468,
    573, 2004, 264, 383, 2500, 1458, 1727, 3199, 2648, 1017, 732, 608, 1787, 411, 3124, 1758,
    1223, 652, 2777, 1015, 2036, 1491, 3047, 1785, 516, 3321, 3009, 2663, 1711, 2167, 126, 1469,
    2476, 3239, 3058, 830, 107, 1908, 3082, 2378, 2931, 961, 1821, 2604, 448, 2264, 677, 2054,
    2226, 430, 555, 843, 2078, 871, 1550, 105, 422, 587, 177, 3094, 3038, 2869, 1574, 1653,
    3083, 778, 1159, 3182, 2552, 1483, 2727, 1119, 1739, 644, 2457, 349, 418, 329, 3173, 3254,
    817, 1097, 603, 610, 1322, 2044, 1864, 384, 2114, 3193, 1218, 1994, 2455, 220, 2142, 1670,
    2144, 1799, 2051, 794, 1819, 2475, 2459, 478, 3221, 3021, 996, 991, 958, 1869, 1522, 1628,
];

/// Forward NTT in place
///
/// Input coefficients must be in `[0, q)`; output is canonical.
pub fn ntt_inplace(r: &mut [i16; N]) {
    let mut k = 1;
    let mut len = 128;
    while len >= 2 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = fqmul(zeta, r[j + len]);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }

    for c in r.iter_mut() {
        *c = reduce_canonical(*c);
    }
}

/// Inverse NTT in place, including the division by 128
///
/// Input coefficients must be in `[0, q)`; output is canonical.
pub fn inv_ntt_inplace(r: &mut [i16; N]) {
    let mut k = 127;
    let mut len = 2;
    while len <= 128 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce(t + r[j + len]);
                r[j + len] = fqmul(zeta, r[j + len] - t);
            }
            start += 2 * len;
        }
        len <<= 1;
    }

    for c in r.iter_mut() {
        *c = reduce_canonical(fqmul(*c, INV_NTT_SCALE));
    }
}

/// Product of `a0 + a1 X` and `b0 + b1 X` modulo `X^2 - zeta`, scaled by `R^-1`
#[inline(always)]
fn basemul(a: [i16; 2], b: [i16; 2], zeta: i16) -> [i16; 2] {
    let r0 = fqmul(fqmul(a[1], b[1]), zeta) + fqmul(a[0], b[0]);
    let r1 = fqmul(a[0], b[1]) + fqmul(a[1], b[0]);
    [r0, r1]
}

/// Multiply two NTT-domain coefficient arrays, returning `a * b * R^-1`
/// with coefficients in `(-2q, 2q)`
pub fn basemul_montgomery(a: &[i16; N], b: &[i16; N]) -> [i16; N] {
    let mut r = [0i16; N];
    for i in 0..N / 4 {
        let zeta = ZETAS[64 + i];
        let lo = 4 * i;
        let hi = 4 * i + 2;

        let [r0, r1] = basemul([a[lo], a[lo + 1]], [b[lo], b[lo + 1]], zeta);
        r[lo] = r0;
        r[lo + 1] = r1;

        let [r2, r3] = basemul([a[hi], a[hi + 1]], [b[hi], b[hi + 1]], -zeta);
        r[hi] = r2;
        r[hi + 1] = r3;
    }
    r
}

impl Polynomial<Normal> {
    /// Transforms into the NTT domain
    pub fn ntt(mut self) -> Polynomial<Ntt> {
        ntt_inplace(self.coeffs_mut());
        Polynomial::from_raw(*self.coeffs())
    }
}

impl Polynomial<Ntt> {
    /// Transforms back into the normal domain
    pub fn inv_ntt(mut self) -> Polynomial<Normal> {
        inv_ntt_inplace(self.coeffs_mut());
        Polynomial::from_raw(*self.coeffs())
    }

    /// Exact product in the NTT domain (`MultiplyNTTs`)
    pub fn pointwise_mul(&self, other: &Self) -> Self {
        let mut r = basemul_montgomery(self.coeffs(), other.coeffs());
        for c in r.iter_mut() {
            // (-2q, 2q) * R^-1 * R^2 * R^-1: factor cancelled, result in (-q, q)
            *c = to_canonical(fqmul(*c, MONT_SQ));
        }
        Polynomial::from_raw(r)
    }

    /// Accumulate `a * b` into `self`
    pub fn add_product(&mut self, a: &Self, b: &Self) {
        let product = a.pointwise_mul(b);
        *self += &product;
    }
}
