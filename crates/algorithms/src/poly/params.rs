//! Ring constants for `Z_q[X]/(X^256 + 1)`

use mlkem_params::pqc::mlkem::{MLKEM_N, MLKEM_Q};

/// Polynomial degree
pub const N: usize = MLKEM_N;

/// Coefficient modulus
pub const Q: i16 = MLKEM_Q as i16;

/// `q^-1 mod 2^16`, as a signed 16-bit value
pub const QINV: i16 = -3327;

/// `2^16 mod q`: the Montgomery factor R
pub const MONT: i16 = 2285;

/// `2^32 mod q`: multiplying by it under Montgomery reduction yields `x * R`
pub const MONT_SQ: i16 = 1353;

/// `R / 128 mod q`: final inverse-NTT scale that divides by 128 and cancels
/// the Montgomery factor introduced by `fqmul`
pub const INV_NTT_SCALE: i16 = 512;

/// `round(2^26 / q)` for Barrett reduction
pub const BARRETT_V: i32 = 20159;
