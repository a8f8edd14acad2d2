//! Bit packing and lossy compression of polynomial coefficients
//!
//! `ByteEncode_d` / `ByteDecode_d` pack 256 `d`-bit integers little-endian,
//! least significant bit first, into `32 * d` bytes. `Compress_d` and
//! `Decompress_d` map between `Z_q` and `Z_(2^d)` with rounding.

use super::params::{N, Q};
use super::polynomial::{Domain, Normal, Polynomial};
use crate::error::{validate, Result};

/// Largest supported bit width
pub const MAX_BITS: usize = 12;

/// Encoded size in bytes of one polynomial at `d` bits per coefficient
#[inline(always)]
pub const fn encoded_len(d: usize) -> usize {
    32 * d
}

/// Packs 256 `d`-bit values into `out`
///
/// Only the low `d` bits of each value are used. `out` must be exactly
/// `32 * d` bytes.
pub fn byte_encode(values: &[u16; N], d: usize, out: &mut [u8]) -> Result<()> {
    validate::bit_width("d", d, MAX_BITS)?;
    validate::length("byte_encode", out.len(), encoded_len(d))?;

    let mask = (1u32 << d) - 1;
    let mut acc = 0u32;
    let mut bits = 0;
    let mut pos = 0;

    for &v in values.iter() {
        acc |= (u32::from(v) & mask) << bits;
        bits += d;
        while bits >= 8 {
            out[pos] = acc as u8;
            pos += 1;
            acc >>= 8;
            bits -= 8;
        }
    }

    Ok(())
}

/// Unpacks `32 * d` bytes into 256 `d`-bit values
///
/// Any other input length is rejected.
pub fn byte_decode(bytes: &[u8], d: usize) -> Result<[u16; N]> {
    validate::bit_width("d", d, MAX_BITS)?;
    validate::length("byte_decode", bytes.len(), encoded_len(d))?;

    let mask = (1u32 << d) - 1;
    let mut values = [0u16; N];
    let mut acc = 0u32;
    let mut bits = 0;
    let mut idx = 0;

    for &b in bytes {
        acc |= u32::from(b) << bits;
        bits += 8;
        while bits >= d {
            values[idx] = (acc & mask) as u16;
            idx += 1;
            acc >>= d;
            bits -= d;
        }
    }

    Ok(values)
}

/// `Compress_d(x) = round(2^d * x / q) mod 2^d` for `x` in `[0, q)`
#[inline(always)]
pub fn compress(x: i16, d: usize) -> u16 {
    let x = x as u32;
    ((((x << d) + (Q as u32 / 2)) / Q as u32) & ((1u32 << d) - 1)) as u16
}

/// `Decompress_d(y) = round(q * y / 2^d)` for `y` in `[0, 2^d)`
#[inline(always)]
pub fn decompress(y: u16, d: usize) -> i16 {
    ((u32::from(y) * Q as u32 + (1u32 << (d - 1))) >> d) as i16
}

/// Encodes a polynomial at 12 bits per coefficient (384 bytes)
pub fn encode_poly_12<D: Domain>(poly: &Polynomial<D>, out: &mut [u8]) -> Result<()> {
    let values: [u16; N] = core::array::from_fn(|i| poly.coeffs()[i] as u16);
    byte_encode(&values, 12, out)
}

/// Decodes 384 bytes at 12 bits per coefficient, reducing each value mod q
pub fn decode_poly_12<D: Domain>(bytes: &[u8]) -> Result<Polynomial<D>> {
    let (poly, _) = decode_poly_12_checked(bytes)?;
    Ok(poly)
}

/// Decodes 384 bytes at 12 bits per coefficient, reducing each value mod q
///
/// The flag is `true` when every decoded value was already below `q`, which
/// is the encapsulation-key modulus check. Decoding itself never branches
/// on the data.
pub fn decode_poly_12_checked<D: Domain>(bytes: &[u8]) -> Result<(Polynomial<D>, bool)> {
    let values = byte_decode(bytes, 12)?;

    let mut over = 0i32;
    let mut coeffs = [0i16; N];
    for (c, &v) in coeffs.iter_mut().zip(values.iter()) {
        let r = v as i32 - Q as i32;
        // Sign bit of r is set exactly when v < q
        let below = r >> 31;
        over |= !below & 1;
        *c = (r + (below & Q as i32)) as i16;
    }

    Ok((Polynomial::from_raw(coeffs), over == 0))
}

/// Compresses a polynomial to `d` bits per coefficient and packs it
pub fn compress_poly(poly: &Polynomial<Normal>, d: usize, out: &mut [u8]) -> Result<()> {
    validate::bit_width("d", d, MAX_BITS - 1)?;
    let values: [u16; N] = core::array::from_fn(|i| compress(poly.coeffs()[i], d));
    byte_encode(&values, d, out)
}

/// Unpacks `d`-bit values and decompresses them into a polynomial
pub fn decompress_poly(bytes: &[u8], d: usize) -> Result<Polynomial<Normal>> {
    validate::bit_width("d", d, MAX_BITS - 1)?;
    let values = byte_decode(bytes, d)?;
    let coeffs: [i16; N] = core::array::from_fn(|i| decompress(values[i], d));
    Ok(Polynomial::from_raw(coeffs))
}

/// Maps a 32-byte message to a polynomial: bit `i` becomes `Decompress_1`,
/// i.e. `0` or `(q + 1) / 2`
pub fn encode_message(msg: &[u8; 32]) -> Polynomial<Normal> {
    let half = (Q + 1) / 2;
    let coeffs: [i16; N] = core::array::from_fn(|i| {
        let bit = ((msg[i / 8] >> (i % 8)) & 1) as i16;
        (-bit) & half
    });
    Polynomial::from_raw(coeffs)
}

/// Recovers a 32-byte message with `Compress_1` on every coefficient
pub fn decode_message(poly: &Polynomial<Normal>) -> [u8; 32] {
    let mut msg = [0u8; 32];
    for (i, &c) in poly.coeffs().iter().enumerate() {
        msg[i / 8] |= (compress(c, 1) as u8) << (i % 8);
    }
    msg
}
