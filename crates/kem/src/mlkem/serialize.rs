//! Byte layouts of ML-KEM keys and ciphertexts.
//!
//! - encapsulation key: `ByteEncode12(t̂) || rho`
//! - K-PKE decryption key: `ByteEncode12(ŝ)`
//! - decapsulation key: `dk_pke || ek || H(ek) || z`
//! - ciphertext: `ByteEncode_du(Compress_du(u)) || ByteEncode_dv(Compress_dv(v))`
//!
//! Every unpack function checks the exact length before decoding.

use alloc::vec;
use alloc::vec::Vec;

use mlkem_algorithms::poly::prelude::*;
use zeroize::Zeroizing;

use super::params::{MlKemParams, SYMBYTES};
use super::polyvec::PolyVec;
use crate::error::{validate, Result};

/// Borrowed components of a decapsulation key
#[derive(Debug, Clone, Copy)]
pub struct DecapsulationKeyParts<'a> {
    /// `ByteEncode12(ŝ)`
    pub dk_pke: &'a [u8],
    /// Embedded encapsulation key
    pub ek: &'a [u8],
    /// `H(ek)` as stored at key generation
    pub h: &'a [u8],
    /// Implicit-rejection seed
    pub z: &'a [u8],
}

/// Packs `ByteEncode12(t̂) || rho`
pub fn pack_ek<P: MlKemParams>(t_hat: &PolyVec<Ntt>, rho: &[u8; SYMBYTES]) -> Result<Vec<u8>> {
    let mut out = vec![0u8; P::ENCAPSULATION_KEY_BYTES];
    let (polys, seed) = out.split_at_mut(P::PKE_DECRYPTION_KEY_BYTES);
    t_hat.encode_12(polys)?;
    seed.copy_from_slice(rho);
    Ok(out)
}

/// Unpacks an encapsulation key into `(t̂, rho, in_range)`
///
/// `in_range` is the modulus check: `false` when some 12-bit value of `t̂`
/// was `>= q` and had to be reduced.
pub fn unpack_ek<P: MlKemParams>(bytes: &[u8]) -> Result<(PolyVec<Ntt>, [u8; SYMBYTES], bool)> {
    validate::length("encapsulation key", bytes.len(), P::ENCAPSULATION_KEY_BYTES)?;

    let (polys, seed) = bytes.split_at(P::PKE_DECRYPTION_KEY_BYTES);
    let (t_hat, in_range) = PolyVec::decode_12_checked(polys, P::K)?;
    let mut rho = [0u8; SYMBYTES];
    rho.copy_from_slice(seed);

    Ok((t_hat, rho, in_range))
}

/// Packs `ByteEncode12(ŝ)`
pub fn pack_dk_pke<P: MlKemParams>(s_hat: &PolyVec<Ntt>) -> Result<Zeroizing<Vec<u8>>> {
    let mut out = Zeroizing::new(vec![0u8; P::PKE_DECRYPTION_KEY_BYTES]);
    s_hat.encode_12(&mut out)?;
    Ok(out)
}

/// Unpacks `ŝ`, reducing any out-of-range value mod q
pub fn unpack_dk_pke<P: MlKemParams>(bytes: &[u8]) -> Result<PolyVec<Ntt>> {
    validate::length("K-PKE decryption key", bytes.len(), P::PKE_DECRYPTION_KEY_BYTES)?;
    let (s_hat, _) = PolyVec::decode_12_checked(bytes, P::K)?;
    Ok(s_hat)
}

/// Assembles `dk_pke || ek || H(ek) || z`
pub fn pack_dk<P: MlKemParams>(
    dk_pke: &[u8],
    ek: &[u8],
    h: &[u8; SYMBYTES],
    z: &[u8; SYMBYTES],
) -> Result<Zeroizing<Vec<u8>>> {
    validate::length("K-PKE decryption key", dk_pke.len(), P::PKE_DECRYPTION_KEY_BYTES)?;
    validate::length("encapsulation key", ek.len(), P::ENCAPSULATION_KEY_BYTES)?;

    let mut out = Zeroizing::new(Vec::with_capacity(P::DECAPSULATION_KEY_BYTES));
    out.extend_from_slice(dk_pke);
    out.extend_from_slice(ek);
    out.extend_from_slice(h);
    out.extend_from_slice(z);
    Ok(out)
}

/// Splits a decapsulation key into its four components
pub fn split_dk<P: MlKemParams>(bytes: &[u8]) -> Result<DecapsulationKeyParts<'_>> {
    validate::length("decapsulation key", bytes.len(), P::DECAPSULATION_KEY_BYTES)?;

    let (dk_pke, rest) = bytes.split_at(P::PKE_DECRYPTION_KEY_BYTES);
    let (ek, rest) = rest.split_at(P::ENCAPSULATION_KEY_BYTES);
    let (h, z) = rest.split_at(SYMBYTES);

    Ok(DecapsulationKeyParts { dk_pke, ek, h, z })
}

/// Compresses and packs `(u, v)`
pub fn pack_ciphertext<P: MlKemParams>(u: &PolyVec<Normal>, v: &Polynomial<Normal>) -> Result<Vec<u8>> {
    let mut out = vec![0u8; P::CIPHERTEXT_BYTES];
    let (c1, c2) = out.split_at_mut(P::U_BYTES);
    u.compress(P::DU, c1)?;
    compress_poly(v, P::DV, c2)?;
    Ok(out)
}

/// Unpacks and decompresses `(u, v)`
pub fn unpack_ciphertext<P: MlKemParams>(bytes: &[u8]) -> Result<(PolyVec<Normal>, Polynomial<Normal>)> {
    validate::length("ciphertext", bytes.len(), P::CIPHERTEXT_BYTES)?;

    let (c1, c2) = bytes.split_at(P::U_BYTES);
    let u = PolyVec::decompress(c1, P::DU, P::K)?;
    let v = decompress_poly(c2, P::DV)?;
    Ok((u, v))
}
