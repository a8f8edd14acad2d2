//! ML-KEM IND-CCA2 construction (Fujisaki-Okamoto transform with implicit
//! rejection) over K-PKE.
//!
//! These are the deterministic `_internal` algorithms; the `Kem` impl draws
//! the seeds and handles typed keys.

use alloc::vec::Vec;

use mlkem_algorithms::hash::{HashFunction, Sha3_256, Sha3_512};
use mlkem_algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use mlkem_common::barrier;
use mlkem_internal::constant_time::ct_select_array;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::cpa_pke;
use super::params::{MlKemParams, SYMBYTES};
use super::serialize::{pack_dk, split_dk};
use crate::error::{validate, Result};

/// H: SHA3-256
pub(crate) fn h_func(data: &[u8]) -> Result<[u8; SYMBYTES]> {
    Ok(Sha3_256::digest(data)?)
}

/// G: SHA3-512 over `a || b`, split into two 32-byte halves
pub(crate) fn g_func(
    a: &[u8],
    b: &[u8],
) -> Result<(Zeroizing<[u8; SYMBYTES]>, Zeroizing<[u8; SYMBYTES]>)> {
    let mut hasher = Sha3_512::new();
    hasher.update(a)?.update(b)?;
    let digest = Zeroizing::new(hasher.finalize()?);

    let mut first = Zeroizing::new([0u8; SYMBYTES]);
    let mut second = Zeroizing::new([0u8; SYMBYTES]);
    first.copy_from_slice(&digest[..SYMBYTES]);
    second.copy_from_slice(&digest[SYMBYTES..]);
    Ok((first, second))
}

/// J: SHAKE256 over `z || c`, 32 bytes of output
pub(crate) fn j_func(z: &[u8], c: &[u8]) -> Result<Zeroizing<[u8; SYMBYTES]>> {
    let mut xof = ShakeXof256::new();
    xof.update(z)?;
    xof.update(c)?;
    let mut out = Zeroizing::new([0u8; SYMBYTES]);
    xof.squeeze(&mut out[..])?;
    Ok(out)
}

/// `ML-KEM.KeyGen_internal(d, z)`, returning `(ek, dk)`
pub fn keygen_internal<P: MlKemParams>(
    d: &[u8; SYMBYTES],
    z: &[u8; SYMBYTES],
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let (ek, dk_pke) = cpa_pke::keygen::<P>(d)?;
    let h = h_func(&ek)?;
    let dk = pack_dk::<P>(&dk_pke, &ek, &h, z)?;
    Ok((ek, dk))
}

/// `ML-KEM.Encaps_internal(ek, m)`, returning `(K, c)`
///
/// The caller is responsible for checking `ek`; this function only checks
/// its length.
pub fn encaps_internal<P: MlKemParams>(
    ek: &[u8],
    m: &[u8; SYMBYTES],
) -> Result<(Zeroizing<[u8; SYMBYTES]>, Vec<u8>)> {
    validate::length("encapsulation key", ek.len(), P::ENCAPSULATION_KEY_BYTES)?;

    // (K, r) = G(m || H(ek))
    let h = h_func(ek)?;
    let (k, r) = g_func(m, &h)?;

    let c = cpa_pke::encrypt::<P>(ek, m, &r)?;
    Ok((k, c))
}

/// `ML-KEM.Decaps_internal(dk, c)`
///
/// Never fails on a well-sized ciphertext: a ciphertext that does not
/// re-encrypt to itself yields `J(z || c)`. Both outcomes run the same
/// operations and are chosen by a constant-time select.
pub fn decaps_internal<P: MlKemParams>(dk: &[u8], c: &[u8]) -> Result<Zeroizing<[u8; SYMBYTES]>> {
    validate::length("ciphertext", c.len(), P::CIPHERTEXT_BYTES)?;
    let parts = split_dk::<P>(dk)?;

    let m_prime = cpa_pke::decrypt::<P>(parts.dk_pke, c)?;

    // (K', r') = G(m' || h)
    let (k_prime, r_prime) = g_func(&m_prime[..], parts.h)?;
    let k_bar = j_func(parts.z, c)?;

    let c_prime = Zeroizing::new(cpa_pke::encrypt::<P>(parts.ek, &m_prime, &r_prime)?);

    Ok(barrier::with_barriers(|| {
        let equal = c.ct_eq(&c_prime[..]);
        Zeroizing::new(ct_select_array(&*k_bar, &*k_prime, equal))
    }))
}
