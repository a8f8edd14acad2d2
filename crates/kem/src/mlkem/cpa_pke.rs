//! K-PKE, the IND-CPA public-key encryption scheme underneath ML-KEM.
//!
//! All three operations are deterministic; randomness enters only through
//! the seeds `d` and `r` supplied by the caller.

use alloc::vec::Vec;

use mlkem_algorithms::hash::{HashFunction, Sha3_512};
use mlkem_algorithms::poly::prelude::*;
use mlkem_algorithms::xof::{ExtendableOutputFunction, ShakeXof256};
use mlkem_common::{EphemeralSecret, ZeroizeGuard};
use zeroize::Zeroizing;

use super::params::{MlKemParams, SYMBYTES};
use super::polyvec::{Matrix, PolyVec};
use super::serialize::{pack_ciphertext, pack_dk_pke, pack_ek, unpack_ciphertext, unpack_dk_pke, unpack_ek};
use crate::error::Result;

/// Largest PRF output: `64 * eta` with `eta <= 3`
const PRF_MAX_BYTES: usize = 64 * 3;

/// `PRF_eta(s, b) = SHAKE256(s || b)`, `64 * eta` bytes, fed to the CBD sampler
fn sample_noise(eta: usize, seed: &[u8; SYMBYTES], nonce: &mut u8) -> Result<Polynomial<Normal>> {
    let mut input_buf = [0u8; SYMBYTES + 1];
    let mut input = ZeroizeGuard::new(&mut input_buf);
    input[..SYMBYTES].copy_from_slice(seed);
    input[SYMBYTES] = *nonce;
    *nonce = nonce.wrapping_add(1);

    let mut prf = ShakeXof256::with_input(&input[..]);
    let mut out_buf = [0u8; PRF_MAX_BYTES];
    let mut buf = ZeroizeGuard::new(&mut out_buf);
    let out = &mut buf[..64 * eta];
    prf.squeeze(out)?;

    Ok(sample_poly_cbd(eta, out)?)
}

fn sample_noise_vec(
    eta: usize,
    seed: &[u8; SYMBYTES],
    nonce: &mut u8,
    k: usize,
) -> Result<PolyVec<Normal>> {
    let polys = (0..k)
        .map(|_| sample_noise(eta, seed, nonce))
        .collect::<Result<Vec<_>>>()?;
    Ok(PolyVec::from_polys(polys))
}

/// K-PKE key generation from the 32-byte seed `d`
///
/// Returns `(ek, dk_pke)`.
pub fn keygen<P: MlKemParams>(d: &[u8; SYMBYTES]) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    // (rho, sigma) = G(d || k)
    let mut g_buf = [0u8; SYMBYTES + 1];
    let mut g_input = ZeroizeGuard::new(&mut g_buf);
    g_input[..SYMBYTES].copy_from_slice(d);
    g_input[SYMBYTES] = P::K as u8;
    let g_out = Zeroizing::new(Sha3_512::digest(&g_input[..])?);

    let mut rho = [0u8; SYMBYTES];
    rho.copy_from_slice(&g_out[..SYMBYTES]);
    let mut sigma = EphemeralSecret::new([0u8; SYMBYTES]);
    sigma.copy_from_slice(&g_out[SYMBYTES..]);

    let a_hat = Matrix::generate(&rho, P::K, false)?;

    let mut nonce = 0u8;
    let s = sample_noise_vec(P::ETA1, &sigma, &mut nonce, P::K)?;
    let e = sample_noise_vec(P::ETA1, &sigma, &mut nonce, P::K)?;

    let s_hat = s.ntt();
    let e_hat = e.ntt();

    // t̂ = Â ∘ ŝ + ê
    let mut t_hat = a_hat.mul_vec(&s_hat);
    t_hat += &e_hat;

    let ek = pack_ek::<P>(&t_hat, &rho)?;
    let dk = pack_dk_pke::<P>(&s_hat)?;
    Ok((ek, dk))
}

/// K-PKE encryption of the 32-byte message `m` with randomness `r`
pub fn encrypt<P: MlKemParams>(ek: &[u8], m: &[u8; SYMBYTES], r: &[u8; SYMBYTES]) -> Result<Vec<u8>> {
    let (t_hat, rho, _) = unpack_ek::<P>(ek)?;
    let a_hat_t = Matrix::generate(&rho, P::K, true)?;

    let mut nonce = 0u8;
    let y = sample_noise_vec(P::ETA1, r, &mut nonce, P::K)?;
    let e1 = sample_noise_vec(P::ETA2, r, &mut nonce, P::K)?;
    let e2 = Zeroizing::new(sample_noise(P::ETA2, r, &mut nonce)?);

    let y_hat = y.ntt();

    // u = NTT^-1(Âᵀ ∘ ŷ) + e1
    let mut u = a_hat_t.mul_vec(&y_hat).inv_ntt();
    u += &e1;

    // v = NTT^-1(t̂ᵀ ∘ ŷ) + e2 + Decompress_1(m)
    let mu = Zeroizing::new(encode_message(m));
    let mut v = Zeroizing::new(t_hat.dot(&y_hat).inv_ntt());
    *v += &*e2;
    *v += &*mu;

    pack_ciphertext::<P>(&u, &v)
}

/// K-PKE decryption of `c` with the decryption key `dk_pke`
pub fn decrypt<P: MlKemParams>(dk: &[u8], c: &[u8]) -> Result<Zeroizing<[u8; SYMBYTES]>> {
    let (u, v) = unpack_ciphertext::<P>(c)?;
    let s_hat = unpack_dk_pke::<P>(dk)?;

    // w = v - NTT^-1(ŝᵀ ∘ NTT(u))
    let su = Zeroizing::new(s_hat.dot(&u.ntt()).inv_ntt());
    let w = Zeroizing::new(&v - &*su);

    Ok(Zeroizing::new(decode_message(&w)))
}
