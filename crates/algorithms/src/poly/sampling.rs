//! Pseudorandom polynomial sampling
//!
//! - [`UniformSampler`]: rejection sampling of NTT-domain coefficients from
//!   an XOF stream (`SampleNTT`)
//! - [`CbdSampler`]: centered binomial noise from PRF output (`SamplePolyCBD`)

use super::params::{N, Q};
use super::polynomial::{Normal, Ntt, Polynomial};
use super::reduce::to_canonical;
use crate::error::{validate, Result};
use crate::xof::ExtendableOutputFunction;

use mlkem_params::utils::hash::SHAKE128_RATE;

/// Trait for sampling uniformly random NTT-domain polynomials
pub trait UniformSampler {
    /// Samples a polynomial whose coefficients are uniform in `[0, q)`
    ///
    /// `xof` must already have absorbed its seed; output is drawn one
    /// SHAKE128 block at a time until 256 coefficients are accepted.
    fn sample_ntt<X: ExtendableOutputFunction>(xof: &mut X) -> Result<Polynomial<Ntt>>;
}

/// Trait for sampling from the centered binomial distribution
pub trait CbdSampler {
    /// Samples a polynomial with coefficients `x - y mod q`, where `x` and
    /// `y` are each the sum of `eta` bits of `bytes`
    ///
    /// `bytes` must be exactly `64 * eta` long.
    fn sample_cbd(eta: usize, bytes: &[u8]) -> Result<Polynomial<Normal>>;
}

/// Default implementation of the ML-KEM samplers
pub struct DefaultSamplers;

impl UniformSampler for DefaultSamplers {
    fn sample_ntt<X: ExtendableOutputFunction>(xof: &mut X) -> Result<Polynomial<Ntt>> {
        let mut coeffs = [0i16; N];
        let mut block = [0u8; SHAKE128_RATE];
        let mut j = 0;

        while j < N {
            xof.squeeze(&mut block)?;
            for triple in block.chunks_exact(3) {
                let d1 = u16::from(triple[0]) | (u16::from(triple[1] & 0x0F) << 8);
                let d2 = (u16::from(triple[1]) >> 4) | (u16::from(triple[2]) << 4);

                if d1 < Q as u16 {
                    coeffs[j] = d1 as i16;
                    j += 1;
                }
                if d2 < Q as u16 && j < N {
                    coeffs[j] = d2 as i16;
                    j += 1;
                }
                if j == N {
                    break;
                }
            }
        }

        Ok(Polynomial::from_raw(coeffs))
    }
}

impl CbdSampler for DefaultSamplers {
    fn sample_cbd(eta: usize, bytes: &[u8]) -> Result<Polynomial<Normal>> {
        validate::parameter(eta == 2 || eta == 3, "eta", "CBD parameter must be 2 or 3")?;
        validate::length("sample_cbd", bytes.len(), 64 * eta)?;

        let bit = |k: usize| -> i16 { ((bytes[k / 8] >> (k % 8)) & 1) as i16 };

        let mut coeffs = [0i16; N];
        for (i, c) in coeffs.iter_mut().enumerate() {
            let base = 2 * i * eta;
            let mut x = 0i16;
            let mut y = 0i16;
            for b in 0..eta {
                x += bit(base + b);
                y += bit(base + eta + b);
            }
            *c = to_canonical(x - y);
        }

        Ok(Polynomial::from_raw(coeffs))
    }
}

/// Convenience wrapper for [`UniformSampler::sample_ntt`]
pub fn sample_ntt<X: ExtendableOutputFunction>(xof: &mut X) -> Result<Polynomial<Ntt>> {
    DefaultSamplers::sample_ntt(xof)
}

/// Convenience wrapper for [`CbdSampler::sample_cbd`]
pub fn sample_poly_cbd(eta: usize, bytes: &[u8]) -> Result<Polynomial<Normal>> {
    DefaultSamplers::sample_cbd(eta, bytes)
}
