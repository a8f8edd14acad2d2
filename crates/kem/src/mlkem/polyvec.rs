//! Polynomial vector operations for ML-KEM.

use alloc::vec::Vec;
use core::ops::AddAssign;

use mlkem_algorithms::poly::prelude::*;
use mlkem_algorithms::poly::serialize::encoded_len;
use mlkem_algorithms::xof::ShakeXof128;
use zeroize::Zeroize;

use super::params::{POLY_BYTES, SYMBYTES};
use crate::error::{validate, Result};

/// A vector of `k` polynomials in one domain.
///
/// Wiped on drop, since it holds secrets as often as public values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PolyVec<D: Domain> {
    polys: Vec<Polynomial<D>>,
}

impl<D: Domain> PolyVec<D> {
    /// Creates a zero vector of dimension `k`.
    pub fn zero(k: usize) -> Self {
        Self {
            polys: (0..k).map(|_| Polynomial::zero()).collect(),
        }
    }

    /// Wraps existing polynomials.
    pub fn from_polys(polys: Vec<Polynomial<D>>) -> Self {
        Self { polys }
    }

    /// Dimension of the vector.
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Whether the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// The entries of the vector.
    pub fn polys(&self) -> &[Polynomial<D>] {
        &self.polys
    }

    /// Encodes every entry at 12 bits per coefficient into `out`
    /// (`384 * k` bytes).
    pub fn encode_12(&self, out: &mut [u8]) -> Result<()> {
        validate::length("polynomial vector", out.len(), self.polys.len() * POLY_BYTES)?;
        for (poly, chunk) in self.polys.iter().zip(out.chunks_exact_mut(POLY_BYTES)) {
            encode_poly_12(poly, chunk)?;
        }
        Ok(())
    }

    /// Decodes `k` polynomials at 12 bits per coefficient, reducing mod q.
    ///
    /// The flag is `true` when no decoded value needed reduction.
    pub fn decode_12_checked(bytes: &[u8], k: usize) -> Result<(Self, bool)> {
        validate::length("polynomial vector", bytes.len(), k * POLY_BYTES)?;
        let mut polys = Vec::with_capacity(k);
        let mut in_range = true;
        for chunk in bytes.chunks_exact(POLY_BYTES) {
            let (poly, ok) = decode_poly_12_checked(chunk)?;
            in_range &= ok;
            polys.push(poly);
        }
        Ok((Self { polys }, in_range))
    }
}

impl PolyVec<Normal> {
    /// Transforms every entry into the NTT domain.
    pub fn ntt(mut self) -> PolyVec<Ntt> {
        let polys = core::mem::take(&mut self.polys);
        PolyVec {
            polys: polys.into_iter().map(|p| p.ntt()).collect(),
        }
    }

    /// Compresses every entry to `d` bits and packs them into `out`.
    pub fn compress(&self, d: usize, out: &mut [u8]) -> Result<()> {
        validate::length("compressed vector", out.len(), self.polys.len() * encoded_len(d))?;
        for (poly, chunk) in self.polys.iter().zip(out.chunks_exact_mut(encoded_len(d))) {
            compress_poly(poly, d, chunk)?;
        }
        Ok(())
    }

    /// Unpacks and decompresses `k` entries of `d` bits each.
    pub fn decompress(bytes: &[u8], d: usize, k: usize) -> Result<Self> {
        validate::length("compressed vector", bytes.len(), k * encoded_len(d))?;
        let polys = bytes
            .chunks_exact(encoded_len(d))
            .map(|chunk| decompress_poly(chunk, d))
            .collect::<core::result::Result<Vec<_>, _>>()?;
        Ok(Self { polys })
    }
}

impl PolyVec<Ntt> {
    /// Transforms every entry back into the normal domain.
    pub fn inv_ntt(mut self) -> PolyVec<Normal> {
        let polys = core::mem::take(&mut self.polys);
        PolyVec {
            polys: polys.into_iter().map(|p| p.inv_ntt()).collect(),
        }
    }

    /// Inner product `sum(self[i] * other[i])` in the NTT domain.
    pub fn dot(&self, other: &Self) -> Polynomial<Ntt> {
        let mut acc = Polynomial::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.add_product(a, b);
        }
        acc
    }
}

impl<D: Domain> AddAssign<&PolyVec<D>> for PolyVec<D> {
    fn add_assign(&mut self, other: &PolyVec<D>) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            *a += b;
        }
    }
}

impl<D: Domain> Zeroize for PolyVec<D> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<D: Domain> Drop for PolyVec<D> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// The `k x k` matrix `Â` in the NTT domain, one row per `PolyVec`.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: Vec<PolyVec<Ntt>>,
}

impl Matrix {
    /// Expands `Â` from `rho`.
    ///
    /// Entry `(i, j)` is `SampleNTT(rho || j || i)`. With `transposed` the
    /// matrix is `Âᵀ`, i.e. entry `(i, j)` is `SampleNTT(rho || i || j)`.
    pub fn generate(rho: &[u8; SYMBYTES], k: usize, transposed: bool) -> Result<Self> {
        let mut seed = [0u8; SYMBYTES + 2];
        seed[..SYMBYTES].copy_from_slice(rho);

        let mut rows = Vec::with_capacity(k);
        for i in 0..k {
            let mut row = Vec::with_capacity(k);
            for j in 0..k {
                let (a, b) = if transposed { (i, j) } else { (j, i) };
                seed[SYMBYTES] = a as u8;
                seed[SYMBYTES + 1] = b as u8;

                let mut xof = ShakeXof128::with_input(&seed);
                row.push(sample_ntt(&mut xof)?);
            }
            rows.push(PolyVec::from_polys(row));
        }

        Ok(Self { rows })
    }

    /// Matrix-vector product `M * v` in the NTT domain.
    pub fn mul_vec(&self, v: &PolyVec<Ntt>) -> PolyVec<Ntt> {
        PolyVec::from_polys(self.rows.iter().map(|row| row.dot(v)).collect())
    }

    /// Rows of the matrix.
    pub fn rows(&self) -> &[PolyVec<Ntt>] {
        &self.rows
    }
}
