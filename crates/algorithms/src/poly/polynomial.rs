//! Domain-tagged polynomials over `Z_q[X]/(X^256 + 1)`
//!
//! A [`Polynomial`] carries a zero-sized tag recording whether its
//! coefficients are in the normal domain or the NTT domain. The only way to
//! change the tag is [`Polynomial::ntt`] / [`Polynomial::inv_ntt`], and
//! multiplication exists only on `Polynomial<Ntt>`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use zeroize::Zeroize;

use super::params::{N, Q};
use super::reduce::{csubq, to_canonical};
use crate::error::{validate, Result};

mod private {
    pub trait Sealed {}
}

/// Representation domain of a polynomial
pub trait Domain:
    private::Sealed + Copy + Eq + fmt::Debug + Default + Send + Sync + 'static
{
    /// Human-readable tag, used in `Debug` output
    const NAME: &'static str;
}

/// Coefficient (normal) domain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Normal;

/// NTT domain: 128 degree-one residues modulo `X^2 - zeta^(2 brv(i) + 1)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ntt;

impl private::Sealed for Normal {}
impl private::Sealed for Ntt {}

impl Domain for Normal {
    const NAME: &'static str = "Normal";
}

impl Domain for Ntt {
    const NAME: &'static str = "Ntt";
}

/// Polynomial with 256 coefficients in canonical form `[0, q)`
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial<D: Domain> {
    coeffs: [i16; N],
    _domain: PhantomData<D>,
}

impl<D: Domain> Polynomial<D> {
    /// Creates a zero polynomial
    pub fn zero() -> Self {
        Self::from_raw([0i16; N])
    }

    /// Wraps coefficients already known to lie in `[0, q)`
    #[inline(always)]
    pub(crate) fn from_raw(coeffs: [i16; N]) -> Self {
        Self {
            coeffs,
            _domain: PhantomData,
        }
    }

    /// Creates a polynomial from a slice of coefficients
    ///
    /// The slice must hold exactly 256 values, each smaller than `q`.
    pub fn from_coeffs(coeffs_slice: &[u16]) -> Result<Self> {
        validate::length("Polynomial::from_coeffs", coeffs_slice.len(), N)?;
        validate::parameter(
            coeffs_slice.iter().all(|&c| c < Q as u16),
            "coefficients",
            "coefficient not reduced modulo q",
        )?;

        let mut coeffs = [0i16; N];
        for (dst, &src) in coeffs.iter_mut().zip(coeffs_slice) {
            *dst = src as i16;
        }
        Ok(Self::from_raw(coeffs))
    }

    /// Returns the polynomial degree N
    pub fn degree() -> usize {
        N
    }

    /// Returns the coefficient modulus q
    pub fn modulus_q() -> u16 {
        Q as u16
    }

    /// Read-only view of the coefficients
    pub fn coeffs(&self) -> &[i16; N] {
        &self.coeffs
    }

    /// Mutable access restricted to the engine; callers must keep
    /// coefficients canonical
    #[inline(always)]
    pub(crate) fn coeffs_mut(&mut self) -> &mut [i16; N] {
        &mut self.coeffs
    }

    /// Coefficient-wise addition mod q
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add_assign(other);
        result
    }

    /// Coefficient-wise subtraction mod q
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.sub_assign(other);
        result
    }
}

impl<D: Domain> AddAssign<&Polynomial<D>> for Polynomial<D> {
    fn add_assign(&mut self, other: &Polynomial<D>) {
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = csubq(*a + b);
        }
    }
}

impl<D: Domain> SubAssign<&Polynomial<D>> for Polynomial<D> {
    fn sub_assign(&mut self, other: &Polynomial<D>) {
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = to_canonical(*a - b);
        }
    }
}

impl<D: Domain> Add for &Polynomial<D> {
    type Output = Polynomial<D>;

    fn add(self, other: Self) -> Polynomial<D> {
        Polynomial::<D>::add(self, other)
    }
}

impl<D: Domain> Add for Polynomial<D> {
    type Output = Polynomial<D>;

    fn add(mut self, other: Self) -> Polynomial<D> {
        self += &other;
        self
    }
}

impl<D: Domain> Sub for &Polynomial<D> {
    type Output = Polynomial<D>;

    fn sub(self, other: Self) -> Polynomial<D> {
        Polynomial::<D>::sub(self, other)
    }
}

impl<D: Domain> Sub for Polynomial<D> {
    type Output = Polynomial<D>;

    fn sub(mut self, other: Self) -> Polynomial<D> {
        self -= &other;
        self
    }
}

impl<D: Domain> Default for Polynomial<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D: Domain> Zeroize for Polynomial<D> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<D: Domain> fmt::Debug for Polynomial<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("domain", &D::NAME)
            .field("coeffs", &&self.coeffs[..])
            .finish()
    }
}
