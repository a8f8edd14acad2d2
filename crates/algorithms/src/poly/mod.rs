//! Polynomial engine for `Z_3329[X]/(X^256 + 1)`
//!
//! Foundational ring arithmetic for ML-KEM: reductions, the NTT, sampling
//! and the byte codec, all over domain-tagged [`Polynomial`] values.
//!
//! [`Polynomial`]: polynomial::Polynomial

pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod reduce;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::ntt::{inv_ntt_inplace, ntt_inplace};
    pub use super::params::{N, Q};
    pub use super::polynomial::{Domain, Normal, Ntt, Polynomial};
    pub use super::reduce::{barrett_reduce, montgomery_reduce};
    pub use super::sampling::{
        sample_ntt, sample_poly_cbd, CbdSampler, DefaultSamplers, UniformSampler,
    };
    pub use super::serialize::{
        compress_poly, decode_message, decode_poly_12, decode_poly_12_checked,
        decompress_poly, encode_message, encode_poly_12,
    };
}
