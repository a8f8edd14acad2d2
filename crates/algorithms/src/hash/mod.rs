//! Fixed-output hash functions
//!
//! ML-KEM needs two of them: `H = SHA3-256` over encapsulation keys and
//! `G = SHA3-512` for seed expansion. Both sit behind [`HashFunction`] so the
//! KEM layer never touches the backing implementation directly.

use crate::error::Result;

pub mod sha3;

pub use self::sha3::{Sha3_256, Sha3_256Algorithm, Sha3_512, Sha3_512Algorithm};

/// Compile-time description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Sponge rate in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Trait for incremental hash functions
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: HashAlgorithm;

    /// Digest type
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new hasher
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produces the digest and resets the hasher to its initial state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest size in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Sponge rate in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        <Self::Algorithm as HashAlgorithm>::ALGORITHM_ID
    }

    /// One-shot hash of a single input
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
