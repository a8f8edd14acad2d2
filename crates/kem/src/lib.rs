//! ML-KEM key encapsulation
//!
//! This crate implements the module-lattice KEM standardized in FIPS 203
//! at all three parameter sets, on top of the polynomial engine and hash
//! adapters of `mlkem-algorithms`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod mlkem;

// Re-exports
pub use error::{Error, Result};
pub use mlkem::{
    Ciphertext, DecapsulationKey, EncapsulationKey, MlKem, MlKem1024, MlKem512, MlKem768,
    MlKemParams, MlKemVariant, SharedSecret,
};
