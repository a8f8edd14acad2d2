//! # mlkem
//!
//! A pure Rust implementation of ML-KEM (FIPS 203), the module-lattice
//! key-encapsulation mechanism, at the ML-KEM-512, ML-KEM-768 and
//! ML-KEM-1024 parameter sets.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mlkem = "0.3"
//! ```
//!
//! ```ignore
//! use mlkem::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (ek, dk) = MlKem768::keypair(&mut OsRng)?;
//! let (ct, ss_sender) = MlKem768::encapsulate(&mut OsRng, &ek)?;
//! let ss_receiver = MlKem768::decapsulate(&dk, &ct)?;
//! assert_eq!(ss_sender, ss_receiver);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `kem` (default): the typed ML-KEM API
//! - `serde`: serde support for public artifacts
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the sub-crates:
//!
//! - [`mlkem-api`]: error type and the `Kem`/`Serialize` traits
//! - [`mlkem-common`]: zeroizing secret containers
//! - [`mlkem-params`]: FIPS 203 constants and parameter sets
//! - [`mlkem-algorithms`]: field arithmetic, NTT, sampling, hashing
//! - [`mlkem-kem`]: K-PKE, the FO transform and the typed keys

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use mlkem_api as api;
pub use mlkem_common as common;
pub use mlkem_internal as internal;
pub use mlkem_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use mlkem_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use mlkem_kem as kem;

#[cfg(feature = "kem")]
pub use mlkem_kem::{MlKem1024, MlKem512, MlKem768};

/// Common imports for mlkem users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::api::{Kem, Serialize, SerializeSecret};

    pub use crate::common::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "alloc")]
    pub use crate::common::SecretVec;

    #[cfg(feature = "kem")]
    pub use crate::kem::{
        Ciphertext, DecapsulationKey, EncapsulationKey, MlKem1024, MlKem512, MlKem768,
        MlKemVariant, SharedSecret,
    };
}
