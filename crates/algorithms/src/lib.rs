//! Arithmetic and symmetric primitives underneath ML-KEM
//!
//! This crate provides the polynomial engine over `Z_q[X]/(X^256 + 1)` with
//! `q = 3329`, together with thin adapters exposing SHA3-256, SHA3-512,
//! SHAKE128 and SHAKE256 through the workspace's hash and XOF traits.
//!
//! # Security Features
//!
//! - Coefficients are kept in canonical form `[0, q)` after every public
//!   operation, using branch-free Montgomery and Barrett reductions
//! - Secret polynomials are wiped through `Zeroize`
//! - Domain tags make it impossible to multiply polynomials outside the
//!   NTT domain

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function adapters
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha3_256, Sha3_512};

// XOF adapters
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

// Polynomial engine
pub mod poly;
pub use poly::polynomial::{Domain, Normal, Ntt, Polynomial};

// Re-export security types used alongside the engine
pub use mlkem_common::security::{barrier, EphemeralSecret, SecretBuffer, ZeroizeGuard};
