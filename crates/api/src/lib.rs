//! Public API traits and types for the mlkem workspace
//!
//! This crate provides the public API surface: the `Kem` trait every
//! parameter set implements, the serialization contracts for keys and
//! ciphertexts, and the error type returned across crate boundaries.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
