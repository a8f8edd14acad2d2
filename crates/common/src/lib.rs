//! Common implementations and shared functionality for the mlkem workspace
//!
//! This crate provides the wipe-on-drop containers used for seeds, messages
//! and intermediate secret values throughout key generation, encapsulation
//! and decapsulation.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::secret::SecretVec;

// Re-export memory barrier utilities
pub use security::memory::barrier;
