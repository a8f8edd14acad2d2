//! Security primitives and memory safety utilities
//!
//! Foundational types for handling sensitive cryptographic material.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use secret::SecretVec;

// Re-export memory barrier utilities
pub use memory::barrier;
