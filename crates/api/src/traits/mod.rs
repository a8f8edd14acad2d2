//! Trait definitions shared by every ML-KEM parameter set

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};
