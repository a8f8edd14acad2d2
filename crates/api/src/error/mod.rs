//! Error handling for the ML-KEM ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}
