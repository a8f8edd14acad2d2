//! Validation helpers that turn boolean checks into typed errors

use super::types::{Error, Result};

#[cfg(feature = "std")]
use std::string::String;

/// Validate that a byte length matches exactly
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, _reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: String::from(_reason),
        });
    }
    Ok(())
}

/// Validate key material that already has the right size
#[inline(always)]
pub fn key(condition: bool, context: &'static str, _reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey {
            context,
            #[cfg(feature = "std")]
            message: String::from(_reason),
        });
    }
    Ok(())
}

/// Validate output drawn from a random source
#[inline(always)]
pub fn randomness(condition: bool, context: &'static str, _reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::RandomnessFailure {
            context,
            #[cfg(feature = "std")]
            message: String::from(_reason),
        });
    }
    Ok(())
}
