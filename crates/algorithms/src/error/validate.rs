//! Validation utilities for the primitives layer

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a bit width lies in `1..=max`
#[inline(always)]
pub fn bit_width(name: &'static str, bits: usize, max: usize) -> Result<()> {
    parameter(
        (1..=max).contains(&bits),
        name,
        "bit width outside the supported range",
    )
}
