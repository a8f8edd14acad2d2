//! Error handling for KEM operations

#[cfg(feature = "std")]
use std::string::String;

use core::fmt;
use mlkem_algorithms::error::Error as PrimitiveError;
use mlkem_api::error::Error as CoreError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error raised by the arithmetic or symmetric primitives
    Primitive(PrimitiveError),

    /// Key material of the right size that failed validation
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Byte length does not match the parameter set
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Byte length does not match any parameter set
    UnsupportedVariant {
        context: &'static str,
        length: usize,
    },

    /// The random source produced unusable output
    RandomnessFailure {
        algorithm: &'static str,
        details: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::UnsupportedVariant { context, length } => {
                write!(f, "No ML-KEM parameter set matches {} of {} bytes", context, length)
            }
            Error::RandomnessFailure { algorithm, details } => {
                write!(f, "Randomness failure in {}: {}", algorithm, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                #[cfg(feature = "std")]
                message: String::from(reason),
            },
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::UnsupportedVariant { context, length } => {
                CoreError::UnsupportedVariant { context, length }
            }
            Error::RandomnessFailure { algorithm, details } => CoreError::RandomnessFailure {
                context: algorithm,
                #[cfg(feature = "std")]
                message: String::from(details),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
