//! Error type definitions for ML-KEM operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for the public ML-KEM surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material of the right size that was nevertheless rejected
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Byte length does not match the selected parameter set
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Byte length does not match any known parameter set
    UnsupportedVariant {
        context: &'static str,
        length: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The random source produced output that failed a sanity check
    RandomnessFailure {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for ML-KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::UnsupportedVariant { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::RandomnessFailure { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    #[cfg(feature = "std")]
    fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { message, .. }
            | Self::InvalidParameter { message, .. }
            | Self::RandomnessFailure { message, .. }
            | Self::Other { message, .. } => {
                if message.is_empty() {
                    None
                } else {
                    Some(message.as_str())
                }
            }
            Self::InvalidLength { .. } | Self::UnsupportedVariant { .. } => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, .. } => write!(f, "Invalid key: {}", context)?,
            Self::InvalidLength { context, expected, actual } => {
                return write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                );
            }
            Self::UnsupportedVariant { context, length } => {
                return write!(
                    f,
                    "{}: length {} does not match any ML-KEM parameter set",
                    context, length
                );
            }
            Self::InvalidParameter { context, .. } => {
                write!(f, "Invalid parameter: {}", context)?
            }
            Self::RandomnessFailure { context, .. } => {
                write!(f, "Randomness failure: {}", context)?
            }
            Self::Other { context, .. } => write!(f, "Error: {}", context)?,
        }

        #[cfg(feature = "std")]
        if let Some(message) = self.message() {
            write!(f, ": {}", message)?;
        }

        Ok(())
    }
}
