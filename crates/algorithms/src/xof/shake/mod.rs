//! SHAKE extendable output functions
//!
//! Implements SHAKE128 and SHAKE256 (FIPS PUB 202) on top of the `sha3`
//! crate's sponge. Each instance is either absorbing or squeezing; the
//! first call to `squeeze` performs the padding step if `finalize` was not
//! called explicitly.

use ::sha3::digest::{ExtendableOutputReset, Reset, Update, XofReader};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

use mlkem_params::utils::hash::{SHAKE128_RATE, SHAKE256_RATE};

macro_rules! impl_shake_xof {
    ($name:ident, $hasher:ty, $reader:ty, $level:expr, $rate:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Default)]
        pub struct $name {
            hasher: $hasher,
            reader: Option<$reader>,
        }

        impl $name {
            /// Sponge rate in bytes; squeezing in multiples of this avoids
            /// partial-block bookkeeping in the backing reader
            pub const RATE: usize = $rate;

            /// Creates an instance that has already absorbed `data`
            pub fn with_input(data: &[u8]) -> Self {
                let mut xof = Self::default();
                xof.hasher.update(data);
                xof
            }
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self::default()
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                if self.reader.is_some() {
                    return Err(Error::xof_squeezing());
                }
                self.hasher.update(data);
                Ok(())
            }

            fn finalize(&mut self) -> Result<()> {
                if self.reader.is_some() {
                    return Err(Error::xof_finalized());
                }
                self.reader = Some(self.hasher.finalize_xof_reset());
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                let hasher = &mut self.hasher;
                let reader = self
                    .reader
                    .get_or_insert_with(|| hasher.finalize_xof_reset());
                reader.read(output);
                Ok(())
            }

            fn reset(&mut self) -> Result<()> {
                Reset::reset(&mut self.hasher);
                self.reader = None;
                Ok(())
            }

            fn security_level() -> usize {
                $level
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("squeezing", &self.reader.is_some())
                    .finish()
            }
        }
    };
}

impl_shake_xof!(
    ShakeXof128,
    ::sha3::Shake128,
    ::sha3::Shake128Reader,
    128,
    SHAKE128_RATE,
    "SHAKE-128 extendable output function"
);
impl_shake_xof!(
    ShakeXof256,
    ::sha3::Shake256,
    ::sha3::Shake256Reader,
    256,
    SHAKE256_RATE,
    "SHAKE-256 extendable output function"
);
