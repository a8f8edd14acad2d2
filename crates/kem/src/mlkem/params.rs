//! Parameter sets for ML-KEM.

use core::fmt::Debug;

use mlkem_params::pqc::mlkem::{
    MlKemParamSet, MLKEM1024, MLKEM512, MLKEM768, MLKEM_POLY_BYTES, MLKEM_SYMBYTES,
};

use crate::error::{Error, Result};

/// Size of seeds, messages, hashes and shared secrets
pub const SYMBYTES: usize = MLKEM_SYMBYTES;

/// Size of one polynomial encoded at 12 bits per coefficient
pub const POLY_BYTES: usize = MLKEM_POLY_BYTES;

/// Seed for `keypair_from_seed`: `d || z`
pub const KEYPAIR_SEED_BYTES: usize = 2 * SYMBYTES;

/// Compile-time description of one ML-KEM parameter set.
///
/// Implemented by zero-sized marker types so that keys and ciphertexts of
/// different sets are distinct types.
pub trait MlKemParams: Copy + Clone + Debug + Default + Eq + Send + Sync + 'static {
    /// Algorithm name, e.g. "ML-KEM-768"
    const NAME: &'static str;

    /// Numeric parameters from `mlkem-params`
    const PARAMS: MlKemParamSet;

    /// Module rank
    const K: usize = Self::PARAMS.k;
    /// CBD parameter for secrets and key-generation noise
    const ETA1: usize = Self::PARAMS.eta1;
    /// CBD parameter for encryption noise
    const ETA2: usize = Self::PARAMS.eta2;
    /// Compression width of `u`
    const DU: usize = Self::PARAMS.du;
    /// Compression width of `v`
    const DV: usize = Self::PARAMS.dv;

    /// `384k + 32`
    const ENCAPSULATION_KEY_BYTES: usize = Self::PARAMS.encapsulation_key_size;
    /// `768k + 96`
    const DECAPSULATION_KEY_BYTES: usize = Self::PARAMS.decapsulation_key_size;
    /// `32(du k + dv)`
    const CIPHERTEXT_BYTES: usize = Self::PARAMS.ciphertext_size;
    /// K-PKE decryption key, `384k`
    const PKE_DECRYPTION_KEY_BYTES: usize = POLY_BYTES * Self::K;
    /// Compressed `u` component of a ciphertext
    const U_BYTES: usize = 32 * Self::DU * Self::K;
    /// Compressed `v` component of a ciphertext
    const V_BYTES: usize = 32 * Self::DV;
}

/// ML-KEM-512 (NIST security category 1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MlKem512Params;

impl MlKemParams for MlKem512Params {
    const NAME: &'static str = "ML-KEM-512";
    const PARAMS: MlKemParamSet = MLKEM512;
}

/// ML-KEM-768 (NIST security category 3)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MlKem768Params;

impl MlKemParams for MlKem768Params {
    const NAME: &'static str = "ML-KEM-768";
    const PARAMS: MlKemParamSet = MLKEM768;
}

/// ML-KEM-1024 (NIST security category 5)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MlKem1024Params;

impl MlKemParams for MlKem1024Params {
    const NAME: &'static str = "ML-KEM-1024";
    const PARAMS: MlKemParamSet = MLKEM1024;
}

/// Runtime tag for a parameter set, recovered from artifact lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MlKemVariant {
    /// ML-KEM-512
    MlKem512,
    /// ML-KEM-768
    MlKem768,
    /// ML-KEM-1024
    MlKem1024,
}

impl MlKemVariant {
    /// All variants, in increasing security order
    pub const ALL: [MlKemVariant; 3] = [Self::MlKem512, Self::MlKem768, Self::MlKem1024];

    /// Numeric parameters of this variant
    pub const fn params(self) -> MlKemParamSet {
        match self {
            Self::MlKem512 => MLKEM512,
            Self::MlKem768 => MLKEM768,
            Self::MlKem1024 => MLKEM1024,
        }
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Self::MlKem512 => MlKem512Params::NAME,
            Self::MlKem768 => MlKem768Params::NAME,
            Self::MlKem1024 => MlKem1024Params::NAME,
        }
    }

    fn find(
        context: &'static str,
        length: usize,
        size: impl Fn(&MlKemParamSet) -> usize,
    ) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| size(&v.params()) == length)
            .ok_or(Error::UnsupportedVariant { context, length })
    }

    /// Identify the parameter set from an encapsulation key length
    pub fn from_encapsulation_key_len(length: usize) -> Result<Self> {
        Self::find("encapsulation key", length, |p| p.encapsulation_key_size)
    }

    /// Identify the parameter set from a decapsulation key length
    pub fn from_decapsulation_key_len(length: usize) -> Result<Self> {
        Self::find("decapsulation key", length, |p| p.decapsulation_key_size)
    }

    /// Identify the parameter set from a ciphertext length
    ///
    /// ML-KEM-1024 ciphertexts and encapsulation keys share a length, so
    /// this is only meaningful when the artifact kind is known.
    pub fn from_ciphertext_len(length: usize) -> Result<Self> {
        Self::find("ciphertext", length, |p| p.ciphertext_size)
    }
}

impl core::fmt::Display for MlKemVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
