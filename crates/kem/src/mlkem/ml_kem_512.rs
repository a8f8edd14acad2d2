//! ML-KEM-512 (NIST security category 1).

use super::kem::MlKem;
use super::params::MlKem512Params;

/// ML-KEM-512, implementing `mlkem_api::Kem`.
pub type MlKem512 = MlKem<MlKem512Params>;
