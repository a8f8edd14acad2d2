//! ML-KEM-1024 (NIST security category 5).

use super::kem::MlKem;
use super::params::MlKem1024Params;

/// ML-KEM-1024, implementing `mlkem_api::Kem`.
pub type MlKem1024 = MlKem<MlKem1024Params>;
