//! ML-KEM (FIPS 203) key encapsulation.
//!
//! Layers, bottom-up:
//! - [`polyvec`]: vectors and matrices of polynomials
//! - [`serialize`]: byte layouts of keys and ciphertexts
//! - [`cpa_pke`]: K-PKE key generation, encryption and decryption
//! - [`ind_cca`]: the Fujisaki-Okamoto transform with implicit rejection
//! - [`kem`]: typed keys and the `Kem` implementation

pub mod cpa_pke;
pub mod ind_cca;
pub mod kem;
pub mod params;
pub mod polyvec;
pub mod serialize;

mod ml_kem_1024;
mod ml_kem_512;
mod ml_kem_768;

pub use ind_cca::{decaps_internal, encaps_internal, keygen_internal};
pub use kem::{Ciphertext, DecapsulationKey, EncapsulationKey, MlKem, SharedSecret};
pub use ml_kem_1024::MlKem1024;
pub use ml_kem_512::MlKem512;
pub use ml_kem_768::MlKem768;
pub use params::{
    MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams, MlKemVariant,
    KEYPAIR_SEED_BYTES, SYMBYTES,
};
