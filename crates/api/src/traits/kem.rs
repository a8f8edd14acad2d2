// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! Each ML-KEM parameter set is a zero-sized type implementing [`Kem`]; the
//! associated types carry the artifact sizes of that set, so keys and
//! ciphertexts of different sets cannot be mixed.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Encapsulation (public) key.
    type PublicKey: Clone + Serialize;

    /// Decapsulation (secret) key. Wiped when dropped.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret. Should be converted to application keys immediately.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext carrying the encapsulated secret.
    type Ciphertext: Clone + Serialize;

    /// Keypair type holding both halves.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// All randomness is drawn from `rng`, which must be a CSPRNG.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// # Errors
    /// Fails with `RandomnessFailure` when `rng` yields an all-zero message.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    ///
    /// A ciphertext that fails re-encryption is not an error: the implicit
    /// rejection value is returned instead, in the same time as the honest path.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
