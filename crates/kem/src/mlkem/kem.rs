//! Typed keys, ciphertexts and the `Kem` implementation for ML-KEM.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use mlkem_api::{Kem, Result as ApiResult, SecretBytes, Serialize, SerializeSecret};
use mlkem_common::{SecretBuffer, SecretVec};
use mlkem_internal::constant_time::{ct_eq, ct_is_zero};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::ind_cca::{decaps_internal, encaps_internal, h_func, keygen_internal};
use super::params::{MlKemParams, KEYPAIR_SEED_BYTES, SYMBYTES};
use super::serialize::{split_dk, unpack_ek};
use crate::error::{validate, Result};

/// ML-KEM encapsulation (public) key
///
/// Parsing enforces the modulus check: every encoded coefficient of `t̂`
/// must be below q.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "", try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct EncapsulationKey<P: MlKemParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

impl<P: MlKemParams> EncapsulationKey<P> {
    /// Parses and validates an encapsulation key
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let (_, _, in_range) = unpack_ek::<P>(bytes)?;
        validate::key(in_range, "encapsulation", "coefficient of t not reduced mod q")?;
        Ok(Self::from_trusted(bytes.to_vec()))
    }

    fn from_trusted(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// Raw encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: MlKemParams> AsRef<[u8]> for EncapsulationKey<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: MlKemParams> fmt::Debug for EncapsulationKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncapsulationKey<{}>({} bytes)", P::NAME, self.bytes.len())
    }
}

impl<P: MlKemParams> Serialize for EncapsulationKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::new(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: MlKemParams> TryFrom<Vec<u8>> for EncapsulationKey<P> {
    type Error = mlkem_api::Error;

    fn try_from(bytes: Vec<u8>) -> ApiResult<Self> {
        Ok(Self::new(&bytes)?)
    }
}

impl<P: MlKemParams> From<EncapsulationKey<P>> for Vec<u8> {
    fn from(key: EncapsulationKey<P>) -> Self {
        key.bytes
    }
}

/// ML-KEM decapsulation (secret) key: `dk_pke || ek || H(ek) || z`
///
/// Parsing enforces the hash check `H(ek) == h`. Wiped on drop.
#[derive(Clone)]
pub struct DecapsulationKey<P: MlKemParams> {
    bytes: SecretVec,
    _params: PhantomData<P>,
}

impl<P: MlKemParams> DecapsulationKey<P> {
    /// Parses and validates a decapsulation key
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let parts = split_dk::<P>(bytes)?;
        let h = h_func(parts.ek)?;
        validate::key(
            ct_eq(h, parts.h),
            "decapsulation",
            "embedded hash does not match encapsulation key",
        )?;
        Ok(Self::from_trusted(SecretVec::from_slice(bytes)))
    }

    fn from_trusted(bytes: SecretVec) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// The encapsulation key embedded in this decapsulation key
    pub fn encapsulation_key(&self) -> Result<EncapsulationKey<P>> {
        let parts = split_dk::<P>(self.bytes.as_slice())?;
        EncapsulationKey::new(parts.ek)
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        self.bytes.as_slice()
    }
}

impl<P: MlKemParams> Zeroize for DecapsulationKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: MlKemParams> fmt::Debug for DecapsulationKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecapsulationKey<{}>([REDACTED])", P::NAME)
    }
}

impl<P: MlKemParams> SerializeSecret for DecapsulationKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::new(bytes)?)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.as_slice().to_vec())
    }
}

/// ML-KEM ciphertext
///
/// Only the length is validated; any content of the right size is accepted
/// and handled by implicit rejection.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "", try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Ciphertext<P: MlKemParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

impl<P: MlKemParams> Ciphertext<P> {
    /// Wraps a ciphertext after checking its length
    pub fn new(bytes: &[u8]) -> Result<Self> {
        validate::length("ciphertext", bytes.len(), P::CIPHERTEXT_BYTES)?;
        Ok(Self::from_trusted(bytes.to_vec()))
    }

    fn from_trusted(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// Raw encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: MlKemParams> AsRef<[u8]> for Ciphertext<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: MlKemParams> fmt::Debug for Ciphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext<{}>({} bytes)", P::NAME, self.bytes.len())
    }
}

impl<P: MlKemParams> Serialize for Ciphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::new(bytes)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: MlKemParams> TryFrom<Vec<u8>> for Ciphertext<P> {
    type Error = mlkem_api::Error;

    fn try_from(bytes: Vec<u8>) -> ApiResult<Self> {
        Ok(Self::new(&bytes)?)
    }
}

impl<P: MlKemParams> From<Ciphertext<P>> for Vec<u8> {
    fn from(ct: Ciphertext<P>) -> Self {
        ct.bytes
    }
}

/// 32-byte shared secret. Equality is constant-time; wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct SharedSecret(SecretBytes<SYMBYTES>);

impl SharedSecret {
    fn from_array(bytes: &[u8; SYMBYTES]) -> Self {
        Self(SecretBytes::new(*bytes))
    }

    /// The secret bytes
    pub fn as_bytes(&self) -> &[u8; SYMBYTES] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

impl SerializeSecret for SharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

/// ML-KEM over parameter set `P`, implementing `mlkem_api::Kem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MlKem<P: MlKemParams> {
    _params: PhantomData<P>,
}

impl<P: MlKemParams> MlKem<P> {
    /// Deterministic key generation from the 64-byte seed `d || z`
    ///
    /// The seed is a compact stored form of the key pair.
    pub fn keypair_from_seed(
        seed: &[u8; KEYPAIR_SEED_BYTES],
    ) -> ApiResult<(EncapsulationKey<P>, DecapsulationKey<P>)> {
        let mut d = SecretBuffer::<SYMBYTES>::zeroed();
        let mut z = SecretBuffer::<SYMBYTES>::zeroed();
        d.as_mut_slice().copy_from_slice(&seed[..SYMBYTES]);
        z.as_mut_slice().copy_from_slice(&seed[SYMBYTES..]);

        let (ek, dk) = keygen_internal::<P>(d.as_array(), z.as_array())?;
        Ok((
            EncapsulationKey::from_trusted(ek),
            DecapsulationKey::from_trusted(SecretVec::from_slice(&dk)),
        ))
    }

    /// Deterministic encapsulation with caller-chosen message `m`
    ///
    /// Intended for known-answer testing; `m` must be fresh randomness.
    pub fn encapsulate_deterministic(
        public_key: &EncapsulationKey<P>,
        m: &[u8; SYMBYTES],
    ) -> ApiResult<(Ciphertext<P>, SharedSecret)> {
        let (k, c) = encaps_internal::<P>(public_key.as_bytes(), m)?;
        Ok((Ciphertext::from_trusted(c), SharedSecret::from_array(&k)))
    }
}

impl<P: MlKemParams> Kem for MlKem<P> {
    type PublicKey = EncapsulationKey<P>;
    type SecretKey = DecapsulationKey<P>;
    type SharedSecret = SharedSecret;
    type Ciphertext = Ciphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = SecretBuffer::<KEYPAIR_SEED_BYTES>::zeroed();
        rng.fill_bytes(seed.as_mut_slice());
        Self::keypair_from_seed(seed.as_array())
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let mut m = SecretBuffer::<SYMBYTES>::zeroed();
        rng.fill_bytes(m.as_mut_slice());
        validate::randomness(
            !bool::from(ct_is_zero(m.as_slice())),
            P::NAME,
            "random source returned an all-zero message",
        )?;

        Self::encapsulate_deterministic(public_key, m.as_array())
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let k = decaps_internal::<P>(secret_key.as_slice(), ciphertext.as_bytes())?;
        Ok(SharedSecret::from_array(&k))
    }
}
