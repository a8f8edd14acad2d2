//! Constants for the ML-KEM key encapsulation mechanism (FIPS 203)

/// Polynomial degree
pub const MLKEM_N: usize = 256;

/// Coefficient modulus
pub const MLKEM_Q: u16 = 3329;

/// Size of seeds, hashes, messages and shared secrets in bytes
pub const MLKEM_SYMBYTES: usize = 32;

/// Size of the shared secret in bytes
pub const MLKEM_SHARED_SECRET_SIZE: usize = 32;

/// Bytes needed for one polynomial encoded at 12 bits per coefficient
pub const MLKEM_POLY_BYTES: usize = 384;

/// Structure containing one ML-KEM parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKemParamSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Module rank (dimension of vectors and matrices)
    pub k: usize,

    /// CBD parameter for the secret and key-generation error
    pub eta1: usize,

    /// CBD parameter for the encryption error terms
    pub eta2: usize,

    /// Bits per coefficient of the compressed vector `u`
    pub du: usize,

    /// Bits per coefficient of the compressed polynomial `v`
    pub dv: usize,

    /// Size of the encapsulation key in bytes
    pub encapsulation_key_size: usize,

    /// Size of the decapsulation key in bytes
    pub decapsulation_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,
}

impl MlKemParamSet {
    const fn new(k: usize, eta1: usize, eta2: usize, du: usize, dv: usize) -> Self {
        Self {
            n: MLKEM_N,
            q: MLKEM_Q,
            k,
            eta1,
            eta2,
            du,
            dv,
            encapsulation_key_size: MLKEM_POLY_BYTES * k + MLKEM_SYMBYTES,
            decapsulation_key_size: 2 * MLKEM_POLY_BYTES * k + 3 * MLKEM_SYMBYTES,
            ciphertext_size: MLKEM_SYMBYTES * (du * k + dv),
            shared_secret_size: MLKEM_SHARED_SECRET_SIZE,
        }
    }

    /// Size of the inner K-PKE decryption key in bytes
    pub const fn pke_decryption_key_size(&self) -> usize {
        MLKEM_POLY_BYTES * self.k
    }
}

/// ML-KEM-512 parameters (NIST security category 1)
pub const MLKEM512: MlKemParamSet = MlKemParamSet::new(2, 3, 2, 10, 4);

/// ML-KEM-768 parameters (NIST security category 3)
pub const MLKEM768: MlKemParamSet = MlKemParamSet::new(3, 2, 2, 10, 4);

/// ML-KEM-1024 parameters (NIST security category 5)
pub const MLKEM1024: MlKemParamSet = MlKemParamSet::new(4, 2, 2, 11, 5);
