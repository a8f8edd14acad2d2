//! NIST known-answer transcripts
//!
//! The reference KAT generator seeds an AES-256-CTR DRBG with the bytes
//! `0..48`, draws a per-case seed, and then draws the key-generation and
//! encapsulation coins from a DRBG re-seeded with it. [`run_first_case`]
//! replays case 0 and returns the SHA-256 of the formatted transcript.

pub mod drbg;

pub use drbg::NistDrbg;

use mlkem_api::{Kem, Result, SerializeSecret};
use mlkem_kem::mlkem::{KEYPAIR_SEED_BYTES, SYMBYTES};
use mlkem_kem::{MlKem, MlKemParams};
use sha2::{Digest, Sha256};

/// Artifacts of one transcript case
pub struct KatCase {
    pub seed: [u8; 48],
    pub pk: Vec<u8>,
    pub sk: Vec<u8>,
    pub ct: Vec<u8>,
    pub ss: [u8; 32],
}

impl KatCase {
    /// Render the case the way the reference `.rsp` files do
    pub fn render(&self, count: usize) -> String {
        let mut out = String::new();
        out.push_str(&format!("count = {}\n", count));
        out.push_str(&format!("seed = {}\n", hex_upper(&self.seed)));
        out.push_str(&format!("pk = {}\n", hex_upper(&self.pk)));
        out.push_str(&format!("sk = {}\n", hex_upper(&self.sk)));
        out.push_str(&format!("ct = {}\n", hex_upper(&self.ct)));
        out.push_str(&format!("ss = {}\n", hex_upper(&self.ss)));
        out
    }
}

fn hex_upper(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "00".to_string();
    }
    hex::encode_upper(bytes)
}

/// Replay transcript case 0 for parameter set `P`
pub fn first_case<P: MlKemParams>() -> Result<KatCase> {
    let entropy: [u8; 48] = core::array::from_fn(|i| i as u8);
    let mut drbg = NistDrbg::new(&entropy, None);

    let mut seed = [0u8; 48];
    drbg.fill_bytes(&mut seed);
    let mut drbg = NistDrbg::new(&seed, None);

    let mut keypair_coins = [0u8; KEYPAIR_SEED_BYTES];
    drbg.fill_bytes(&mut keypair_coins);
    let (pk, sk) = MlKem::<P>::keypair_from_seed(&keypair_coins)?;

    let mut m = [0u8; SYMBYTES];
    drbg.fill_bytes(&mut m);
    let (ct, ss) = MlKem::<P>::encapsulate_deterministic(&pk, &m)?;

    let ss_dec = MlKem::<P>::decapsulate(&sk, &ct)?;
    assert_eq!(ss, ss_dec, "{}: shared secrets disagree", P::NAME);

    Ok(KatCase {
        seed,
        pk: pk.as_bytes().to_vec(),
        sk: sk.to_bytes_zeroizing().to_vec(),
        ct: ct.as_bytes().to_vec(),
        ss: *ss.as_bytes(),
    })
}

/// SHA-256 (lowercase hex) of the rendered case-0 transcript
pub fn run_first_case<P: MlKemParams>() -> Result<String> {
    let case = first_case::<P>()?;
    let digest = Sha256::digest(case.render(0).as_bytes());
    Ok(hex::encode(digest))
}
