//! Timing comparison of decapsulation on accepted and rejected ciphertexts

use mlkem::prelude::*;
use mlkem_tests::suites::constant_time::{TestConfig, TimingTester};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::hint::black_box;

#[test]
fn test_decapsulation_valid_vs_rejected() {
    let config = TestConfig::for_decapsulation();
    let mut rng = ChaChaRng::seed_from_u64(11);
    let (ek, dk) = MlKem512::keypair(&mut rng).unwrap();
    let (ct, _) = MlKem512::encapsulate(&mut rng, &ek).unwrap();

    let mut tampered = ct.to_bytes();
    tampered[17] ^= 0x40;
    let tampered = Ciphertext::from_bytes(&tampered).unwrap();

    for _ in 0..config.num_warmup {
        black_box(MlKem512::decapsulate(&dk, &ct).unwrap());
        black_box(MlKem512::decapsulate(&dk, &tampered).unwrap());
    }

    let tester = TimingTester::from_config(&config);
    let (valid, rejected) = tester.measure_pair(
        || {
            black_box(MlKem512::decapsulate(black_box(&dk), black_box(&ct)).unwrap());
        },
        || {
            black_box(MlKem512::decapsulate(black_box(&dk), black_box(&tampered)).unwrap());
        },
    );

    let analysis = match tester.analyze(&valid, &rejected, &config) {
        Ok(result) => result,
        Err(e) => panic!("analysis error: {}", e),
    };
    println!("{}", analysis.report("ML-KEM-512 decapsulate"));

    assert!(
        analysis.is_constant_time,
        "decapsulation timing depends on ciphertext validity: ratio={:.3}, d={:.2}",
        analysis.mean_ratio, analysis.cohens_d
    );
}
