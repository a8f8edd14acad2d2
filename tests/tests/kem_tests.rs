//! End-to-end ML-KEM tests through the public facade

use mlkem::prelude::*;
use mlkem::kem::mlkem::{MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams};
use mlkem::kem::MlKem;
use proptest::prelude::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn two_party_exchange<P: MlKemParams>() {
    // Receiver publishes ek; sender only ever sees its serialized form
    let (ek, dk) = MlKem::<P>::keypair(&mut OsRng).unwrap();
    let wire_ek = ek.to_bytes();

    let sender_ek = EncapsulationKey::<P>::from_bytes(&wire_ek).unwrap();
    let (ct, ss_sender) = MlKem::<P>::encapsulate(&mut OsRng, &sender_ek).unwrap();
    let wire_ct = ct.to_bytes();

    let receiver_ct = Ciphertext::<P>::from_bytes(&wire_ct).unwrap();
    let ss_receiver = MlKem::<P>::decapsulate(&dk, &receiver_ct).unwrap();

    assert_eq!(ss_sender, ss_receiver, "{} exchange failed", P::NAME);
}

#[test]
fn test_two_party_exchange_all_sets() {
    two_party_exchange::<MlKem512Params>();
    two_party_exchange::<MlKem768Params>();
    two_party_exchange::<MlKem1024Params>();
}

#[test]
fn test_facade_aliases() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let (ek, dk) = MlKem768::keypair(&mut rng).unwrap();
    let (ct, ss) = MlKem768::encapsulate(&mut rng, &ek).unwrap();
    assert_eq!(MlKem768::decapsulate(&dk, &ct).unwrap(), ss);
    assert_eq!(MlKem512::name(), "ML-KEM-512");
    assert_eq!(MlKem1024::name(), "ML-KEM-1024");
}

fn round_trips<P: MlKemParams>(pairs: usize, seed: u64) {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    for i in 0..pairs {
        let (ek, dk) = MlKem::<P>::keypair(&mut rng).unwrap();
        let (ct, ss) = MlKem::<P>::encapsulate(&mut rng, &ek).unwrap();
        assert_eq!(
            MlKem::<P>::decapsulate(&dk, &ct).unwrap(),
            ss,
            "{}: honest decapsulation failed for pair {}",
            P::NAME,
            i
        );
    }
}

#[test]
fn test_round_trip_over_many_key_pairs() {
    round_trips::<MlKem512Params>(1000, 512);
    round_trips::<MlKem768Params>(1000, 768);
    round_trips::<MlKem1024Params>(1000, 1024);
}

fn every_bit_flip_is_rejected<P: MlKemParams>(positions: &[usize]) {
    let mut rng = ChaChaRng::seed_from_u64(0xC0FFEE);
    let (ek, dk) = MlKem::<P>::keypair(&mut rng).unwrap();
    let (ct, ss) = MlKem::<P>::encapsulate(&mut rng, &ek).unwrap();
    let bytes = ct.to_bytes();

    for &pos in positions {
        let mut tampered = bytes.clone();
        tampered[pos] ^= 0x01;
        let tampered = Ciphertext::<P>::from_bytes(&tampered).unwrap();

        // Implicit rejection: no error, a different 32-byte secret
        let ss_bad = MlKem::<P>::decapsulate(&dk, &tampered).unwrap();
        assert_eq!(ss_bad.as_ref().len(), 32);
        assert_ne!(ss_bad, ss, "{}: flip at byte {} went unnoticed", P::NAME, pos);
    }
}

#[test]
fn test_bit_flips_are_rejected() {
    every_bit_flip_is_rejected::<MlKem512Params>(&[0, 1, 320, 639, 640, 767]);
    every_bit_flip_is_rejected::<MlKem768Params>(&[0, 500, 959, 960, 1087]);
    every_bit_flip_is_rejected::<MlKem1024Params>(&[0, 700, 1407, 1408, 1567]);
}

#[test]
fn test_cross_set_artifacts_are_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(2);
    let (ek512, _) = MlKem512::keypair(&mut rng).unwrap();
    let (ek768, dk768) = MlKem768::keypair(&mut rng).unwrap();
    let (ct768, _) = MlKem768::encapsulate(&mut rng, &ek768).unwrap();

    assert!(matches!(
        EncapsulationKey::<MlKem768Params>::from_bytes(&ek512.to_bytes()),
        Err(Error::InvalidLength { expected: 1184, actual: 800, .. })
    ));
    assert!(Ciphertext::<MlKem1024Params>::from_bytes(&ct768.to_bytes()).is_err());
    assert!(
        <DecapsulationKey<MlKem512Params> as SerializeSecret>::from_bytes(&dk768.to_bytes_zeroizing())
            .is_err()
    );
}

#[test]
fn test_variant_detection_by_length() {
    for variant in MlKemVariant::ALL {
        let params = variant.params();
        assert_eq!(
            MlKemVariant::from_encapsulation_key_len(params.encapsulation_key_size),
            Ok(variant)
        );
        assert_eq!(
            MlKemVariant::from_decapsulation_key_len(params.decapsulation_key_size),
            Ok(variant)
        );
        assert_eq!(MlKemVariant::from_ciphertext_len(params.ciphertext_size), Ok(variant));
    }
    assert!(matches!(
        MlKemVariant::from_ciphertext_len(1000),
        Err(mlkem::kem::Error::UnsupportedVariant { length: 1000, .. })
    ));
}

#[test]
fn test_secret_key_recovers_public_key() {
    let (ek, dk) = MlKem1024::keypair(&mut OsRng).unwrap();
    let restored = <DecapsulationKey<MlKem1024Params> as SerializeSecret>::from_bytes(
        &dk.to_bytes_zeroizing(),
    )
    .unwrap();
    assert_eq!(restored.encapsulation_key().unwrap(), ek);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_seeded_exchange_agrees(seed in any::<[u8; 32]>(), m in any::<[u8; 32]>()) {
        let mut full = [0u8; 64];
        full[..32].copy_from_slice(&seed);
        full[32..].copy_from_slice(&m);

        let (ek, dk) = MlKem512::keypair_from_seed(&full).unwrap();
        let (ct, ss) = MlKem512::encapsulate_deterministic(&ek, &m).unwrap();
        prop_assert_eq!(MlKem512::decapsulate(&dk, &ct).unwrap(), ss);
    }

    #[test]
    fn prop_wrong_length_never_parses(len in 0usize..2000) {
        prop_assume!(len != 1184);
        prop_assert!(EncapsulationKey::<MlKem768Params>::from_bytes(&vec![0u8; len]).is_err());
    }
}
