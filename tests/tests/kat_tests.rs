//! NIST KAT transcript checks
//!
//! Expected values are the SHA-256 digests of the first case of the
//! reference `PQCkemKAT_*.rsp` files.

use mlkem_kem::mlkem::{MlKem1024Params, MlKem512Params, MlKem768Params};
use mlkem_tests::suites::kat::{first_case, run_first_case};

#[test]
fn test_nist_kat_mlkem512() {
    let hash = run_first_case::<MlKem512Params>().unwrap();
    assert_eq!(
        hash, "c70041a761e01cd6426fa60e9fd6a4412c2be817386c8d0f3334898082512782",
        "ML-KEM-512 transcript mismatch"
    );
}

#[test]
fn test_nist_kat_mlkem768() {
    let hash = run_first_case::<MlKem768Params>().unwrap();
    assert_eq!(
        hash, "5352539586b6c3df58be6158a6250aeff402bd73060b0a3de68850ac074c17c3",
        "ML-KEM-768 transcript mismatch"
    );
}

#[test]
fn test_nist_kat_mlkem1024() {
    let hash = run_first_case::<MlKem1024Params>().unwrap();
    assert_eq!(
        hash, "f580d851e5fb27e6876e5e203fa18be4cdbfd49e05d48fec3d3992c8f43a13e6",
        "ML-KEM-1024 transcript mismatch"
    );
}

#[test]
fn test_kat_case_layout() {
    let case = first_case::<MlKem768Params>().unwrap();
    assert_eq!(case.pk.len(), 1184);
    assert_eq!(case.sk.len(), 2400);
    assert_eq!(case.ct.len(), 1088);

    // dk = dk_pke || ek || H(ek) || z
    assert_eq!(&case.sk[1152..1152 + 1184], &case.pk[..]);

    let rendered = case.render(0);
    assert!(rendered.starts_with("count = 0\nseed = 061550234D158C5E"));
    assert_eq!(rendered.lines().count(), 6);
}
