//! End-to-end lifecycle: capture inputs through proof, wire transit,
//! verification, and redemption.

mod common;

use common::{delhi_witness, keys, witness_at};
use kisan_core::ComplianceVerdict;
use kisan_crypto::Commitment;
use kisan_ledger::{LedgerError, MemoryLedger, ReplayLedger};
use kisan_zkp::{
    Groth16ProofSystem, ProofArtifact, ProofError, ProofSystem, PublicInputs,
};

#[tokio::test]
async fn delhi_scenario_end_to_end() {
    let (pk, vk) = keys();
    let system = Groth16ProofSystem;
    let public = PublicInputs::compliant();
    let ledger = MemoryLedger::new();

    // Prove.
    let witness = delhi_witness(1);
    let proven = system.prove(pk, &witness, &public).expect("prove");

    // Transit: serialize, ship, reparse.
    let artifact = ProofArtifact::from_parts(&proven.proof, &public, &proven.commitment);
    let wire = serde_json::to_string(&artifact).expect("serialize");
    let received: ProofArtifact = serde_json::from_str(&wire).expect("deserialize");
    let (proof, public_rx, commitment) = received.to_parts().expect("decode");

    // Verify.
    assert!(system.verify(vk, &proof, &public_rx, &commitment).expect("verify"));

    // Redeem once.
    let receipt = ledger.claim(&commitment).await.expect("first claim");
    assert_eq!(receipt.commitment, commitment);

    // Every subsequent redemption attempt is rejected.
    for _ in 0..3 {
        assert!(matches!(
            ledger.claim(&commitment).await,
            Err(LedgerError::AlreadyRedeemed(c)) if c == commitment
        ));
    }
}

#[test]
fn soundness_wrong_status_never_proves() {
    let (pk, _) = keys();
    let witness = witness_at(ComplianceVerdict::Violation, 28.6139, 77.2090, 2);
    let err = Groth16ProofSystem
        .prove(pk, &witness, &PublicInputs::compliant())
        .unwrap_err();
    assert!(matches!(err, ProofError::ConstraintViolation(_)));
}

#[test]
fn range_rejection_matrix() {
    let (pk, _) = keys();
    let system = Groth16ProofSystem;
    let public = PublicInputs::compliant();

    // 89.9999 degrees: inside the domain, must prove.
    let near_pole = witness_at(ComplianceVerdict::Compliant, 89.9999, 0.0, 3);
    system.prove(pk, &near_pole, &public).expect("89.9999 proves");

    // 91 degrees (forged past GeoPoint validation): must fail in circuit.
    let mut beyond_pole = delhi_witness(4);
    beyond_pole.coords.lat = 910_000;
    assert!(matches!(
        system.prove(pk, &beyond_pole, &public),
        Err(ProofError::ConstraintViolation(_))
    ));

    // Longitude edge: 180 degrees exactly is valid.
    let antimeridian = witness_at(ComplianceVerdict::Compliant, 0.0, 180.0, 5);
    system.prove(pk, &antimeridian, &public).expect("180.0 proves");

    let mut beyond_antimeridian = delhi_witness(6);
    beyond_antimeridian.coords.lng = -3_600_001;
    assert!(system.prove(pk, &beyond_antimeridian, &public).is_err());
}

#[test]
fn binding_foreign_commitment_fails() {
    let (pk, vk) = keys();
    let system = Groth16ProofSystem;
    let public = PublicInputs::compliant();

    let proven = system.prove(pk, &delhi_witness(7), &public).expect("prove");
    // Derived from a superficially similar witness (same field, same
    // account, fresh nonce).
    let similar: Commitment = delhi_witness(8).commitment();
    assert_ne!(proven.commitment, similar);
    assert!(!system
        .verify(vk, &proven.proof, &public, &similar)
        .expect("verify runs"));
}

#[test]
fn completeness_across_fresh_nonces() {
    let (pk, vk) = keys();
    let system = Groth16ProofSystem;
    let public = PublicInputs::compliant();
    for seed in 10..13 {
        let proven = system.prove(pk, &delhi_witness(seed), &public).expect("prove");
        assert!(system
            .verify(vk, &proven.proof, &public, &proven.commitment)
            .expect("verify"));
    }
}
