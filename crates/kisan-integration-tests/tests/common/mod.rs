//! Shared fixtures: one key pair per test binary, witness builders.
#![allow(dead_code)] // each test binary uses a different subset

use std::sync::OnceLock;

use ark_std::rand::rngs::StdRng;
use ark_std::rand::SeedableRng;

use kisan_core::{AccountId, ClassifierReport, ComplianceVerdict, GeoPoint};
use kisan_zkp::{setup, PrivateWitness, ProvingKeyPackage, VerificationKeyPackage};

pub fn keys() -> &'static (ProvingKeyPackage, VerificationKeyPackage) {
    static KEYS: OnceLock<(ProvingKeyPackage, VerificationKeyPackage)> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(0xfeed);
        setup(&mut rng).expect("setup")
    })
}

pub fn witness_at(verdict: ComplianceVerdict, lat: f64, lng: f64, seed: u64) -> PrivateWitness {
    let mut rng = StdRng::seed_from_u64(seed);
    let report = ClassifierReport::new(verdict, 0.93, "resnet50-unet-v1.0").expect("report");
    let location = GeoPoint::new(lat, lng).expect("location");
    let account = AccountId::new("farmer-wallet-1").expect("account");
    PrivateWitness::assemble(&report, &location, &account, &mut rng)
}

pub fn delhi_witness(seed: u64) -> PrivateWitness {
    witness_at(ComplianceVerdict::Compliant, 28.6139, 77.2090, seed)
}
