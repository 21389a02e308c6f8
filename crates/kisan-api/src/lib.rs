//! # kisan-api — HTTP Services for the Compliance Proof Stack
//!
//! Transport plumbing around the core: proof generation for capture
//! clients, verification and claims for the payout collaborator, and
//! verification-key distribution for anyone.
//!
//! ## API Surface
//!
//! | Route                     | Method | Purpose                               |
//! |---------------------------|--------|---------------------------------------|
//! | `/v1/proofs`              | POST   | Assemble witness, generate proof      |
//! | `/v1/proofs/verify`       | POST   | Check an artifact (stateless)         |
//! | `/v1/claims`              | POST   | Verify then redeem, at most once      |
//! | `/v1/claims/stats`        | GET    | Redemption counters                   |
//! | `/v1/verification-key`    | GET    | Public key package                    |
//! | `/health/liveness`        | GET    | Process up                            |
//! | `/health/readiness`       | GET    | Ledger reachable                      |

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes are mounted alongside the API routes; they carry no
/// state-changing semantics and need no special treatment here.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::proofs::router())
        .merge(routes::claims::router())
        .merge(routes::keys::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    "ok"
}

async fn readiness(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<&'static str, error::AppError> {
    state.ledger.stats().await?;
    Ok("ok")
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fixtures for handler tests. Key generation runs once per test
    //! process; every test state shares the same key pair and gets a fresh
    //! in-memory ledger.

    use std::sync::{Arc, OnceLock};

    use ark_std::rand::rngs::StdRng;
    use ark_std::rand::SeedableRng;

    use kisan_ledger::MemoryLedger;
    use kisan_zkp::{
        setup, PolicyMode, ProofArtifact, ProofPolicy, ProvingKeyPackage, PublicInputs,
        VerificationKeyPackage,
    };

    use crate::state::AppState;

    fn keys() -> &'static (ProvingKeyPackage, VerificationKeyPackage) {
        static KEYS: OnceLock<(ProvingKeyPackage, VerificationKeyPackage)> = OnceLock::new();
        KEYS.get_or_init(|| {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            setup(&mut rng).expect("test setup")
        })
    }

    pub(crate) fn test_state() -> AppState {
        let (pk, vk) = keys();
        AppState {
            system: kisan_zkp::Groth16ProofSystem,
            proving_key: Arc::new(ProvingKeyPackage {
                fingerprint: pk.fingerprint,
                key: pk.key.clone(),
            }),
            verification_key: Arc::new(vk.clone()),
            ledger: Arc::new(MemoryLedger::new()),
            policy: ProofPolicy::new(PolicyMode::Production),
        }
    }

    pub(crate) fn delhi_artifact(state: &AppState) -> ProofArtifact {
        use kisan_core::{AccountId, ClassifierReport, ComplianceVerdict, GeoPoint};
        use kisan_zkp::{PrivateWitness, ProofSystem};

        let mut rng = rand::thread_rng();
        let report =
            ClassifierReport::new(ComplianceVerdict::Compliant, 0.93, "resnet50-unet-v1.0")
                .expect("report");
        let location = GeoPoint::new(28.6139, 77.2090).expect("location");
        let account = AccountId::new("farmer-wallet-1").expect("account");
        let witness = PrivateWitness::assemble(&report, &location, &account, &mut rng);
        let public = PublicInputs::compliant();
        let proven = state
            .system
            .prove(&state.proving_key, &witness, &public)
            .expect("prove");
        ProofArtifact::from_parts(&proven.proof, &public, &proven.commitment)
    }
}
