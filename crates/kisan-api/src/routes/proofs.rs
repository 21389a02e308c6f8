//! # Proof Routes
//!
//! `POST /v1/proofs` — assemble a witness from collaborator-supplied plain
//! values and generate a proof. The raw inputs never leave this process;
//! the response carries only the artifact and its commitment.
//!
//! `POST /v1/proofs/verify` — check a transmitted artifact. Verification
//! is stateless and does not consult the ledger; a `valid: true` response
//! says nothing about whether the commitment was already redeemed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use kisan_core::{AccountId, ClassifierReport, ComplianceVerdict, GeoPoint};
use kisan_zkp::{PrivateWitness, ProofArtifact, ProofSystem, PublicInputs};

use crate::error::AppError;
use crate::state::AppState;

/// Plain values from the capture and classifier collaborators.
#[derive(Debug, Deserialize)]
pub struct ProveRequest {
    /// GPS latitude in decimal degrees.
    pub latitude: f64,
    /// GPS longitude in decimal degrees.
    pub longitude: f64,
    /// Classifier verdict string (`COMPLIANT`, `VIOLATION`, `PENDING`).
    pub verdict: String,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
    /// Classifier model version tag.
    pub model_version: String,
    /// The submitting account identifier.
    pub account_id: String,
}

/// A generated proof, ready for transmission to a verifying party.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProveResponse {
    /// The serialized proof artifact.
    pub artifact: ProofArtifact,
}

/// Artifact submitted for verification.
#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyRequest {
    /// The artifact to check.
    pub artifact: ProofArtifact,
}

/// Verification outcome.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the proof is valid for its public inputs and commitment.
    pub valid: bool,
}

async fn prove(
    State(state): State<AppState>,
    Json(request): Json<ProveRequest>,
) -> Result<(StatusCode, Json<ProveResponse>), AppError> {
    let verdict = ComplianceVerdict::parse(&request.verdict)?;
    let report = ClassifierReport::new(verdict, request.confidence, request.model_version)?;
    let location = GeoPoint::new(request.latitude, request.longitude)?;
    let account = AccountId::new(request.account_id)?;

    let mut rng = rand::thread_rng();
    let witness = PrivateWitness::assemble(&report, &location, &account, &mut rng);
    let public = PublicInputs::compliant();

    let proven = state.system.prove(&state.proving_key, &witness, &public)?;
    let artifact = ProofArtifact::from_parts(&proven.proof, &public, &proven.commitment);
    Ok((StatusCode::CREATED, Json(ProveResponse { artifact })))
}

async fn verify(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let (proof, public, commitment) = request.artifact.to_parts()?;
    let valid = state
        .system
        .verify(&state.verification_key, &proof, &public, &commitment)?;
    Ok(Json(VerifyResponse { valid }))
}

/// Routes under `/v1/proofs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/proofs", post(prove))
        .route("/v1/proofs/verify", post(verify))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_state;

    fn delhi_request() -> ProveRequest {
        ProveRequest {
            latitude: 28.6139,
            longitude: 77.2090,
            verdict: "COMPLIANT".into(),
            confidence: 0.93,
            model_version: "resnet50-unet-v1.0".into(),
            account_id: "farmer-wallet-1".into(),
        }
    }

    #[tokio::test]
    async fn prove_and_verify_roundtrip() {
        let state = test_state();
        let (status, Json(response)) = prove(State(state.clone()), Json(delhi_request()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(verdict) = verify(
            State(state),
            Json(VerifyRequest {
                artifact: response.artifact,
            }),
        )
        .await
        .unwrap();
        assert!(verdict.valid);
    }

    #[tokio::test]
    async fn violation_verdict_is_rejected_without_a_proof() {
        let state = test_state();
        let mut request = delhi_request();
        request.verdict = "VIOLATION".into();
        let err = prove(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn implausible_latitude_is_rejected() {
        let state = test_state();
        let mut request = delhi_request();
        request.latitude = 91.0;
        let err = prove(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn tampered_commitment_fails_verification() {
        let state = test_state();
        let (_, Json(response)) = prove(State(state.clone()), Json(delhi_request()))
            .await
            .unwrap();
        let (_, Json(other)) = prove(State(state.clone()), Json(delhi_request()))
            .await
            .unwrap();

        // Swap in the other proof's commitment: same shape, wrong binding.
        let mut artifact = response.artifact;
        artifact.commitment = other.artifact.commitment;
        artifact.public_signals[1] = other.artifact.public_signals[1].clone();

        let Json(verdict) = verify(State(state), Json(VerifyRequest { artifact }))
            .await
            .unwrap();
        assert!(!verdict.valid);
    }
}
