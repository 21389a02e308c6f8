//! # Claim Route
//!
//! `POST /v1/claims` — the payout collaborator's single idempotent entry
//! point: verify the artifact, then atomically record its commitment as
//! redeemed. Verification failure never reaches the ledger; a replayed
//! commitment is a 409 regardless of how valid the proof is. Minting
//! itself is out of scope — callers act on `first_claim`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use kisan_ledger::{ClaimReceipt, LedgerStats};
use kisan_zkp::{ProofArtifact, ProofBackend, ProofSystem};

use crate::error::AppError;
use crate::state::AppState;

/// Artifact submitted for redemption.
#[derive(Debug, Deserialize, Serialize)]
pub struct ClaimRequest {
    /// The artifact whose commitment is being claimed.
    pub artifact: ProofArtifact,
}

/// Outcome of the first successful claim.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    /// Always `true` in a success response; replays are 409s.
    pub first_claim: bool,
    /// The redemption record.
    pub receipt: ClaimReceipt,
}

async fn claim(
    State(state): State<AppState>,
    Json(request): Json<ClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), AppError> {
    // This deployment only ever verifies Groth16 proofs, but the policy
    // check keeps the invariant explicit at the redemption boundary.
    state
        .policy
        .enforce(ProofBackend::Groth16)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let (proof, public, commitment) = request.artifact.to_parts()?;
    let valid = state
        .system
        .verify(&state.verification_key, &proof, &public, &commitment)?;
    if !valid {
        return Err(AppError::Validation(
            "proof failed verification; commitment not redeemed".into(),
        ));
    }

    let receipt = state.ledger.claim(&commitment).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClaimResponse {
            first_claim: true,
            receipt,
        }),
    ))
}

async fn stats(State(state): State<AppState>) -> Result<Json<LedgerStats>, AppError> {
    Ok(Json(state.ledger.stats().await?))
}

/// Routes under `/v1/claims`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/claims", post(claim))
        .route("/v1/claims/stats", get(stats))
}
