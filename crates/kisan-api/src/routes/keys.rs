//! # Verification-Key Distribution
//!
//! `GET /v1/verification-key` — the public key package any verifying party
//! can fetch without trusting the prover. Versioned by the circuit
//! fingerprint: a verifier holding a different fingerprint knows
//! immediately that it is looking at a different statement.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// The distributable verification-key package.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerificationKeyResponse {
    /// Proof protocol tag.
    pub protocol: String,
    /// Pairing curve tag.
    pub curve: String,
    /// Circuit fingerprint, hex.
    pub fingerprint: String,
    /// Compressed verification key bytes, hex.
    pub key: String,
}

async fn verification_key(
    State(state): State<AppState>,
) -> Result<Json<VerificationKeyResponse>, AppError> {
    let bytes = state
        .verification_key
        .key_bytes()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(VerificationKeyResponse {
        protocol: kisan_zkp::artifact::PROTOCOL_TAG.to_string(),
        curve: kisan_zkp::artifact::CURVE_TAG.to_string(),
        fingerprint: state.verification_key.fingerprint.to_hex(),
        key: bytes.iter().map(|b| format!("{b:02x}")).collect(),
    }))
}

/// Routes under `/v1/verification-key`.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/verification-key", get(verification_key))
}
