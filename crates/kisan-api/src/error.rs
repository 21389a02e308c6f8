//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps domain errors from kisan-core, kisan-zkp, and kisan-ledger to HTTP
//! status codes with JSON bodies. Internal error details are logged, never
//! returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error detail.
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "ALREADY_REDEEMED").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type for all handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request body is structurally unusable (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Conflict with recorded state — replayed commitment or key-version
    /// mismatch (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };
        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<kisan_core::ValidationError> for AppError {
    fn from(err: kisan_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<kisan_zkp::ProofError> for AppError {
    fn from(err: kisan_zkp::ProofError) -> Self {
        match &err {
            kisan_zkp::ProofError::ConstraintViolation(_) => Self::Validation(err.to_string()),
            kisan_zkp::ProofError::KeyMismatch(_) | kisan_zkp::ProofError::Prover(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<kisan_zkp::VerifyError> for AppError {
    fn from(err: kisan_zkp::VerifyError) -> Self {
        match &err {
            kisan_zkp::VerifyError::InvalidProof(_) => Self::BadRequest(err.to_string()),
            kisan_zkp::VerifyError::KeyMismatch(_) => Self::Conflict(err.to_string()),
            kisan_zkp::VerifyError::Verifier(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<kisan_ledger::LedgerError> for AppError {
    fn from(err: kisan_ledger::LedgerError) -> Self {
        match &err {
            kisan_ledger::LedgerError::AlreadyRedeemed(_) => Self::Conflict(err.to_string()),
            kisan_ledger::LedgerError::Storage(_) => Self::Internal(err.to_string()),
        }
    }
}
