//! # Proof Backend Policy
//!
//! The mock proof system satisfies the `ProofSystem` contract with zero
//! cryptographic security. If a verifier ever accepted mock proofs in
//! production, anyone could redeem commitments without holding a witness.
//! This module is the runtime gate: consumers check the policy before
//! treating a verification result as authoritative.
//!
//! The default mode is compile-time: release builds start in `Production`,
//! debug builds in `Development`. The `KISAN_PROOF_POLICY` environment
//! variable overrides either way.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from proof policy enforcement.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// Mock proof rejected in production mode.
    #[error("mock proof rejected: production mode requires the {required} backend")]
    MockProofRejected {
        /// The backend production mode requires.
        required: &'static str,
    },
}

/// The backend that produced a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofBackend {
    /// Deterministic SHA-256 test double — no cryptographic security.
    Mock,
    /// Groth16 SNARK over BN254.
    Groth16,
}

impl ProofBackend {
    /// Whether this backend provides real cryptographic soundness.
    pub fn is_real(self) -> bool {
        matches!(self, ProofBackend::Groth16)
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            ProofBackend::Mock => "mock-sha256",
            ProofBackend::Groth16 => "groth16",
        }
    }
}

/// Proof policy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMode {
    /// Reject mock proofs unconditionally.
    Production,
    /// Accept any backend. Local development and tests only.
    Development,
}

/// The proof backend policy in force for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofPolicy {
    mode: PolicyMode,
}

impl ProofPolicy {
    /// Construct a policy with an explicit mode.
    pub fn new(mode: PolicyMode) -> Self {
        Self { mode }
    }

    /// The compile-time default: production in release builds, development
    /// in debug builds.
    pub fn default_for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::new(PolicyMode::Development)
        } else {
            Self::new(PolicyMode::Production)
        }
    }

    /// Resolve the policy from `KISAN_PROOF_POLICY` (`production` or
    /// `development`), falling back to the build default. Unrecognized
    /// values fall back to production — failing closed.
    pub fn from_env() -> Self {
        match std::env::var("KISAN_PROOF_POLICY") {
            Ok(value) => match value.to_ascii_lowercase().as_str() {
                "development" => Self::new(PolicyMode::Development),
                "production" => Self::new(PolicyMode::Production),
                other => {
                    tracing::warn!(
                        value = other,
                        "unrecognized KISAN_PROOF_POLICY; failing closed to production"
                    );
                    Self::new(PolicyMode::Production)
                }
            },
            Err(_) => Self::default_for_build(),
        }
    }

    /// The mode in force.
    pub fn mode(&self) -> PolicyMode {
        self.mode
    }

    /// Check whether a proof from `backend` may be treated as authoritative.
    pub fn enforce(&self, backend: ProofBackend) -> Result<(), PolicyError> {
        match self.mode {
            PolicyMode::Development => Ok(()),
            PolicyMode::Production => {
                if backend.is_real() {
                    Ok(())
                } else {
                    Err(PolicyError::MockProofRejected {
                        required: ProofBackend::Groth16.name(),
                    })
                }
            }
        }
    }
}
