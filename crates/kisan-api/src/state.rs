//! # Application State
//!
//! Shared state for the API handlers: loaded key material, the proof
//! system, the replay-ledger capability, and the proof-backend policy.
//! Everything is behind `Arc` — handlers run fully in parallel and nothing
//! here is mutable except the ledger, which manages its own atomicity.

use std::sync::Arc;

use kisan_ledger::ReplayLedger;
use kisan_zkp::{Groth16ProofSystem, ProofPolicy, ProvingKeyPackage, VerificationKeyPackage};

/// Environment-derived configuration for the API binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Directory holding `statement.pk` / `statement.vk`.
    pub key_dir: std::path::PathBuf,
}

impl AppConfig {
    /// Assemble configuration from the environment (`PORT`,
    /// `KISAN_KEY_DIR`).
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let key_dir = std::env::var("KISAN_KEY_DIR")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| std::path::PathBuf::from("keys"));
        Self { port, key_dir }
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// The production proof system.
    pub system: Groth16ProofSystem,
    /// Proving key, used by the proof-generation route.
    pub proving_key: Arc<ProvingKeyPackage>,
    /// Verification key, used by verification, claims, and distribution.
    pub verification_key: Arc<VerificationKeyPackage>,
    /// The replay-protection capability.
    pub ledger: Arc<dyn ReplayLedger>,
    /// Proof-backend policy in force for this process.
    pub policy: ProofPolicy,
}

impl AppState {
    /// Assemble state from loaded key material and a ledger backend.
    pub fn new(
        proving_key: ProvingKeyPackage,
        verification_key: VerificationKeyPackage,
        ledger: Arc<dyn ReplayLedger>,
        policy: ProofPolicy,
    ) -> Self {
        Self {
            system: Groth16ProofSystem,
            proving_key: Arc::new(proving_key),
            verification_key: Arc::new(verification_key),
            ledger,
            policy,
        }
    }
}
