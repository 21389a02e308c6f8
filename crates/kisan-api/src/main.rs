//! # kisan-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Key material must already exist (run
//! `kisan setup` first); the ledger backend is PostgreSQL when
//! `DATABASE_URL` is set, otherwise a non-durable in-memory map suitable
//! only for local development.

use std::sync::Arc;

use kisan_api::state::{AppConfig, AppState};
use kisan_ledger::{MemoryLedger, PgReplayLedger, ReplayLedger};
use kisan_zkp::{ProofPolicy, ProvingKeyPackage, VerificationKeyPackage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // Load key material. Absent keys are a hard error: generating them
    // implicitly would silently fork the deployment onto a new key version.
    let pk_path = config.key_dir.join("statement.pk");
    let vk_path = config.key_dir.join("statement.vk");
    let proving_key = ProvingKeyPackage::read_from(&pk_path).map_err(|e| {
        tracing::error!(path = %pk_path.display(), "failed to load proving key: {e}; run `kisan setup` first");
        e
    })?;
    let verification_key = VerificationKeyPackage::read_from(&vk_path).map_err(|e| {
        tracing::error!(path = %vk_path.display(), "failed to load verification key: {e}; run `kisan setup` first");
        e
    })?;
    tracing::info!(
        fingerprint = %verification_key.fingerprint.to_hex(),
        "loaded compliance statement keys"
    );

    // Ledger backend: durable PostgreSQL in production, in-memory otherwise.
    let ledger: Arc<dyn ReplayLedger> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pg = PgReplayLedger::connect(&url).await?;
            pg.ensure_schema().await?;
            tracing::info!("replay ledger backed by PostgreSQL");
            Arc::new(pg)
        }
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL not set; using in-memory replay ledger (redemptions will not survive restart)"
            );
            Arc::new(MemoryLedger::new())
        }
    };

    let policy = ProofPolicy::from_env();
    tracing::info!(policy = ?policy.mode(), "proof backend policy resolved");

    let state = AppState::new(proving_key, verification_key, ledger, policy);
    let app = kisan_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("kisan API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
