//! Commitment claims against the durable replay ledger.
//!
//! The command-line counterpart of the payout collaborator's claim call:
//! verify the artifact, then insert-if-absent into the PostgreSQL ledger.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use kisan_ledger::{PgReplayLedger, ReplayLedger};
use kisan_zkp::{Groth16ProofSystem, ProofArtifact, ProofSystem, VerificationKeyPackage};

/// Arguments for `kisan claim`.
#[derive(Args, Debug)]
pub struct ClaimArgs {
    /// Path to the verification key.
    #[arg(long, default_value = "keys/statement.vk")]
    pub key: PathBuf,

    /// Path to the proof artifact JSON.
    #[arg(long)]
    pub proof: PathBuf,

    /// PostgreSQL connection URL. Falls back to DATABASE_URL.
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Verify the artifact and redeem its commitment, at most once.
pub fn run_claim(args: &ClaimArgs) -> anyhow::Result<()> {
    let vk = VerificationKeyPackage::read_from(&args.key)
        .with_context(|| format!("loading verification key {}", args.key.display()))?;
    let artifact: ProofArtifact = serde_json::from_str(
        &fs::read_to_string(&args.proof)
            .with_context(|| format!("reading {}", args.proof.display()))?,
    )
    .context("parsing proof artifact")?;

    let (proof, public, commitment) = artifact.to_parts()?;
    if !Groth16ProofSystem.verify(&vk, &proof, &public, &commitment)? {
        anyhow::bail!("invalid proof for commitment {commitment}; nothing redeemed");
    }

    let database_url = args
        .database_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("--database-url or DATABASE_URL is required")?;

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(async {
        let ledger = PgReplayLedger::connect(&database_url)
            .await
            .context("connecting to ledger database")?;
        ledger.ensure_schema().await?;
        let receipt = ledger.claim(&commitment).await?;
        println!(
            "first claim: commitment {} redeemed at {}",
            receipt.commitment, receipt.redeemed_at
        );
        Ok(())
    })
}
