//! Proof generation from capture inputs.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use kisan_core::{AccountId, ClassifierReport, ComplianceVerdict, GeoPoint};
use kisan_zkp::{
    Groth16ProofSystem, PrivateWitness, ProofArtifact, ProofSystem, ProvingKeyPackage,
    PublicInputs,
};

/// Arguments for `kisan prove`.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// GPS latitude in decimal degrees.
    #[arg(long)]
    pub lat: f64,

    /// GPS longitude in decimal degrees.
    #[arg(long)]
    pub lng: f64,

    /// Classifier verdict string (COMPLIANT, VIOLATION, PENDING).
    #[arg(long, default_value = "COMPLIANT")]
    pub verdict: String,

    /// Classifier confidence in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    pub confidence: f64,

    /// Classifier model version tag.
    #[arg(long, default_value = "resnet50-unet-v1.0")]
    pub model_version: String,

    /// The submitting account identifier (e.g. wallet address).
    #[arg(long)]
    pub account: String,

    /// Path to the proving key.
    #[arg(long, default_value = "keys/statement.pk")]
    pub key: PathBuf,

    /// Write the artifact JSON here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Assemble a witness and generate a proof artifact.
pub fn run_prove(args: &ProveArgs) -> anyhow::Result<()> {
    let verdict = ComplianceVerdict::parse(&args.verdict)?;
    let report = ClassifierReport::new(verdict, args.confidence, args.model_version.clone())?;
    let location = GeoPoint::new(args.lat, args.lng)?;
    let account = AccountId::new(args.account.clone())?;

    let pk = ProvingKeyPackage::read_from(&args.key)
        .with_context(|| format!("loading proving key {}", args.key.display()))?;

    let mut rng = rand::thread_rng();
    let witness = PrivateWitness::assemble(&report, &location, &account, &mut rng);
    let public = PublicInputs::compliant();
    let proven = Groth16ProofSystem.prove(&pk, &witness, &public)?;
    let artifact = ProofArtifact::from_parts(&proven.proof, &public, &proven.commitment);

    let json = serde_json::to_string_pretty(&artifact)?;
    match &args.out {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(commitment = %proven.commitment, path = %path.display(), "proof written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
