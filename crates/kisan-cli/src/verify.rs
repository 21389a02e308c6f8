//! Artifact verification against a stored verification key.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use kisan_zkp::{Groth16ProofSystem, ProofArtifact, ProofSystem, VerificationKeyPackage};

/// Arguments for `kisan verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the verification key.
    #[arg(long, default_value = "keys/statement.vk")]
    pub key: PathBuf,

    /// Path to the proof artifact JSON.
    #[arg(long)]
    pub proof: PathBuf,
}

/// Verify an artifact; exits non-zero for an invalid proof.
pub fn run_verify(args: &VerifyArgs) -> anyhow::Result<()> {
    let vk = VerificationKeyPackage::read_from(&args.key)
        .with_context(|| format!("loading verification key {}", args.key.display()))?;
    let artifact: ProofArtifact = serde_json::from_str(
        &fs::read_to_string(&args.proof)
            .with_context(|| format!("reading {}", args.proof.display()))?,
    )
    .context("parsing proof artifact")?;

    let (proof, public, commitment) = artifact.to_parts()?;
    let valid = Groth16ProofSystem.verify(&vk, &proof, &public, &commitment)?;
    if valid {
        println!("valid: commitment {commitment}");
        Ok(())
    } else {
        anyhow::bail!("invalid proof for commitment {commitment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prove::{run_prove, ProveArgs};
    use crate::setup::{run_setup, SetupArgs};

    #[test]
    fn verify_accepts_generated_artifact() {
        let dir = tempfile::tempdir().unwrap();
        run_setup(&SetupArgs {
            out_dir: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap();
        let proof_path = dir.path().join("proof.json");
        run_prove(&ProveArgs {
            lat: 28.6139,
            lng: 77.2090,
            verdict: "COMPLIANT".into(),
            confidence: 0.93,
            model_version: "resnet50-unet-v1.0".into(),
            account: "farmer-wallet-1".into(),
            key: dir.path().join("statement.pk"),
            out: Some(proof_path.clone()),
        })
        .unwrap();

        run_verify(&VerifyArgs {
            key: dir.path().join("statement.vk"),
            proof: proof_path,
        })
        .unwrap();
    }

    #[test]
    fn verify_rejects_key_from_rerun_setup() {
        let dir = tempfile::tempdir().unwrap();
        run_setup(&SetupArgs {
            out_dir: dir.path().to_path_buf(),
            force: false,
        })
        .unwrap();
        let proof_path = dir.path().join("proof.json");
        run_prove(&ProveArgs {
            lat: 28.6139,
            lng: 77.2090,
            verdict: "COMPLIANT".into(),
            confidence: 0.93,
            model_version: "resnet50-unet-v1.0".into(),
            account: "farmer-wallet-1".into(),
            key: dir.path().join("statement.pk"),
            out: Some(proof_path.clone()),
        })
        .unwrap();

        // Fresh setup randomness, same circuit: the old proof must not verify.
        run_setup(&SetupArgs {
            out_dir: dir.path().to_path_buf(),
            force: true,
        })
        .unwrap();
        let err = run_verify(&VerifyArgs {
            key: dir.path().join("statement.vk"),
            proof: proof_path,
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid proof"));
    }
}
