//! One-time key generation for the compliance statement.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

/// Arguments for `kisan setup`.
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Directory to write `statement.pk` and `statement.vk` into.
    #[arg(long, default_value = "keys")]
    pub out_dir: PathBuf,

    /// Overwrite existing key files. Regenerating keys invalidates every
    /// proof produced under the old pair.
    #[arg(long)]
    pub force: bool,
}

/// Generate and store a fresh key pair.
pub fn run_setup(args: &SetupArgs) -> anyhow::Result<()> {
    let pk_path = args.out_dir.join("statement.pk");
    let vk_path = args.out_dir.join("statement.vk");
    if !args.force && (pk_path.exists() || vk_path.exists()) {
        anyhow::bail!(
            "key files already exist in {}; pass --force to regenerate (this invalidates all existing proofs)",
            args.out_dir.display()
        );
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating key directory {}", args.out_dir.display()))?;

    let mut rng = rand::thread_rng();
    let (pk, vk) = kisan_zkp::setup(&mut rng).context("key generation failed")?;
    pk.write_to(&pk_path)
        .with_context(|| format!("writing {}", pk_path.display()))?;
    vk.write_to(&vk_path)
        .with_context(|| format!("writing {}", vk_path.display()))?;

    println!("circuit fingerprint: {}", vk.fingerprint.to_hex());
    println!("proving key:         {}", pk_path.display());
    println!("verification key:    {}", vk_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_writes_both_key_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = SetupArgs {
            out_dir: dir.path().join("keys"),
            force: false,
        };
        run_setup(&args).unwrap();
        assert!(args.out_dir.join("statement.pk").exists());
        assert!(args.out_dir.join("statement.vk").exists());
    }

    #[test]
    fn setup_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let args = SetupArgs {
            out_dir: dir.path().to_path_buf(),
            force: false,
        };
        run_setup(&args).unwrap();
        assert!(run_setup(&args).is_err());

        let forced = SetupArgs {
            out_dir: dir.path().to_path_buf(),
            force: true,
        };
        run_setup(&forced).unwrap();
    }
}
