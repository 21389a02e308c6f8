//! # kisan CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity maps onto the tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kisan_cli::claim::{run_claim, ClaimArgs};
use kisan_cli::prove::{run_prove, ProveArgs};
use kisan_cli::setup::{run_setup, SetupArgs};
use kisan_cli::verify::{run_verify, VerifyArgs};

/// Kisan DePIN proof toolchain.
///
/// Generates key material for the anonymous compliance statement, produces
/// and verifies proofs, and redeems commitments against the replay ledger.
#[derive(Parser, Debug)]
#[command(name = "kisan", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// One-time generation of the proving/verification key pair.
    Setup(SetupArgs),

    /// Generate a compliance proof from capture inputs.
    Prove(ProveArgs),

    /// Verify a proof artifact.
    Verify(VerifyArgs),

    /// Verify an artifact and redeem its commitment (at most once).
    Claim(ClaimArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Setup(args) => run_setup(&args),
        Commands::Prove(args) => run_prove(&args),
        Commands::Verify(args) => run_verify(&args),
        Commands::Claim(args) => run_claim(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
