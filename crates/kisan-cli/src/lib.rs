//! # kisan-cli — Toolchain Library
//!
//! Subcommand handlers for the `kisan` binary. Each module owns one
//! subcommand: key generation, proof generation, verification, and
//! commitment claims against the replay ledger.

pub mod claim;
pub mod prove;
pub mod setup;
pub mod verify;
