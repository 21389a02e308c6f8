//! # kisan-ledger — Replay Protection
//!
//! Ensures each valid proof's commitment can be redeemed at most once.
//! Per commitment the state machine is `Unseen -> Redeemed`, terminal; no
//! other transition exists, and the record is append-only.
//!
//! The ledger is the only shared-mutable-state component in the stack. Its
//! single write operation is an atomic insert-if-absent: two concurrent
//! claims of one commitment yield exactly one success and one
//! [`LedgerError::AlreadyRedeemed`]. Key-level atomicity suffices — there
//! is no cross-commitment coordination.
//!
//! Nothing about the witness is stored. A redemption record is the
//! commitment's existence plus a timestamp: the payout collaborator learns
//! only "this exact anonymous statement was true and has now been spent".

pub mod error;
pub mod memory;
pub mod postgres;

pub use error::LedgerError;
pub use memory::MemoryLedger;
pub use postgres::PgReplayLedger;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kisan_crypto::Commitment;

/// Receipt for the first successful claim of a commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimReceipt {
    /// The commitment that was redeemed.
    pub commitment: Commitment,
    /// When the redemption was recorded.
    pub redeemed_at: DateTime<Utc>,
}

/// Aggregate counters exposed to the payout collaborator's display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Total commitments ever redeemed.
    pub total_redeemed: u64,
}

/// The replay-protection capability.
///
/// Injected into consumers as `Arc<dyn ReplayLedger>`; implementations must
/// provide durable storage in production ([`PgReplayLedger`]) — a
/// process-local map ([`MemoryLedger`]) is for tests and demos only, since
/// redemption must survive restarts and be externally auditable.
#[async_trait]
pub trait ReplayLedger: Send + Sync {
    /// Atomically record the commitment as redeemed.
    ///
    /// Returns a receipt iff this call is the first successful claim;
    /// otherwise fails with [`LedgerError::AlreadyRedeemed`]. The
    /// check-then-record step is atomic with respect to concurrent claims
    /// of the same commitment.
    async fn claim(&self, commitment: &Commitment) -> Result<ClaimReceipt, LedgerError>;

    /// Whether the commitment has already been redeemed.
    async fn is_redeemed(&self, commitment: &Commitment) -> Result<bool, LedgerError>;

    /// Aggregate redemption counters.
    async fn stats(&self) -> Result<LedgerStats, LedgerError>;
}
