//! # In-Memory Ledger
//!
//! A process-local ledger for tests and single-process demos. Redemptions
//! do not survive restarts, so this implementation is unsuitable for
//! production — durable storage is what makes spend-once auditable.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use kisan_crypto::Commitment;

use crate::error::LedgerError;
use crate::{ClaimReceipt, LedgerStats, ReplayLedger};

/// Ledger backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    redeemed: Mutex<HashMap<Commitment, DateTime<Utc>>>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReplayLedger for MemoryLedger {
    async fn claim(&self, commitment: &Commitment) -> Result<ClaimReceipt, LedgerError> {
        // The lock spans check and insert: concurrent claims of one
        // commitment serialize here.
        let mut redeemed = self.redeemed.lock();
        if redeemed.contains_key(commitment) {
            return Err(LedgerError::AlreadyRedeemed(*commitment));
        }
        let redeemed_at = Utc::now();
        redeemed.insert(*commitment, redeemed_at);
        Ok(ClaimReceipt {
            commitment: *commitment,
            redeemed_at,
        })
    }

    async fn is_redeemed(&self, commitment: &Commitment) -> Result<bool, LedgerError> {
        Ok(self.redeemed.lock().contains_key(commitment))
    }

    async fn stats(&self) -> Result<LedgerStats, LedgerError> {
        Ok(LedgerStats {
            total_redeemed: self.redeemed.lock().len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use kisan_crypto::{compute_commitment, hash_to_field, Fr};

    fn commitment(nonce: u64) -> Commitment {
        compute_commitment(
            &hash_to_field(b"COMPLIANT"),
            &Fr::from(286_139u64),
            &Fr::from(772_090u64),
            &hash_to_field(b"farmer-wallet-1"),
            &Fr::from(nonce),
        )
    }

    #[tokio::test]
    async fn first_claim_succeeds_second_is_rejected() {
        let ledger = MemoryLedger::new();
        let c = commitment(1);

        let receipt = ledger.claim(&c).await.unwrap();
        assert_eq!(receipt.commitment, c);

        let err = ledger.claim(&c).await.unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyRedeemed(found) if found == c));
    }

    #[tokio::test]
    async fn distinct_commitments_are_independent() {
        let ledger = MemoryLedger::new();
        ledger.claim(&commitment(1)).await.unwrap();
        ledger.claim(&commitment(2)).await.unwrap();
        assert_eq!(ledger.stats().await.unwrap().total_redeemed, 2);
    }

    #[tokio::test]
    async fn is_redeemed_tracks_claims() {
        let ledger = MemoryLedger::new();
        let c = commitment(3);
        assert!(!ledger.is_redeemed(&c).await.unwrap());
        ledger.claim(&c).await.unwrap();
        assert!(ledger.is_redeemed(&c).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_claims_yield_exactly_one_success() {
        let ledger = Arc::new(MemoryLedger::new());
        let c = commitment(4);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let ledger = Arc::clone(&ledger);
            handles.push(tokio::spawn(async move { ledger.claim(&c).await }));
        }

        let mut successes = 0;
        let mut rejections = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(LedgerError::AlreadyRedeemed(_)) => rejections += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(rejections, 7);
    }
}
