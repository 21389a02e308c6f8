//! # PostgreSQL Ledger
//!
//! The production ledger. Atomicity comes from the table's primary key:
//! `INSERT ... ON CONFLICT DO NOTHING` either creates the redemption record
//! or affects zero rows, and the database serializes the two outcomes per
//! key. No transaction or advisory lock is needed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;

use kisan_crypto::Commitment;

use crate::error::LedgerError;
use crate::{ClaimReceipt, LedgerStats, ReplayLedger};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS redeemed_commitments (
    commitment TEXT PRIMARY KEY,
    redeemed_at TIMESTAMPTZ NOT NULL
)";

/// Ledger backed by a PostgreSQL table keyed on the commitment hex.
#[derive(Debug, Clone)]
pub struct PgReplayLedger {
    pool: PgPool,
}

impl PgReplayLedger {
    /// Wrap an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the given database URL.
    pub async fn connect(url: &str) -> Result<Self, LedgerError> {
        let pool = PgPool::connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Create the redemption table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), LedgerError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// The underlying pool, for sharing with other components.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ReplayLedger for PgReplayLedger {
    async fn claim(&self, commitment: &Commitment) -> Result<ClaimReceipt, LedgerError> {
        let redeemed_at = Utc::now();
        let result = sqlx::query(
            "INSERT INTO redeemed_commitments (commitment, redeemed_at)
             VALUES ($1, $2)
             ON CONFLICT (commitment) DO NOTHING",
        )
        .bind(commitment.to_hex())
        .bind(redeemed_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(LedgerError::AlreadyRedeemed(*commitment));
        }
        tracing::info!(commitment = %commitment, "commitment redeemed");
        Ok(ClaimReceipt {
            commitment: *commitment,
            redeemed_at,
        })
    }

    async fn is_redeemed(&self, commitment: &Commitment) -> Result<bool, LedgerError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM redeemed_commitments WHERE commitment = $1)",
        )
        .bind(commitment.to_hex())
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn stats(&self) -> Result<LedgerStats, LedgerError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM redeemed_commitments")
            .fetch_one(&self.pool)
            .await?;
        Ok(LedgerStats {
            total_redeemed: total as u64,
        })
    }
}
