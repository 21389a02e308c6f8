//! # Ledger Errors

use thiserror::Error;

use kisan_crypto::Commitment;

/// Errors from redemption operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The commitment was already claimed. Not a cryptographic failure —
    /// the proof may be perfectly valid — but a terminal business
    /// rejection: the caller must not pay twice.
    #[error("commitment already redeemed: {0}")]
    AlreadyRedeemed(Commitment),

    /// Underlying storage failure.
    #[error("ledger storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kisan_crypto::{compute_commitment, hash_to_field, Fr};

    #[test]
    fn already_redeemed_names_the_commitment() {
        let commitment = compute_commitment(
            &hash_to_field(b"COMPLIANT"),
            &Fr::from(1u64),
            &Fr::from(2u64),
            &hash_to_field(b"account"),
            &Fr::from(3u64),
        );
        let msg = format!("{}", LedgerError::AlreadyRedeemed(commitment));
        assert!(msg.contains(&commitment.to_hex()));
    }

    #[test]
    fn storage_error_display() {
        assert!(format!("{}", LedgerError::Storage("pool closed".into()))
            .contains("pool closed"));
    }
}
