//! # Identity Newtypes
//!
//! The submitting account's identifier as supplied by the wallet layer.
//! The proof stack never interprets the identifier — it is hashed into the
//! witness and otherwise opaque — but basic shape validation at the boundary
//! keeps garbage (empty strings, whitespace, control characters) out of
//! commitments that can never be redeemed.

use serde::Serialize;

use crate::error::ValidationError;

/// Maximum accepted identifier length. Generous enough for any address
/// encoding in circulation.
const MAX_ACCOUNT_ID_LEN: usize = 128;

/// An opaque account identifier (e.g. a wallet address) for the prover.
///
/// Construction goes through [`AccountId::new`]; there is no `Deserialize`
/// path around the validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Construct an account identifier, rejecting empty or malformed input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let ok = !id.is_empty()
            && id.len() <= MAX_ACCOUNT_ID_LEN
            && id.chars().all(|c| c.is_ascii_graphic());
        if ok {
            Ok(Self(id))
        } else {
            Err(ValidationError::InvalidAccountId(id))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier's raw bytes, as fed to the identity hash.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
