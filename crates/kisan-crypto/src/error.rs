//! # Cryptographic Errors

use thiserror::Error;

/// Errors from encoding and decoding cryptographic values.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Input is not 64 lowercase/uppercase hex characters.
    #[error("invalid hex encoding: \"{0}\" (expected 64 hex characters)")]
    InvalidHex(String),

    /// Input decodes to an integer at or above the field modulus.
    #[error("non-canonical field encoding: \"{0}\"")]
    NonCanonical(String),
}
