//! # Statement Commitment
//!
//! The single public value a proof binds to: the Poseidon hash of the five
//! witness values, carried as a canonical 32-byte big-endian encoding.
//! Hex-encoded commitments key the replay ledger and appear verbatim in
//! proof artifacts, so the encoding is strict: parsing rejects anything that
//! is not the canonical form of a field element.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CryptoError;
use crate::field::{field_to_bytes_be, Fr};
use crate::poseidon::poseidon_hash5;
use ark_ff::PrimeField;

/// A statement commitment: one BN254 scalar in canonical big-endian form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Wrap a field element as a commitment.
    pub fn from_field(value: &Fr) -> Self {
        Self(field_to_bytes_be(value))
    }

    /// The commitment as a field element, for use as a public input.
    pub fn to_field(&self) -> Fr {
        Fr::from_be_bytes_mod_order(&self.0)
    }

    /// The raw 32-byte big-endian encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding, the ledger's key form.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a commitment from its hex form.
    ///
    /// Rejects malformed hex and non-canonical encodings (values at or above
    /// the field modulus): a commitment that does not round-trip is not a
    /// commitment this stack produced.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        if hex.len() != 64 {
            return Err(CryptoError::InvalidHex(hex.to_string()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| CryptoError::InvalidHex(hex.to_string()))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| CryptoError::InvalidHex(hex.to_string()))?;
        }
        let candidate = Self(bytes);
        if field_to_bytes_be(&candidate.to_field()) != bytes {
            return Err(CryptoError::NonCanonical(hex.to_string()));
        }
        Ok(candidate)
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(D::Error::custom)
    }
}

/// Compute the statement commitment from the five witness field elements.
///
/// `Poseidon5(status_hash, lat_fixed, lng_fixed, identity_hash, nonce)` —
/// the exact function the circuit's commitment constraint reproduces.
pub fn compute_commitment(
    status_hash: &Fr,
    lat_fixed: &Fr,
    lng_fixed: &Fr,
    identity_hash: &Fr,
    nonce: &Fr,
) -> Commitment {
    let digest = poseidon_hash5(&[*status_hash, *lat_fixed, *lng_fixed, *identity_hash, *nonce]);
    Commitment::from_field(&digest)
}
