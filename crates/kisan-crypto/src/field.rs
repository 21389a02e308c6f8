//! # BN254 Scalar-Field Bridging
//!
//! Conversions between domain values (verdict strings, account identifiers,
//! signed fixed-point coordinates) and BN254 scalar-field elements.
//!
//! Strings enter the field by SHA-256 hashing followed by little-endian
//! reduction mod p; Poseidon is reserved for the in-circuit commitment,
//! where SHA-256 constraints would dominate the circuit.

use ark_ff::{BigInteger, PrimeField};
use kisan_core::sha256_bytes;

/// The scalar field of BN254, over which the statement is expressed.
pub use ark_bn254::Fr;

/// Hash an arbitrary byte string into the scalar field.
///
/// The 256-bit digest is reduced little-endian mod p. Reduction loses at
/// most two bits of the digest; collision resistance is inherited from
/// SHA-256.
pub fn hash_to_field(data: &[u8]) -> Fr {
    Fr::from_le_bytes_mod_order(&sha256_bytes(data).bytes)
}

/// Canonical 32-byte big-endian encoding of a field element.
pub fn field_to_bytes_be(value: &Fr) -> [u8; 32] {
    let repr = value.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out.copy_from_slice(&repr);
    out
}

/// Embed a signed fixed-point integer into the field.
///
/// Negative values map to their additive inverse mod p; the statement's
/// range constraints undo the embedding by shifting before comparison.
pub fn field_from_i64(value: i64) -> Fr {
    if value < 0 {
        -Fr::from(value.unsigned_abs())
    } else {
        Fr::from(value as u64)
    }
}
