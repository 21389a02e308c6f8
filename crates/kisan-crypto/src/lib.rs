//! # kisan-crypto — Field Arithmetic and Hashing
//!
//! The cryptographic primitives shared by the prover, the verifier, and the
//! ledger: bridging between domain values and the BN254 scalar field, the
//! arity-5 Poseidon sponge used both inside the circuit and off-circuit, and
//! the [`Commitment`] type that is the statement's sole public fingerprint.
//!
//! ## Invariant
//!
//! The off-circuit Poseidon in [`poseidon`] and the in-circuit gadget in
//! `kisan-zkp` must evaluate identically: both read the one cached
//! [`poseidon::poseidon_config`]. A commitment computed here is exactly the
//! value the circuit's commitment constraint reproduces.

pub mod commitment;
pub mod error;
pub mod field;
pub mod poseidon;

pub use commitment::{compute_commitment, Commitment};
pub use error::CryptoError;
pub use field::{field_from_i64, field_to_bytes_be, hash_to_field, Fr};
pub use poseidon::{poseidon_config, poseidon_hash5};
