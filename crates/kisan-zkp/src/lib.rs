//! # kisan-zkp — The Anonymous Compliance Statement
//!
//! Everything with cryptographic weight lives here: the arithmetic circuit
//! encoding the compliance predicate, the one-time setup that specializes
//! key material to that circuit, the Groth16 prover and verifier, and the
//! wire format for transmitted proofs.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): the [`ProofSystem`] contract both backends
//!   satisfy — prove from a private witness, verify against public inputs
//!   and a commitment, never anything else.
//! - **Circuit** (`circuit.rs`): the fixed constraint set — status equality,
//!   coordinate range validity, commitment derivation.
//! - **Range gadget** (`range.rs`): bounded signed integers in an unsigned
//!   field, the comparator the coordinate constraints are built from.
//! - **Witness** (`witness.rs`): assembly of the private witness from the
//!   capture and classifier collaborators' plain values.
//! - **Setup** (`setup.rs`): key generation, fingerprinted key packages,
//!   deterministic rejection of stale or foreign keys.
//! - **Groth16** (`groth16.rs`): the production backend. Constant-size
//!   proofs, pairing-check verification.
//! - **Artifact** (`artifact.rs`): the flat serialized proof structure
//!   transmitted to verifying parties.
//! - **Mock** (`mock.rs`, `mock` feature): deterministic test double.
//! - **Policy** (`policy.rs`): production-mode rejection of mock proofs.
//!
//! ## Statement
//!
//! A proof convinces the verifier that the prover holds a witness
//! `(status_hash, lat_fixed, lng_fixed, identity_hash, nonce)` such that
//! the status hash equals the public compliant-verdict hash, the fixed-point
//! coordinates lie in the valid geographic domain, and the published
//! commitment is the arity-5 Poseidon hash of the witness — without
//! revealing the location, the identity, or the nonce.

pub mod artifact;
pub mod circuit;
pub mod groth16;
#[cfg(feature = "mock")]
pub mod mock;
pub mod policy;
pub mod range;
pub mod setup;
pub mod traits;
pub mod witness;

pub use artifact::ProofArtifact;
pub use circuit::ComplianceCircuit;
pub use groth16::{Groth16Proof, Groth16ProofSystem};
#[cfg(feature = "mock")]
pub use mock::MockProofSystem;
pub use policy::{PolicyError, PolicyMode, ProofBackend, ProofPolicy};
pub use setup::{setup, CircuitFingerprint, ProvingKeyPackage, SetupError, VerificationKeyPackage};
pub use traits::{ProofError, ProofSystem, ProvenStatement, VerifyError};
pub use witness::{PrivateWitness, PublicInputs};
