//! # Proof System Trait
//!
//! The abstract interface both the Groth16 backend and the mock test double
//! satisfy. The trait requires `Send + Sync`: proof generation and
//! verification are pure, stateless functions safe to run fully in parallel
//! across independent witnesses.

use thiserror::Error;

use kisan_crypto::Commitment;

use crate::witness::{PrivateWitness, PublicInputs};

/// Error during proof generation.
#[derive(Error, Debug)]
pub enum ProofError {
    /// The witness does not satisfy the statement. Carries the offending
    /// check. Recoverable only by obtaining a corrected witness — retrying
    /// with the same witness fails identically.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The proving key was generated for a different circuit shape.
    #[error("proving key mismatch: {0}")]
    KeyMismatch(String),

    /// Internal prover failure (constraint synthesis or proving algorithm).
    #[error("prover error: {0}")]
    Prover(String),
}

/// Error during proof verification.
///
/// A failed pairing check is not an error — `verify` returns `Ok(false)`.
/// These variants cover proofs that cannot even be checked.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The proof object is malformed: undecodable coordinates, points off
    /// the curve or outside the prime-order subgroup, inconsistent signals.
    #[error("invalid proof: {0}")]
    InvalidProof(String),

    /// The verification key was generated for a different circuit shape.
    #[error("verification key mismatch: {0}")]
    KeyMismatch(String),

    /// Internal verifier failure.
    #[error("verifier error: {0}")]
    Verifier(String),
}

/// A successful proof together with the commitment it binds to.
#[derive(Debug, Clone)]
pub struct ProvenStatement<P> {
    /// The succinct proof object.
    pub proof: P,
    /// The statement commitment, read off the circuit's public output.
    pub commitment: Commitment,
}

/// Abstract interface for the compliance proof system.
///
/// Implementations hold no state between invocations; all key material is
/// passed explicitly so callers control loading and caching.
pub trait ProofSystem: Send + Sync {
    /// The proof type produced by this backend.
    type Proof: Clone + Send + Sync;
    /// The proving key type.
    type ProvingKey: Send + Sync;
    /// The verifying key type.
    type VerifyingKey: Send + Sync;

    /// Generate a proof for the witness, or fail with a descriptive
    /// [`ProofError::ConstraintViolation`] if the witness cannot satisfy
    /// the statement. No proof object is ever produced for an
    /// unsatisfiable witness.
    fn prove(
        &self,
        pk: &Self::ProvingKey,
        witness: &PrivateWitness,
        public: &PublicInputs,
    ) -> Result<ProvenStatement<Self::Proof>, ProofError>;

    /// Check a proof against exactly this `(public, commitment)` pair.
    ///
    /// Returns `Ok(true)` iff the proof is valid; mutating either input
    /// after proof generation yields `Ok(false)`. Replay protection is not
    /// this layer's concern.
    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        proof: &Self::Proof,
        public: &PublicInputs,
        commitment: &Commitment,
    ) -> Result<bool, VerifyError>;
}
