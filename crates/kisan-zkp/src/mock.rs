//! # Mock Proof System
//!
//! A deterministic, transparent test double. "Proofs" are SHA-256
//! transcripts of the public inputs and commitment — no zero-knowledge, no
//! soundness against a dishonest prover, but the same contract as the real
//! backend: constraint violations are detected identically and a proof
//! binds to exactly one `(public inputs, commitment)` pair.
//!
//! Unlike Groth16, the mock's setup is deterministic: independently
//! "generated" mock keys are interchangeable, a documented exception to the
//! key-binding property. [`crate::policy::ProofPolicy`] rejects mock proofs
//! unconditionally in production mode.

use sha2::{Digest, Sha256};

use kisan_crypto::Commitment;

use crate::circuit::ComplianceCircuit;
use crate::setup::{CircuitFingerprint, SetupError};
use crate::traits::{ProofError, ProofSystem, ProvenStatement, VerifyError};
use crate::witness::{PrivateWitness, PublicInputs};

const MOCK_DOMAIN_TAG: &[u8] = b"kisan-mock-proof-v1";

/// A mock proof: the SHA-256 transcript it must re-derive on verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockProof {
    /// The transcript digest.
    pub digest: [u8; 32],
}

/// Mock proving key. Deterministic; carries only the circuit fingerprint.
#[derive(Debug, Clone)]
pub struct MockProvingKey {
    /// Fingerprint of the circuit this key pretends to serve.
    pub fingerprint: CircuitFingerprint,
}

/// Mock verifying key. Deterministic; carries only the circuit fingerprint.
#[derive(Debug, Clone)]
pub struct MockVerifyingKey {
    /// Fingerprint of the circuit this key pretends to serve.
    pub fingerprint: CircuitFingerprint,
}

/// Generate the deterministic mock key pair.
pub fn mock_setup() -> Result<(MockProvingKey, MockVerifyingKey), SetupError> {
    let fingerprint = CircuitFingerprint::current()?;
    Ok((
        MockProvingKey { fingerprint },
        MockVerifyingKey { fingerprint },
    ))
}

/// The deterministic test double.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProofSystem;

impl MockProofSystem {
    fn transcript(
        fingerprint: &CircuitFingerprint,
        public: &PublicInputs,
        commitment: &Commitment,
    ) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(MOCK_DOMAIN_TAG);
        hasher.update(fingerprint.0.bytes);
        hasher.update(kisan_crypto::field_to_bytes_be(&public.expected_status_hash));
        hasher.update(commitment.as_bytes());
        hasher.finalize().into()
    }
}

impl ProofSystem for MockProofSystem {
    type Proof = MockProof;
    type ProvingKey = MockProvingKey;
    type VerifyingKey = MockVerifyingKey;

    fn prove(
        &self,
        pk: &Self::ProvingKey,
        witness: &PrivateWitness,
        public: &PublicInputs,
    ) -> Result<ProvenStatement<Self::Proof>, ProofError> {
        // Identical pre-flight to the real backend: the mock must reject
        // exactly the witnesses Groth16 rejects.
        ComplianceCircuit::preflight(witness, public)?;

        let commitment = witness.commitment();
        let digest = Self::transcript(&pk.fingerprint, public, &commitment);
        Ok(ProvenStatement {
            proof: MockProof { digest },
            commitment,
        })
    }

    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        proof: &Self::Proof,
        public: &PublicInputs,
        commitment: &Commitment,
    ) -> Result<bool, VerifyError> {
        let expected = Self::transcript(&vk.fingerprint, public, commitment);
        Ok(proof.digest == expected)
    }
}
