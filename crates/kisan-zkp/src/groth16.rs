//! # Groth16 Backend
//!
//! The production proof system: pairing-based, constant-size proofs on
//! BN254, verification cost independent of circuit size. Proof generation
//! consumes fresh randomness per run; two proofs of the same witness are
//! distinct objects that verify against the same commitment.

use ark_bn254::Bn254;
use ark_groth16::Groth16;
use ark_snark::SNARK;

use kisan_crypto::Commitment;

use crate::circuit::ComplianceCircuit;
use crate::setup::{CircuitFingerprint, ProvingKeyPackage, VerificationKeyPackage};
use crate::traits::{ProofError, ProofSystem, ProvenStatement, VerifyError};
use crate::witness::{PrivateWitness, PublicInputs};

/// A Groth16 proof over BN254: two G1 points and one G2 point.
pub type Groth16Proof = ark_groth16::Proof<Bn254>;

/// The production proof system.
#[derive(Debug, Default, Clone, Copy)]
pub struct Groth16ProofSystem;

impl ProofSystem for Groth16ProofSystem {
    type Proof = Groth16Proof;
    type ProvingKey = ProvingKeyPackage;
    type VerifyingKey = VerificationKeyPackage;

    fn prove(
        &self,
        pk: &Self::ProvingKey,
        witness: &PrivateWitness,
        public: &PublicInputs,
    ) -> Result<ProvenStatement<Self::Proof>, ProofError> {
        let current = CircuitFingerprint::current()
            .map_err(|e| ProofError::Prover(e.to_string()))?;
        if pk.fingerprint != current {
            return Err(ProofError::KeyMismatch(format!(
                "proving key fingerprint {} does not match compiled circuit {}",
                pk.fingerprint.to_hex(),
                current.to_hex()
            )));
        }

        // Witness expansion first: an unsatisfiable witness must surface a
        // descriptive error, never a proof destined to fail verification.
        ComplianceCircuit::preflight(witness, public)?;

        let commitment = witness.commitment();
        let circuit = ComplianceCircuit::assigned(witness, public, &commitment);
        let mut rng = rand::thread_rng();
        let proof = Groth16::<Bn254>::prove(&pk.key, circuit, &mut rng)
            .map_err(|e| ProofError::Prover(e.to_string()))?;

        tracing::debug!(commitment = %commitment, "generated compliance proof");
        Ok(ProvenStatement { proof, commitment })
    }

    fn verify(
        &self,
        vk: &Self::VerifyingKey,
        proof: &Self::Proof,
        public: &PublicInputs,
        commitment: &Commitment,
    ) -> Result<bool, VerifyError> {
        let current = CircuitFingerprint::current()
            .map_err(|e| VerifyError::Verifier(e.to_string()))?;
        if vk.fingerprint != current {
            return Err(VerifyError::KeyMismatch(format!(
                "verification key fingerprint {} does not match compiled circuit {}",
                vk.fingerprint.to_hex(),
                current.to_hex()
            )));
        }

        let pvk = Groth16::<Bn254>::process_vk(&vk.key)
            .map_err(|e| VerifyError::Verifier(e.to_string()))?;
        let instance = public.to_field_elements(commitment);
        Groth16::<Bn254>::verify_with_processed_vk(&pvk, &instance, proof)
            .map_err(|e| VerifyError::Verifier(e.to_string()))
    }
}
