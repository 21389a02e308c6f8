//! # The Compliance Statement Circuit
//!
//! The fixed set of polynomial equality constraints over the BN254 scalar
//! field. Three groups:
//!
//! 1. **Status equality** — the witness's status hash equals the public
//!    compliant-verdict hash. The only semantic gate; the verdict itself is
//!    delegated to the external classifier.
//! 2. **Coordinate range validity** — each fixed-point coordinate, shifted
//!    into its non-negative domain, passes a strict less-than comparator at
//!    the minimum covering bit width. Coordinates stay private; the range
//!    check runs entirely over witness wires.
//! 3. **Commitment derivation** — the public commitment input equals the
//!    in-circuit arity-5 Poseidon hash of the five witness values.
//!
//! Changing anything here — a shift, a bit width, the hash arity — changes
//! the circuit shape, and key material must be regenerated (`setup`
//! enforces this through circuit fingerprints).

use ark_crypto_primitives::sponge::constraints::CryptographicSpongeVar;
use ark_crypto_primitives::sponge::poseidon::constraints::PoseidonSpongeVar;
use ark_r1cs_std::fields::fp::FpVar;
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, SynthesisError,
};

use kisan_core::{LAT_FIXED_MAX, LNG_FIXED_MAX};
use kisan_crypto::{poseidon_config, Commitment, Fr};

use crate::range::enforce_shifted_range;
use crate::traits::ProofError;
use crate::witness::{PrivateWitness, PublicInputs};

/// Offset moving fixed-point latitude into its non-negative domain.
pub const LAT_SHIFT: u64 = LAT_FIXED_MAX as u64;

/// Offset moving fixed-point longitude into its non-negative domain.
pub const LNG_SHIFT: u64 = LNG_FIXED_MAX as u64;

/// Shifted latitude domain: [0, 1_800_000].
pub const LAT_DOMAIN_MAX: u64 = 2 * LAT_FIXED_MAX as u64;

/// Shifted longitude domain: [0, 3_600_000].
pub const LNG_DOMAIN_MAX: u64 = 2 * LNG_FIXED_MAX as u64;

/// Minimum bit width covering the shifted latitude domain.
pub const LAT_BITS: usize = 21;

/// Minimum bit width covering the shifted longitude domain.
pub const LNG_BITS: usize = 22;

/// The compliance statement as an R1CS constraint synthesizer.
///
/// Assignments are `Option` so the same type serves setup (all `None`) and
/// proving (all `Some`). Instance variables are allocated in the order
/// `[expected_status_hash, commitment]`; that order is part of the circuit
/// shape and is mirrored by [`PublicInputs::to_field_elements`].
#[derive(Clone, Default)]
pub struct ComplianceCircuit {
    /// Public: the expected compliant-verdict hash.
    pub expected_status_hash: Option<Fr>,
    /// Public: the statement commitment.
    pub commitment: Option<Fr>,
    /// Witness: hash of the classifier's verdict string.
    pub status_hash: Option<Fr>,
    /// Witness: fixed-point latitude, embedded in the field.
    pub lat_fixed: Option<Fr>,
    /// Witness: fixed-point longitude, embedded in the field.
    pub lng_fixed: Option<Fr>,
    /// Witness: hash of the prover's account identifier.
    pub identity_hash: Option<Fr>,
    /// Witness: the commitment-uniqueness nonce.
    pub nonce: Option<Fr>,
}

impl ComplianceCircuit {
    /// The unassigned circuit, as consumed by key generation.
    pub fn blank() -> Self {
        Self::default()
    }

    /// The fully assigned circuit for one proving run.
    pub fn assigned(
        witness: &PrivateWitness,
        public: &PublicInputs,
        commitment: &Commitment,
    ) -> Self {
        Self {
            expected_status_hash: Some(public.expected_status_hash),
            commitment: Some(commitment.to_field()),
            status_hash: Some(witness.status_hash),
            lat_fixed: Some(witness.lat_field()),
            lng_fixed: Some(witness.lng_field()),
            identity_hash: Some(witness.identity_hash),
            nonce: Some(witness.nonce),
        }
    }

    /// Prover-side pre-flight: semantic checks with precise messages, then
    /// full witness expansion over a scratch constraint system.
    ///
    /// Callers get a [`ProofError::ConstraintViolation`] here instead of
    /// paying for a proving run (or worse, a downstream verification) that
    /// is guaranteed to fail.
    pub fn preflight(witness: &PrivateWitness, public: &PublicInputs) -> Result<(), ProofError> {
        if witness.status_hash != public.expected_status_hash {
            return Err(ProofError::ConstraintViolation(
                "status hash does not match the expected compliant verdict".into(),
            ));
        }
        if witness.coords.lat.abs() > LAT_FIXED_MAX {
            return Err(ProofError::ConstraintViolation(format!(
                "latitude {} outside fixed-point domain [-{LAT_FIXED_MAX}, {LAT_FIXED_MAX}]",
                witness.coords.lat
            )));
        }
        if witness.coords.lng.abs() > LNG_FIXED_MAX {
            return Err(ProofError::ConstraintViolation(format!(
                "longitude {} outside fixed-point domain [-{LNG_FIXED_MAX}, {LNG_FIXED_MAX}]",
                witness.coords.lng
            )));
        }
        let assigned = Self::assigned(witness, public, &witness.commitment());
        assigned.check_satisfied()
    }

    /// Synthesize this circuit over a scratch system and report the first
    /// unsatisfied constraint, if any.
    pub fn check_satisfied(&self) -> Result<(), ProofError> {
        let cs = ConstraintSystem::<Fr>::new_ref();
        self.clone()
            .generate_constraints(cs.clone())
            .map_err(|e| ProofError::Prover(e.to_string()))?;
        let satisfied = cs
            .is_satisfied()
            .map_err(|e| ProofError::Prover(e.to_string()))?;
        if satisfied {
            Ok(())
        } else {
            let which = cs
                .which_is_unsatisfied()
                .map_err(|e| ProofError::Prover(e.to_string()))?
                .unwrap_or_else(|| "unnamed constraint".to_string());
            Err(ProofError::ConstraintViolation(which))
        }
    }
}

impl ConstraintSynthesizer<Fr> for ComplianceCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // Instance variables. Allocation order defines the public-input
        // layout and must stay in lockstep with PublicInputs::to_field_elements.
        let expected_status = FpVar::new_input(cs.clone(), || {
            self.expected_status_hash
                .ok_or(SynthesisError::AssignmentMissing)
        })?;
        let commitment = FpVar::new_input(cs.clone(), || {
            self.commitment.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // Witness variables.
        let status_hash = FpVar::new_witness(cs.clone(), || {
            self.status_hash.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let lat_fixed = FpVar::new_witness(cs.clone(), || {
            self.lat_fixed.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let lng_fixed = FpVar::new_witness(cs.clone(), || {
            self.lng_fixed.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let identity_hash = FpVar::new_witness(cs.clone(), || {
            self.identity_hash.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let nonce = FpVar::new_witness(cs.clone(), || {
            self.nonce.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // Group 1: status equality.
        status_hash.enforce_equal(&expected_status)?;

        // Group 2: coordinate range validity, over witness wires only.
        enforce_shifted_range(&lat_fixed, LAT_SHIFT, LAT_BITS, LAT_DOMAIN_MAX)?;
        enforce_shifted_range(&lng_fixed, LNG_SHIFT, LNG_BITS, LNG_DOMAIN_MAX)?;

        // Group 3: commitment derivation.
        let mut sponge = PoseidonSpongeVar::new(cs, poseidon_config());
        sponge.absorb(&status_hash)?;
        sponge.absorb(&lat_fixed)?;
        sponge.absorb(&lng_fixed)?;
        sponge.absorb(&identity_hash)?;
        sponge.absorb(&nonce)?;
        let digest = sponge.squeeze_field_elements(1)?;
        digest[0].enforce_equal(&commitment)?;

        Ok(())
    }
}
