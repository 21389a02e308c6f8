//! # Witness Assembly
//!
//! Builds the private witness from the plain values the capture and
//! classifier collaborators supply: decimal-degree GPS, a verdict string,
//! an account identifier. Hashing and fixed-point scaling happen here;
//! callers never touch field elements.
//!
//! [`PrivateWitness`] deliberately implements neither `Serialize` nor
//! `Display`: it must never leave the prover's machine, and keeping it
//! unencodable makes accidental transmission a compile error rather than a
//! privacy incident.

use ark_std::rand::{CryptoRng, RngCore};
use ark_std::UniformRand;

use kisan_core::{AccountId, ClassifierReport, ComplianceVerdict, FixedCoordinates, GeoPoint};
use kisan_crypto::{compute_commitment, field_from_i64, hash_to_field, Commitment, Fr};

/// The full set of private values the prover holds and must keep secret.
#[derive(Clone)]
pub struct PrivateWitness {
    /// Hash of the classifier's verdict string.
    pub status_hash: Fr,
    /// GPS coordinates in signed fixed-point form (degrees scaled by 10^4).
    pub coords: FixedCoordinates,
    /// Hash of the prover's account identifier.
    pub identity_hash: Fr,
    /// Fresh randomness for commitment uniqueness. Not a replay key: the
    /// ledger enforces spend-once on the commitment, nonce hygiene merely
    /// keeps distinct submissions distinct.
    pub nonce: Fr,
}

impl PrivateWitness {
    /// Assemble a witness from collaborator-supplied values with a freshly
    /// sampled nonce.
    pub fn assemble<R: RngCore + CryptoRng>(
        report: &ClassifierReport,
        location: &GeoPoint,
        account: &AccountId,
        rng: &mut R,
    ) -> Self {
        Self::with_nonce(report, location, account, Fr::rand(rng))
    }

    /// Assemble a witness with a caller-chosen nonce (e.g. server-issued).
    pub fn with_nonce(
        report: &ClassifierReport,
        location: &GeoPoint,
        account: &AccountId,
        nonce: Fr,
    ) -> Self {
        Self {
            status_hash: hash_to_field(report.status.as_str().as_bytes()),
            coords: location.to_fixed(),
            identity_hash: hash_to_field(account.as_bytes()),
            nonce,
        }
    }

    /// The latitude as a field element.
    pub fn lat_field(&self) -> Fr {
        field_from_i64(self.coords.lat)
    }

    /// The longitude as a field element.
    pub fn lng_field(&self) -> Fr {
        field_from_i64(self.coords.lng)
    }

    /// The statement commitment for this witness.
    pub fn commitment(&self) -> Commitment {
        compute_commitment(
            &self.status_hash,
            &self.lat_field(),
            &self.lng_field(),
            &self.identity_hash,
            &self.nonce,
        )
    }
}

// Witness contents are secret; even debug output only exposes structure.
impl std::fmt::Debug for PrivateWitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateWitness").finish_non_exhaustive()
    }
}

/// The public inputs every verifier knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicInputs {
    /// The universally known hash of the compliant verdict string.
    pub expected_status_hash: Fr,
}

impl PublicInputs {
    /// The canonical public inputs: the hash of `COMPLIANT`.
    ///
    /// There is exactly one verdict a prover can encode — the statement has
    /// no notion of graded or partial compliance.
    pub fn compliant() -> Self {
        Self {
            expected_status_hash: hash_to_field(
                ComplianceVerdict::Compliant.as_str().as_bytes(),
            ),
        }
    }

    /// The instance vector in circuit allocation order:
    /// `[expected_status_hash, commitment]`.
    pub fn to_field_elements(&self, commitment: &Commitment) -> Vec<Fr> {
        vec![self.expected_status_hash, commitment.to_field()]
    }
}
