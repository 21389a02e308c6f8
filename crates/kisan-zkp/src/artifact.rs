//! # Proof Artifact Wire Format
//!
//! The flat structure transmitted to verifying parties: proof components as
//! decimal coordinate strings, a protocol and curve tag, the public signals,
//! and the commitment in its ledger-key hex form. The layout is stable for a
//! deployment's lifetime — verifiers bind the format implicitly through key
//! binding, so changing it is a statement change.
//!
//! Deserialization is strict: coordinates must decode to curve points inside
//! the prime-order subgroup, and the commitment field must agree with the
//! commitment signal. Anything else is an [`VerifyError::InvalidProof`].

use std::str::FromStr;

use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ff::PrimeField;
use serde::{Deserialize, Serialize};

use kisan_crypto::Commitment;

use crate::groth16::Groth16Proof;
use crate::traits::VerifyError;
use crate::witness::PublicInputs;

/// Protocol tag carried by every artifact.
pub const PROTOCOL_TAG: &str = "groth16";

/// Curve tag carried by every artifact.
pub const CURVE_TAG: &str = "bn254";

/// A serialized compliance proof as transmitted to the verifying party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofArtifact {
    /// Proof protocol. Always `"groth16"`.
    pub protocol: String,
    /// Pairing curve. Always `"bn254"`.
    pub curve: String,
    /// The G1 point pi_a as `[x, y]` decimal strings.
    pub pi_a: [String; 2],
    /// The G2 point pi_b as `[[x_c0, x_c1], [y_c0, y_c1]]` decimal strings.
    pub pi_b: [[String; 2]; 2],
    /// The G1 point pi_c as `[x, y]` decimal strings.
    pub pi_c: [String; 2],
    /// Public signals in instance order:
    /// `[expected_status_hash, commitment]`, decimal strings.
    pub public_signals: Vec<String>,
    /// The commitment in its hex ledger-key form. Redundant with
    /// `public_signals[1]`; consistency is enforced on decode.
    pub commitment: Commitment,
}

fn fq_dec(value: &Fq) -> String {
    value.into_bigint().to_string()
}

fn fr_dec(value: &Fr) -> String {
    value.into_bigint().to_string()
}

fn fq_parse(s: &str) -> Result<Fq, VerifyError> {
    Fq::from_str(s).map_err(|_| VerifyError::InvalidProof(format!("bad coordinate: \"{s}\"")))
}

fn fr_parse(s: &str) -> Result<Fr, VerifyError> {
    Fr::from_str(s).map_err(|_| VerifyError::InvalidProof(format!("bad public signal: \"{s}\"")))
}

fn g1_parse(coords: &[String; 2]) -> Result<G1Affine, VerifyError> {
    let point = G1Affine::new_unchecked(fq_parse(&coords[0])?, fq_parse(&coords[1])?);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(VerifyError::InvalidProof("G1 point not on curve".into()));
    }
    Ok(point)
}

fn g2_parse(coords: &[[String; 2]; 2]) -> Result<G2Affine, VerifyError> {
    let x = Fq2::new(fq_parse(&coords[0][0])?, fq_parse(&coords[0][1])?);
    let y = Fq2::new(fq_parse(&coords[1][0])?, fq_parse(&coords[1][1])?);
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(VerifyError::InvalidProof("G2 point not on curve".into()));
    }
    Ok(point)
}

impl ProofArtifact {
    /// Serialize a proven statement for transmission.
    pub fn from_parts(
        proof: &Groth16Proof,
        public: &PublicInputs,
        commitment: &Commitment,
    ) -> Self {
        Self {
            protocol: PROTOCOL_TAG.to_string(),
            curve: CURVE_TAG.to_string(),
            pi_a: [fq_dec(&proof.a.x), fq_dec(&proof.a.y)],
            pi_b: [
                [fq_dec(&proof.b.x.c0), fq_dec(&proof.b.x.c1)],
                [fq_dec(&proof.b.y.c0), fq_dec(&proof.b.y.c1)],
            ],
            pi_c: [fq_dec(&proof.c.x), fq_dec(&proof.c.y)],
            public_signals: vec![
                fr_dec(&public.expected_status_hash),
                fr_dec(&commitment.to_field()),
            ],
            commitment: *commitment,
        }
    }

    /// Decode and validate the artifact back into verifiable parts.
    pub fn to_parts(&self) -> Result<(Groth16Proof, PublicInputs, Commitment), VerifyError> {
        if self.protocol != PROTOCOL_TAG {
            return Err(VerifyError::InvalidProof(format!(
                "unsupported protocol \"{}\"",
                self.protocol
            )));
        }
        if self.curve != CURVE_TAG {
            return Err(VerifyError::InvalidProof(format!(
                "unsupported curve \"{}\"",
                self.curve
            )));
        }
        if self.public_signals.len() != 2 {
            return Err(VerifyError::InvalidProof(format!(
                "expected 2 public signals, got {}",
                self.public_signals.len()
            )));
        }

        let proof = Groth16Proof {
            a: g1_parse(&self.pi_a)?,
            b: g2_parse(&self.pi_b)?,
            c: g1_parse(&self.pi_c)?,
        };
        let public = PublicInputs {
            expected_status_hash: fr_parse(&self.public_signals[0])?,
        };
        let commitment_signal = fr_parse(&self.public_signals[1])?;
        if commitment_signal != self.commitment.to_field() {
            return Err(VerifyError::InvalidProof(
                "commitment does not match its public signal".into(),
            ));
        }
        Ok((proof, public, self.commitment))
    }
}
