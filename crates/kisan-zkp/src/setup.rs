//! # Setup Stage
//!
//! One-time generation of the (proving key, verification key) pair bound to
//! the compliance circuit's constraint system. Conceptually two phases — a
//! circuit-independent reference string followed by circuit-specific
//! specialization — collapsed here into arkworks' circuit-specific Groth16
//! key generation. Contributed randomness enters through the caller's RNG;
//! auditing the ceremony that feeds that RNG is out of scope.
//!
//! ## Key binding
//!
//! Every key package carries a [`CircuitFingerprint`]: a digest of the
//! protocol and curve tags, the range-check geometry, the Poseidon
//! parameters, and the constraint-system dimensions. Loading or using a key
//! whose fingerprint differs from the compiled circuit fails
//! deterministically with a mismatch error — a proof against a stale key can
//! never silently verify as a weaker statement.

use std::fs;
use std::path::Path;

use ark_bn254::Bn254;
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, ConstraintSystemRef, SynthesisMode,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_snark::CircuitSpecificSetupSNARK;
use ark_std::rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use thiserror::Error;

use kisan_core::ContentDigest;
use kisan_crypto::{field_to_bytes_be, poseidon_config, Fr};

use crate::circuit::{ComplianceCircuit, LAT_BITS, LAT_SHIFT, LNG_BITS, LNG_SHIFT};

/// On-disk key format version. Bumping it invalidates every stored key.
pub const KEY_FORMAT_VERSION: u16 = 1;

const PK_MAGIC: &[u8; 8] = b"KISANPK\x01";
const VK_MAGIC: &[u8; 8] = b"KISANVK\x01";

/// Errors from key generation, storage, and loading.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Constraint synthesis over the blank circuit failed.
    #[error("constraint synthesis failed: {0}")]
    Synthesis(String),

    /// Key (de)serialization failed.
    #[error("key serialization failed: {0}")]
    Serialization(String),

    /// Key file I/O failed.
    #[error("key I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key file is not in the expected format.
    #[error("malformed key file: {0}")]
    BadFormat(String),

    /// The key was generated for a different circuit shape.
    #[error("key mismatch: key fingerprint {found} does not match compiled circuit {expected}")]
    KeyMismatch {
        /// Fingerprint of the compiled circuit.
        expected: String,
        /// Fingerprint recorded in the key file.
        found: String,
    },
}

/// A digest uniquely identifying the compiled circuit's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitFingerprint(pub ContentDigest);

impl CircuitFingerprint {
    /// Fingerprint of the circuit compiled into this binary.
    ///
    /// Computed once per process: synthesizes the blank circuit in setup
    /// mode and digests its dimensions together with every constant that
    /// shapes the constraint system.
    pub fn current() -> Result<Self, SetupError> {
        let cs: ConstraintSystemRef<Fr> = ConstraintSystem::new_ref();
        cs.set_mode(SynthesisMode::Setup);
        ComplianceCircuit::blank()
            .generate_constraints(cs.clone())
            .map_err(|e| SetupError::Synthesis(e.to_string()))?;
        cs.finalize();

        let mut hasher = Sha256::new();
        hasher.update(b"kisan-compliance-statement");
        hasher.update(b"groth16/bn254");
        hasher.update(KEY_FORMAT_VERSION.to_be_bytes());
        hasher.update((LAT_SHIFT).to_be_bytes());
        hasher.update((LNG_SHIFT).to_be_bytes());
        hasher.update((LAT_BITS as u64).to_be_bytes());
        hasher.update((LNG_BITS as u64).to_be_bytes());
        let config = poseidon_config();
        for row in config.ark.iter().chain(config.mds.iter()) {
            for element in row {
                hasher.update(field_to_bytes_be(element));
            }
        }
        hasher.update((cs.num_constraints() as u64).to_be_bytes());
        hasher.update((cs.num_instance_variables() as u64).to_be_bytes());
        hasher.update((cs.num_witness_variables() as u64).to_be_bytes());

        Ok(Self(ContentDigest {
            bytes: hasher.finalize().into(),
        }))
    }

    /// Lowercase hex form, used in key distribution responses.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

/// The proving key together with the fingerprint of the circuit it serves.
#[derive(Debug)]
pub struct ProvingKeyPackage {
    /// Fingerprint of the circuit this key was generated for.
    pub fingerprint: CircuitFingerprint,
    /// The Groth16 proving key.
    pub key: ProvingKey<Bn254>,
}

/// The public verification key together with its circuit fingerprint.
#[derive(Debug, Clone)]
pub struct VerificationKeyPackage {
    /// Fingerprint of the circuit this key was generated for.
    pub fingerprint: CircuitFingerprint,
    /// The Groth16 verifying key.
    pub key: VerifyingKey<Bn254>,
}

/// Run circuit-specific key generation with caller-provided randomness.
///
/// Rerunning with fresh randomness yields a distinct, incompatible key pair
/// even for an unchanged circuit: proofs do not cross-verify between
/// independently generated keys.
pub fn setup<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(ProvingKeyPackage, VerificationKeyPackage), SetupError> {
    let fingerprint = CircuitFingerprint::current()?;
    let (pk, vk) = Groth16::<Bn254>::setup(ComplianceCircuit::blank(), rng)
        .map_err(|e| SetupError::Synthesis(e.to_string()))?;
    tracing::info!(
        fingerprint = %fingerprint.to_hex(),
        "generated compliance statement key pair"
    );
    Ok((
        ProvingKeyPackage {
            fingerprint,
            key: pk,
        },
        VerificationKeyPackage {
            fingerprint,
            key: vk,
        },
    ))
}

fn write_package<K: CanonicalSerialize>(
    path: &Path,
    magic: &[u8; 8],
    fingerprint: &CircuitFingerprint,
    key: &K,
) -> Result<(), SetupError> {
    let mut buf = Vec::new();
    buf.extend_from_slice(magic);
    buf.extend_from_slice(&KEY_FORMAT_VERSION.to_be_bytes());
    buf.extend_from_slice(&fingerprint.0.bytes);
    key.serialize_compressed(&mut buf)
        .map_err(|e| SetupError::Serialization(e.to_string()))?;

    // Plain file-write atomicity: temp file in the same directory, then rename.
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &buf)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn read_package<K: CanonicalDeserialize>(
    path: &Path,
    magic: &[u8; 8],
) -> Result<(CircuitFingerprint, K), SetupError> {
    let data = fs::read(path)?;
    if data.len() < 8 + 2 + 32 {
        return Err(SetupError::BadFormat(format!(
            "{}: truncated key file",
            path.display()
        )));
    }
    if &data[..8] != magic {
        return Err(SetupError::BadFormat(format!(
            "{}: unrecognized key file magic",
            path.display()
        )));
    }
    let version = u16::from_be_bytes([data[8], data[9]]);
    if version != KEY_FORMAT_VERSION {
        return Err(SetupError::BadFormat(format!(
            "{}: unsupported key format version {version}",
            path.display()
        )));
    }
    let mut fingerprint_bytes = [0u8; 32];
    fingerprint_bytes.copy_from_slice(&data[10..42]);
    let stored = CircuitFingerprint(ContentDigest {
        bytes: fingerprint_bytes,
    });

    let expected = CircuitFingerprint::current()?;
    if stored != expected {
        return Err(SetupError::KeyMismatch {
            expected: expected.to_hex(),
            found: stored.to_hex(),
        });
    }

    let key = K::deserialize_compressed(&data[42..])
        .map_err(|e| SetupError::Serialization(e.to_string()))?;
    Ok((stored, key))
}

impl ProvingKeyPackage {
    /// Write the key package to disk (temp-file-and-rename).
    pub fn write_to(&self, path: &Path) -> Result<(), SetupError> {
        write_package(path, PK_MAGIC, &self.fingerprint, &self.key)
    }

    /// Load a key package, rejecting foreign or stale circuit shapes.
    pub fn read_from(path: &Path) -> Result<Self, SetupError> {
        let (fingerprint, key) = read_package::<ProvingKey<Bn254>>(path, PK_MAGIC)?;
        Ok(Self { fingerprint, key })
    }
}

impl VerificationKeyPackage {
    /// Write the key package to disk (temp-file-and-rename).
    pub fn write_to(&self, path: &Path) -> Result<(), SetupError> {
        write_package(path, VK_MAGIC, &self.fingerprint, &self.key)
    }

    /// Load a key package, rejecting foreign or stale circuit shapes.
    pub fn read_from(path: &Path) -> Result<Self, SetupError> {
        let (fingerprint, key) = read_package::<VerifyingKey<Bn254>>(path, VK_MAGIC)?;
        Ok(Self { fingerprint, key })
    }

    /// The compressed key bytes, for distribution to verifying parties.
    pub fn key_bytes(&self) -> Result<Vec<u8>, SetupError> {
        let mut buf = Vec::new();
        self.key
            .serialize_compressed(&mut buf)
            .map_err(|e| SetupError::Serialization(e.to_string()))?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::rngs::StdRng;
    use ark_std::rand::SeedableRng;

    #[test]
    fn fingerprint_is_stable_within_process() {
        let a = CircuitFingerprint::current().unwrap();
        let b = CircuitFingerprint::current().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn setup_stamps_current_fingerprint() {
        let mut rng = StdRng::seed_from_u64(42);
        let (pk, vk) = setup(&mut rng).unwrap();
        let current = CircuitFingerprint::current().unwrap();
        assert_eq!(pk.fingerprint, current);
        assert_eq!(vk.fingerprint, current);
    }

    #[test]
    fn verification_key_roundtrips_through_disk() {
        let mut rng = StdRng::seed_from_u64(43);
        let (_, vk) = setup(&mut rng).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.vk");
        vk.write_to(&path).unwrap();
        let loaded = VerificationKeyPackage::read_from(&path).unwrap();
        assert_eq!(loaded.fingerprint, vk.fingerprint);
        assert_eq!(loaded.key_bytes().unwrap(), vk.key_bytes().unwrap());
    }

    #[test]
    fn proving_key_roundtrips_through_disk() {
        let mut rng = StdRng::seed_from_u64(44);
        let (pk, _) = setup(&mut rng).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.pk");
        pk.write_to(&path).unwrap();
        let loaded = ProvingKeyPackage::read_from(&path).unwrap();
        assert_eq!(loaded.fingerprint, pk.fingerprint);
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let mut rng = StdRng::seed_from_u64(45);
        let (_, vk) = setup(&mut rng).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.vk");
        vk.write_to(&path).unwrap();
        // A verification key is not a proving key.
        assert!(matches!(
            ProvingKeyPackage::read_from(&path),
            Err(SetupError::BadFormat(_))
        ));
    }

    #[test]
    fn tampered_fingerprint_is_rejected_as_mismatch() {
        let mut rng = StdRng::seed_from_u64(46);
        let (_, vk) = setup(&mut rng).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.vk");
        vk.write_to(&path).unwrap();

        let mut data = fs::read(&path).unwrap();
        data[10] ^= 0xff;
        fs::write(&path, &data).unwrap();

        assert!(matches!(
            VerificationKeyPackage::read_from(&path),
            Err(SetupError::KeyMismatch { .. })
        ));
    }

    #[test]
    fn truncated_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.vk");
        fs::write(&path, b"short").unwrap();
        assert!(matches!(
            VerificationKeyPackage::read_from(&path),
            Err(SetupError::BadFormat(_))
        ));
    }
}
