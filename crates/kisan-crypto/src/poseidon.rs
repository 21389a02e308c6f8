//! # Arity-5 Poseidon Sponge
//!
//! The ZK-friendly hash binding the five witness values into the statement
//! commitment. Width t = 6 (rate 5, capacity 1), S-box x^5, 8 full and 60
//! partial rounds — the standard round counts for this width at 128-bit
//! security over a ~254-bit field.
//!
//! Parameters are generated deterministically with the arkworks Grain-LFSR
//! search rather than hardcoded, and cached for the process lifetime. The
//! in-circuit gadget in `kisan-zkp` consumes this exact configuration, so
//! the off-circuit hash and the commitment constraint agree by construction.

use std::sync::OnceLock;

use ark_crypto_primitives::sponge::poseidon::{
    find_poseidon_ark_and_mds, PoseidonConfig, PoseidonSponge,
};
use ark_crypto_primitives::sponge::{CryptographicSponge, FieldBasedCryptographicSponge};
use ark_ff::PrimeField;

use crate::field::Fr;

/// Sponge rate: the statement hashes exactly five field elements.
pub const POSEIDON_RATE: usize = 5;

/// Sponge capacity.
pub const POSEIDON_CAPACITY: usize = 1;

/// Number of full S-box rounds.
pub const POSEIDON_FULL_ROUNDS: usize = 8;

/// Number of partial S-box rounds for width 6.
pub const POSEIDON_PARTIAL_ROUNDS: usize = 60;

/// S-box exponent.
pub const POSEIDON_ALPHA: u64 = 5;

static CONFIG: OnceLock<PoseidonConfig<Fr>> = OnceLock::new();

/// The shared Poseidon configuration for the statement hash.
///
/// Generated once per process; every caller (prover, verifier, circuit
/// synthesis) observes the same round constants and MDS matrix.
pub fn poseidon_config() -> &'static PoseidonConfig<Fr> {
    CONFIG.get_or_init(|| {
        let (ark, mds) = find_poseidon_ark_and_mds::<Fr>(
            Fr::MODULUS_BIT_SIZE as u64,
            POSEIDON_RATE,
            POSEIDON_FULL_ROUNDS as u64,
            POSEIDON_PARTIAL_ROUNDS as u64,
            0,
        );
        PoseidonConfig::new(
            POSEIDON_FULL_ROUNDS,
            POSEIDON_PARTIAL_ROUNDS,
            POSEIDON_ALPHA,
            mds,
            ark,
            POSEIDON_RATE,
            POSEIDON_CAPACITY,
        )
    })
}

/// Hash five field elements with the arity-5 sponge.
///
/// This is the commitment function of the statement:
/// `Hash(status_hash, lat_fixed, lng_fixed, identity_hash, nonce)`.
pub fn poseidon_hash5(inputs: &[Fr; 5]) -> Fr {
    let mut sponge = PoseidonSponge::new(poseidon_config());
    for input in inputs {
        sponge.absorb(input);
    }
    sponge.squeeze_native_field_elements(1)[0]
}
