//! # Bounded Signed Integers in the Field
//!
//! Field arithmetic has no native signed or bounded values, so ordered
//! comparisons are encoded the classic way: shift the signed value by a
//! constant into the non-negative domain, pin its bit width, then strict
//! less-than against the domain bound with a carry-bit comparator.
//!
//! The comparator works on the identity `v < bound  <=>  v + 2^n - bound`
//! stays below `2^n`, observable as bit `n` of the sum being clear —
//! provided `v` itself has already been constrained to `n` bits.

use ark_ff::PrimeField;
use ark_r1cs_std::fields::fp::FpVar;
use ark_r1cs_std::prelude::*;
use ark_relations::r1cs::SynthesisError;

/// Constrain `value` to fit in `bits` bits.
///
/// Decomposes into the canonical bit representation and pins every bit
/// above the width to zero.
pub fn enforce_bit_length<F: PrimeField>(
    value: &FpVar<F>,
    bits: usize,
) -> Result<(), SynthesisError> {
    let decomposition = value.to_bits_le()?;
    for bit in &decomposition[bits..] {
        bit.enforce_equal(&Boolean::constant(false))?;
    }
    Ok(())
}

/// Constrain `value < bound`, where `value` is already known to fit in
/// `bits` bits and `bound <= 2^bits`.
pub fn enforce_less_than_constant<F: PrimeField>(
    value: &FpVar<F>,
    bits: usize,
    bound: u64,
) -> Result<(), SynthesisError> {
    debug_assert!(bits < 64 && bound as u128 <= 1u128 << bits);
    let offset = F::from((1u64 << bits) - bound);
    let sum = value + FpVar::constant(offset);
    // value < 2^bits and offset < 2^bits, so the sum cannot reach 2^(bits+1):
    // bit `bits` alone decides the comparison.
    let sum_bits = sum.to_bits_le()?;
    sum_bits[bits].enforce_equal(&Boolean::constant(false))
}

/// Constrain a signed value, pre-embedded in the field, to the symmetric
/// domain `[-shift, domain_max - shift]`.
///
/// Adds `shift` to move the domain to `[0, domain_max]`, then applies the
/// bit-width and strict less-than constraints. This is the reusable
/// encoding for every ordered comparison over signed bounded quantities
/// in the statement.
pub fn enforce_shifted_range<F: PrimeField>(
    value: &FpVar<F>,
    shift: u64,
    bits: usize,
    domain_max: u64,
) -> Result<(), SynthesisError> {
    let shifted = value + FpVar::constant(F::from(shift));
    enforce_bit_length(&shifted, bits)?;
    enforce_less_than_constant(&shifted, bits, domain_max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_relations::r1cs::ConstraintSystem;

    fn check_shifted(value: i64, shift: u64, bits: usize, domain_max: u64) -> bool {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let embedded = if value < 0 {
            -Fr::from(value.unsigned_abs())
        } else {
            Fr::from(value as u64)
        };
        let var = FpVar::new_witness(cs.clone(), || Ok(embedded)).unwrap();
        enforce_shifted_range(&var, shift, bits, domain_max).unwrap();
        cs.is_satisfied().unwrap()
    }

    #[test]
    fn accepts_domain_interior() {
        assert!(check_shifted(286_139, 900_000, 21, 1_800_000));
        assert!(check_shifted(-286_139, 900_000, 21, 1_800_000));
        assert!(check_shifted(0, 900_000, 21, 1_800_000));
    }

    #[test]
    fn accepts_domain_boundaries() {
        assert!(check_shifted(900_000, 900_000, 21, 1_800_000));
        assert!(check_shifted(-900_000, 900_000, 21, 1_800_000));
    }

    #[test]
    fn rejects_above_domain() {
        // 91 degrees scaled: just past the pole.
        assert!(!check_shifted(910_000, 900_000, 21, 1_800_000));
        assert!(!check_shifted(900_001, 900_000, 21, 1_800_000));
    }

    #[test]
    fn rejects_below_domain() {
        assert!(!check_shifted(-900_001, 900_000, 21, 1_800_000));
        assert!(!check_shifted(-910_000, 900_000, 21, 1_800_000));
    }

    #[test]
    fn longitude_width_behaves_identically() {
        assert!(check_shifted(1_800_000, 1_800_000, 22, 3_600_000));
        assert!(!check_shifted(1_800_001, 1_800_000, 22, 3_600_000));
        assert!(check_shifted(-1_800_000, 1_800_000, 22, 3_600_000));
        assert!(!check_shifted(-1_800_001, 1_800_000, 22, 3_600_000));
    }

    #[test]
    fn bit_length_alone_rejects_wide_values() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let var = FpVar::new_witness(cs.clone(), || Ok(Fr::from(1u64 << 21))).unwrap();
        enforce_bit_length(&var, 21).unwrap();
        assert!(!cs.is_satisfied().unwrap());
    }

    #[test]
    fn less_than_is_strict() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        let var = FpVar::new_witness(cs.clone(), || Ok(Fr::from(100u64))).unwrap();
        enforce_bit_length(&var, 7).unwrap();
        enforce_less_than_constant(&var, 7, 100).unwrap();
        assert!(!cs.is_satisfied().unwrap());
    }
}
