//! # Validation Errors
//!
//! Boundary-validation failures for the capture/classifier inputs. Each
//! variant carries the offending value so operators can diagnose a bad
//! capture without guesswork. Proof-system and ledger errors live in their
//! own crates; this hierarchy covers only what `kisan-core` itself validates.

use thiserror::Error;

/// Validation errors for domain primitives.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Latitude outside [-90, 90] or not finite.
    #[error("invalid latitude: {0} (expected decimal degrees in [-90, 90])")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not finite.
    #[error("invalid longitude: {0} (expected decimal degrees in [-180, 180])")]
    InvalidLongitude(f64),

    /// Account identifier is empty, oversized, or contains non-printable
    /// characters.
    #[error("invalid account ID: \"{0}\" (expected 1-128 printable ASCII characters)")]
    InvalidAccountId(String),

    /// Classifier confidence outside [0, 1] or not finite.
    #[error("invalid classifier confidence: {0} (expected value in [0, 1])")]
    InvalidConfidence(f64),

    /// Verdict string not in the classifier vocabulary.
    #[error("unknown verdict: \"{0}\" (expected COMPLIANT, VIOLATION, or PENDING)")]
    UnknownVerdict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_error_carries_value() {
        let msg = format!("{}", ValidationError::InvalidLatitude(91.0));
        assert!(msg.contains("91"));
        assert!(msg.contains("[-90, 90]"));
    }

    #[test]
    fn longitude_error_carries_value() {
        assert!(format!("{}", ValidationError::InvalidLongitude(-200.0)).contains("-200"));
    }

    #[test]
    fn account_error_carries_value() {
        let msg = format!("{}", ValidationError::InvalidAccountId("bad id".into()));
        assert!(msg.contains("bad id"));
    }

    #[test]
    fn verdict_error_names_vocabulary() {
        let msg = format!("{}", ValidationError::UnknownVerdict("MAYBE".into()));
        assert!(msg.contains("MAYBE"));
        assert!(msg.contains("COMPLIANT"));
    }

    #[test]
    fn all_error_types_are_debug() {
        let e = ValidationError::InvalidConfidence(2.0);
        assert!(!format!("{e:?}").is_empty());
    }
}
