//! # Compliance Verdicts — Single Source of Truth
//!
//! Defines the [`ComplianceVerdict`] enum, the classifier's complete verdict
//! vocabulary. This is the single definition used by every crate in the
//! workspace; the compiler enforces exhaustive `match` wherever a verdict is
//! handled.
//!
//! Only [`ComplianceVerdict::Compliant`] can ever satisfy the proof
//! statement — the other variants exist so that classifier output can be
//! represented faithfully and rejected with a precise error instead of a
//! generic one.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The verdict produced by the external field-compliance classifier.
///
/// The wire strings (`COMPLIANT`, `VIOLATION`, `PENDING`) are fixed for the
/// lifetime of a deployment: the compliant verdict's hash is baked into the
/// public inputs of every proof, so renaming a variant is a statement change,
/// not a refactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceVerdict {
    /// No burning detected; the field satisfies the anti-burning regulation.
    Compliant,
    /// Burnt soil detected; the field violates the regulation.
    Violation,
    /// The classifier could not reach a determination.
    Pending,
}

impl ComplianceVerdict {
    /// The canonical wire string for this verdict.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "COMPLIANT",
            Self::Violation => "VIOLATION",
            Self::Pending => "PENDING",
        }
    }

    /// Parse a verdict from its canonical wire string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "COMPLIANT" => Ok(Self::Compliant),
            "VIOLATION" => Ok(Self::Violation),
            "PENDING" => Ok(Self::Pending),
            other => Err(ValidationError::UnknownVerdict(other.to_string())),
        }
    }

    /// Return all verdicts as a slice.
    pub fn all() -> &'static [ComplianceVerdict] {
        &[Self::Compliant, Self::Violation, Self::Pending]
    }
}

impl std::fmt::Display for ComplianceVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
