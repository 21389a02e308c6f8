//! # Classifier Report
//!
//! The narrow interface to the external AI/satellite compliance classifier.
//! The proof stack treats the report as ground truth: it commits to the
//! verdict's hash and proves consistency with the publicly expected verdict,
//! but performs no classification of its own.

use serde::Serialize;

use crate::error::ValidationError;
use crate::verdict::ComplianceVerdict;

/// The classifier's output for one field capture.
///
/// Construction goes through [`ClassifierReport::new`]; the confidence
/// bound cannot be bypassed by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierReport {
    /// The compliance determination.
    pub status: ComplianceVerdict,
    /// Model confidence in [0, 1]. Informational only — the statement does
    /// not commit to it.
    pub confidence: f64,
    /// Version tag of the model that produced the verdict.
    pub model_version: String,
}

impl ClassifierReport {
    /// Construct a report, rejecting a confidence outside [0, 1].
    pub fn new(
        status: ComplianceVerdict,
        confidence: f64,
        model_version: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::InvalidConfidence(confidence));
        }
        Ok(Self {
            status,
            confidence,
            model_version: model_version.into(),
        })
    }
}
