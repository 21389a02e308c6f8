#![deny(missing_docs)]

//! # kisan-core — Foundational Types for the Kisan DePIN Stack
//!
//! This crate defines the domain types every other crate in the workspace
//! depends on. It has no internal crate dependencies — only `serde`,
//! `thiserror`, and `sha2` from the external ecosystem, and in
//! particular no proof-system dependencies: everything here is meaningful to
//! the capture and payout collaborators that never touch a circuit.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** An [`AccountId`] is a
//!    distinct type; it cannot be confused with an arbitrary string.
//!
//! 2. **Single [`ComplianceVerdict`] enum.** One definition of the
//!    classifier's verdict vocabulary, exhaustive `match` everywhere.
//!
//! 3. **Validated construction.** [`GeoPoint`] and [`ClassifierReport`]
//!    reject implausible values at the boundary, before anything is hashed
//!    or committed to.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod classifier;
pub mod digest;
pub mod error;
pub mod geo;
pub mod identity;
pub mod verdict;

// Re-export primary types at crate root for ergonomic imports.
pub use classifier::ClassifierReport;
pub use digest::{sha256_bytes, ContentDigest};
pub use error::ValidationError;
pub use geo::{FixedCoordinates, GeoPoint, FIXED_POINT_SCALE, LAT_FIXED_MAX, LNG_FIXED_MAX};
pub use identity::AccountId;
pub use verdict::ComplianceVerdict;
