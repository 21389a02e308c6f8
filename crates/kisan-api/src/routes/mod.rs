//! API route modules.

pub mod claims;
pub mod keys;
pub mod proofs;
