//! Integration-test crate for the Kisan DePIN proof stack.
//!
//! All content lives in `tests/`; this library is intentionally empty.
