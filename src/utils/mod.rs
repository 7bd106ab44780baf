//! Pure helper functions for the two-stage link parsing pipeline.
//!
//! - [`extract_domain`] - Candidate host extraction from a raw link
//! - [`validate_domain`] - DNS-label validation of a candidate host

pub mod extract_domain;
pub mod validate_domain;
