//! Credential digesting
//!
//! Digest algorithms and the comparison rules that go with them.

pub mod algorithm;
pub mod policy;

pub use algorithm::DigestAlgorithm;
pub use policy::DigestPolicy;
