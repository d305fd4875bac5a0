//! Digest policy
//!
//! Decides how a presented credential is transformed before it is compared
//! with the stored value, and how the comparison is made.

use super::algorithm::DigestAlgorithm;

#[derive(Debug, Clone, Copy, Default)]
pub struct DigestPolicy {
    algorithm: Option<DigestAlgorithm>,
}

impl DigestPolicy {
    pub fn new(algorithm: Option<DigestAlgorithm>) -> Self {
        Self { algorithm }
    }

    pub fn has_digest(&self) -> bool {
        self.algorithm.is_some()
    }

    /// Apply the configured digest, or return the input unchanged.
    pub fn transform(&self, raw: &str) -> String {
        match self.algorithm {
            Some(algorithm) => algorithm.hex_digest(raw),
            None => raw.to_string(),
        }
    }

    /// Hex digests compare case-insensitively; plaintext compares exactly.
    pub fn compare(&self, transformed: &str, stored: &str) -> bool {
        if self.has_digest() {
            transformed.eq_ignore_ascii_case(stored)
        } else {
            transformed == stored
        }
    }

    /// Transform `presented` and compare it with `stored`.
    pub fn matches(&self, presented: &str, stored: &str) -> bool {
        self.compare(&self.transform(presented), stored)
    }
}
