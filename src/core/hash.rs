//! Deterministic Digests
//!
//! SHA-256 helpers used for grid fingerprints and phrase-derived seeds.
//! Every digest starts from a domain separator so values from different
//! contexts can never collide by accident.

use sha2::{Digest, Sha256};

/// Digest output type (256 bits / 32 bytes).
pub type Digest32 = [u8; 32];

/// Incremental hasher with a fixed domain separator.
///
/// Order of updates is part of the contract: callers must feed fields
/// in a stable, documented order or digests will not be comparable.
pub struct DomainHasher {
    hasher: Sha256,
}

impl DomainHasher {
    /// Create a new hasher seeded with a domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> Digest32 {
        self.hasher.finalize().into()
    }
}

/// One-shot digest of `data` under a domain separator.
pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> Digest32 {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    hasher.finalize().into()
}
