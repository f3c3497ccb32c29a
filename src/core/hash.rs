//! Commitment Hashing
//!
//! Domain-separated SHA-256 used to seal a choice before the opponent moves.

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type CommitHash = [u8; 32];

/// Deterministic hasher with a domain separator.
///
/// Order of updates is part of the format.
pub struct CommitHasher {
    hasher: Sha256,
}

impl CommitHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for choice commitments.
    pub fn for_choice() -> Self {
        Self::new(b"RPS_CHOICE_COMMIT_V1")
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> CommitHash {
        self.hasher.finalize().into()
    }
}

/// Lowercase hex rendering of a hash, for logs and display.
pub fn to_hex(hash: &CommitHash) -> String {
    hex::encode(hash)
}

/// Short prefix of the hex rendering (first 4 bytes).
pub fn short_hex(hash: &CommitHash) -> String {
    hex::encode(&hash[..4])
}
