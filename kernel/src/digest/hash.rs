//! Canonical hashing: domain-separated SHA-256 content hashes.
//!
//! Exactly one place computes content hashes. Every hash takes a
//! null-terminated domain prefix so preimages from different surfaces can
//! never collide.

use sha2::{Digest, Sha256};

/// Domain prefix for history digests.
pub const DOMAIN_HISTORY: &[u8] = b"MATHTRACE::HISTORY::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: the inner string always contains exactly one `:` separator
/// with non-empty substrings on both sides (enforced by [`ContentHash::parse`]
/// and by construction in [`canonical_hash`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    /// Full string in `"algorithm:hex_digest"` format.
    full: String,
    /// Byte offset of the `:` separator.
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon, empty
    /// algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

/// Compute `sha256(domain || data)` as a [`ContentHash`].
///
/// Result format: `"sha256:<lowercase hex>"`. Total: every input hashes.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    ContentHash {
        full: format!("sha256:{}", hex::encode(digest)),
        colon: "sha256".len(),
    }
}
