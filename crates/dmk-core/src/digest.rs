//! # Content Digests
//!
//! Defines [`ContentDigest`] and the SHA-256 computation path. All digests
//! carry an algorithm tag for forward migration to a ZK-friendly hash
//! without invalidating existing commitments.
//!
//! ## Security Invariant
//!
//! [`sha256_digest`] accepts only [`CanonicalBytes`] — not raw `&[u8]`.
//! This ensures every digest in the system was produced from properly
//! canonicalized data.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;

/// The hash algorithm used to compute a content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-256 — the standard commitment hash.
    Sha256,
}

/// A content digest with its algorithm tag.
///
/// The 32-byte digest and its algorithm are always stored together so that
/// verification code can select the correct hash function when additional
/// algorithms are introduced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    /// The hash algorithm that produced this digest.
    pub algorithm: DigestAlgorithm,
    /// The raw 32-byte digest value.
    pub bytes: [u8; 32],
}

impl ContentDigest {
    /// Create a new SHA-256 content digest from raw bytes.
    pub fn sha256(bytes: [u8; 32]) -> Self {
        Self {
            algorithm: DigestAlgorithm::Sha256,
            bytes,
        }
    }

    /// Return the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}:{}", self.algorithm, self.to_hex())
    }
}

/// Compute a SHA-256 content digest from canonical bytes.
///
/// The input must be [`CanonicalBytes`] — raw byte slices are not accepted.
pub fn sha256_digest(data: &CanonicalBytes) -> ContentDigest {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    let out = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&out);
    ContentDigest::sha256(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digest_is_deterministic() {
        let v = json!({"a": 1, "b": "x"});
        let d1 = sha256_digest(&CanonicalBytes::new(&v).unwrap());
        let d2 = sha256_digest(&CanonicalBytes::new(&v).unwrap());
        assert_eq!(d1, d2);
    }

    #[test]
    fn digest_changes_with_content() {
        let d1 = sha256_digest(&CanonicalBytes::new(&json!({"a": 1})).unwrap());
        let d2 = sha256_digest(&CanonicalBytes::new(&json!({"a": 2})).unwrap());
        assert_ne!(d1, d2);
    }

    #[test]
    fn hex_is_64_lowercase_chars() {
        let d = sha256_digest(&CanonicalBytes::new(&json!("x")).unwrap());
        let hex = d.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn display_includes_algorithm_tag() {
        let d = sha256_digest(&CanonicalBytes::new(&json!("x")).unwrap());
        assert!(format!("{d}").starts_with("Sha256:"));
    }

    #[test]
    fn serde_roundtrip() {
        let d = sha256_digest(&CanonicalBytes::new(&json!({"k": "v"})).unwrap());
        let s = serde_json::to_string(&d).unwrap();
        let back: ContentDigest = serde_json::from_str(&s).unwrap();
        assert_eq!(back, d);
    }
}
