//! Cache-key derivation — a short, deterministic digest of the strings that
//! identify a prediction request.
//!
//! The cache is advisory, not integrity-critical: a 16-hex-char (64-bit)
//! prefix is collision-tolerant at this traffic level. Parts are joined with
//! a unit separator so the digest is sensitive to both order and part
//! boundaries — fingerprint("a","b") must differ from fingerprint("ab","").

use sha2::{Digest, Sha256};

/// Bytes that never appear in editor text, so part boundaries are unambiguous.
const PART_SEPARATOR: &[u8] = &[0x1f];

const PREFIX_HEX_CHARS: usize = 16;

/// Derives the cache key for an ordered tuple of request-identifying strings.
pub fn fingerprint(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update(PART_SEPARATOR);
        }
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();
    let mut out = hex::encode(digest);
    out.truncate(PREFIX_HEX_CHARS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        assert_eq!(fingerprint(&["a", "b"]), fingerprint(&["a", "b"]));
    }

    #[test]
    fn test_fingerprint_is_order_sensitive() {
        assert_ne!(fingerprint(&["a", "b"]), fingerprint(&["b", "a"]));
    }

    #[test]
    fn test_fingerprint_is_boundary_sensitive() {
        assert_ne!(fingerprint(&["ab", ""]), fingerprint(&["a", "b"]));
        assert_ne!(fingerprint(&["ab"]), fingerprint(&["a", "b"]));
    }

    #[test]
    fn test_fingerprint_is_16_hex_chars() {
        let fp = fingerprint(&["session-id", "some preceding text"]);
        assert_eq!(fp.len(), 16);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_differs_for_different_inputs() {
        assert_ne!(
            fingerprint(&["s1", "the quick brown"]),
            fingerprint(&["s2", "the quick brown"]),
        );
    }
}
