// src/fingerprint.rs
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of a certificate's raw TBSCertificate bytes.
///
/// A precertificate and the certificate eventually issued from it share
/// the same TBSCertificate, so both map to the same fingerprint. This
/// is the identity the monitor keys its notification state on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TbsFingerprint([u8; 32]);

impl TbsFingerprint {
    /// Digest the raw TBSCertificate bytes (tag and length included)
    pub fn of(tbs_raw: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(tbs_raw);
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, used for shard and marker file names
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; 32]> for TbsFingerprint {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for TbsFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        // SHA-256("abc")
        let fp = TbsFingerprint::of(b"abc");
        assert_eq!(
            fp.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_deterministic() {
        let bytes = b"some tbs bytes";
        assert_eq!(TbsFingerprint::of(bytes), TbsFingerprint::of(bytes));
    }

    #[test]
    fn test_different_input_different_digest() {
        assert_ne!(TbsFingerprint::of(b"one"), TbsFingerprint::of(b"two"));
    }

    #[test]
    fn test_hex_is_lowercase_and_64_chars() {
        let hex = TbsFingerprint::of(b"anything").to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, hex.to_lowercase());
    }

    #[test]
    fn test_display_matches_hex() {
        let fp = TbsFingerprint::from([0xab; 32]);
        assert_eq!(format!("{}", fp), fp.to_hex());
        assert!(fp.to_hex().starts_with("abab"));
    }
}
