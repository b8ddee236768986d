use anyhow::{bail, Result};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of a byte slice.
pub(crate) fn sha256_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Compare `bytes` against an expected hex digest (case-insensitive).
pub(crate) fn verify_sha256(name: &str, bytes: &[u8], expected: &str) -> Result<()> {
    let actual = sha256_bytes(bytes);
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        bail!("[common::hash] checksum mismatch for {name}: expected {expected}, got {actual}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            sha256_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        );
    }

    #[test]
    fn verify_accepts_uppercase_and_rejects_mismatch() {
        let digest = sha256_bytes(b"model").to_uppercase();
        assert!(verify_sha256("model.json", b"model", &digest).is_ok());
        assert!(verify_sha256("model.json", b"other", &digest).is_err());
    }
}
