//! SHA-256 checksums in the canonical `sha256:<hex>` form
//!
//! Commit reports carry the checksum of what was written so callers can log
//! or compare it against the file on disk.

use sha2::{Digest, Sha256};
use std::path::Path;

const PREFIX: &str = "sha256:";

/// Checksum of in-memory content.
pub fn compute_content_checksum(content: &[u8]) -> String {
    format!("{}{:x}", PREFIX, Sha256::digest(content))
}

/// Checksum of a file's current contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn compute_file_checksum(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read(path)?;
    Ok(compute_content_checksum(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_checksum_known_value() {
        let checksum = compute_content_checksum(b"hello world");
        assert_eq!(
            checksum,
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn different_content_different_checksum() {
        assert_ne!(
            compute_content_checksum(b"[main]\n"),
            compute_content_checksum(b"[main]\ngpgcheck=1\n")
        );
    }

    #[test]
    fn file_checksum_matches_content_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.repo");
        std::fs::write(&path, "[main]\n").unwrap();

        assert_eq!(
            compute_file_checksum(&path).unwrap(),
            compute_content_checksum(b"[main]\n")
        );
    }
}
