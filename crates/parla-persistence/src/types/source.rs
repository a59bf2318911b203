//! Input file fingerprints.

use std::path::{Path, PathBuf};

use rkyv::{Archive, Deserialize, Serialize};

use crate::error::{PersistenceError, Result};
use crate::io::compute_file_hash;

/// Identity of one input file at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct SourceFingerprint {
    /// What the file was used as (`text`, `meta`, `speakers`, `parties`).
    pub role: String,

    pub path: String,

    /// SHA-256 of the file content, hex encoded.
    pub sha256: String,

    pub size: u64,
}

impl SourceFingerprint {
    pub fn new(
        role: impl Into<String>,
        path: impl Into<String>,
        sha256: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            role: role.into(),
            path: path.into(),
            sha256: sha256.into(),
            size,
        }
    }

    /// Hash `path` and record its size.
    pub fn compute(role: impl Into<String>, path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| PersistenceError::Io {
            operation: "stat",
            path: path.to_path_buf(),
            source: e,
        })?;
        let sha256 = compute_file_hash(path)?;
        Ok(Self::new(
            role,
            path.display().to_string(),
            sha256,
            metadata.len(),
        ))
    }

    /// Check that the file still exists with the recorded content.
    pub fn verify(&self) -> Result<()> {
        let path = PathBuf::from(&self.path);
        if !path.is_file() {
            return Err(PersistenceError::SourceFileMissing { path });
        }
        let actual_hash = compute_file_hash(&path)?;
        if actual_hash != self.sha256 {
            return Err(PersistenceError::SourceFileChanged {
                path,
                expected_hash: self.sha256.clone(),
                actual_hash,
            });
        }
        Ok(())
    }

    /// First 12 hex digits, for display.
    pub fn short_hash(&self) -> &str {
        self.sha256.get(..12).unwrap_or(&self.sha256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn verify_detects_changes_and_removal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.txt");
        fs::write(&path, "u1 Dobar dan.\n").unwrap();

        let fingerprint = SourceFingerprint::compute("text", &path).unwrap();
        assert_eq!(fingerprint.size, 14);
        assert_eq!(fingerprint.short_hash().len(), 12);
        fingerprint.verify().unwrap();

        fs::write(&path, "u1 Laku noć.\n").unwrap();
        assert!(matches!(
            fingerprint.verify(),
            Err(PersistenceError::SourceFileChanged { .. })
        ));

        fs::remove_file(&path).unwrap();
        assert!(matches!(
            fingerprint.verify(),
            Err(PersistenceError::SourceFileMissing { .. })
        ));
    }
}
