//! File hashing for input fingerprints.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{PersistenceError, Result};

/// SHA-256 of a file, hex encoded.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| PersistenceError::Io {
        operation: "open",
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| PersistenceError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source: e,
        })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// `Ok(false)` when the content no longer matches `expected_hash`.
pub fn verify_file_hash(path: &Path, expected_hash: &str) -> Result<bool> {
    Ok(compute_file_hash(path)? == expected_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn hashes_known_content() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"Hello, World!").unwrap();
        temp_file.flush().unwrap();

        assert_eq!(
            compute_file_hash(temp_file.path()).unwrap(),
            "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
        );
        assert!(
            verify_file_hash(
                temp_file.path(),
                "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
            )
            .unwrap()
        );
        assert!(!verify_file_hash(temp_file.path(), "0000").unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = compute_file_hash(Path::new("/nonexistent/parties.xlsx"));
        assert!(matches!(
            result,
            Err(PersistenceError::Io {
                operation: "open",
                ..
            })
        ));
    }
}
