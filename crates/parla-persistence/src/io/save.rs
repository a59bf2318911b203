use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, DatasetSnapshot, MAGIC_BYTES};

/// Write a snapshot atomically (temp file, fsync, rename).
///
/// Parent directories are created as needed.
pub fn save_snapshot(snapshot: &DatasetSnapshot, path: &Path) -> Result<()> {
    let bytes = serialize_snapshot(snapshot)?;
    let temp_path = path.with_extension("pms.tmp");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;
    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    info!(
        path = %path.display(),
        rows = snapshot.rows,
        columns = snapshot.columns.len(),
        bytes = bytes.len(),
        "saved snapshot"
    );
    Ok(())
}

/// Magic, little-endian schema version, then the rkyv payload.
fn serialize_snapshot(snapshot: &DatasetSnapshot) -> Result<Vec<u8>> {
    let payload = rkyv::to_bytes::<rkyv::rancor::Error>(snapshot).map_err(|e| {
        PersistenceError::Serialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv serialization failed: {e}"
            ))),
        }
    })?;

    let mut output = Vec::with_capacity(8 + payload.len());
    output.extend_from_slice(&MAGIC_BYTES);
    output.extend_from_slice(&CURRENT_SCHEMA_VERSION.to_le_bytes());
    output.extend_from_slice(&payload);
    Ok(output)
}
