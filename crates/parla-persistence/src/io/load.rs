use std::fs;
use std::path::Path;

use rkyv::util::AlignedVec;
use tracing::info;

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, DatasetSnapshot, MAGIC_BYTES};

const HEADER_LEN: usize = 8;

/// Read and validate a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<DatasetSnapshot> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;
    let snapshot = parse_snapshot_bytes(&bytes, path)?;
    info!(
        path = %path.display(),
        rows = snapshot.rows,
        columns = snapshot.columns.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

fn parse_snapshot_bytes(bytes: &[u8], path: &Path) -> Result<DatasetSnapshot> {
    if bytes.len() <= HEADER_LEN {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "file too small".to_string(),
        });
    }
    if bytes[0..4] != MAGIC_BYTES {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "invalid magic bytes".to_string(),
        });
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    // The payload starts at a fixed offset of an arbitrary allocation; rkyv
    // needs it aligned.
    let mut payload: AlignedVec = AlignedVec::with_capacity(bytes.len() - HEADER_LEN);
    payload.extend_from_slice(&bytes[HEADER_LEN..]);

    rkyv::from_bytes::<DatasetSnapshot, rkyv::rancor::Error>(&payload).map_err(|e| {
        PersistenceError::Deserialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv deserialization failed: {e}"
            ))),
        }
    })
}
