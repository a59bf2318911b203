//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not a snapshot file.
    #[error("invalid snapshot file {path}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("snapshot version {found} is not supported (maximum: {max_supported}): {path}")]
    UnsupportedVersion {
        found: u32,
        max_supported: u32,
        path: PathBuf,
    },

    /// Input file changed since the snapshot was taken.
    #[error("source file has been modified: {path}")]
    SourceFileChanged {
        path: PathBuf,
        expected_hash: String,
        actual_hash: String,
    },

    #[error("source file not found: {path}")]
    SourceFileMissing { path: PathBuf },

    #[error("failed to serialize snapshot")]
    Serialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to deserialize snapshot")]
    Deserialization {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Temp file could not be renamed over the target.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// How the user might resolve this error, if there is an obvious way.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidFormat { .. } => Some("pass a snapshot written by `parlamint prepare`"),
            Self::UnsupportedVersion { .. } => {
                Some("re-run `parlamint prepare` with this version of the tool")
            }
            Self::SourceFileChanged { .. } | Self::SourceFileMissing { .. } => {
                Some("re-run `parlamint prepare` to rebuild the snapshot from current inputs")
            }
            Self::Deserialization { .. } => Some("the snapshot may be corrupted; rebuild it"),
            Self::AtomicWriteFailed { .. } => Some("check disk space and permissions"),
            Self::Io { .. } | Self::Serialization { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
