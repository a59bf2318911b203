use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("merged dataset has no '{name}' column")]
    MissingColumn { name: String },

    #[error("row {row} has sentences but no ID")]
    MissingId { row: usize },

    /// Only `Chairperson` and `Regular` have an `ana` mapping.
    #[error("no ana mapping for speaker role {role:?} of utterance {id}")]
    UnmappedRole { id: String, role: Option<String> },

    #[error("failed to serialize XML: {message}")]
    Xml { message: String },

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
