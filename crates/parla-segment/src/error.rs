use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SegmentError {
    /// Tokenizer resources are not installed; installing them may fix this.
    #[error("tokenizer resources for '{language}' not found at {path}")]
    ResourcesMissing { language: String, path: PathBuf },

    /// No tokenizer could be constructed.
    #[error("no sentence tokenizer available for '{language}': {reason}")]
    Unavailable { language: String, reason: String },

    #[error("no bundled tokenizer resources for language '{language}'")]
    UnsupportedLanguage { language: String },

    #[error("processor pipeline '{processors}' has no tokenize step")]
    UnsupportedProcessors { processors: String },

    #[error("tokenizer failed: {message}")]
    Tokenizer { message: String },

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SegmentError>;
