//! Error types for tabular ingestion.

use std::path::PathBuf;

use parla_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a delimited file with Polars.
    #[error("failed to parse {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a spreadsheet.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// Spreadsheet has no worksheet or no header row.
    #[error("spreadsheet has no data: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// Roster extension not recognized.
    #[error("unsupported table format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Required column not found.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Table assembly failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
