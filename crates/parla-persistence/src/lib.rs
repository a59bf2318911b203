//! Snapshots of merged ParlaMint datasets.
//!
//! `prepare` merges and segments the source tables once; `render` reloads the
//! result as many times as needed. The snapshot keeps column order, column
//! kinds (text, categorical, sentences) and nulls, plus fingerprints of the
//! input files it was built from.
//!
//! # File Format
//!
//! ```text
//! +------------------+
//! | Magic: "PMS\x01" | 4 bytes - file identification
//! +------------------+
//! | Version: 1       | 4 bytes - u32 little-endian schema version
//! +------------------+
//! | rkyv Payload     | Variable
//! +------------------+
//! ```

mod convert;
mod error;
mod io;
mod types;

pub use error::{PersistenceError, Result};
pub use io::{compute_file_hash, load_snapshot, save_snapshot, verify_file_hash};
pub use types::{
    CURRENT_SCHEMA_VERSION, ColumnSnapshot, ColumnValuesSnapshot, DatasetSnapshot, MAGIC_BYTES,
    SourceFingerprint,
};
