//! rkyv-serializable snapshot types.

mod dataset;
mod source;

pub use dataset::{ColumnSnapshot, ColumnValuesSnapshot, DatasetSnapshot};
pub use source::SourceFingerprint;

/// Current schema version.
///
/// The loader rejects files with version > CURRENT_SCHEMA_VERSION.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Magic bytes at the start of snapshot files: "PMS" + format byte.
pub const MAGIC_BYTES: [u8; 4] = [b'P', b'M', b'S', 0x01];
