//! Snapshot file I/O: atomic saves, validated loads, file hashing.

mod hash;
mod load;
mod save;

pub use hash::{compute_file_hash, verify_file_hash};
pub use load::load_snapshot;
pub use save::save_snapshot;
