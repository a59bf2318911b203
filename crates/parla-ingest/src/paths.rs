use std::path::Path;

use parla_model::Table;

use crate::error::{IngestError, Result};

/// Fail early with [`IngestError::FileNotFound`] instead of a bare I/O error.
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Check that every column in `required` is present in `table`.
pub fn require_columns(table: &Table, required: &[&str], path: &Path) -> Result<()> {
    for column in required {
        if !table.contains(column) {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}
