//! Delimited-file reading through Polars.

use std::path::Path;

use parla_model::{Column, Table, columns};
use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::paths::{ensure_file, require_columns};
use crate::values::any_to_string_non_empty;

/// Read a tab-separated session metadata file. The file must have an `ID` column.
pub fn read_meta_file(path: &Path) -> Result<Table> {
    let table = read_delimited(path, b'\t')?;
    require_columns(&table, &[columns::ID], path)?;
    Ok(table)
}

/// Read a delimited file with a header row into a text [`Table`].
///
/// The schema is inferred from the whole file so that a column is never typed
/// from a prefix and then fail on a later row.
pub fn read_delimited(path: &Path, separator: u8) -> Result<Table> {
    ensure_file(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| options.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read delimited file"
    );
    dataframe_to_table(&df)
}

/// Convert every column of `df` to canonical nullable text.
pub fn dataframe_to_table(df: &DataFrame) -> Result<Table> {
    let height = df.height();
    let mut table = Table::new();
    for series in df.get_columns() {
        let values = (0..height)
            .map(|idx| any_to_string_non_empty(series.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        table.push_column(Column::text(series.name().to_string(), values))?;
    }
    Ok(table)
}
