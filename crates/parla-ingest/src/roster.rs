//! Speaker and party roster reading.
//!
//! Rosters are usually maintained as spreadsheets; CSV and TSV exports are
//! accepted as well. Spreadsheets are read from the first worksheet, whose
//! first row is the header.

use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use parla_model::{Column, Table};
use tracing::{debug, warn};

use crate::delimited::read_delimited;
use crate::error::{IngestError, Result};
use crate::paths::ensure_file;
use crate::values::cell_to_string;

/// Source format of a roster file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Spreadsheet,
    Csv,
    Tsv,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Spreadsheet),
            "csv" => Ok(Self::Csv),
            "tsv" | "tab" => Ok(Self::Tsv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Read a speaker or party roster into a text [`Table`].
pub fn read_roster(path: &Path) -> Result<Table> {
    ensure_file(path)?;
    match RosterFormat::from_path(path)? {
        RosterFormat::Spreadsheet => read_spreadsheet(path),
        RosterFormat::Csv => read_delimited(path, b','),
        RosterFormat::Tsv => read_delimited(path, b'\t'),
    }
}

fn read_spreadsheet(path: &Path) -> Result<Table> {
    let spreadsheet_error = |message: String| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|e| spreadsheet_error(e.to_string()))?;

    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();
    let table = rows_to_table(rows).ok_or_else(|| IngestError::EmptyWorkbook {
        path: path.to_path_buf(),
    })??;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "read spreadsheet"
    );
    Ok(table)
}

/// Build a table from raw worksheet rows; `None` when there is no header row.
///
/// Fully empty data rows are skipped. Blank headers become `Unnamed: {index}`
/// and repeated headers get a `.{n}` suffix so every column stays addressable.
fn rows_to_table(rows: Vec<Vec<Data>>) -> Option<Result<Table>> {
    let mut rows = rows.into_iter();
    let header_row = rows.next()?;
    let headers = dedupe_headers(
        header_row
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                cell_to_string(cell)
                    .map(|name| name.trim().to_string())
                    .unwrap_or_else(|| format!("Unnamed: {index}"))
            })
            .collect(),
    );

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    let mut skipped = 0usize;
    for row in rows {
        let cells: Vec<Option<String>> = (0..headers.len())
            .map(|index| row.get(index).and_then(cell_to_string))
            .collect();
        if cells.iter().all(Option::is_none) {
            skipped += 1;
            continue;
        }
        for (column, cell) in values.iter_mut().zip(cells) {
            column.push(cell);
        }
    }
    if skipped > 0 {
        debug!(skipped, "skipped empty spreadsheet rows");
    }

    let mut table = Table::new();
    for (name, column) in headers.into_iter().zip(values) {
        if let Err(error) = table.push_column(Column::text(name, column)) {
            return Some(Err(error.into()));
        }
    }
    Some(Ok(table))
}

fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                name
            } else {
                let renamed = format!("{name}.{}", *count - 1);
                warn!(column = %name, renamed = %renamed, "duplicate roster column renamed");
                renamed
            }
        })
        .collect()
}
