//! Session text reader.

use std::path::Path;

use parla_model::{Column, Table, columns};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::paths::ensure_file;

/// Read a session text file: one utterance per line, `ID` then free text.
///
/// Tokens are split on any whitespace; the first token becomes `ID` and the
/// remaining tokens are re-joined with single spaces into `Text`. A line with
/// only an ID yields an empty `Text`.
pub fn read_text_file(path: &Path) -> Result<Table> {
    ensure_file(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);
    parse_text(contents)
}

fn parse_text(contents: &str) -> Result<Table> {
    let mut ids = Vec::new();
    let mut texts = Vec::new();
    let mut blank_lines = 0usize;
    for line in contents.lines() {
        let mut tokens = line.split_whitespace();
        let Some(id) = tokens.next() else {
            blank_lines += 1;
            continue;
        };
        ids.push(Some(id.to_string()));
        texts.push(Some(tokens.collect::<Vec<_>>().join(" ")));
    }
    if blank_lines > 0 {
        debug!(blank_lines, "skipped blank lines in text file");
    }
    Ok(Table::from_columns(vec![
        Column::text(columns::ID, ids),
        Column::text(columns::TEXT, texts),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_id_from_text_and_collapses_whitespace() {
        let table = parse_text("u1 Dobar  dan,\tkolege.\nu2\n\n   \nu3 Hvala.\n").unwrap();
        assert_eq!(table.height(), 3);
        assert_eq!(table.column_names(), vec!["ID", "Text"]);
        assert_eq!(table.value(0, "ID"), Some("u1"));
        assert_eq!(table.value(0, "Text"), Some("Dobar dan, kolege."));
        assert_eq!(table.value(1, "Text"), Some(""));
        assert_eq!(table.value(2, "ID"), Some("u3"));
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = parse_text("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 2);
    }
}
