use crate::columns;
use crate::table::Table;

/// Read-only view of one merged row.
///
/// Any metadata field may be null after the left-outer joins; accessors
/// return `None` for nulls and for columns the table does not have.
#[derive(Debug, Clone, Copy)]
pub struct UtteranceRecord<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> UtteranceRecord<'a> {
    pub(crate) fn new(table: &'a Table, index: usize) -> Self {
        Self { table, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table.value(self.index, column)
    }

    pub fn id(&self) -> Option<&'a str> {
        self.get(columns::ID)
    }

    pub fn text(&self) -> Option<&'a str> {
        self.get(columns::TEXT)
    }

    /// Segmenter output; empty when the row has no sentences column.
    pub fn sentences(&self) -> &'a [String] {
        self.table
            .column(columns::SENTENCES)
            .and_then(|column| column.data().sentences_at(self.index))
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use crate::table::{Column, Table};

    #[test]
    fn record_reads_scalars_and_sentences() {
        let table = Table::from_columns(vec![
            Column::text("ID", vec![Some("u1".into()), Some("u2".into())]),
            Column::text("lastname", vec![None, Some("Horvat".into())]),
            Column::sentences("sentences", vec![vec!["Dobar dan.".into()], Vec::new()]),
        ])
        .unwrap();

        let first = table.row(0).unwrap();
        assert_eq!(first.id(), Some("u1"));
        assert_eq!(first.get("lastname"), None);
        assert_eq!(first.sentences(), &["Dobar dan.".to_string()]);

        let second = table.row(1).unwrap();
        assert_eq!(second.get("lastname"), Some("Horvat"));
        assert!(second.sentences().is_empty());
        assert_eq!(second.get("missing"), None);

        assert!(table.row(2).is_none());
    }
}
