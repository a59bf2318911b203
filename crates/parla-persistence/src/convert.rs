//! Conversion between in-memory tables and snapshots.

use chrono::Utc;
use parla_model::{CategoricalColumn, Column, ColumnData, Table};

use crate::error::{PersistenceError, Result};
use crate::types::{
    CURRENT_SCHEMA_VERSION, ColumnSnapshot, ColumnValuesSnapshot, DatasetSnapshot,
    SourceFingerprint,
};

impl DatasetSnapshot {
    /// Snapshot `table`, stamped with the current time.
    pub fn from_table(
        table: &Table,
        language: impl Into<String>,
        sources: Vec<SourceFingerprint>,
    ) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            created_at: Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            language: language.into(),
            sources,
            rows: table.height() as u64,
            columns: table.columns().iter().map(ColumnSnapshot::from_column).collect(),
        }
    }

    /// Rebuild the table. Fails on dangling category codes or ragged columns.
    pub fn into_table(self) -> Result<Table> {
        let columns = self
            .columns
            .into_iter()
            .map(ColumnSnapshot::into_column)
            .collect::<Result<Vec<_>>>()?;
        let table = Table::from_columns(columns).map_err(model_error)?;
        if table.width() > 0 && table.height() as u64 != self.rows {
            return Err(PersistenceError::Deserialization {
                source: Box::new(std::io::Error::other(format!(
                    "snapshot declares {} rows but columns hold {}",
                    self.rows,
                    table.height()
                ))),
            });
        }
        Ok(table)
    }
}

impl ColumnSnapshot {
    fn from_column(column: &Column) -> Self {
        let values = match column.data() {
            ColumnData::Text(values) => ColumnValuesSnapshot::Text(values.clone()),
            ColumnData::Categorical(categorical) => ColumnValuesSnapshot::Categorical {
                categories: categorical.categories().to_vec(),
                codes: categorical.codes().to_vec(),
            },
            ColumnData::Sentences(values) => ColumnValuesSnapshot::Sentences(values.clone()),
        };
        Self {
            name: column.name().to_string(),
            values,
        }
    }

    fn into_column(self) -> Result<Column> {
        let data = match self.values {
            ColumnValuesSnapshot::Text(values) => ColumnData::Text(values),
            ColumnValuesSnapshot::Categorical { categories, codes } => ColumnData::Categorical(
                CategoricalColumn::from_parts(categories, codes).map_err(model_error)?,
            ),
            ColumnValuesSnapshot::Sentences(values) => ColumnData::Sentences(values),
        };
        Ok(Column::new(self.name, data))
    }
}

fn model_error(error: parla_model::ModelError) -> PersistenceError {
    PersistenceError::Deserialization {
        source: Box::new(error),
    }
}
