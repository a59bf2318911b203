//! Categorical normalization.

use parla_model::columns::CATEGORICAL_COLUMNS;
use parla_model::{CategoricalColumn, ColumnData, ModelError, Table};
use tracing::debug;

/// Outcome per column name. Conversion never aborts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizeReport {
    pub converted: Vec<String>,
    pub absent: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// Dictionary-encode each listed column present in `table`.
///
/// A column that cannot be converted is left unchanged and its reason is
/// recorded in the report.
pub fn categorize(table: &mut Table, names: &[&str]) -> CategorizeReport {
    let mut report = CategorizeReport::default();
    for name in names {
        match convert(table, name) {
            Ok(true) => report.converted.push((*name).to_string()),
            Ok(false) => report.absent.push((*name).to_string()),
            Err(error) => {
                debug!(column = %name, %error, "column left unconverted");
                report.failed.push(((*name).to_string(), error.to_string()));
            }
        }
    }
    debug!(
        converted = report.converted.len(),
        absent = report.absent.len(),
        failed = report.failed.len(),
        "categorical conversion done"
    );
    report
}

/// [`categorize`] over the fixed list of metadata columns.
pub fn categorize_default(table: &mut Table) -> CategorizeReport {
    categorize(table, CATEGORICAL_COLUMNS)
}

fn convert(table: &mut Table, name: &str) -> Result<bool, ModelError> {
    let Some(column) = table.column(name) else {
        return Ok(false);
    };
    let categorical = match column.data() {
        ColumnData::Categorical(_) => return Ok(true),
        ColumnData::Text(values) => CategoricalColumn::from_values(values)?,
        ColumnData::Sentences(_) => {
            return Err(ModelError::NotCategorizable {
                name: name.to_string(),
                kind: column.kind(),
            });
        }
    };
    table.replace_column(name, ColumnData::Categorical(categorical))?;
    Ok(true)
}
